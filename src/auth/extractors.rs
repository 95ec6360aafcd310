use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, DecodingKey, Validation};

use super::claims::SessionClaims;
use crate::error::ApiError;
use crate::state::AppState;

/// Extracts and validates the provider session token, yielding the external
/// subject identifier. Handlers take this as an explicit argument; there is
/// no ambient auth context.
#[derive(Debug)]
pub struct AuthSubject(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthSubject {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::unauthorized("Invalid auth scheme"))?;

        let cfg = &state.config.auth;
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&cfg.audience));
        validation.set_issuer(std::slice::from_ref(&cfg.issuer));
        let decoding = DecodingKey::from_secret(cfg.jwt_secret.as_bytes());

        let data = decode::<SessionClaims>(token, &decoding, &validation)
            .map_err(|_| ApiError::unauthorized("Invalid or expired session token"))?;

        Ok(AuthSubject(data.claims.sub))
    }
}
