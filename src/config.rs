use serde::Deserialize;

/// Verification parameters for session tokens issued by the identity
/// provider. The application never signs tokens itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    /// Remote hosts recipe images may be loaded from.
    pub image_hosts: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let auth = AuthConfig {
            jwt_secret: std::env::var("AUTH_JWT_SECRET")?,
            issuer: std::env::var("AUTH_JWT_ISSUER").unwrap_or_else(|_| "recipeplanner".into()),
            audience: std::env::var("AUTH_JWT_AUDIENCE")
                .unwrap_or_else(|_| "recipeplanner-users".into()),
        };
        let image_hosts = std::env::var("IMAGE_HOSTS")
            .map(|v| parse_image_hosts(&v))
            .unwrap_or_else(|_| vec!["example.com".into()]);
        Ok(Self {
            database_url,
            auth,
            image_hosts,
        })
    }
}

fn parse_image_hosts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_image_hosts_trims_and_drops_empty_entries() {
        let hosts = parse_image_hosts("example.com, Images.Unsplash.com,,  cdn.local ");
        assert_eq!(hosts, vec!["example.com", "images.unsplash.com", "cdn.local"]);
    }

    #[test]
    fn parse_image_hosts_of_blank_input_is_empty() {
        assert!(parse_image_hosts("  ,").is_empty());
    }
}
