//! Server-served HTML pages. The browser keeps the provider session token
//! and talks to the JSON API with it; these pages are presentation only.

pub mod handlers;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/dashboard", get(handlers::dashboard))
        .route("/recipes/new", get(handlers::new_recipe))
}
