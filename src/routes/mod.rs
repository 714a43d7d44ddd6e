//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the activity API routes and the static signup frontend
//! under a single Axum router. The browser app lives under `/static` and the
//! site root redirects there.

pub mod activities;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(redirect_root_to_index))
        .route("/activities", get(activities::list_activities))
        .route(
            "/activities/{name}/signup",
            post(activities::signup).delete(activities::unregister),
        )
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(cors)
        .with_state(state)
}

async fn redirect_root_to_index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Resolve the path to the static frontend directory.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
