//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the session and posts API and stitches it with Leptos
//! SSR rendering under a single Axum router. Every server fault surfaces to
//! clients as the same generic 500 body; details stay in the logs.

pub mod auth;
pub mod posts;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Generic 500 response. Callers log the cause before returning it.
pub(crate) fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE })))
        .into_response()
}

/// JSON API routes. `/api/dev/session` exists only with the dev bypass on.
pub fn api_routes(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/auth/user", get(auth::user))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/posts", get(posts::list_posts))
        .route("/healthz", get(healthz));
    if state.dev_session_bypass {
        router = router.route("/api/dev/session", post(auth::dev_session));
    }
    router.with_state(state)
}

/// Full application: API routes + Leptos SSR pages + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
