//! Session routes: current user, logout, dev session bootstrap.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use identity::{Role, SessionRecord};
use serde::Deserialize;

use super::internal_error;
use crate::services::session::SessionStore;
use crate::state::AppState;

/// `GET /api/auth/user` — return the current session.
///
/// Logged-out clients get `401 {"isLoggedIn":false}` so the caller can branch
/// on status alone.
pub async fn user(store: SessionStore) -> Response {
    match store.load() {
        Ok(record) if record.is_logged_in => Json(record).into_response(),
        Ok(_) => (StatusCode::UNAUTHORIZED, Json(SessionRecord::default())).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "session retrieval failed");
            internal_error()
        }
    }
}

/// `POST /api/auth/logout` — remove the session cookie.
pub async fn logout(mut store: SessionStore) -> Response {
    store.destroy();
    (store, Json(serde_json::json!({ "message": "Logged out" }))).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevSessionRequest {
    user_id: String,
    email: String,
    role: Role,
}

/// `POST /api/dev/session` — issue a session without credentials.
///
/// Enabled only when `DEV_SESSION_BYPASS=true`. The body is parsed after the
/// flag check so a disabled endpoint answers 404 whatever is sent.
pub async fn dev_session(State(state): State<AppState>, mut store: SessionStore, body: Bytes) -> Response {
    if !state.dev_session_bypass {
        return StatusCode::NOT_FOUND.into_response();
    }
    let Ok(body) = serde_json::from_slice::<DevSessionRequest>(&body) else {
        return (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "message": "invalid request body" })))
            .into_response();
    };

    let record = SessionRecord::logged_in(body.user_id.trim(), body.email.trim(), body.role).normalized();
    if !record.is_authenticated() {
        return (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "message": "userId and email are required" })))
            .into_response();
    }

    match store.save(&record) {
        Ok(()) => {
            tracing::info!(user_id = ?record.user_id, role = ?record.role, "dev session issued");
            (store, Json(record)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session save failed");
            internal_error()
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
