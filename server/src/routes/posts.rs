//! Post listing route.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

use super::internal_error;
use crate::services::posts;
use crate::state::AppState;

/// `GET /api/posts` — list posts in file order.
pub async fn list_posts(State(state): State<AppState>) -> Response {
    match posts::load_posts(&state.posts_path).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "posts read failed");
            internal_error()
        }
    }
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
