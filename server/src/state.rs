//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and the
//! `SessionStore` extractor. Everything in it is immutable after startup; all
//! per-user state travels in the session cookie.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::codec::SessionCodec;
use crate::services::session::CookieSettings;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub codec: Arc<SessionCodec>,
    pub cookie: Arc<CookieSettings>,
    pub posts_path: Arc<PathBuf>,
    /// Enables `POST /api/dev/session`.
    pub dev_session_bypass: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            codec: Arc::new(SessionCodec::new(&config.session)),
            cookie: Arc::new(CookieSettings::from_config(&config.session)),
            posts_path: Arc::new(config.posts_path.clone()),
            dev_session_bypass: config.dev_session_bypass,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
