//! Per-request session store over the cookie jar.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is an extractor: it captures the request's cookies and the
//! shared codec, exposes `load`/`save`/`destroy`, and is returned as part of
//! the response so pending `Set-Cookie` changes reach the client. Nothing is
//! shared between requests; the cookie is the only session state.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use identity::SessionRecord;
use time::Duration;

use super::codec::{CodecError, SessionCodec};
use crate::config::SessionConfig;
use crate::state::AppState;

/// Largest `name=value` pair browsers reliably keep.
pub const MAX_COOKIE_BYTES: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("cookie header is not visible ASCII")]
    CookieHeader,
    #[error("session cookie too large: {len} bytes")]
    CookieTooLarge { len: usize },
    #[error("failed to seal session: {0}")]
    Seal(#[from] CodecError),
}

/// Transport attributes of the session cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
    pub max_age: Duration,
}

impl CookieSettings {
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self { name: config.cookie_name.clone(), secure: config.secure, max_age: config.cookie_max_age() }
    }

    fn build(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }
}

/// Session access scoped to one request/response pair.
pub struct SessionStore {
    codec: Arc<SessionCodec>,
    cookie: Arc<CookieSettings>,
    jar: CookieJar,
    unreadable_header: bool,
}

impl SessionStore {
    #[must_use]
    pub fn from_headers(codec: Arc<SessionCodec>, cookie: Arc<CookieSettings>, headers: &HeaderMap) -> Self {
        let unreadable_header = headers.get_all(COOKIE).iter().any(|value| value.to_str().is_err());
        Self { codec, cookie, jar: CookieJar::from_headers(headers), unreadable_header }
    }

    /// Current session, or the logged-out record when the cookie is absent or invalid.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CookieHeader`] if the request's cookies could not be read.
    pub fn load(&self) -> Result<SessionRecord, SessionError> {
        if self.unreadable_header {
            return Err(SessionError::CookieHeader);
        }
        let Some(cookie) = self.jar.get(&self.cookie.name) else {
            return Ok(SessionRecord::default());
        };

        Ok(self.codec.decode(cookie.value()).unwrap_or_default())
    }

    /// Seal `record` into the outbound session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if sealing fails or the cookie would exceed
    /// [`MAX_COOKIE_BYTES`].
    pub fn save(&mut self, record: &SessionRecord) -> Result<(), SessionError> {
        let envelope = self.codec.encode(record)?;
        let len = self.cookie.name.len() + 1 + envelope.len();
        if len > MAX_COOKIE_BYTES {
            return Err(SessionError::CookieTooLarge { len });
        }

        let mut cookie = self.cookie.build(envelope);
        cookie.set_max_age(self.cookie.max_age);
        self.jar = std::mem::take(&mut self.jar).add(cookie);
        Ok(())
    }

    /// Remove the session cookie from the client. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        let mut removal = self.cookie.build(String::new());
        removal.make_removal();
        self.jar = std::mem::take(&mut self.jar).add(removal);
    }
}

impl<S> FromRequestParts<S> for SessionStore
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(Self::from_headers(app_state.codec, app_state.cookie, &parts.headers))
    }
}

impl IntoResponseParts for SessionStore {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
