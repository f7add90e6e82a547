//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`FetchError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so session and posts fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use identity::{Post, SessionRecord};

pub const SESSION_ENDPOINT: &str = "/api/auth/user";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const POSTS_ENDPOINT: &str = "/api/posts";

/// Upper bound on the session fetch before the hook gives up.
pub const SESSION_FETCH_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(FetchError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    timeout_ms: u32,
    request: impl std::future::Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    use futures::future::{Either, select};

    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout),
    }
}

/// Fetch the current session from `/api/auth/user`.
///
/// A 401 surfaces as `FetchError::Status(401)`; callers treat every error as
/// "logged out".
///
/// # Errors
///
/// Returns [`FetchError`] on non-2xx status, network failure, undecodable
/// body, timeout, or when called outside the browser.
pub async fn fetch_session() -> Result<SessionRecord, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(SESSION_FETCH_TIMEOUT_MS, get_json::<SessionRecord>(SESSION_ENDPOINT)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Clear the session cookie via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns [`FetchError`] if the request fails or the server answers non-2xx.
pub async fn logout() -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Submit credentials to the login service at `POST /api/auth/login`.
///
/// On success the service has set the session cookie.
///
/// # Errors
///
/// Returns [`FetchError`] if the request fails or the credentials are refused.
pub async fn login(email: &str, password: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&login_payload(email, password))
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(FetchError::Unavailable)
    }
}

/// Fetch the public posts list from `/api/posts`.
///
/// # Errors
///
/// Returns [`FetchError`] on any request or decode failure.
pub async fn fetch_posts() -> Result<Vec<Post>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Vec<Post>>(POSTS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}
