//! Session snapshot held by the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled from `GET /api/auth/user` by `use_session` and read by `RoleGuard`.
//! Never authoritative: the server re-checks the cookie on every request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use identity::SessionRecord;

use crate::net::api::FetchError;

/// Session record plus whether the initial fetch is still outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: SessionRecord,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: SessionRecord::default(), loading: true }
    }
}

impl SessionState {
    /// Apply the outcome of the session fetch.
    ///
    /// Only the first call has an effect; it clears `loading` and returns
    /// `true`. Any fetch failure settles to the logged-out record.
    pub fn settle(&mut self, outcome: Result<SessionRecord, FetchError>) -> bool {
        if !self.loading {
            return false;
        }
        self.session = outcome.map(SessionRecord::normalized).unwrap_or_default();
        self.loading = false;
        true
    }
}
