//! Role-gated wrapper for protected pages.
//!
//! DESIGN
//! ======
//! The decision is a pure function of the session snapshot and the declared
//! roles. A memo of that decision feeds an effect that navigates only when the
//! phase changes into a redirect, so re-renders and repeated signal updates
//! never queue a second navigation. Children mount only once authorized.
//!
//! This is UX only: the server re-checks the cookie on every API call.

#[cfg(test)]
#[path = "role_guard_test.rs"]
mod role_guard_test;

use identity::RoleSet;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::session::use_session;

pub const LOGIN_PATH: &str = "/login";
pub const DENIED_PATH: &str = "/denied";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPhase {
    /// Session fetch still outstanding.
    Checking,
    RedirectLogin,
    RedirectDenied,
    Authorized,
}

impl GuardPhase {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectDenied => Some(DENIED_PATH),
            Self::Checking | Self::Authorized => None,
        }
    }

    /// Placeholder text shown instead of the children, or `None` when the
    /// children are mounted.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Checking => Some("Checking session..."),
            Self::RedirectLogin | Self::RedirectDenied => Some("Redirecting..."),
            Self::Authorized => None,
        }
    }
}

/// Decide what the guard shows for `state` given the permitted `roles`.
pub fn guard_phase(state: &SessionState, roles: &RoleSet) -> GuardPhase {
    if state.loading {
        GuardPhase::Checking
    } else if !state.session.is_authenticated() {
        GuardPhase::RedirectLogin
    } else if roles.permits(&state.session) {
        GuardPhase::Authorized
    } else {
        GuardPhase::RedirectDenied
    }
}

/// Path to navigate to when the phase moves from `prev` to `next`.
pub fn redirect_target(prev: Option<GuardPhase>, next: GuardPhase) -> Option<&'static str> {
    if prev == Some(next) {
        return None;
    }
    next.redirect_path()
}

/// Render `children` only for a logged-in session whose role is in `roles`.
///
/// Logged-out visitors are sent to `/login`, logged-in visitors with another
/// role to `/denied`. The session signal is provided as context so guarded
/// pages can read it without a second fetch.
#[component]
pub fn RoleGuard(roles: RoleSet, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    provide_context(session);

    let phase = Memo::new(move |_| session.with(|state| guard_phase(state, &roles)));

    let navigate = use_navigate();
    Effect::new(move |prev: Option<GuardPhase>| {
        let next = phase.get();
        if let Some(path) = redirect_target(prev, next) {
            navigate(path, NavigateOptions::default());
        }
        next
    });

    view! {
        <Show
            when=move || phase.get().placeholder().is_none()
            fallback=move || {
                let label = phase.get().placeholder().unwrap_or_default();
                view! { <div class="role-guard__placeholder">{label}</div> }
            }
        >
            {children()}
        </Show>
    }
}
