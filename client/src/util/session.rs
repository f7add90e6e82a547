//! Session hook for route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RoleGuard` calls this once per mount and shares the signal with its
//! children through context, so a guarded page costs a single
//! `GET /api/auth/user`.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Read-only session snapshot for the current mount.
///
/// Starts as `{logged out, loading}` and settles exactly once when the fetch
/// resolves, fails, or times out. During SSR no fetch runs and the state
/// stays loading until hydration.
pub fn use_session() -> ReadSignal<SessionState> {
    let (state, set_state) = signal(SessionState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_session().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            if let Err(e) = &outcome {
                log::debug!("session fetch failed: {e}");
            }
            let _ = set_state.try_update(|s| s.settle(outcome));
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_state;

    state
}
