//! Signed-in identity strip with a logout action.
//!
//! Rendered inside `RoleGuard`, which provides the session signal.

#[cfg(test)]
#[path = "session_badge_test.rs"]
mod session_badge_test;

use identity::SessionRecord;
use leptos::prelude::*;

use crate::state::session::SessionState;

pub(crate) fn session_label(session: &SessionRecord) -> String {
    match (session.is_authenticated(), session.email.as_deref(), session.role) {
        (true, Some(email), Some(role)) => format!("{email} ({role})"),
        _ => "Signed out".to_owned(),
    }
}

#[component]
pub fn SessionBadge() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout failed: {e}");
            }
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <div class="session-badge">
            <span class="session-badge__label">{move || session.with(|s| session_label(&s.session))}</span>
            <button class="session-badge__logout" on:click=on_logout disabled=move || busy.get()>
                "Log out"
            </button>
        </div>
    }
}
