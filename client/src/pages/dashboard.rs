//! Admin dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by `{admin}`. Shows the identity the server holds for this browser
//! and the published posts inventory.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use identity::{Post, Role, RoleSet, SessionRecord};
use leptos::prelude::*;

use crate::components::role_guard::RoleGuard;
use crate::components::session_badge::SessionBadge;
use crate::state::session::SessionState;

/// Label/value rows describing the session, in display order.
pub(crate) fn session_rows(session: &SessionRecord) -> Vec<(&'static str, String)> {
    vec![
        ("User ID", session.user_id.clone().unwrap_or_default()),
        ("Email", session.email.clone().unwrap_or_default()),
        ("Role", session.role.map(|role| role.to_string()).unwrap_or_default()),
    ]
}

pub(crate) fn posts_summary(posts: &[Post]) -> String {
    match posts.len() {
        0 => "No posts published.".to_owned(),
        1 => "1 post published.".to_owned(),
        n => format!("{n} posts published."),
    }
}

/// Admin dashboard page. Redirects non-admins away.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RoleGuard roles=RoleSet::only(Role::Admin)>
            <AdminDashboard/>
        </RoleGuard>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionState>>();
    let posts = RwSignal::new(None::<Result<Vec<Post>, String>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_posts().await.map_err(|e| e.to_string());
        let _ = posts.try_set(Some(result));
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Admin"</h1>
                <SessionBadge/>
            </header>
            <section class="dashboard-page__session">
                <h2>"Session"</h2>
                <dl>
                    {move || {
                        session
                            .with(|s| session_rows(&s.session))
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect::<Vec<_>>()
                    }}
                </dl>
            </section>
            <section class="dashboard-page__posts">
                <h2>"Posts"</h2>
                {move || match posts.get() {
                    None => view! { <p>"Loading posts..."</p> }.into_any(),
                    Some(Err(e)) => view! { <p class="dashboard-page__error">{format!("Could not load posts: {e}")}</p> }.into_any(),
                    Some(Ok(list)) => view! {
                        <p>{posts_summary(&list)}</p>
                        <ul>
                            {list.into_iter().map(|post| view! { <li>{post.title}</li> }).collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
