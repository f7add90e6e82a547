//! Landing page for signed-in users whose role does not cover a guarded page.

use leptos::prelude::*;

#[component]
pub fn DeniedPage() -> impl IntoView {
    view! {
        <div class="denied-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <nav class="denied-page__links">
                <a href="/">"Posts"</a>
                <a href="/login">"Sign in as someone else"</a>
            </nav>
        </div>
    }
}
