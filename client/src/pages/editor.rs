//! Draft editor with live markdown preview.
//!
//! Guarded by `{admin, editor}`. Drafts stay in the browser; publishing goes
//! through the posts file, not this page.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use identity::{Role, RoleSet};
use leptos::prelude::*;

use crate::components::role_guard::RoleGuard;
use crate::components::session_badge::SessionBadge;
use crate::util::markdown::render_markdown_html;

pub(crate) fn draft_stats(draft: &str) -> String {
    let words = draft.split_whitespace().count();
    let chars = draft.chars().count();
    let noun = if words == 1 { "word" } else { "words" };
    format!("{words} {noun}, {chars} characters")
}

#[component]
pub fn EditorPage() -> impl IntoView {
    view! {
        <RoleGuard roles=RoleSet::only(Role::Admin).with(Role::Editor)>
            <DraftEditor/>
        </RoleGuard>
    }
}

#[component]
fn DraftEditor() -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let preview = Memo::new(move |_| draft.with(|text| render_markdown_html(text)));

    view! {
        <div class="editor-page">
            <header class="editor-page__header">
                <h1>"Editor"</h1>
                <SessionBadge/>
            </header>
            <div class="editor-page__panes">
                <textarea
                    class="editor-page__input"
                    placeholder="Write markdown..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <div class="editor-page__preview" inner_html=move || preview.get()></div>
            </div>
            <p class="editor-page__stats">{move || draft.with(|text| draft_stats(text))}</p>
        </div>
    }
}
