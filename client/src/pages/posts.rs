//! Public posts listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Needs no session; reads `GET /api/posts` once per mount
//! and renders each markdown body with raw HTML stripped.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use identity::Post;
use leptos::prelude::*;

use crate::util::markdown::{excerpt, render_markdown_html};

const EXCERPT_CHARS: usize = 160;

/// "by <author> on <date>" line, omitting whatever the post lacks.
pub(crate) fn post_byline(post: &Post) -> Option<String> {
    match (post.author.as_deref(), post.created_at.as_deref()) {
        (Some(author), Some(date)) => Some(format!("by {author} on {date}")),
        (Some(author), None) => Some(format!("by {author}")),
        (None, Some(date)) => Some(format!("on {date}")),
        (None, None) => None,
    }
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let posts = RwSignal::new(None::<Result<Vec<Post>, String>>);
    let expanded = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_posts().await.map_err(|e| e.to_string());
        let _ = posts.try_set(Some(result));
    });

    view! {
        <div class="posts-page">
            <header class="posts-page__header">
                <h1>"Posts"</h1>
                <nav>
                    <a href="/editor">"Editor"</a>
                    <a href="/admin">"Admin"</a>
                    <a href="/login">"Sign in"</a>
                </nav>
            </header>
            {move || match posts.get() {
                None => view! { <p>"Loading posts..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="posts-page__error">{format!("Could not load posts: {e}")}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p>"Nothing published yet."</p> }.into_any(),
                Some(Ok(list)) => list
                    .into_iter()
                    .map(|post| {
                        let id = post.id.clone();
                        let is_open = {
                            let id = id.clone();
                            move || expanded.get().as_deref() == Some(id.as_str())
                        };
                        let toggle = move |_| {
                            let id = id.clone();
                            expanded.update(|open| *open = if open.as_deref() == Some(id.as_str()) { None } else { Some(id) });
                        };
                        let byline = post_byline(&post);
                        let summary = excerpt(&post.body, EXCERPT_CHARS);
                        let body_html = render_markdown_html(&post.body);
                        view! {
                            <article class="post-card">
                                <h2 class="post-card__title" on:click=toggle>{post.title}</h2>
                                {byline.map(|line| view! { <p class="post-card__byline">{line}</p> })}
                                <Show
                                    when=is_open
                                    fallback=move || view! { <p class="post-card__excerpt">{summary.clone()}</p> }
                                >
                                    <div class="post-card__body" inner_html=body_html.clone()></div>
                                </Show>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}
