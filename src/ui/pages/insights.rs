use std::time::SystemTime;

use dioxus::prelude::*;

use crate::domain::{AppState, FeedStatus};

#[component]
pub fn InsightsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut feed_refresh = use_context::<Signal<u32>>();

    let status = state.with(|s| s.feed_status);
    let articles = state.with(|s| s.articles.clone());
    let fetched_label = state.with(|s| s.last_feed_fetch.map(humanize_age));

    let title = match status {
        FeedStatus::Live => "Bilateral Economic Intelligence",
        _ => "Intelligence Feed",
    };

    let on_refresh = move |_| {
        feed_refresh.with_mut(|generation| *generation = generation.wrapping_add(1));
    };

    let body = match status {
        FeedStatus::Loading => rsx! {
            p { class: "loading-text", "Loading latest coverage..." }
        },
        FeedStatus::Unavailable => rsx! {
            p { class: "loading-text",
                "Live intelligence feed is currently unavailable. Please check back later."
            }
        },
        FeedStatus::Disabled => rsx! {
            p { class: "loading-text", "The news feed is disabled in Settings." }
        },
        FeedStatus::Live => rsx! {
            div { class: "insights-grid",
                for article in articles {
                    div { class: "article-card",
                        h4 {
                            a {
                                href: "{article.link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{article.title}"
                            }
                        }
                        p { class: "article-source",
                            "Source: {article.source}"
                            if let Some(published) = article.published_at {
                                span { class: "muted", " \u{b7} {humanize_age(published)}" }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "page-heading",
            h2 {
                "{title}"
                if status == FeedStatus::Live {
                    span { class: "live-indicator" }
                }
            }
            div { class: "feed-meta",
                if let Some(age) = fetched_label {
                    span { class: "muted", "Updated {age}" }
                }
                button { class: "btn btn-ghost", onclick: on_refresh, "Refresh" }
            }
        }

        {body}
    }
}

/// Rough age label for a past instant ("just now", "8m ago", "3h ago").
pub fn humanize_age(time: SystemTime) -> String {
    let secs = time.elapsed().map(|elapsed| elapsed.as_secs()).unwrap_or(0);
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}
