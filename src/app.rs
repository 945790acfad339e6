use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, FeedStatus},
    infra::news::{CacheStatus, NewsClient, FEED_REFRESH_INTERVAL},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, CountriesPage, InsightsPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/calculator")]
    Calculator {},
    #[route("/countries")]
    Countries {},
    #[route("/insights")]
    Insights {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Feed refresh generation shared across routes; bumping it re-runs the
    // headline fetch below.
    let feed_refresh = use_signal(|| 0u32);
    use_context_provider(|| feed_refresh.clone());

    let news_client = use_hook(|| NewsClient::new().ok());

    let _headlines = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let feed_refresh = feed_refresh.clone();
        let news_client = news_client.clone();
        move || {
            let news_client = news_client.clone();
            async move {
                // Generation 0 is the startup fetch; later bumps force a
                // refetch past the client's cache.
                let generation = feed_refresh();
                fetch_headlines(state.clone(), toasts.clone(), news_client, generation > 0).await;
            }
        }
    });

    // Periodic refresh, mirroring the five-minute news cycle.
    let _refresh_loop = use_future({
        let mut feed_refresh = feed_refresh.clone();
        move || async move {
            loop {
                tokio::time::sleep(FEED_REFRESH_INTERVAL).await;
                feed_refresh.with_mut(|generation| *generation = generation.wrapping_add(1));
            }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::globe_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!(%err, "failed to persist preferences");
    }
}

async fn fetch_headlines(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    client: Option<NewsClient>,
    force: bool,
) {
    if !state.with(|st| st.news_enabled) {
        state.with_mut(|st| {
            st.articles.clear();
            st.feed_status = FeedStatus::Disabled;
        });
        return;
    }

    let Some(client) = client else {
        state.with_mut(|st| st.feed_status = FeedStatus::Unavailable);
        push_toast(toasts, ToastKind::Error, "Failed to initialise the news client.");
        return;
    };

    if force {
        client.clear_cache().await;
    }

    match client.get_headlines().await {
        Ok(payload) => {
            state.with_mut(|st| {
                st.articles = payload.data.clone();
                st.feed_status = FeedStatus::Live;
                st.last_feed_fetch = Some(payload.fetched_at);
            });
            if payload.status == CacheStatus::Stale {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "Showing cached headlines; the live feed is unreachable.",
                );
            }
        }
        Err(err) => {
            tracing::warn!(%err, "headline fetch failed");
            state.with_mut(|st| st.feed_status = FeedStatus::Unavailable);
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Countries() -> Element {
    rsx! { Shell { CountriesPage {} } }
}

#[component]
pub fn Insights() -> Element {
    rsx! { Shell { InsightsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
