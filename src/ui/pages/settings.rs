use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, Language, RateCatalog, ShipmentDefaults, ShippingMode, SHIPMENT_CATEGORIES},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        pages::insights::humanize_age,
    },
    util::{assets, version},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut feed_refresh = use_context::<Signal<u32>>();

    let language = state.with(|st| st.language);
    let news_enabled = state.with(|st| st.news_enabled);
    let last_fetch = state.with(|st| st.last_feed_fetch.map(humanize_age));
    let initial = state.with(|st| st.defaults.clone());

    let mut origin_input = use_signal({
        let value = initial.origin.clone();
        move || value.clone()
    });
    let mut destination_input = use_signal({
        let value = initial.destination.clone();
        move || value.clone()
    });
    let mut category_input = use_signal({
        let value = initial.category.clone();
        move || value.clone()
    });
    let mut mode_input = use_signal(move || initial.shipping_mode);

    let set_language = {
        let mut state = state.clone();
        move |language: Language| {
            state.with_mut(|st| st.language = language);
            persist_user_state(&state);
        }
    };
    let mut set_language_en = set_language.clone();
    let mut set_language_it = set_language;

    let on_apply_defaults = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            if origin_input() == destination_input() {
                push_toast(
                    toasts,
                    ToastKind::Error,
                    "Default origin and destination cannot be the same country.",
                );
                return;
            }
            state.with_mut(|st| {
                st.defaults = ShipmentDefaults {
                    origin: origin_input(),
                    destination: destination_input(),
                    category: category_input(),
                    shipping_mode: mode_input(),
                };
            });
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Success, "Updated calculator defaults.");
        }
    };

    let on_reset_defaults = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = ShipmentDefaults::default();
            origin_input.set(defaults.origin.clone());
            destination_input.set(defaults.destination.clone());
            category_input.set(defaults.category.clone());
            mode_input.set(defaults.shipping_mode);
            state.with_mut(|st| st.defaults = defaults);
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default form values.");
        }
    };

    let on_toggle_news = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| st.news_enabled = !st.news_enabled);
            persist_user_state(&state);
            feed_refresh.with_mut(|generation| *generation = generation.wrapping_add(1));
        }
    };

    let on_refresh_news = {
        let toasts = toasts.clone();
        move |_| {
            feed_refresh.with_mut(|generation| *generation = generation.wrapping_add(1));
            push_toast(toasts, ToastKind::Info, "Refreshing the intelligence feed...");
        }
    };

    let catalog = RateCatalog::global();
    let news_toggle_label = if news_enabled { "Disable" } else { "Enable" };
    let app_name = version::APP_NAME;
    let version_label = version::version_label();

    let english_class = if language == Language::English {
        "btn btn-primary"
    } else {
        "btn btn-secondary"
    };
    let italian_class = if language == Language::Italian {
        "btn btn-primary"
    } else {
        "btn btn-secondary"
    };

    rsx! {
        div { class: "settings-stack",
            section { class: "panel",
                h3 { class: "panel-title", "Language" }
                div { class: "button-row",
                    button {
                        class: "{english_class}",
                        onclick: move |_| set_language_en(Language::English),
                        {Language::English.name()}
                    }
                    button {
                        class: "{italian_class}",
                        onclick: move |_| set_language_it(Language::Italian),
                        {Language::Italian.name()}
                    }
                }
            }

            section { class: "panel",
                h3 { class: "panel-title", "Calculator Defaults" }
                div { class: "form-grid",
                    div { class: "form-field",
                        label { class: "form-label", "Origin" }
                        select {
                            class: "form-select",
                            value: origin_input(),
                            onchange: move |evt| origin_input.set(evt.value()),
                            for country in catalog.countries().iter() {
                                option { value: "{country.id}", "{country.name}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Destination" }
                        select {
                            class: "form-select",
                            value: destination_input(),
                            onchange: move |evt| destination_input.set(evt.value()),
                            for country in catalog.countries().iter() {
                                option { value: "{country.id}", "{country.name}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Goods Category" }
                        select {
                            class: "form-select",
                            value: category_input(),
                            onchange: move |evt| category_input.set(evt.value()),
                            for (key, label) in SHIPMENT_CATEGORIES.iter() {
                                option { value: "{key}", "{label}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", "Shipping Mode" }
                        select {
                            class: "form-select",
                            value: mode_input().key(),
                            onchange: move |evt| mode_input.set(ShippingMode::from_key(&evt.value())),
                            option { value: "sea", {ShippingMode::Sea.label()} }
                            option { value: "air", {ShippingMode::Air.label()} }
                        }
                    }
                }
                div { class: "button-row",
                    button { class: "btn btn-primary", onclick: on_apply_defaults, "Apply" }
                    button { class: "btn btn-secondary", onclick: on_reset_defaults, "Reset Defaults" }
                }
            }

            section { class: "panel",
                h3 { class: "panel-title", "Intelligence Feed" }
                p { class: "muted",
                    "Headlines refresh every five minutes while enabled; the last good batch is kept for offline fallback."
                }
                if let Some(age) = last_fetch {
                    p { class: "cache-row", "Last fetch: {age}" }
                }
                div { class: "button-row",
                    button { class: "btn btn-secondary", onclick: on_toggle_news, "{news_toggle_label}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: on_refresh_news,
                        disabled: !news_enabled,
                        "Refresh Now"
                    }
                }
            }

            section { class: "panel about-panel",
                img { class: "about-logo", src: assets::globe_data_uri(), alt: "" }
                h3 { class: "panel-title", "{app_name} {version_label}" }
                p { class: "muted",
                    "Figures are illustrative estimates built from static rate tables. They are not customs, tax, or compliance advice."
                }
                p { class: "muted",
                    "Headlines courtesy of Google News via rss2json.com."
                }
            }
        }
    }
}
