use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, Language};
use crate::util::{assets, version::APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let language = state.with(|s| s.language);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;

    let tagline = match language {
        Language::English => "Landed-cost intelligence for global shipments",
        Language::Italian => "Analisi dei costi per spedizioni internazionali",
    };

    let (nav_calculator, nav_countries, nav_insights, nav_settings) = match language {
        Language::English => ("Calculator", "Countries", "Insights", "Settings"),
        Language::Italian => ("Calcolatore", "Paesi", "Notizie", "Impostazioni"),
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div { class: "header-inner",
                    div { class: "header-brand",
                        img { class: "brand-logo", src: assets::globe_data_uri(), alt: "" }
                        div {
                            h1 { class: "brand-title", "{APP_NAME}" }
                            p { class: "brand-tagline", "{tagline}" }
                        }
                    }

                    div { class: "lang-switch",
                        LangButton {
                            active: language == Language::English,
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.language = Language::English);
                                persist_user_state(&state_mut);
                            },
                            label: "EN",
                        }
                        LangButton {
                            active: language == Language::Italian,
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.language = Language::Italian);
                                persist_user_state(&state_mut);
                            },
                            label: "IT",
                        }
                    }

                    nav { class: "header-nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: nav_calculator,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Countries {}),
                            onclick: move |_| { nav.push(Route::Countries {}); },
                            label: nav_countries,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Insights {}),
                            onclick: move |_| { nav.push(Route::Insights {}); },
                            label: nav_insights,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: nav_settings,
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "nav-button active"
    } else {
        "nav-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[component]
fn LangButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "lang-button active"
    } else {
        "lang-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
