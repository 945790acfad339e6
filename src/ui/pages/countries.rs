use dioxus::prelude::*;

use crate::domain::{AppState, Language, RateCatalog};

#[component]
pub fn CountriesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let language = state.with(|s| s.language);
    let catalog = RateCatalog::global();

    let mut lookup_origin = use_signal(|| "usa".to_string());
    let mut lookup_destination = use_signal(|| "canada".to_string());

    let (title, subtitle, lookup_title) = match language {
        Language::English => (
            "Country Profiles",
            "Destination tax and currency data with preferential trade partners.",
            "Agreement Lookup",
        ),
        Language::Italian => (
            "Profili Paese",
            "Valute, aliquote fiscali e partner commerciali preferenziali.",
            "Ricerca Accordi",
        ),
    };

    let forward = direction_summary(catalog, &lookup_origin(), &lookup_destination());
    let reverse = direction_summary(catalog, &lookup_destination(), &lookup_origin());

    rsx! {
        section { class: "page-heading",
            h2 { "{title}" }
            p { class: "muted", "{subtitle}" }
        }

        section { class: "panel",
            h3 { class: "panel-title", "{lookup_title}" }
            p { class: "muted",
                "Agreements apply per direction; the reverse leg of a pair is a separate entry."
            }
            div { class: "form-grid",
                div { class: "form-field",
                    label { class: "form-label", "Country A" }
                    select {
                        class: "form-select",
                        value: lookup_origin(),
                        onchange: move |evt| lookup_origin.set(evt.value()),
                        for country in catalog.countries().iter() {
                            option { value: "{country.id}", "{country.name}" }
                        }
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", "Country B" }
                    select {
                        class: "form-select",
                        value: lookup_destination(),
                        onchange: move |evt| lookup_destination.set(evt.value()),
                        for country in catalog.countries().iter() {
                            option { value: "{country.id}", "{country.name}" }
                        }
                    }
                }
            }
            div { class: "direction-rows",
                p { class: "direction-row", "{forward}" }
                p { class: "direction-row", "{reverse}" }
            }
        }

        div { class: "country-grid",
            for country in catalog.countries().iter() {
                CountryCard { country_id: country.id.clone(), country_name: country.name.clone() }
            }
        }
    }
}

#[component]
fn CountryCard(country_id: String, country_name: String) -> Element {
    let catalog = RateCatalog::global();
    let currency = catalog.currency(&country_id);
    let tax_display = format!("{:.0}%", catalog.tax_rate(&country_id) * 100.0);

    let outbound: Vec<String> = catalog
        .outbound_partners(&country_id)
        .into_iter()
        .map(|(partner, multiplier)| partner_label(catalog, &partner, multiplier))
        .collect();
    let inbound: Vec<String> = catalog
        .inbound_partners(&country_id)
        .into_iter()
        .map(|(partner, multiplier)| partner_label(catalog, &partner, multiplier))
        .collect();

    rsx! {
        div { class: "country-card",
            h3 { "{country_name}" }
            ul { class: "country-facts",
                li {
                    span { class: "label", "Currency" }
                    span { "{currency}" }
                }
                li {
                    span { class: "label", "VAT/GST on imports" }
                    span { "{tax_display}" }
                }
            }
            if outbound.is_empty() && inbound.is_empty() {
                p { class: "muted", "No preferential agreements on file." }
            } else {
                div { class: "partner-list",
                    if !outbound.is_empty() {
                        p { class: "label", "Exports preferentially to" }
                        ul {
                            for entry in outbound {
                                li { "{entry}" }
                            }
                        }
                    }
                    if !inbound.is_empty() {
                        p { class: "label", "Imports preferentially from" }
                        ul {
                            for entry in inbound {
                                li { "{entry}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn partner_label(catalog: &RateCatalog, partner_id: &str, multiplier: f64) -> String {
    let name = catalog.country_name(partner_id).unwrap_or(partner_id);
    if multiplier == 0.0 {
        format!("{name} (duty-free)")
    } else {
        format!("{name} ({:.0}% of base duty)", multiplier * 100.0)
    }
}

fn direction_summary(catalog: &RateCatalog, origin: &str, destination: &str) -> String {
    let origin_name = catalog.country_name(origin).unwrap_or(origin);
    let destination_name = catalog.country_name(destination).unwrap_or(destination);
    match catalog.agreement_multiplier(origin, destination) {
        Some(multiplier) if multiplier == 0.0 => {
            format!("{origin_name} \u{2192} {destination_name}: duty-free")
        }
        Some(multiplier) => format!(
            "{origin_name} \u{2192} {destination_name}: {:.0}% of base duty",
            multiplier * 100.0
        ),
        None => format!("{origin_name} \u{2192} {destination_name}: no agreement, full base duty"),
    }
}
