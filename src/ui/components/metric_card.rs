use dioxus::prelude::*;

/// One tile of the results dashboard. `highlight` stretches the card across
/// the grid and enlarges the value, used for the total.
#[component]
pub fn MetricCard(label: &'static str, value: String, note: Option<String>, highlight: bool) -> Element {
    let card_class = if highlight {
        "metric-card metric-card-wide"
    } else {
        "metric-card"
    };
    let value_class = if highlight { "value total-cost" } else { "value" };

    rsx! {
        div { class: "{card_class}",
            div { class: "label", "{label}" }
            div { class: "{value_class}", "{value}" }
            if let Some(note) = note {
                div { class: "metric-note", "{note}" }
            }
        }
    }
}
