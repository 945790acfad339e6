use dioxus::prelude::*;

use crate::{
    domain::{
        calculate, AppState, CostBreakdown, Language, RateCatalog, ShipmentRequest, ShippingMode,
        UniformJitter, SHIPMENT_CATEGORIES,
    },
    ui::components::{
        metric_card::MetricCard,
        processing::{ProcessingOverlay, FINAL_HOLD, PROCESSING_STATUSES, STATUS_INTERVAL},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::format_money,
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let language = state.with(|s| s.language);
    let defaults = state.with(|s| s.defaults.clone());

    let mut origin = use_signal({
        let initial = defaults.origin.clone();
        move || initial.clone()
    });
    let mut destination = use_signal({
        let initial = defaults.destination.clone();
        move || initial.clone()
    });
    let mut category = use_signal({
        let initial = defaults.category.clone();
        move || initial.clone()
    });
    let mut value_input = use_signal(|| "10000".to_string());
    let mut insurance_input = use_signal(|| "0".to_string());
    let mut mode = use_signal(move || defaults.shipping_mode);

    // Queued request; the watcher below plays the status theater and then
    // publishes the breakdown.
    let mut analysis_request = use_signal(|| None::<ShipmentRequest>);
    let mut processing_status = use_signal(|| None::<&'static str>);
    let mut breakdown = use_signal(|| None::<CostBreakdown>);

    let _analysis = use_resource(move || async move {
        let Some(request) = analysis_request() else {
            return;
        };
        for status in PROCESSING_STATUSES.iter().copied() {
            processing_status.set(Some(status));
            tokio::time::sleep(STATUS_INTERVAL).await;
        }
        tokio::time::sleep(FINAL_HOLD).await;
        match calculate(
            RateCatalog::global(),
            &request,
            &mut UniformJitter::default(),
        ) {
            Ok(result) => breakdown.set(Some(result)),
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
        processing_status.set(None);
        analysis_request.set(None);
    });

    let on_analyze = move |evt: FormEvent| {
        evt.prevent_default();
        if origin() == destination() {
            push_toast(
                toasts,
                ToastKind::Error,
                "Origin and destination countries cannot be the same.",
            );
            return;
        }
        let value = value_input().trim().parse::<f64>().unwrap_or(0.0);
        let insurance = insurance_input().trim().parse::<f64>().unwrap_or(0.0);
        breakdown.set(None);
        analysis_request.set(Some(ShipmentRequest::new(
            origin(),
            destination(),
            category(),
            value,
            insurance,
            mode(),
        )));
    };

    let (title, subtitle, analyze_label) = match language {
        Language::English => (
            "Trade Compliance Calculator",
            "Estimate duty, tax, logistics cost and clearance time for a shipment.",
            "Analyze Shipment",
        ),
        Language::Italian => (
            "Calcolatore di Conformit\u{e0} Commerciale",
            "Stima dazi, tasse, costi logistici e tempi di sdoganamento di una spedizione.",
            "Analizza Spedizione",
        ),
    };

    let countries = RateCatalog::global().countries();
    let processing = processing_status();
    let is_processing = processing.is_some();
    let result = breakdown();

    rsx! {
        section { class: "page-heading",
            h2 { "{title}" }
            p { class: "muted", "{subtitle}" }
        }

        form { class: "panel", onsubmit: on_analyze,
            div { class: "form-grid",
                div { class: "form-field",
                    label { class: "form-label", "Origin" }
                    select {
                        class: "form-select",
                        value: origin(),
                        onchange: move |evt| origin.set(evt.value()),
                        for country in countries.iter() {
                            option { value: "{country.id}", "{country.name}" }
                        }
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", "Destination" }
                    select {
                        class: "form-select",
                        value: destination(),
                        onchange: move |evt| destination.set(evt.value()),
                        for country in countries.iter() {
                            option { value: "{country.id}", "{country.name}" }
                        }
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", "Goods Category" }
                    select {
                        class: "form-select",
                        value: category(),
                        onchange: move |evt| category.set(evt.value()),
                        for (key, label) in SHIPMENT_CATEGORIES.iter() {
                            option { value: "{key}", "{label}" }
                        }
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", "Declared Value" }
                    input {
                        class: "form-input",
                        r#type: "number",
                        min: "0",
                        value: value_input(),
                        oninput: move |evt| value_input.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", "Insurance" }
                    input {
                        class: "form-input",
                        r#type: "number",
                        min: "0",
                        value: insurance_input(),
                        oninput: move |evt| insurance_input.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", "Shipping Mode" }
                    select {
                        class: "form-select",
                        value: mode().key(),
                        onchange: move |evt| mode.set(ShippingMode::from_key(&evt.value())),
                        option { value: "sea", {ShippingMode::Sea.label()} }
                        option { value: "air", {ShippingMode::Air.label()} }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: is_processing,
                "{analyze_label}"
            }
        }

        if let Some(status) = processing {
            ProcessingOverlay { status: status.to_string() }
        }

        if let Some(result) = result {
            ResultsDashboard { result }
        }
    }
}

#[component]
fn ResultsDashboard(result: CostBreakdown) -> Element {
    let duty_rate_display = format!("{:.1}%", result.duty_rate * 100.0);
    let fta_note = result.has_fta.then(|| "FTA Applied".to_string());

    rsx! {
        div { class: "results-dashboard",
            MetricCard {
                label: "Total Landed Cost",
                value: format_money(result.total_landed_cost, &result.currency),
                highlight: true,
            }
            MetricCard {
                label: "Import Duty",
                value: format_money(result.import_duty, &result.currency),
                highlight: false,
            }
            MetricCard {
                label: "Taxes (VAT/GST)",
                value: format_money(result.tax, &result.currency),
                note: Some(format!("{:.0}% rate", result.tax_rate * 100.0)),
                highlight: false,
            }
            MetricCard {
                label: "Logistics & Insurance",
                value: format_money(result.logistics_cost, &result.currency),
                highlight: false,
            }
            MetricCard {
                label: "Duty Rate",
                value: duty_rate_display,
                note: fta_note,
                highlight: false,
            }
            MetricCard {
                label: "Est. Clearance",
                value: format!("~{} hrs", result.clearance_hours),
                highlight: false,
            }
            MetricCard {
                label: "Shipment Value",
                value: format_money(result.shipment_value, &result.currency),
                highlight: false,
            }
        }
    }
}
