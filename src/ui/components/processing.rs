use std::time::Duration;

use dioxus::prelude::*;

/// Status lines played while an analysis is "running".
pub const PROCESSING_STATUSES: &[&str] = &[
    "Connecting to global trade network...",
    "Analyzing tariff codes...",
    "Verifying trade agreements...",
    "Calculating logistics matrix...",
    "Finalizing analysis...",
];

/// Gap between status lines.
pub const STATUS_INTERVAL: Duration = Duration::from_millis(600);

/// Hold after the last line; the whole sequence runs about 3.5 seconds.
/// The calculation itself is instantaneous.
pub const FINAL_HOLD: Duration = Duration::from_millis(500);

#[component]
pub fn ProcessingOverlay(status: String) -> Element {
    rsx! {
        div { class: "processing-overlay",
            div { class: "spinner" }
            p { class: "processing-status", "{status}" }
        }
    }
}
