use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const AUTO_DISMISS: Duration = Duration::from_secs(6);
/// Oldest notices are dropped once the stack is this deep.
const MAX_STACKED: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn theme(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "\u{2139}",
            ToastKind::Success => "\u{2713}",
            ToastKind::Warning => "\u{26a0}",
            ToastKind::Error => "\u{2715}",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Append a notice to the shared toast signal, evicting the oldest entry
/// once the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage {
        id: generate_id("toast"),
        kind,
        text: message.into(),
    };
    toasts.with_mut(|entries| {
        while entries.len() >= MAX_STACKED {
            entries.remove(0);
        }
        entries.push(message);
    });
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|entries| entries.retain(|toast| toast.id != id));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for entry in entries {
                    ToastCard { entry, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(entry: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = entry.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            dismiss(toasts, &id);
        }
    });

    let class = format!("toast {}", entry.kind.theme());
    let icon = entry.kind.icon();
    let dismiss_id = entry.id.clone();
    rsx! {
        li {
            class: class,
            span { class: "toast-icon", "{icon}" }
            p { class: "toast-text", "{entry.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| dismiss(toasts, &dismiss_id),
                "Dismiss"
            }
        }
    }
}
