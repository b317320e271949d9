use dioxus::prelude::*;

use crate::history::{use_history, HistoryEntry, LookupStatus};
use crate::icons::FaRotateRight;
use crate::{Icon, Page};

const HISTORY_CSS: Asset = asset!("/assets/styling/history.css");

/// Lookups made this session, newest first. "Run again" opens the lookup's page
/// and submits the same input there.
#[component]
pub fn HistoryPanel(on_rerun: EventHandler<Page>) -> Element {
    let mut history = use_history();

    if !history().visible {
        return rsx! {};
    }

    let entries = history().entries.clone();

    rsx! {
        document::Stylesheet { href: HISTORY_CSS }

        aside {
            class: "history-panel",
            div {
                class: "history-header",
                span { "Recent Lookups" }
                div {
                    class: "history-header-actions",
                    button {
                        disabled: entries.is_empty(),
                        onclick: move |_| history.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| history.write().visible = false,
                        "Close"
                    }
                }
            }
            ol {
                class: "history-entries",
                if entries.is_empty() {
                    li { class: "history-empty", "No lookups yet" }
                }
                for entry in entries.iter().rev().cloned() {
                    HistoryRow { key: "{entry.id}", entry, on_rerun }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry, on_rerun: EventHandler<Page>) -> Element {
    let mut history = use_history();
    let running = entry.status == LookupStatus::Running;
    let id = entry.id;
    let class = format!("history-entry {}", entry.status.class());
    let title = entry.lookup.describe();
    let detail = match &entry.status {
        LookupStatus::Running => "running".to_string(),
        LookupStatus::Succeeded => "ok".to_string(),
        LookupStatus::Failed(message) => message.clone(),
        LookupStatus::Superseded => "superseded by a newer lookup".to_string(),
    };

    rsx! {
        li {
            class: "{class}",
            span { class: "history-time", "{entry.started_at}" }
            div {
                class: "history-body",
                strong { "{title}" }
                span { class: "history-detail", "{detail}" }
            }
            button {
                class: "history-rerun",
                title: "Run again",
                disabled: running,
                onclick: move |_| {
                    let page = history.write().request_rerun(id);
                    if let Some(page) = page {
                        on_rerun.call(page);
                    }
                },
                Icon { icon: FaRotateRight, width: 12, height: 12 }
            }
        }
    }
}

/// Header button showing how many lookups were made; red once one failed.
#[component]
pub fn HistoryToggle() -> Element {
    let mut history = use_history();
    let count = history().entries.len();
    let failed = history().has_failures();

    rsx! {
        button {
            class: if failed { "history-toggle has-failures" } else { "history-toggle" },
            title: "Recent lookups",
            onclick: move |_| {
                let visible = history().visible;
                history.write().visible = !visible;
            },
            if count > 0 {
                "{count}"
            } else {
                "History"
            }
        }
    }
}
