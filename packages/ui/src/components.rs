//! Small presentational pieces shared by the query views.

use api::Field;
use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn Card(title: String, children: Element) -> Element {
    rsx! {
        section {
            class: "card",
            header {
                class: "card-header",
                h3 { class: "card-title", "{title}" }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// Labelled values, one per line.
#[component]
pub fn FieldList(fields: Vec<Field>) -> Element {
    rsx! {
        dl {
            class: "field-list",
            for field in fields {
                div {
                    key: "{field.label}",
                    class: "field-row",
                    dt { "{field.label}" }
                    dd { "{field.value}" }
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Info => "alert alert-info",
            AlertKind::Warning => "alert alert-warning",
            AlertKind::Error => "alert alert-error",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, title: String, description: String) -> Element {
    rsx! {
        div {
            class: kind.class(),
            role: "alert",
            strong { class: "alert-title", "{title}" }
            p { class: "alert-description", "{description}" }
        }
    }
}

/// Spinner with a caption, shown while a request is in flight.
#[component]
pub fn Loading(message: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}

/// Class and `disabled` flag of a button that starts a request.
/// The button is locked while its own request is pending.
pub fn action_button_state(pending: bool) -> (&'static str, bool) {
    if pending {
        ("btn btn-primary loading", true)
    } else {
        ("btn btn-primary", false)
    }
}

/// Primary button that shows a spinner and refuses clicks while `pending`.
#[component]
pub fn ActionButton(pending: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let (class, disabled) = action_button_state(pending);

    rsx! {
        button {
            class,
            disabled,
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Text input plus search button. The input is owned by the view so a lookup
/// run again from the history can fill it in.
///
/// The button is disabled while the view's request is pending. Enter in the
/// input still submits, and a newer submit supersedes the one in flight.
#[component]
pub fn SearchForm(
    placeholder: String,
    button_label: String,
    pending: bool,
    value: Signal<String>,
    on_submit: EventHandler<String>,
) -> Element {
    let mut value = value;

    rsx! {
        div {
            class: "search-form",
            role: "search",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| value.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_submit.call(value());
                    }
                },
            }
            ActionButton {
                pending,
                onclick: move |_| on_submit.call(value()),
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                " {button_label}"
            }
        }
    }
}

/// External link opened in a new tab.
#[component]
pub fn MapLink(href: String) -> Element {
    rsx! {
        a {
            class: "map-link",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "View on Google Maps"
        }
    }
}
