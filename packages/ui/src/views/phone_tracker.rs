use api::{PhoneLookup, QueryKind, QueryState, QueryView};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Card, FieldList, Loading, SearchForm};
use crate::{begin_lookup, settle_lookup, use_api, use_history, use_rerun, LookupStatus, Page};

#[component]
pub fn PhoneTrackerView() -> Element {
    let client = use_api();
    let mut view = use_signal(|| QueryView::<PhoneLookup>::new(QueryKind::Phone));
    let mut history = use_history();
    let mut input = use_signal(String::new);

    let submit = use_callback(move |text: String| {
        let client = client.clone();
        spawn(async move {
            let id = begin_lookup(&mut history, Page::PhoneTracker, &text);
            let applied = client.submit_phone(&mut view, &text).await;
            settle_lookup(&mut history, id, LookupStatus::of(&*view.peek(), applied));
        });
    });

    use_rerun(Page::PhoneTracker, move |text| {
        input.set(text.clone());
        submit.call(text);
    });

    let state = view.read().state().clone();

    rsx! {
        Card {
            title: "Phone Number Tracker",
            Alert {
                kind: AlertKind::Info,
                title: "Usage Instructions",
                description: "Please enter a complete international format phone number, e.g.: +6281234567890 (Indonesia), +8613800138000 (China)",
            }
            SearchForm {
                placeholder: "Enter phone number, e.g.: +6281234567890",
                button_label: "Track",
                pending: state.is_pending(),
                value: input,
                on_submit: submit,
            }
        }

        {match state {
            QueryState::Idle => rsx! {},
            QueryState::Pending => rsx! {
                div { class: "card", Loading { message: "Querying phone number information..." } }
            },
            QueryState::Failed(message) => rsx! {
                Alert { kind: AlertKind::Error, title: "Query Failed", description: message }
            },
            QueryState::Loaded(result) => rsx! {
                Card {
                    title: "Phone Number Information Details",
                    FieldList { fields: result.summary() }
                }
            },
        }}
    }
}
