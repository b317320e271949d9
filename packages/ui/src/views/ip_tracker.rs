use api::{IpLookup, QueryKind, QueryState, QueryView};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Card, FieldList, Loading, MapLink, SearchForm};
use crate::{begin_lookup, settle_lookup, use_api, use_history, use_rerun, LookupStatus, Page};

#[component]
pub fn IpTrackerView() -> Element {
    let client = use_api();
    let mut view = use_signal(|| QueryView::<IpLookup>::new(QueryKind::Ip));
    let mut history = use_history();
    let mut input = use_signal(String::new);

    let submit = use_callback(move |text: String| {
        let client = client.clone();
        spawn(async move {
            let id = begin_lookup(&mut history, Page::IpTracker, &text);
            let applied = client.submit_ip(&mut view, &text).await;
            settle_lookup(&mut history, id, LookupStatus::of(&*view.peek(), applied));
        });
    });

    use_rerun(Page::IpTracker, move |text| {
        input.set(text.clone());
        submit.call(text);
    });

    let state = view.read().state().clone();

    rsx! {
        Card {
            title: "IP Address Tracker",
            SearchForm {
                placeholder: "Enter IP address, e.g.: 8.8.8.8",
                button_label: "Track",
                pending: state.is_pending(),
                value: input,
                on_submit: submit,
            }
        }

        {match state {
            QueryState::Idle => rsx! {},
            QueryState::Pending => rsx! {
                div { class: "card", Loading { message: "Querying IP information..." } }
            },
            QueryState::Failed(message) => rsx! {
                Alert { kind: AlertKind::Error, title: "Query Failed", description: message }
            },
            QueryState::Loaded(result) => rsx! {
                Card {
                    title: "IP Information Details",
                    FieldList { fields: result.summary() }
                    if let Some(url) = result.maps_url() {
                        p {
                            strong { "Map Location: " }
                            MapLink { href: url }
                        }
                    }
                }
            },
        }}
    }
}
