use api::{QueryKind, QueryState, QueryView, UsernameLookup};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Card, Loading, SearchForm};
use crate::icons::FaCircleCheck;
use crate::{
    begin_lookup, settle_lookup, use_api, use_history, use_rerun, Icon, LookupStatus, Page,
};

#[component]
pub fn UsernameTrackerView() -> Element {
    let client = use_api();
    let mut view = use_signal(|| QueryView::<UsernameLookup>::new(QueryKind::Username));
    let mut history = use_history();
    let mut input = use_signal(String::new);

    let submit = use_callback(move |text: String| {
        let client = client.clone();
        spawn(async move {
            let id = begin_lookup(&mut history, Page::UsernameTracker, &text);
            let applied = client.submit_username(&mut view, &text).await;
            settle_lookup(&mut history, id, LookupStatus::of(&*view.peek(), applied));
        });
    });

    use_rerun(Page::UsernameTracker, move |text| {
        input.set(text.clone());
        submit.call(text);
    });

    let state = view.read().state().clone();

    rsx! {
        Card {
            title: "Username Tracker",
            Alert {
                kind: AlertKind::Info,
                title: "Usage Instructions",
                description: "Enter a username, and the system will search across multiple mainstream social media platforms to check if the username exists.",
            }
            SearchForm {
                placeholder: "Enter username, e.g.: john_doe",
                button_label: "Search",
                pending: state.is_pending(),
                value: input,
                on_submit: submit,
            }
        }

        {match state {
            QueryState::Idle => rsx! {},
            QueryState::Pending => rsx! {
                div { class: "card", Loading { message: "Searching username, please wait..." } }
            },
            QueryState::Failed(message) => rsx! {
                Alert { kind: AlertKind::Error, title: "Search Failed", description: message }
            },
            QueryState::Loaded(result) => {
                let profiles = result.found_profiles();
                rsx! {
                    Card {
                        title: "Search Statistics",
                        div {
                            class: "search-ratio",
                            h2 { "{result.ratio()}" }
                            p { "Platforms Found / Total Platforms Searched" }
                        }
                    }
                    if !profiles.is_empty() {
                        Card {
                            title: format!("Found Platforms ({})", profiles.len()),
                            ul {
                                class: "profile-list",
                                for profile in profiles {
                                    li {
                                        key: "{profile.url}",
                                        class: "profile-item",
                                        Icon { icon: FaCircleCheck, width: 16, height: 16 }
                                        div {
                                            class: "profile-meta",
                                            strong { "{profile.platform}" }
                                            span { "{profile.url}" }
                                        }
                                        a {
                                            href: "{profile.url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "Visit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }}
    }
}
