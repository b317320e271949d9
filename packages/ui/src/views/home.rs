use dioxus::prelude::*;

use crate::components::Card;
use crate::icons::FaRocket;
use crate::{Icon, Page};

/// Landing page: feature cards linking to each tracker and a quick start guide.
#[component]
pub fn HomeView(on_navigate: EventHandler<Page>) -> Element {
    let trackers = Page::ALL.into_iter().filter(|p| *p != Page::Home);

    rsx! {
        div {
            class: "home",

            section {
                class: "card home-welcome",
                Icon { icon: FaRocket, width: 48, height: 48 }
                h1 { "Welcome to GhostTrack Web" }
                h3 { class: "secondary", "Modern OSINT Platform" }
                p {
                    "GhostTrack is a powerful OSINT (Open Source Intelligence) tool that provides comprehensive "
                    "information gathering capabilities. Track IP addresses, lookup phone numbers, and search "
                    "for usernames across multiple social media platforms."
                }
            }

            div {
                class: "home-features",
                for page in trackers {
                    div {
                        key: "{page.label()}",
                        class: "card home-feature-card",
                        onclick: move |_| on_navigate.call(page),
                        span { class: "home-feature-icon", {page.icon(40)} }
                        h4 { "{page.label()}" }
                        p { "{page.blurb()}" }
                    }
                }
            }

            Card {
                title: "Platform Statistics",
                div {
                    class: "home-stats",
                    Statistic { title: "Supported Platforms", value: "20+" }
                    Statistic { title: "IP Databases", value: "3" }
                    Statistic { title: "Phone Formats", value: "100+" }
                }
            }

            Card {
                title: "Quick Start Guide",
                div {
                    class: "home-guide",
                    div {
                        h4 { "For IP Tracking" }
                        ol {
                            li { "Click on \"IP Tracker\" in the sidebar" }
                            li { "Enter any public IP address (e.g., 8.8.8.8)" }
                            li { "Get detailed geolocation and ISP information" }
                        }
                    }
                    div {
                        h4 { "For Phone Lookup" }
                        ol {
                            li { "Navigate to \"Phone Tracker\"" }
                            li { "Enter phone number in international format" }
                            li { "Discover carrier and location details" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Statistic(title: String, value: String) -> Element {
    rsx! {
        div {
            class: "statistic",
            div { class: "statistic-title", "{title}" }
            div { class: "statistic-value", "{value}" }
        }
    }
}
