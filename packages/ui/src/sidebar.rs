use dioxus::prelude::*;

use crate::Page;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Navigation sidebar. Collapses off-canvas on narrow screens.
#[component]
pub fn AppSidebar(active: Page, collapsed: bool, on_select: EventHandler<Page>) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: if collapsed { "sidebar collapsed" } else { "sidebar" },

            div {
                class: "sidebar-brand",
                "GhostTrackWeb"
            }

            ul {
                class: "sidebar-menu",
                for page in Page::ALL {
                    li {
                        key: "{page.label()}",
                        class: if page == active { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_select.call(page),
                        span { class: "sidebar-icon", {page.icon(16)} }
                        span { "{page.label()}" }
                    }
                }
            }
        }
    }
}
