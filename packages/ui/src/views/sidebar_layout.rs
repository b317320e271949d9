use dioxus::prelude::*;

use crate::icons::FaBars;
use crate::{AppSidebar, HistoryPanel, HistoryToggle, Icon, LookupHistory, Page, ThemeToggle};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared sidebar layout view.
///
/// Platform packages map [`Page`] to their routes and pass an `Outlet` as
/// children. Owns the lookup history for everything rendered inside it.
#[component]
pub fn SidebarLayoutView(
    /// The page currently shown; highlighted in the sidebar and used as the header title.
    active: Page,
    /// The router outlet for child routes.
    children: Element,
    /// Called when the user picks a page in the sidebar.
    on_navigate: EventHandler<Page>,
) -> Element {
    use_context_provider(|| Signal::new(LookupHistory::default()));
    let mut collapsed = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "app-layout",

            AppSidebar {
                active: active,
                collapsed: collapsed(),
                on_select: move |page: Page| on_navigate.call(page),
            }

            div {
                class: if collapsed() { "app-main full" } else { "app-main" },

                header {
                    class: "view-header-bar",
                    button {
                        class: "sidebar-trigger",
                        title: "Toggle sidebar",
                        onclick: move |_| collapsed.set(!collapsed()),
                        Icon { icon: FaBars, width: 16, height: 16 }
                    }
                    h1 { class: "view-title", "{active.label()}" }
                    div {
                        class: "view-header-actions",
                        HistoryToggle {}
                        ThemeToggle {}
                    }
                }

                main {
                    class: "view-content",
                    {children}
                }

                HistoryPanel { on_rerun: move |page: Page| on_navigate.call(page) }
            }
        }
    }
}
