use dioxus::prelude::*;
use ui::Page;

use crate::Route;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::HomeView {
            on_navigate: move |page: Page| {
                nav.push(Route::from(page));
            },
        }
    }
}

#[component]
pub fn IpTracker() -> Element {
    rsx! { ui::views::IpTrackerView {} }
}

#[component]
pub fn PhoneTracker() -> Element {
    rsx! { ui::views::PhoneTrackerView {} }
}

#[component]
pub fn UsernameTracker() -> Element {
    rsx! { ui::views::UsernameTrackerView {} }
}

#[component]
pub fn MyIp() -> Element {
    rsx! { ui::views::MyIpView {} }
}
