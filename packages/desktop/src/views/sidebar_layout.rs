use dioxus::prelude::*;
use ui::Page;

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let navigate = move |page: Page| {
        nav.push(Route::from(page));
    };

    rsx! {
        ui::views::SidebarLayoutView {
            active: route.page(),
            on_navigate: navigate,
            Outlet::<Route> {}
        }
    }
}
