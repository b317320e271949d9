use dioxus::prelude::*;

use api::{ApiClient, EndpointConfig, PageLocation};
use ui::Page;
use views::{Home, IpTracker, MyIp, PhoneTracker, SidebarLayout, UsernameTracker};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SidebarLayout)]
        #[route("/")]
        Home {},
        #[route("/ip-tracker")]
        IpTracker {},
        #[route("/phone-tracker")]
        PhoneTracker {},
        #[route("/username-tracker")]
        UsernameTracker {},
        #[route("/my-ip")]
        MyIp {},
}

impl Route {
    fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::IpTracker {} => Page::IpTracker,
            Route::PhoneTracker {} => Page::PhoneTracker,
            Route::UsernameTracker {} => Page::UsernameTracker,
            Route::MyIp {} => Page::MyIp,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::IpTracker => Route::IpTracker {},
            Page::PhoneTracker => Route::PhoneTracker {},
            Page::UsernameTracker => Route::UsernameTracker {},
            Page::MyIp => Route::MyIp {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

/// Where the page is being served from, plus its origin (`scheme://host:port`).
/// Outside the browser (e.g. `cargo test` on the host) both are empty.
fn page_location() -> (PageLocation, String) {
    #[cfg(target_arch = "wasm32")]
    {
        let location = web_sys::window().map(|w| w.location());
        let hostname = location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_default();
        let port = location
            .as_ref()
            .and_then(|l| l.port().ok())
            .unwrap_or_default();
        let origin = location.and_then(|l| l.origin().ok()).unwrap_or_default();
        (PageLocation::new(hostname, port), origin)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        (PageLocation::new("", ""), String::new())
    }
}

/// Resolve the API location for this page. A production build talks to its
/// own origin, spelled out because `reqwest` rejects relative URLs.
fn endpoint_config(location: &PageLocation, origin: &str, dev_build: bool) -> EndpointConfig {
    api::resolve(location, dev_build).with_origin(origin)
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let (location, origin) = page_location();
        let config = endpoint_config(&location, &origin, cfg!(debug_assertions));
        tracing::info!("API endpoint: {} ({})", config.base_url(), config.mode());
        ApiClient::new(config)
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::ThemeProvider {
            Router::<Route> {}
        }
    }
}
