use dioxus::prelude::*;

use api::{ApiClient, EndpointConfig};
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
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // No page location on desktop: the API URL comes from GHOSTTRACK_API_URL / .env
    use_context_provider(|| {
        let config = EndpointConfig::from_env();
        tracing::info!("API endpoint: {} ({})", config.base_url(), config.mode());
        ApiClient::new(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::ThemeProvider {
            Router::<Route> {}
        }
    }
}
