use api::MyIpView as MyIpState;
use dioxus::prelude::*;

use crate::components::{ActionButton, Alert, AlertKind, Card, FieldList, Loading, MapLink};
use crate::icons::{FaCopy, FaGlobe, FaRotateRight};
use crate::{
    begin_lookup, settle_lookup, use_api, use_history, use_rerun, Icon, LookupStatus, Page,
};

/// Shows the caller's public IP and its details. Refreshes once on mount,
/// unless the history is about to run a refresh here anyway.
#[component]
pub fn MyIpView() -> Element {
    let client = use_api();
    let mut view = use_signal(MyIpState::default);
    let mut history = use_history();

    let refresh = use_callback(move |_: ()| {
        let client = client.clone();
        spawn(async move {
            let id = begin_lookup(&mut history, Page::MyIp, "");
            let applied = client.refresh_my_ip(&mut view).await;
            settle_lookup(&mut history, id, LookupStatus::of_my_ip(&*view.peek(), applied));
        });
    });

    use_hook(move || {
        if !history.peek().has_rerun_for(Page::MyIp) {
            refresh.call(());
        }
    });
    use_rerun(Page::MyIp, move |_| refresh.call(()));

    let state = view.read().clone();
    let address_pending = state.address.state().is_pending();
    let details_pending = state.details.state().is_pending();
    let shown_ip = if address_pending {
        None
    } else {
        state.address.state().result().and_then(|r| r.ip())
    };

    rsx! {
        Card {
            title: "My IP Address",
            div {
                class: "card-actions",
                ActionButton {
                    pending: address_pending,
                    onclick: move |_| refresh.call(()),
                    Icon { icon: FaRotateRight, width: 14, height: 14 }
                    " Refresh"
                }
            }

            Alert {
                kind: AlertKind::Info,
                title: "IP Address Information",
                description: "Displays the current device's public IP address, which is the IP address that other devices see on the internet.",
            }

            if let Some(message) = state.address.state().error() {
                Alert { kind: AlertKind::Error, title: "Failed to Get IP", description: message.to_string() }
            }

            if address_pending {
                Loading { message: "Getting IP address..." }
            } else if details_pending {
                Loading { message: "Loading IP details..." }
            }

            if let Some(ip) = shown_ip {
                div {
                    class: "my-ip-address",
                    h2 { "{ip}" }
                    button {
                        class: "btn",
                        onclick: {
                            let ip = ip.clone();
                            move |_| copy_to_clipboard(&ip)
                        },
                        Icon { icon: FaCopy, width: 14, height: 14 }
                        " Copy IP Address"
                    }
                }

                if let Some(details) = state.details.state().result() {
                    IpDetailsCard { details: details.clone() }
                }

                if let Some(message) = state.details.state().error() {
                    Alert { kind: AlertKind::Warning, title: "Failed to Load IP Details", description: message.to_string() }
                }

                div {
                    class: "usage-tips",
                    h4 { "Usage Tips" }
                    ul {
                        li { "This IP address is your device's unique identifier on the internet" }
                        li { "The detailed information shows your approximate location and ISP" }
                        li { "IP address may change based on network environment changes" }
                        li { "If using proxy or VPN, it will show the proxy server's information" }
                    }
                }
            }
        }
    }
}

#[component]
fn IpDetailsCard(details: api::IpLookup) -> Element {
    let (location, network) = details.details();

    rsx! {
        section {
            class: "card ip-details",
            header {
                class: "card-header",
                h3 {
                    class: "card-title",
                    Icon { icon: FaGlobe, width: 14, height: 14 }
                    " IP Details"
                }
            }
            div {
                class: "card-body ip-details-columns",
                FieldList { fields: location }
                FieldList { fields: network }
            }
            if let Some(url) = details.maps_url() {
                div { class: "ip-details-map", MapLink { href: url } }
            }
        }
    }
}

const COPIED_MESSAGE: &str = "IP address copied to clipboard";

/// Script copying `text`: async clipboard API first, hidden textarea otherwise.
/// Runs in the page on web and in the webview on desktop.
fn clipboard_script(text: &str) -> Result<String, serde_json::Error> {
    let text = serde_json::to_string(text)?;
    let done = serde_json::to_string(COPIED_MESSAGE)?;
    Ok(format!(
        r#"(async () => {{
    const text = {text};
    try {{
        await navigator.clipboard.writeText(text);
    }} catch (_) {{
        const area = document.createElement('textarea');
        area.value = text;
        document.body.appendChild(area);
        area.select();
        document.execCommand('copy');
        document.body.removeChild(area);
    }}
    alert({done});
}})();"#
    ))
}

fn copy_to_clipboard(text: &str) {
    match clipboard_script(text) {
        Ok(js) => {
            tracing::debug!("copying {text} to the clipboard");
            document::eval(&js);
        }
        Err(e) => tracing::warn!("Failed to copy {text}: {e}"),
    }
}
