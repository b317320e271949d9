//! The dashboard's top-level pages, independent of any router.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};

use crate::icons::{FaEye, FaGlobe, FaPhone, FaUser, FaWifi};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    IpTracker,
    PhoneTracker,
    UsernameTracker,
    MyIp,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::IpTracker,
        Page::PhoneTracker,
        Page::UsernameTracker,
        Page::MyIp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::IpTracker => "IP Tracker",
            Page::PhoneTracker => "Phone Tracker",
            Page::UsernameTracker => "Username Tracker",
            Page::MyIp => "My IP",
        }
    }

    /// Feature-card text on the Home page. Empty for Home itself.
    pub fn blurb(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::IpTracker => "Get detailed information about any IP address including location, ISP, and geographical data.",
            Page::PhoneTracker => "Lookup phone number information including carrier, location, and validity status.",
            Page::UsernameTracker => "Search for usernames across 20+ social media platforms and online services.",
            Page::MyIp => "Quickly check your current public IP address and basic network information.",
        }
    }

    /// Renders the page's icon at the given size.
    pub fn icon(self, size: u32) -> Element {
        fn render<I: IconShape + Clone + PartialEq + 'static>(icon: I, size: u32) -> Element {
            rsx! { Icon { icon: icon, width: size, height: size } }
        }
        match self {
            Page::Home => render(FaEye, size),
            Page::IpTracker => render(FaGlobe, size),
            Page::PhoneTracker => render(FaPhone, size),
            Page::UsernameTracker => render(FaUser, size),
            Page::MyIp => render(FaWifi, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tracker_has_a_card() {
        let cards: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| !p.blurb().is_empty())
            .collect();
        assert_eq!(cards.len(), 4);
        assert!(!cards.contains(&Page::Home));
    }
}
