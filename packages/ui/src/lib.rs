//! This crate contains all shared UI for the workspace.
//!
//! Platform packages own the router; they provide an [`api::ApiClient`] through
//! context, wrap everything in [`ThemeProvider`], and render the views inside
//! [`views::SidebarLayoutView`].

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod page;
pub use page::Page;

mod theme;
pub use theme::{
    apply_theme, make_preference_store, use_theme, ThemeContext, ThemeProvider, ThemeToggle,
};

mod sidebar;
pub use sidebar::AppSidebar;

pub mod history;
pub use history::{
    begin_lookup, settle_lookup, use_history, use_rerun, Lookup, LookupHistory, LookupStatus,
};

mod history_panel;
pub use history_panel::{HistoryPanel, HistoryToggle};

/// The API client provided by the platform entry point.
pub fn use_api() -> api::ApiClient {
    use_context::<api::ApiClient>()
}
