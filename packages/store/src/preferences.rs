//! # User preferences
//!
//! The only thing the dashboard remembers between sessions is the colour theme.
//! [`Preferences`] holds it; a [`PreferenceStore`] persists it.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryStore`] | tests, fallback | process memory |
//! | [`crate::FileStore`] | desktop | `preferences.toml` in the platform config dir |
//! | `LocalStorageStore` | web | `localStorage["theme"]` |
//!
//! A missing theme means "follow the system setting".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::StoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(StoreError::InvalidTheme(other.to_string())),
        }
    }
}

/// Preferences persisted across sessions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Explicit theme choice. `None` follows the system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Preferences {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }

    /// The theme to show, given whether the system prefers dark.
    pub fn effective_theme(&self, system_prefers_dark: bool) -> Theme {
        match self.theme {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// The well-known filename for the desktop preferences file.
    pub fn filename() -> &'static str {
        "preferences.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Somewhere preferences can be read from and written to.
pub trait PreferenceStore {
    fn load(&self) -> Result<Preferences, StoreError>;

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError>;

    /// Load, treating any failure as "no preferences yet".
    fn load_or_default(&self) -> Preferences {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring stored preferences: {e}");
            Preferences::default()
        })
    }
}
