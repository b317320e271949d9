//! # Endpoint resolution
//!
//! Decides which base URL the dashboard talks to, based on how the page itself
//! was served. The decision is made once at launch and never revisited.
//!
//! | Order | Condition | Base URL | Mode |
//! |-------|-----------|----------|------|
//! | 1 | page served on port `8192` (any hostname) | `http://<hostname>:8088` | [`DeploymentMode::Docker`] |
//! | 2 | development build | `http://localhost:8000` | [`DeploymentMode::LocalDev`] |
//! | 3 | anything else | `""` (same origin) | [`DeploymentMode::Production`] |
//!
//! The container branch only looks at the port, so the API stays reachable when
//! the dashboard is opened through a LAN address instead of `localhost`.
//!
//! `reqwest` only accepts absolute URLs, in the browser too. The web package
//! therefore pins the production base to the page origin with
//! [`EndpointConfig::with_origin`] before any request is made.

use std::fmt;

/// Port the containerised frontend is published on.
pub const DOCKER_FRONTEND_PORT: &str = "8192";

/// Port the containerised API is published on.
pub const DOCKER_API_PORT: u16 = 8088;

/// API address used by `dx serve` / debug builds.
pub const LOCAL_DEV_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL on native platforms.
pub const API_URL_ENV: &str = "GHOSTTRACK_API_URL";

pub const TRACK_IP_PATH: &str = "/api/track-ip";
pub const TRACK_PHONE_PATH: &str = "/api/track-phone";
pub const TRACK_USERNAME_PATH: &str = "/api/track-username";
pub const MY_IP_PATH: &str = "/api/my-ip";
pub const HEALTH_PATH: &str = "/";

/// Where the page was loaded from (`window.location.hostname` / `port`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub hostname: String,
    /// Empty when the scheme's default port is used.
    pub port: String,
}

impl PageLocation {
    pub fn new(hostname: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.into(),
        }
    }
}

/// How the dashboard is deployed relative to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Docker,
    LocalDev,
    Production,
    /// Base URL supplied explicitly (desktop configuration).
    Custom,
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeploymentMode::Docker => "docker",
            DeploymentMode::LocalDev => "local-dev",
            DeploymentMode::Production => "production",
            DeploymentMode::Custom => "custom",
        };
        f.write_str(s)
    }
}

/// Resolved API location. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    mode: DeploymentMode,
    base_url: String,
}

/// Resolve the API base URL for a page location.
///
/// `dev_build` stands in for the bundler's development flag; the platform
/// packages pass `cfg!(debug_assertions)`.
pub fn resolve(location: &PageLocation, dev_build: bool) -> EndpointConfig {
    if location.port == DOCKER_FRONTEND_PORT {
        return EndpointConfig {
            mode: DeploymentMode::Docker,
            base_url: format!("http://{}:{}", location.hostname, DOCKER_API_PORT),
        };
    }
    if dev_build {
        return EndpointConfig {
            mode: DeploymentMode::LocalDev,
            base_url: LOCAL_DEV_BASE_URL.to_string(),
        };
    }
    EndpointConfig {
        mode: DeploymentMode::Production,
        base_url: String::new(),
    }
}

impl EndpointConfig {
    /// Use an explicit base URL. A trailing slash is dropped.
    pub fn custom(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            mode: DeploymentMode::Custom,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Desktop configuration: `GHOSTTRACK_API_URL` (a `.env` file is honoured),
    /// falling back to the local development server.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env_value(std::env::var(API_URL_ENV).ok())
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn from_env_value(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(url) if !url.is_empty() => Self::custom(url),
            _ => Self {
                mode: DeploymentMode::LocalDev,
                base_url: LOCAL_DEV_BASE_URL.to_string(),
            },
        }
    }

    /// Replace a same-origin base with the page origin (`window.location.origin`).
    /// Other modes already carry an absolute base and are returned unchanged.
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.mode == DeploymentMode::Production && self.base_url.is_empty() {
            self.base_url = origin.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Base URL; empty in production until [`Self::with_origin`] pins it.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL with an absolute API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints {
            track_ip: self.url(TRACK_IP_PATH),
            track_phone: self.url(TRACK_PHONE_PATH),
            track_username: self.url(TRACK_USERNAME_PATH),
            my_ip: self.url(MY_IP_PATH),
            health: self.url(HEALTH_PATH),
        }
    }
}

/// Fully qualified URLs for every API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub track_ip: String,
    pub track_phone: String,
    pub track_username: String,
    pub my_ip: String,
    pub health: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_port_on_localhost_targets_api_port() {
        let config = resolve(&PageLocation::new("localhost", "8192"), false);
        assert_eq!(config.mode(), DeploymentMode::Docker);
        assert_eq!(config.base_url(), "http://localhost:8088");
    }

    #[test]
    fn container_port_keeps_non_loopback_hostname() {
        let config = resolve(&PageLocation::new("192.168.1.20", "8192"), false);
        assert_eq!(config.mode(), DeploymentMode::Docker);
        assert_eq!(config.base_url(), "http://192.168.1.20:8088");
    }

    #[test]
    fn container_port_wins_over_dev_build() {
        let config = resolve(&PageLocation::new("localhost", "8192"), true);
        assert_eq!(config.mode(), DeploymentMode::Docker);
    }

    #[test]
    fn dev_build_targets_local_api() {
        let config = resolve(&PageLocation::new("localhost", "3000"), true);
        assert_eq!(config.mode(), DeploymentMode::LocalDev);
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn production_build_is_same_origin() {
        let config = resolve(&PageLocation::new("ghosttrack.example.org", ""), false);
        assert_eq!(config.mode(), DeploymentMode::Production);
        assert_eq!(config.base_url(), "");
        assert_eq!(config.url(TRACK_IP_PATH), "/api/track-ip");
    }

    #[test]
    fn production_base_is_pinned_to_page_origin() {
        let config = resolve(&PageLocation::new("ghosttrack.example.org", ""), false)
            .with_origin("https://ghosttrack.example.org/");
        assert_eq!(config.mode(), DeploymentMode::Production);
        assert_eq!(config.base_url(), "https://ghosttrack.example.org");
        assert_eq!(
            config.endpoints().track_ip,
            "https://ghosttrack.example.org/api/track-ip"
        );
    }

    #[test]
    fn origin_leaves_absolute_bases_alone() {
        let docker = resolve(&PageLocation::new("localhost", "8192"), false)
            .with_origin("http://localhost:8192");
        assert_eq!(docker.base_url(), "http://localhost:8088");

        let dev = resolve(&PageLocation::new("localhost", "8080"), true)
            .with_origin("http://localhost:8080");
        assert_eq!(dev.base_url(), LOCAL_DEV_BASE_URL);
    }

    #[test]
    fn endpoints_are_joined_onto_base() {
        let endpoints = resolve(&PageLocation::new("host", "8192"), false).endpoints();
        assert_eq!(endpoints.track_ip, "http://host:8088/api/track-ip");
        assert_eq!(endpoints.track_phone, "http://host:8088/api/track-phone");
        assert_eq!(endpoints.track_username, "http://host:8088/api/track-username");
        assert_eq!(endpoints.my_ip, "http://host:8088/api/my-ip");
        assert_eq!(endpoints.health, "http://host:8088/");
    }

    #[test]
    fn custom_base_drops_trailing_slash() {
        let config = EndpointConfig::custom("https://api.example.org/");
        assert_eq!(config.mode(), DeploymentMode::Custom);
        assert_eq!(config.url(MY_IP_PATH), "https://api.example.org/api/my-ip");
    }

    #[test]
    fn env_value_falls_back_to_local_dev() {
        assert_eq!(
            EndpointConfig::from_env_value(None).base_url(),
            LOCAL_DEV_BASE_URL
        );
        assert_eq!(
            EndpointConfig::from_env_value(Some("   ".into())).mode(),
            DeploymentMode::LocalDev
        );
        assert_eq!(
            EndpointConfig::from_env_value(Some("http://10.0.0.2:8088".into())).base_url(),
            "http://10.0.0.2:8088"
        );
    }
}
