//! # Wire models
//!
//! Request bodies are strict structs. Responses are kept verbatim as JSON and
//! read through accessors, so a field the API leaves out (or sends with an
//! unexpected type) shows up blank instead of failing the whole query.
//!
//! Each response type also offers the fixed projection its view renders
//! ([`Field`] rows), which keeps the rendering rules testable off the DOM.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackIpRequest {
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPhoneRequest {
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackUsernameRequest {
    pub username: String,
}

/// One labelled value in a result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: Option<String>) -> Self {
        Self {
            label,
            value: value.unwrap_or_default(),
        }
    }

    fn or_unknown(label: &'static str, value: Option<String>) -> Self {
        let value = value.filter(|v| !v.is_empty());
        Self {
            label,
            value: value.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Render the value at `path` as display text. Strings are taken as-is,
/// numbers and booleans use their JSON text, null and containers are `None`.
fn text_at(root: &Value, path: &[&str]) -> Option<String> {
    let mut current = root;
    for key in path {
        current = current.get(key)?;
    }
    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

macro_rules! payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Value);

        impl $name {
            /// The payload exactly as the API sent it.
            pub fn raw(&self) -> &Value {
                &self.0
            }

            fn text(&self, path: &[&str]) -> Option<String> {
                text_at(&self.0, path)
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }
    };
}

payload!(
    /// Response of `POST /api/track-ip`.
    IpLookup
);
payload!(
    /// Response of `POST /api/track-phone`.
    PhoneLookup
);
payload!(
    /// Response of `POST /api/track-username`.
    UsernameLookup
);
payload!(
    /// Response of `GET /api/my-ip`.
    MyIp
);
payload!(
    /// Response of `GET /`.
    Health
);

impl IpLookup {
    pub fn ip(&self) -> Option<String> {
        self.text(&["ip"])
    }

    pub fn maps_url(&self) -> Option<String> {
        self.text(&["maps_url"]).filter(|u| !u.is_empty())
    }

    /// Rows of the IP tracker card.
    pub fn summary(&self) -> Vec<Field> {
        vec![
            Field::new("IP Address", self.ip()),
            Field::new("Country", self.text(&["country"])),
            Field::new("City", self.text(&["city"])),
            Field::new("ISP", self.text(&["connection", "isp"])),
        ]
    }

    /// Rows of the "IP Details" card on the My IP page, split into the two
    /// columns the page lays out side by side.
    pub fn details(&self) -> (Vec<Field>, Vec<Field>) {
        let location = vec![
            Field::new("IP Address", self.ip()),
            Field::new("Type", self.text(&["type"])),
            Field::new("Country", self.text(&["country"])),
            Field::new("Country Code", self.text(&["country_code"])),
            Field::new("City", self.text(&["city"])),
            Field::new("Region", self.text(&["region"])),
            Field::new("Region Code", self.text(&["region_code"])),
        ];
        let network = vec![
            Field::new("Latitude", self.text(&["latitude"])),
            Field::new("Longitude", self.text(&["longitude"])),
            Field::new("Timezone", self.text(&["timezone", "id"])),
            Field::new("UTC Offset", self.text(&["timezone", "offset"])),
            Field::new("ISP", self.text(&["connection", "isp"])),
            Field::new("Organization", self.text(&["connection", "org"])),
            Field::new("ASN", self.text(&["connection", "asn"])),
        ];
        (location, network)
    }
}

impl PhoneLookup {
    pub fn is_valid(&self) -> bool {
        self.0.get("is_valid").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Rows of the phone tracker card.
    pub fn summary(&self) -> Vec<Field> {
        let validity = if self.is_valid() { "Valid" } else { "Invalid" };
        vec![
            Field::new("Original Number", self.text(&["phone_number"])),
            Field::new("Number Validity", Some(validity.to_string())),
            Field::or_unknown("Location", self.text(&["location"])),
            Field::or_unknown("Carrier", self.text(&["carrier"])),
            Field::new("Timezone", self.text(&["timezone"])),
            Field::new("International Format", self.text(&["international_format"])),
        ]
    }
}

/// A platform on which the username was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileMatch {
    pub platform: String,
    pub url: String,
}

impl UsernameLookup {
    pub fn found_count(&self) -> String {
        self.text(&["found_count"]).unwrap_or_default()
    }

    pub fn total_searched(&self) -> String {
        self.text(&["total_searched"]).unwrap_or_default()
    }

    /// `found / searched`, the headline figure of the statistics card.
    pub fn ratio(&self) -> String {
        format!("{} / {}", self.found_count(), self.total_searched())
    }

    pub fn found_profiles(&self) -> Vec<ProfileMatch> {
        self.0
            .get("found_profiles")
            .and_then(Value::as_array)
            .map(|profiles| {
                profiles
                    .iter()
                    .map(|p| ProfileMatch {
                        platform: text_at(p, &["platform"]).unwrap_or_default(),
                        url: text_at(p, &["url"]).unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl MyIp {
    /// The caller's public address, if the API returned a non-empty one.
    pub fn ip(&self) -> Option<String> {
        self.text(&["ip"]).filter(|ip| !ip.is_empty())
    }
}

impl Health {
    pub fn status(&self) -> Option<String> {
        self.text(&["status"])
    }

    pub fn message(&self) -> Option<String> {
        self.text(&["message"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value_of<'a>(fields: &'a [Field], label: &str) -> &'a str {
        fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap_or_else(|| panic!("no field {label}"))
    }

    #[test]
    fn ip_summary_shows_values_verbatim() {
        let lookup = IpLookup(json!({
            "ip": "8.8.8.8",
            "country": "US",
            "city": "Mountain View",
            "connection": { "isp": "Google" }
        }));
        let rows = lookup.summary();
        assert_eq!(value_of(&rows, "IP Address"), "8.8.8.8");
        assert_eq!(value_of(&rows, "Country"), "US");
        assert_eq!(value_of(&rows, "City"), "Mountain View");
        assert_eq!(value_of(&rows, "ISP"), "Google");
        assert_eq!(lookup.maps_url(), None);
    }

    #[test]
    fn ip_details_render_numbers_and_missing_fields() {
        let lookup = IpLookup(json!({
            "ip": "1.2.3.4",
            "latitude": 37.386,
            "timezone": { "id": "America/Los_Angeles", "offset": -25200 },
            "connection": { "asn": 15169, "org": null },
            "maps_url": "https://www.google.com/maps/@37.386,-122.08,8z"
        }));
        let (left, right) = lookup.details();
        assert_eq!(value_of(&left, "IP Address"), "1.2.3.4");
        assert_eq!(value_of(&left, "Region"), "");
        assert_eq!(value_of(&right, "Latitude"), "37.386");
        assert_eq!(value_of(&right, "Timezone"), "America/Los_Angeles");
        assert_eq!(value_of(&right, "UTC Offset"), "-25200");
        assert_eq!(value_of(&right, "ASN"), "15169");
        assert_eq!(value_of(&right, "Organization"), "");
        assert!(lookup.maps_url().is_some());
    }

    #[test]
    fn phone_summary_uses_unknown_placeholders() {
        let lookup = PhoneLookup(json!({
            "phone_number": "+6281234567890",
            "is_valid": true,
            "location": "",
            "timezone": "Asia/Jakarta",
            "international_format": "+62 812-3456-7890"
        }));
        let rows = lookup.summary();
        assert_eq!(value_of(&rows, "Number Validity"), "Valid");
        assert_eq!(value_of(&rows, "Location"), "Unknown");
        assert_eq!(value_of(&rows, "Carrier"), "Unknown");
        assert_eq!(value_of(&rows, "International Format"), "+62 812-3456-7890");
    }

    #[test]
    fn phone_without_validity_is_invalid() {
        assert!(!PhoneLookup(json!({})).is_valid());
    }

    #[test]
    fn username_profiles_and_ratio() {
        let lookup = UsernameLookup(json!({
            "found_count": 2,
            "total_searched": 18,
            "found_profiles": [
                { "platform": "GitHub", "url": "https://www.github.com/jdoe", "status": "found" },
                { "platform": "Twitch", "url": "https://www.twitch.tv/jdoe", "status": "found" }
            ]
        }));
        assert_eq!(lookup.ratio(), "2 / 18");
        let profiles = lookup.found_profiles();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].platform, "GitHub");
        assert_eq!(profiles[1].url, "https://www.twitch.tv/jdoe");
    }

    #[test]
    fn username_without_profiles_is_empty() {
        assert!(UsernameLookup(json!({ "found_profiles": null })).found_profiles().is_empty());
    }

    #[test]
    fn my_ip_ignores_empty_address() {
        assert_eq!(MyIp(json!({ "ip": "1.2.3.4" })).ip().as_deref(), Some("1.2.3.4"));
        assert_eq!(MyIp(json!({ "ip": "" })).ip(), None);
        assert_eq!(MyIp(json!({ "success": true })).ip(), None);
    }
}
