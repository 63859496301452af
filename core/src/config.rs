//! Client configuration.

use crate::outcome::StatusCheck;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub status_check: StatusCheck,
    /// Send `Access-Control-Allow-Origin: *` on requests, as the old client
    /// did. It has no effect on CORS; off unless parity is wanted.
    pub legacy_cors_header: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            status_check: StatusCheck::Strict,
            legacy_cors_header: false,
        }
    }
}

impl ClientConfig {
    /// Read `MOVIES_API_URL`, `MOVIES_LEGACY_STATUS_CHECK` and
    /// `MOVIES_LEGACY_CORS_HEADER`. Unset or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| lookup(key).and_then(|v| parse_bool(&v)).unwrap_or(false);

        let status_check = if flag("MOVIES_LEGACY_STATUS_CHECK") {
            StatusCheck::Legacy
        } else {
            StatusCheck::Strict
        };

        Self {
            base_url: lookup("MOVIES_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            status_check,
            legacy_cors_header: flag("MOVIES_LEGACY_CORS_HEADER"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
