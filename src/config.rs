//! # Configuration
//!
//! Settings come from the environment, after loading a `.env` file if one is
//! present:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `JOSNISHOP_API_URL` | `https://josnishop000-backend-production.up.railway.app` |
//! | `JOSNISHOP_HTTP_TIMEOUT_SECS` | `30` |
//! | `JOSNISHOP_STORE_BUFFER` | `32` |
//! | `JOSNISHOP_SELLER_ID` | `1` |

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://josnishop000-backend-production.up.railway.app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_BUFFER: usize = 32;
pub const DEFAULT_SELLER_ID: u64 = 1;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the order service lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// No trailing slash.
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingConfig {
    pub api: ApiConfig,
    /// Capacity of the order store's request channel.
    pub store_buffer: usize,
    /// User id of the seller account (the only one allowed to change statuses).
    pub seller_user_id: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            store_buffer: DEFAULT_STORE_BUFFER,
            seller_user_id: DEFAULT_SELLER_ID,
        }
    }
}

impl TrackingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("JOSNISHOP_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "JOSNISHOP_API_URL",
                value: base_url,
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let timeout_secs = parse(&lookup, "JOSNISHOP_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let store_buffer = parse(&lookup, "JOSNISHOP_STORE_BUFFER", DEFAULT_STORE_BUFFER)?;
        if store_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "JOSNISHOP_STORE_BUFFER",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let seller_user_id = parse(&lookup, "JOSNISHOP_SELLER_ID", DEFAULT_SELLER_ID)?;

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_secs,
            },
            store_buffer,
            seller_user_id,
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = TrackingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TrackingConfig::default());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = TrackingConfig::from_lookup(lookup(&[
            ("JOSNISHOP_API_URL", "http://localhost:3000/"),
            ("JOSNISHOP_HTTP_TIMEOUT_SECS", "5"),
            ("JOSNISHOP_STORE_BUFFER", "8"),
            ("JOSNISHOP_SELLER_ID", " 12 "),
        ]))
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.store_buffer, 8);
        assert_eq!(config.seller_user_id, 12);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = TrackingConfig::from_lookup(lookup(&[("JOSNISHOP_SELLER_ID", "vendedor")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JOSNISHOP_SELLER_ID", .. }));

        let err = TrackingConfig::from_lookup(lookup(&[("JOSNISHOP_STORE_BUFFER", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JOSNISHOP_STORE_BUFFER", .. }));

        let err = TrackingConfig::from_lookup(lookup(&[("JOSNISHOP_API_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JOSNISHOP_API_URL", .. }));
    }
}
