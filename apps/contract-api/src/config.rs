//! Environment configuration

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_RENDER_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
    /// Upper bound for a single render, enforced by the handlers
    pub render_timeout: Duration,
    pub cors_allow_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            render_timeout: Duration::from_millis(DEFAULT_RENDER_TIMEOUT_MS),
            cors_allow_any: true,
        }
    }
}

impl ApiConfig {
    /// Read `PORT`, `CONTRACT_RENDER_TIMEOUT_MS` and `CORS_ALLOW_ANY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparseable values keep their defaults
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let render_timeout = lookup("CONTRACT_RENDER_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.render_timeout);
        let cors_allow_any = lookup("CORS_ALLOW_ANY")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.cors_allow_any);

        Self {
            port,
            render_timeout,
            cors_allow_any,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: flags ignore case and surrounding whitespace
        #[test]
        fn flags_ignore_case_and_padding(
            word in prop::sample::select(vec!["true", "false", "yes", "no", "on", "off"]),
            upper in any::<bool>(),
            pad in "[ \t]{0,3}",
        ) {
            let raw = if upper { word.to_ascii_uppercase() } else { word.to_string() };
            let expected = matches!(word, "true" | "yes" | "on");
            prop_assert_eq!(parse_flag(&format!("{}{}{}", pad, raw, pad)), Some(expected));
        }

        /// Property: any port value round-trips through the lookup
        #[test]
        fn port_is_read(port in any::<u16>()) {
            let cfg = ApiConfig::from_lookup(|key| (key == "PORT").then(|| port.to_string()));
            prop_assert_eq!(cfg.port, port);
        }
    }
}
