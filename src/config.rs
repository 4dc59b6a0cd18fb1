use crate::errors::ConfigError;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// What the dashboard does when the summary fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardMode {
    /// Surface the error in the page banner.
    #[default]
    Strict,
    /// Show zero stats and carry on with the charts.
    Lenient,
}

impl std::str::FromStr for DashboardMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::DashboardMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub dashboard_mode: DashboardMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_base_url = lookup("BOOKSTORE_API_URL")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::ApiUrl(api_base_url));
        }

        let dashboard_mode = match lookup("CONSOLE_DASHBOARD_MODE") {
            Some(value) => value.parse()?,
            None => DashboardMode::default(),
        };

        Ok(Self {
            port,
            api_base_url,
            dashboard_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.dashboard_mode, DashboardMode::Strict);
    }

    #[test]
    fn trims_trailing_slash_and_bad_port_falls_back() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("BOOKSTORE_API_URL", "http://books.local:9000/"),
            ("CONSOLE_DASHBOARD_MODE", "Lenient"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, "http://books.local:9000");
        assert_eq!(config.dashboard_mode, DashboardMode::Lenient);
    }

    #[test]
    fn rejects_unknown_dashboard_mode() {
        let err = config_from(&[("CONSOLE_DASHBOARD_MODE", "sometimes")]).unwrap_err();
        assert!(matches!(err, ConfigError::DashboardMode(_)));
    }

    #[test]
    fn rejects_api_url_without_scheme() {
        let err = config_from(&[("BOOKSTORE_API_URL", "books.local")]).unwrap_err();
        assert!(matches!(err, ConfigError::ApiUrl(_)));
    }
}
