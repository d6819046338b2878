use yew::prelude::*;

use super::logging::{LogLevel, Logger};

/// Runtime settings for the storefront, overridable from the page's query string
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    /// Delay before the auth provider resolves its initial state
    pub auth_load_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub start_signed_in: bool,
    pub addresses_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            auth_load_delay_ms: 400,
            toast_duration_ms: 3000,
            start_signed_in: true,
            addresses_path: "/enderecos".to_string(),
        }
    }
}

impl AppConfig {
    /// Apply `?log=debug&auth_delay=0&toast_ms=5000&guest=1` style overrides.
    /// Malformed values keep their default and produce a warning.
    pub fn from_query(search: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        let query = search.trim_start_matches('?');
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => match value.parse::<LogLevel>() {
                    Ok(level) => config.log_level = level,
                    Err(e) => warnings.push(e.to_string()),
                },
                "auth_delay" => match value.parse::<u32>() {
                    Ok(ms) => config.auth_load_delay_ms = ms,
                    Err(_) => warnings.push(format!("invalid auth_delay: {}", value)),
                },
                "toast_ms" => match value.parse::<u32>() {
                    Ok(ms) => config.toast_duration_ms = ms,
                    Err(_) => warnings.push(format!("invalid toast_ms: {}", value)),
                },
                "guest" => config.start_signed_in = matches!(value, "0" | "false"),
                _ => {}
            }
        }

        (config, warnings)
    }

    /// Read the config from `window.location.search`
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();

        let (config, warnings) = Self::from_query(&search);
        Logger::init(config.log_level);
        for warning in warnings {
            Logger::warn_with_component("config", &warning);
        }
        config
    }
}

#[hook]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
