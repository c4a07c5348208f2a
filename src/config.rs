// ============================================================================
// CONFIG - Configuración del panel (compilación + opciones de página)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub refresh_interval_ms: u32,
    pub fetch_timeout_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            enable_logging: true,
        }
    }
}

/// Opciones reconocidas cuando la página inyecta configuración en JSON.
/// Todas son opcionales; las claves desconocidas se ignoran.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    pub base_url: Option<String>,
    pub refresh_interval_ms: Option<u32>,
    pub fetch_timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_raw(
            option_env!("ORDERS_API_BASE_URL"),
            option_env!("REFRESH_INTERVAL_MS"),
            option_env!("FETCH_TIMEOUT_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_raw(
        base_url: Option<&str>,
        refresh_interval_ms: Option<&str>,
        fetch_timeout_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            base_url: normalize_base_url(base_url.unwrap_or(DEFAULT_BASE_URL)),
            refresh_interval_ms: parse_period(refresh_interval_ms, defaults.refresh_interval_ms),
            fetch_timeout_ms: parse_period(fetch_timeout_ms, defaults.fetch_timeout_ms),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Aplica un JSON `{baseUrl, refreshIntervalMs, fetchTimeoutMs}` encima de esta configuración
    pub fn with_options_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let options: ConfigOptions = serde_json::from_str(json)?;
        Ok(self.with_options(options))
    }

    pub fn with_options(&self, options: ConfigOptions) -> Self {
        let mut config = self.clone();
        if let Some(url) = options.base_url {
            config.base_url = normalize_base_url(&url);
        }
        if let Some(ms) = options.refresh_interval_ms.filter(|ms| *ms > 0) {
            config.refresh_interval_ms = ms;
        }
        if let Some(ms) = options.fetch_timeout_ms.filter(|ms| *ms > 0) {
            config.fetch_timeout_ms = ms;
        }
        config
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// URL completa de un endpoint (`endpoint` empieza con `/`)
    pub fn endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

/// Un periodo de 0 ms haría girar el timer sin pausa, se descarta
fn parse_period(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        let config = AppConfig::from_raw(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert_eq!(config.fetch_timeout_ms, 10_000);
    }

    #[test]
    fn test_invalid_or_zero_periods_fall_back() {
        let config = AppConfig::from_raw(Some("http://api/"), Some("0"), Some("abc"), Some("nope"));
        assert_eq!(config.base_url, "http://api");
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
        assert_eq!(config.fetch_timeout_ms, DEFAULT_FETCH_TIMEOUT_MS);
        assert!(config.enable_logging);
    }

    #[test]
    fn test_options_json_layers_over_base() {
        let base = AppConfig::from_raw(None, Some("30000"), None, Some("false"));
        let config = base
            .with_options_json(r#"{"baseUrl": "https://orders.example.com/", "fetchTimeoutMs": 5000, "theme": "dark"}"#)
            .unwrap();

        assert_eq!(config.base_url, "https://orders.example.com");
        assert_eq!(config.refresh_interval_ms, 30_000);
        assert_eq!(config.fetch_timeout_ms, 5_000);
        assert!(!config.enable_logging);
        assert_eq!(config.endpoint("/orders"), "https://orders.example.com/orders");
    }

    #[test]
    fn test_options_json_rejects_garbage() {
        assert!(AppConfig::default().with_options_json("not json").is_err());
    }
}
