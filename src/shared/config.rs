//! Application configuration. Catalog source, data paths, assistant tuning.

use crate::domain::Language;
use serde::Deserialize;

/// Default simulated latency for the built-in catalog, per list.
pub const DEFAULT_CATALOG_DELAY_MS: u64 = 150;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory for the conversation log and exports. Read from BOOKING_ASSISTANT_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// JSON catalog file. When unset the built-in fixtures are served.
    /// Read from BOOKING_ASSISTANT_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Simulated per-list latency for the built-in catalog. Read from BOOKING_ASSISTANT_CATALOG_DELAY_MS.
    #[serde(default)]
    pub catalog_delay_ms: Option<u64>,

    /// Maximum results per search (default 5). Read from BOOKING_ASSISTANT_MAX_RESULTS.
    #[serde(default)]
    pub max_results: Option<usize>,

    // ─────────────────────────────────────────────────────────────────────────
    // Conversation log
    // ─────────────────────────────────────────────────────────────────────────
    /// Retained exchanges (default 500). Read from BOOKING_ASSISTANT_LOG_CAPACITY.
    #[serde(default)]
    pub log_capacity: Option<usize>,

    /// Set to false to disable the conversation log. Read from BOOKING_ASSISTANT_LOG_ENABLED.
    #[serde(default)]
    pub log_enabled: Option<bool>,

    /// Answer language tag, e.g. "en" or "es". Read from BOOKING_ASSISTANT_LANGUAGE.
    #[serde(default)]
    pub language: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BOOKING_ASSISTANT").try_parsing(true));
        if let Ok(path) = std::env::var("BOOKING_ASSISTANT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the data directory. Defaults to "./data".
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    /// Returns the catalog delay in milliseconds. Defaults to 150.
    pub fn catalog_delay_ms_or_default(&self) -> u64 {
        self.catalog_delay_ms.unwrap_or(DEFAULT_CATALOG_DELAY_MS)
    }

    /// Returns max results per search. Defaults to 5; zero is treated as unset.
    pub fn max_results_or_default(&self) -> usize {
        self.max_results
            .filter(|n| *n > 0)
            .unwrap_or(crate::usecases::DEFAULT_MAX_RESULTS)
    }

    /// Returns the conversation log capacity. Defaults to 500.
    pub fn log_capacity_or_default(&self) -> usize {
        self.log_capacity
            .filter(|n| *n > 0)
            .unwrap_or(crate::adapters::persistence::DEFAULT_LOG_CAPACITY)
    }

    /// Returns true unless the log was explicitly disabled.
    pub fn is_log_enabled(&self) -> bool {
        self.log_enabled.unwrap_or(true)
    }

    /// Returns the answer language. Defaults to English.
    pub fn language_or_default(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_tag)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_dir_or_default(), "./data");
        assert_eq!(cfg.catalog_delay_ms_or_default(), 150);
        assert_eq!(cfg.max_results_or_default(), 5);
        assert_eq!(cfg.log_capacity_or_default(), 500);
        assert!(cfg.is_log_enabled());
        assert_eq!(cfg.language_or_default(), Language::English);
    }

    #[test]
    fn test_zero_limits_fall_back() {
        let cfg = AppConfig {
            max_results: Some(0),
            log_capacity: Some(0),
            language: Some("es".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.max_results_or_default(), 5);
        assert_eq!(cfg.log_capacity_or_default(), 500);
        assert_eq!(cfg.language_or_default(), Language::Spanish);
    }

    #[test]
    fn test_from_config_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("catalog_delay_ms", 0)
            .unwrap()
            .set_override("language", "es-MX")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.catalog_delay_ms_or_default(), 0);
        assert_eq!(cfg.language_or_default(), Language::Spanish);
    }
}
