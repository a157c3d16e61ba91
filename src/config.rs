use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::storage::AbsenceSignal;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LedgerConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub db_path: String,
    /// How the backend answers reads of keys that were never written.
    #[serde(default)]
    pub missing_key: AbsenceSignal,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                db_path: "./data/ledger".to_string(),
                missing_key: AbsenceSignal::NotFound,
            },
            log: LogConfig::default(),
        }
    }
}

impl LedgerConfig {
    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => {
                        info!("Config loaded from {}", path);
                        c
                    }
                    Err(e) => {
                        warn!("Error parsing config: {}. Using defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("Error reading config: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Config file not found at '{}'. Creating default.", path);
            let config = Self::default();
            if let Ok(s) = toml::to_string_pretty(&config) {
                if let Err(e) = std::fs::write(path, s) {
                    warn!("Could not write default config to {}: {}", path, e);
                }
            }
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = LedgerConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("missing_key = \"not_found\""));
        let parsed: LedgerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: LedgerConfig = toml::from_str(
            r#"
            [store]
            db_path = "/var/lib/ledger"
            missing_key = "empty_value"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.store.missing_key, AbsenceSignal::EmptyValue);
        assert_eq!(parsed.log.level, "info");
    }

    #[test]
    fn test_missing_file_is_created() {
        let path = std::env::temp_dir().join(format!("cp-ledger-config-{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let path_str = path.to_str().unwrap();

        let config = LedgerConfig::load_or_default(path_str);
        assert_eq!(config, LedgerConfig::default());
        assert!(path.exists());
        assert_eq!(LedgerConfig::load_or_default(path_str), config);

        std::fs::remove_file(&path).unwrap();
    }
}
