//! Централизованная конфигурация криптографического ядра
//!
//! Режим по умолчанию (`mode`) задаёт набор для вызовов без явного выбора.
//! Остальные параметры относятся к алгоритмам национального набора.
//! Активной конфигурацией владеет [`selector`](crate::crypto::selector):
//! `configure(Config::from_env())` применяет её целиком.

use crate::crypto::suites::CipherSuite;
use crate::error::{CryptoError, Result};
use serde::Deserialize;

/// Идентификатор пользователя SM2 по умолчанию (GM/T 0009)
pub const DEFAULT_SM2_USER_ID: &str = "1234567812345678";

/// Основная структура конфигурации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Набор алгоритмов для вызовов, не указывающих набор явно
    pub default_suite: CipherSuite,

    /// Distinguishing identifier mixed into every SM2 signature (Z_A)
    pub sm2_user_id: String,
}

/// Plugin-style configuration object, e.g. `{"mode": "gm"}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    sm2_user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_suite: CipherSuite::Conventional,
            sm2_user_id: DEFAULT_SM2_USER_ID.to_string(),
        }
    }
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    ///
    /// - `CRYPT_MODE`: `gm` / `national` selects the national suite, anything else the conventional one
    /// - `CRYPT_SM2_USER_ID`: overrides the SM2 distinguishing identifier
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CRYPT_MODE") {
            config.default_suite = CipherSuite::from_mode(&val);
        }

        if let Ok(val) = std::env::var("CRYPT_SM2_USER_ID") {
            if !val.is_empty() {
                config.sm2_user_id = val;
            }
        }

        config
    }

    /// Разобрать конфигурацию плагина в формате JSON
    ///
    /// # Errors
    ///
    /// `ConfigError` if the document is not a JSON object of the expected shape
    /// or the SM2 user id is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)
            .map_err(|e| CryptoError::ConfigError(e.to_string()))?;

        let mut config = Self::default();
        if let Some(mode) = raw.mode {
            config.default_suite = CipherSuite::from_mode(&mode);
        }
        if let Some(user_id) = raw.sm2_user_id {
            if user_id.is_empty() {
                return Err(CryptoError::ConfigError(
                    "sm2UserId must not be empty".to_string(),
                ));
            }
            config.sm2_user_id = user_id;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_suite, CipherSuite::Conventional);
        assert_eq!(config.sm2_user_id, "1234567812345678");
    }

    // Regression: the option selects the suite its documentation names.
    // "gm" must mean the national suite and "cm" the conventional one.
    #[test]
    fn test_mode_direction_is_not_inverted() {
        let gm = Config::from_json(r#"{"mode": "gm"}"#).unwrap();
        assert_eq!(gm.default_suite, CipherSuite::National);

        let cm = Config::from_json(r#"{"mode": "cm"}"#).unwrap();
        assert_eq!(cm.default_suite, CipherSuite::Conventional);
    }

    #[test]
    fn test_from_json_defaults_and_overrides() {
        let empty = Config::from_json("{}").unwrap();
        assert_eq!(empty, Config::default());

        let custom = Config::from_json(r#"{"mode": "national", "sm2UserId": "alice@example"}"#)
            .unwrap();
        assert_eq!(custom.default_suite, CipherSuite::National);
        assert_eq!(custom.sm2_user_id, "alice@example");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            Config::from_json("not json"),
            Err(CryptoError::ConfigError(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"sm2UserId": ""}"#),
            Err(CryptoError::ConfigError(_))
        ));
    }
}
