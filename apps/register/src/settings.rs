//! Register settings.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STORE_*`, nested with `__`,
//!    e.g. `STORE_STORE_NAME`, `STORE_REGISTER__PRICING__KIND`)
//! 2. Config file (`register.toml` unless `--config` is given)
//! 3. Defaults (this file), used only when no file exists

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use store_core::{ItemConfig, RegisterConfig};
use thiserror::Error;
use tracing::warn;

/// File read when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "register.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),
}

/// Everything the register binary needs to run one transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Printed above the receipt.
    pub store_name: String,
    pub register: RegisterConfig,
    /// Items scanned before any `--item` given on the command line.
    pub basket: Vec<ItemConfig>,
}

impl Settings {
    /// Loads settings.
    ///
    /// Without `--config`, a missing `register.toml` means defaults. A file
    /// that exists but does not parse is always an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_from_sources(config_path, Path::new(DEFAULT_SETTINGS_FILE))
    }

    fn load_from_sources(
        config_path: Option<&Path>,
        default_file: &Path,
    ) -> Result<Self, SettingsError> {
        let file = match config_path {
            Some(path) => File::from(path).required(true),
            None => {
                if !default_file.exists() {
                    warn!(
                        "{} not found. Using default configuration.",
                        default_file.display()
                    );
                }
                File::from(default_file).required(false)
            }
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("STORE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            store_name: "Store".to_string(),
            register: RegisterConfig::default(),
            basket: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use store_core::PricingRuleConfig;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = from_toml(
            r#"
            store_name = "Corner Shop"

            [register.pricing]
            kind = "coupon"
            item_name = "Milk"
            discount = 0.15

            [[basket]]
            name = "Milk"
            price_cents = 200

            [[basket]]
            name = "Beef"
            price_cents = 500
            weight = 1.999
            "#,
        );

        assert_eq!(settings.store_name, "Corner Shop");
        assert_eq!(
            settings.register.pricing,
            Some(PricingRuleConfig::Coupon {
                item_name: "Milk".to_string(),
                discount: 0.15,
            })
        );
        assert_eq!(settings.basket.len(), 2);
        assert_eq!(settings.basket[1].weight, Some(1.999));
        assert!(!settings.basket[1].taxable);
    }

    #[test]
    fn test_settings_defaults_fill_missing_sections() {
        let settings = from_toml(r#"store_name = "Kiosk""#);
        assert_eq!(settings.store_name, "Kiosk");
        assert!(settings.register.pricing.is_none());
        assert!(settings.basket.is_empty());
    }

    fn temp_settings(label: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "store-register-{label}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let missing = std::env::temp_dir().join("store-register-absent/register.toml");
        let settings = Settings::load_from_sources(None, &missing).unwrap();
        assert!(settings.basket.is_empty());
    }

    #[test]
    fn test_malformed_default_file_is_an_error() {
        let path = temp_settings("malformed-default", "store_name = [unterminated");
        let result = Settings::load_from_sources(None, &path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_mistyped_default_file_is_an_error() {
        let path = temp_settings("mistyped-default", "basket = 7");
        let result = Settings::load_from_sources(None, &path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/register.toml")));
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }
}
