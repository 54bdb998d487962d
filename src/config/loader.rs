//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay policy
//! from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayPolicy, PolicyConfig, VenueMetadata};

/// Name of the policy file inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to the venue's pay policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Venue metadata and pay policy constants
/// ```
///
/// # Example
///
/// ```no_run
/// use tip_pool_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Coffee floor: ${}/hr", loader.policy().coffee_minimum_hourly);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, or
    /// contains a non-positive rate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tip_pool_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), tip_pool_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let config = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Self::from_config(config)
    }

    /// Builds a loader from an already-parsed configuration, validating it.
    pub fn from_config(config: PolicyConfig) -> EngineResult<Self> {
        Self::validate_policy(&config.policy)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_policy(policy: &PayPolicy) -> EngineResult<()> {
        let positive_fields = [
            ("coffee_minimum_hourly", policy.coffee_minimum_hourly),
            ("gusto_labor_rate", policy.gusto_labor_rate),
            ("default_wedding_hourly_rate", policy.default_wedding_hourly_rate),
        ];

        for (field, value) in positive_fields {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Returns the full parsed configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.config.policy
    }

    /// Returns the venue metadata.
    pub fn venue(&self) -> &VenueMetadata {
        &self.config.venue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn temp_config_dir(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tip_pool_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(POLICY_FILE_NAME), contents).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.venue().currency, "USD");
        assert_eq!(loader.policy(), &PayPolicy::default());
    }

    #[test]
    fn test_shipped_policy_matches_house_constants() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy().coffee_minimum_hourly, dec("20.00"));
        assert_eq!(loader.policy().gusto_labor_rate, dec("22.00"));
        assert_eq!(loader.policy().default_wedding_hourly_rate, dec("30.00"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = temp_config_dir("bad_yaml", "policy: [unclosed");
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_zero_floor() {
        let dir = temp_config_dir(
            "zero_floor",
            "policy:\n  coffee_minimum_hourly: \"0\"\n",
        );
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "coffee_minimum_hourly");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_load_custom_labor_rate() {
        let dir = temp_config_dir(
            "custom_labor",
            "venue:\n  name: \"Test Bar\"\n  currency: \"USD\"\npolicy:\n  gusto_labor_rate: \"24.50\"\n",
        );
        let loader = ConfigLoader::load(&dir).unwrap();

        assert_eq!(loader.venue().name, "Test Bar");
        assert_eq!(loader.policy().gusto_labor_rate, dec("24.50"));
        assert_eq!(loader.policy().coffee_minimum_hourly, dec("20.00"));
    }

    #[test]
    fn test_default_loader_uses_default_policy() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.policy(), &PayPolicy::default());
    }
}
