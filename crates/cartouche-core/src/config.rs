//! Flow configuration
//!
//! One serde struct covering everything a deployment tunes: the field
//! identifiers, the surcharge, and the fixed shopper-facing strings.
//! Loadable from TOML; `validate` runs before a flow is constructed.

use cartouche_model::{FieldDefinition, Money};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the personalization flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowConfig {
    /// Fixed surcharge added to the base price of personalized lines
    pub surcharge: Money,
    /// Notice shown when the gate rejects an add-to-cart submission
    pub required_notice: String,
    /// Label personalization titles are stored under on order lines
    pub order_meta_label: String,
    /// The custom field declaration
    pub field: FieldDefinition,
}

impl FlowConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            surcharge: Money::from_minor(100),
            required_notice: "Please enter a value into the text field".to_owned(),
            order_meta_label: "Custom Field".to_owned(),
            field: FieldDefinition::default(),
        }
    }

    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// Parse failures and invalid values are both rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    /// I/O, parse, and validation failures.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check configuration invariants
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.meta_key.is_empty() {
            return Err(ConfigError::Invalid("field.meta_key is empty".to_owned()));
        }
        if self.field.form_name.is_empty() {
            return Err(ConfigError::Invalid("field.form_name is empty".to_owned()));
        }
        if self.surcharge.is_negative() {
            return Err(ConfigError::Invalid(format!(
                "surcharge is negative: {}",
                self.surcharge
            )));
        }
        if self.required_notice.trim().is_empty() {
            return Err(ConfigError::Invalid("required_notice is empty".to_owned()));
        }
        if self.order_meta_label.trim().is_empty() {
            return Err(ConfigError::Invalid("order_meta_label is empty".to_owned()));
        }
        Ok(())
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// TOML parse failure
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration invariant was violated
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = FlowConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.surcharge, Money::from_minor(100));
        assert_eq!(config.required_notice, "Please enter a value into the text field");
        assert_eq!(config.order_meta_label, "Custom Field");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = FlowConfig::from_toml_str("surcharge = 250\n").unwrap();
        assert_eq!(config.surcharge, Money::from_minor(250));
        assert_eq!(config.field, FieldDefinition::default());
    }

    #[test]
    fn negative_surcharge_is_rejected() {
        let err = FlowConfig::from_toml_str("surcharge = -5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FlowConfig::from_toml_str("unknown_key = 1\n").is_err());
    }

    #[test]
    fn empty_field_identifiers_are_rejected() {
        let text = "[field]\nmeta_key = \"\"\nform_name = \"f\"\nlabel = \"L\"\nhelp_text = \"\"\n";
        assert!(matches!(
            FlowConfig::from_toml_str(text).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn toml_roundtrip() {
        let config = FlowConfig::new();
        let text = toml::to_string(&config).unwrap();
        let back = FlowConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "surcharge = 150").unwrap();
        let config = FlowConfig::load(file.path()).unwrap();
        assert_eq!(config.surcharge, Money::from_minor(150));
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = FlowConfig::load("/nonexistent/cartouche.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
