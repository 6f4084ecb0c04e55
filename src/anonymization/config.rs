//! Anonymization configuration

use crate::config::SecretString;
use crate::domain::AnonymoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anonymization method
///
/// Identifiers are stable and case-sensitive: `Hash`, `Mask`, `Generalize`.
/// Adding a method must not change the meaning of the existing ones.
///
/// # Examples
///
/// ```
/// use anonymo::anonymization::AnonymizationMethod;
///
/// let method: AnonymizationMethod = "Mask".parse().unwrap();
/// assert_eq!(method, AnonymizationMethod::Mask);
/// assert!("mask".parse::<AnonymizationMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnonymizationMethod {
    /// Replace with the SHA-256 hex digest of the canonical value
    Hash,
    /// Replace with a fixed sentinel, discarding the value
    Mask,
    /// Replace with a single category label
    Generalize,
}

impl AnonymizationMethod {
    /// All methods in presentation order
    pub const ALL: [AnonymizationMethod; 3] = [
        AnonymizationMethod::Hash,
        AnonymizationMethod::Mask,
        AnonymizationMethod::Generalize,
    ];

    /// Stable identifier of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "Hash",
            Self::Mask => "Mask",
            Self::Generalize => "Generalize",
        }
    }
}

impl Default for AnonymizationMethod {
    fn default() -> Self {
        Self::Hash
    }
}

impl fmt::Display for AnonymizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnonymizationMethod {
    type Err = AnonymoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| AnonymoError::UnsupportedMethod(s.to_string()))
    }
}

/// Anonymization settings from the `[anonymization]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnonymizationConfig {
    /// Method used when none is given on the command line
    #[serde(default)]
    pub method: AnonymizationMethod,

    /// Optional salt prepended to values before hashing
    ///
    /// Without a salt `Hash` digests are reproducible across runs, which also
    /// makes low-cardinality columns open to dictionary attacks.
    #[serde(default)]
    pub salt: Option<SecretString>,
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if let Some(ref salt) = self.salt {
            if salt.expose_secret().is_empty() {
                return Err("anonymization.salt cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_parse_methods() {
        assert_eq!(
            "Hash".parse::<AnonymizationMethod>().unwrap(),
            AnonymizationMethod::Hash
        );
        assert_eq!(
            "Generalize".parse::<AnonymizationMethod>().unwrap(),
            AnonymizationMethod::Generalize
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "HASH".parse::<AnonymizationMethod>().unwrap_err();
        assert!(matches!(err, AnonymoError::UnsupportedMethod(ref m) if m == "HASH"));
    }

    #[test]
    fn test_display_round_trips() {
        for method in AnonymizationMethod::ALL {
            assert_eq!(method.to_string().parse::<AnonymizationMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_default_config() {
        let config = AnonymizationConfig::default();
        assert_eq!(config.method, AnonymizationMethod::Hash);
        assert!(config.salt.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_salt_rejected() {
        let config = AnonymizationConfig {
            method: AnonymizationMethod::Hash,
            salt: Some(secret_string(String::new())),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_method() {
        let config: AnonymizationConfig = toml::from_str("method = \"Mask\"").unwrap();
        assert_eq!(config.method, AnonymizationMethod::Mask);
    }
}
