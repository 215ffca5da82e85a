//! Import configuration.
//!
//! # Responsibility
//! - Define how strictly person references are checked during import.
//! - Parse policy values from host-provided strings.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Policy string for strict reference checks.
pub const REFERENCE_POLICY_STRICT: &str = "strict";
/// Policy string for lenient reference checks.
pub const REFERENCE_POLICY_LENIENT: &str = "lenient";

/// How person records' tag and event-tag references are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Every referenced name must already exist in the model being built.
    #[default]
    Strict,
    /// References are accepted as written.
    Lenient,
}

impl ReferencePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => REFERENCE_POLICY_STRICT,
            Self::Lenient => REFERENCE_POLICY_LENIENT,
        }
    }
}

impl FromStr for ReferencePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(ConfigError::EmptyValue("reference_policy")),
            REFERENCE_POLICY_STRICT => Ok(Self::Strict),
            REFERENCE_POLICY_LENIENT => Ok(Self::Lenient),
            _ => Err(ConfigError::UnsupportedReferencePolicy(value.trim().to_string())),
        }
    }
}

/// Options for `AddressBookDocument::to_model_with`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    #[serde(default)]
    pub reference_policy: ReferencePolicy,
}

impl ImportOptions {
    /// Options that skip reference resolution.
    pub fn lenient() -> Self {
        Self {
            reference_policy: ReferencePolicy::Lenient,
        }
    }
}

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyValue(&'static str),
    UnsupportedReferencePolicy(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue(key) => write!(f, "config value `{key}` must not be empty"),
            Self::UnsupportedReferencePolicy(value) => write!(
                f,
                "unsupported reference policy `{value}`; expected strict|lenient"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ImportOptions, ReferencePolicy};

    #[test]
    fn default_policy_is_strict() {
        assert_eq!(
            ImportOptions::default().reference_policy,
            ReferencePolicy::Strict
        );
    }

    #[test]
    fn parses_policy_case_insensitively() {
        assert_eq!(
            " Lenient ".parse::<ReferencePolicy>().expect("lenient parse"),
            ReferencePolicy::Lenient
        );
        assert_eq!(
            "STRICT".parse::<ReferencePolicy>().expect("strict parse"),
            ReferencePolicy::Strict
        );
    }

    #[test]
    fn rejects_empty_and_unknown_policy() {
        assert_eq!(
            "  ".parse::<ReferencePolicy>().unwrap_err(),
            ConfigError::EmptyValue("reference_policy")
        );
        assert_eq!(
            "loose".parse::<ReferencePolicy>().unwrap_err(),
            ConfigError::UnsupportedReferencePolicy("loose".to_string())
        );
    }

    #[test]
    fn options_deserialize_with_missing_policy() {
        let options: ImportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ImportOptions::default());

        let options: ImportOptions =
            serde_json::from_str(r#"{"reference_policy":"lenient"}"#).unwrap();
        assert_eq!(options, ImportOptions::lenient());
    }
}
