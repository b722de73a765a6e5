//! Translator configuration types

use serde::{Deserialize, Serialize};

/// How the field decoder treats a null value pointer
///
/// The two behaviors observed in the wild are preserved as a
/// caller-selectable policy: insert the key with an empty value (the
/// documented default), or drop the field entirely so downstream logic can
/// tell absence from known-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullFieldPolicy {
    #[default]
    InsertEmpty,
    Skip,
}

/// Configuration for the native-to-runtime direction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressConfig {
    /// Prepended to the converted logger name
    #[serde(default)]
    pub logger_prefix: String,

    /// Appended to the converted logger name
    #[serde(default)]
    pub logger_suffix: String,

    /// Prefer the journal PRIORITY field over the severity flag word
    #[serde(default)]
    pub use_priority_field: bool,

    /// Decode policy for null-valued fields
    #[serde(default)]
    pub null_field_policy: NullFieldPolicy,
}

impl IngressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// The runtime logger name for a native domain
    ///
    /// Hyphens become dots, wrapped with the configured prefix and suffix.
    pub fn logger_name(&self, domain: &str) -> String {
        format!(
            "{}{}{}",
            self.logger_prefix,
            domain.replace('-', "."),
            self.logger_suffix
        )
    }
}

fn default_replace_module_char() -> char {
    '-'
}

/// Configuration for the runtime-to-native direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EgressConfig {
    /// Prepended to the converted domain name
    #[serde(default)]
    pub domain_prefix: String,

    /// Appended to the converted domain name
    #[serde(default)]
    pub domain_suffix: String,

    /// What replaces the dots of the logger name (default hyphen)
    #[serde(default = "default_replace_module_char")]
    pub replace_module_char: char,
}

impl Default for EgressConfig {
    fn default() -> Self {
        Self {
            domain_prefix: String::new(),
            domain_suffix: String::new(),
            replace_module_char: default_replace_module_char(),
        }
    }
}

impl EgressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// The native domain for a runtime logger name
    pub fn domain(&self, logger_name: &str) -> String {
        format!(
            "{}{}{}",
            self.domain_prefix,
            logger_name.replace('.', &self.replace_module_char.to_string()),
            self.domain_suffix
        )
    }
}
