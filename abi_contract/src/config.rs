//! Checker configuration
//!
//! Defaults describe the Zircon header as generated. A JSON file can override
//! any field; fields it omits keep their defaults.
//!
//! ```json
//! {
//!   "version": 1,
//!   "ignore": ["zx_syscall_test_0"],
//!   "severity_overrides": { "unknown_prefix": "error" }
//! }
//! ```

use crate::report::{Rule, Severity};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),

    #[error("config field `{0}` must not be empty")]
    EmptyPrefix(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Version of the config format
    pub version: u32,
    /// Prefix of public symbols
    pub public_prefix: String,
    /// Prefix that turns a public symbol into its raw twin
    pub private_prefix: String,
    /// Report public symbols without a raw twin
    pub require_pairs: bool,
    /// Accept raw symbols without a public partner
    pub allow_orphan_raw: bool,
    /// Symbols skipped entirely (either spelling)
    pub ignore: BTreeSet<String>,
    pub severity_overrides: BTreeMap<Rule, Severity>,
}

impl CheckConfig {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            public_prefix: zx_sys::catalog::PUBLIC_PREFIX.to_string(),
            private_prefix: zx_sys::catalog::RAW_PREFIX.to_string(),
            require_pairs: true,
            allow_orphan_raw: false,
            ignore: BTreeSet::new(),
            severity_overrides: BTreeMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig = serde_json::from_str(json)?;
        if config.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }
        // An empty prefix makes every public symbol its own raw twin
        if config.public_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix("public_prefix"));
        }
        if config.private_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix("private_prefix"));
        }
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded checker config from {}", path.display());
        Ok(config)
    }

    pub fn with_ignored(mut self, symbol: impl Into<String>) -> Self {
        self.ignore.insert(symbol.into());
        self
    }

    pub fn with_severity(mut self, rule: Rule, severity: Severity) -> Self {
        self.severity_overrides.insert(rule, severity);
        self
    }

    pub fn severity_for(&self, rule: Rule) -> Severity {
        self.severity_overrides
            .get(&rule)
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }

    /// The raw spelling of a public symbol
    pub fn raw_name(&self, public: &str) -> String {
        format!("{}{}", self.private_prefix, public)
    }

    /// The public spelling of a raw symbol, if it is one
    pub fn public_name<'a>(&self, symbol: &'a str) -> Option<&'a str> {
        symbol
            .strip_prefix(self.private_prefix.as_str())
            .filter(|public| public.starts_with(self.public_prefix.as_str()))
    }

    pub fn is_public(&self, symbol: &str) -> bool {
        symbol.starts_with(self.public_prefix.as_str())
    }

    /// Whether a symbol, or its public partner, is on the ignore list
    pub fn is_ignored(&self, symbol: &str) -> bool {
        self.ignore.contains(symbol)
            || self
                .public_name(symbol)
                .map_or(false, |public| self.ignore.contains(public))
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.version, CheckConfig::CURRENT_VERSION);
        assert_eq!(config.public_prefix, "zx_");
        assert_eq!(config.private_prefix, "_");
        assert!(config.require_pairs);
        assert!(!config.allow_orphan_raw);
        assert_eq!(config.severity_for(Rule::MissingRaw), Severity::Error);
        assert_eq!(config.severity_for(Rule::UnknownPrefix), Severity::Warning);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "ignore": ["zx_syscall_test_0"],
            "severity_overrides": {"unknown_prefix": "error"}
        }"#;
        let config = CheckConfig::from_json_str(json).unwrap();
        assert!(config.require_pairs);
        assert!(config.is_ignored("zx_syscall_test_0"));
        assert!(config.is_ignored("_zx_syscall_test_0"));
        assert!(!config.is_ignored("zx_syscall_test_1"));
        assert_eq!(config.severity_for(Rule::UnknownPrefix), Severity::Error);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = CheckConfig::from_json_str(r#"{"require_pair": false}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_unsupported_version() {
        let err = CheckConfig::from_json_str(r#"{"version": 2}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = CheckConfig::from_json_str(r#"{"private_prefix": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPrefix("private_prefix")));
        assert_eq!(err.to_string(), "config field `private_prefix` must not be empty");

        let err = CheckConfig::from_json_str(r#"{"public_prefix": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPrefix("public_prefix")));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"allow_orphan_raw": true}}"#).unwrap();
        let config = CheckConfig::from_path(file.path()).unwrap();
        assert!(config.allow_orphan_raw);

        let missing = CheckConfig::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_prefix_helpers() {
        let config = CheckConfig::default();
        assert_eq!(config.raw_name("zx_port_wait"), "_zx_port_wait");
        assert_eq!(config.public_name("_zx_port_wait"), Some("zx_port_wait"));
        assert_eq!(config.public_name("zx_port_wait"), None);
        assert_eq!(config.public_name("_other"), None);
        assert!(config.is_public("zx_port_wait"));
        assert!(!config.is_public("_zx_port_wait"));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CheckConfig::default()
            .with_ignored("zx_syscall_test_0")
            .with_severity(Rule::NonNullNotPointer, Severity::Error);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CheckConfig::from_json_str(&json).unwrap(), config);
    }
}
