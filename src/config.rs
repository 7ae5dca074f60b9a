//! Run configuration and environment variable loading
//!
//! Values are layered: built-in defaults, then `BITSQUAT_*` environment
//! variables (including any loaded from `.env` by [`crate::init`]), then
//! whatever the CLI overrides on top.

use crate::config_error;
use crate::error::Result;
use crate::types::{FlipMode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_EXTENSION_TOO: &str = "BITSQUAT_EXTENSION_TOO";
pub const ENV_FLIP_MODE: &str = "BITSQUAT_FLIP_MODE";
pub const ENV_OUTPUT: &str = "BITSQUAT_OUTPUT";
pub const ENV_TLDS: &str = "BITSQUAT_TLDS";

/// Configuration for a bitsquat run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquatConfig {
    /// Also flip bits in the extension and emit the full cross product
    pub permutate_extension: bool,
    pub flip_mode: FlipMode,
    pub output: OutputFormat,
    /// Restrict emitted candidates to these TLDs
    pub tlds: Option<Vec<String>>,
}

impl Default for SquatConfig {
    fn default() -> Self {
        Self {
            permutate_extension: false,
            flip_mode: FlipMode::Reference,
            output: OutputFormat::Lines,
            tlds: None,
        }
    }
}

impl SquatConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_EXTENSION_TOO) {
            config.permutate_extension = parse_bool(ENV_EXTENSION_TOO, &val)?;
        }

        if let Some(val) = lookup(ENV_FLIP_MODE) {
            config.flip_mode = val.parse()?;
        }

        if let Some(val) = lookup(ENV_OUTPUT) {
            config.output = val.parse()?;
        }

        if let Some(val) = lookup(ENV_TLDS) {
            let tlds: Vec<String> = val
                .split(',')
                .map(|s| s.trim().trim_start_matches('.').to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !tlds.is_empty() {
                config.tlds = Some(tlds);
            }
        }

        tracing::debug!(
            permutate_extension = config.permutate_extension,
            flip_mode = %config.flip_mode,
            output = %config.output,
            "Loaded configuration"
        );

        Ok(config)
    }
}

fn parse_bool(key: &str, val: &str) -> Result<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(config_error!("invalid {}='{}', expected true or false", key, val)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<SquatConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SquatConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, SquatConfig::default());
        assert!(!config.permutate_extension);
        assert_eq!(config.flip_mode, FlipMode::Reference);
    }

    #[test]
    fn test_env_values() {
        let config = load(&[
            (ENV_EXTENSION_TOO, "yes"),
            (ENV_FLIP_MODE, "strict"),
            (ENV_OUTPUT, "json"),
            (ENV_TLDS, "com, .ORG,,"),
        ])
        .unwrap();

        assert!(config.permutate_extension);
        assert_eq!(config.flip_mode, FlipMode::Strict);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.tlds, Some(vec!["com".to_string(), "org".to_string()]));
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[(ENV_EXTENSION_TOO, "maybe")]).is_err());
        assert!(load(&[(ENV_FLIP_MODE, "random")]).is_err());
        assert!(load(&[(ENV_OUTPUT, "xml")]).is_err());
    }

    #[test]
    fn test_empty_tld_list_is_ignored() {
        let config = load(&[(ENV_TLDS, " , ")]).unwrap();
        assert_eq!(config.tlds, None);
    }
}
