//! Configuration loading and validation

use crate::config::types::{CryptoConfig, RandomConfig, SequenceConfig};
use crate::constants::{crypto::MAX_KEY_LEN, CONFIG_FILENAMES};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Settings for a tour run. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TourConfig {
    /// Demo names never to run.
    #[serde(default)]
    pub skip: Vec<String>,
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub crypto: CryptoConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

impl TourConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.crypto.iterations == 0 {
            return Err(Error::ConfigValidation(
                "crypto.iterations must be greater than 0".into(),
            ));
        }
        if self.crypto.key_len == 0 || self.crypto.key_len > MAX_KEY_LEN {
            return Err(Error::ConfigValidation(format!(
                "crypto.key_len must be between 1 and {MAX_KEY_LEN}"
            )));
        }
        if self.sequence.max_len == 0 {
            return Err(Error::ConfigValidation(
                "sequence.max_len must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parses a config file, picking the format from its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str_checked()?;
        if !path.is_file() {
            return Err(Error::ConfigNotFound { path: path_str.to_string() });
        }

        let content = std::fs::read_to_string(path)?;
        let config: TourConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => {
                return Err(Error::ConfigFormatError {
                    path: path_str.to_string(),
                    expected: ".json, .yaml, .yml".to_string(),
                })
            }
        };
        debug!("Loaded config from {path_str}");
        Ok(config)
    }

    /// Loads `explicit` when given, otherwise the first of [`CONFIG_FILENAMES`]
    /// found in `search_dir`, otherwise the defaults. The result is validated.
    pub fn load<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => Self::discover(search_dir.as_ref())?,
        };
        config.validate()?;
        Ok(config)
    }

    fn discover(search_dir: &Path) -> Result<Self> {
        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = search_dir.join(config_file_name);
            if config_file_path.is_file() {
                return Self::from_file(config_file_path);
            }
        }
        debug!("No config file found in {}, using defaults", search_dir.display());
        Ok(Self::default())
    }
}
