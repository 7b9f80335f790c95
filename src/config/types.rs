//! Per-demo configuration sections

use crate::constants::{crypto, sequence};
use serde::Deserialize;

/// Inputs of the `template` demo and defaults for the `seq` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    #[serde(default = "get_default_prefix")]
    pub prefix: String,
    #[serde(default = "get_default_start")]
    pub start: i64,
    #[serde(default = "get_default_end")]
    pub end: i64,
    #[serde(default = "get_default_separator")]
    pub separator: String,
    #[serde(default = "get_default_max_len")]
    pub max_len: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            prefix: get_default_prefix(),
            start: get_default_start(),
            end: get_default_end(),
            separator: get_default_separator(),
            max_len: get_default_max_len(),
        }
    }
}

/// Inputs of the `crypto` demo.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CryptoConfig {
    #[serde(default = "get_default_password")]
    pub password: String,
    #[serde(default = "get_default_salt")]
    pub salt: String,
    #[serde(default = "get_default_iterations")]
    pub iterations: u32,
    #[serde(default = "get_default_key_len")]
    pub key_len: usize,
    #[serde(default = "get_default_digest_input")]
    pub digest_input: String,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            password: get_default_password(),
            salt: get_default_salt(),
            iterations: get_default_iterations(),
            key_len: get_default_key_len(),
            digest_input: get_default_digest_input(),
        }
    }
}

/// Inputs of the `random` demo. Without a seed the generator uses OS entropy.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    #[serde(default)]
    pub seed: Option<u64>,
}

fn get_default_prefix() -> String {
    sequence::DEFAULT_PREFIX.to_string()
}

fn get_default_start() -> i64 {
    sequence::DEFAULT_START
}

fn get_default_end() -> i64 {
    sequence::DEFAULT_END
}

fn get_default_separator() -> String {
    sequence::DEFAULT_SEPARATOR.to_string()
}

fn get_default_max_len() -> u64 {
    sequence::MAX_SEQUENCE_LEN
}

fn get_default_password() -> String {
    crypto::DEFAULT_PASSWORD.to_string()
}

fn get_default_salt() -> String {
    crypto::DEFAULT_SALT.to_string()
}

fn get_default_iterations() -> u32 {
    crypto::DEFAULT_ITERATIONS
}

fn get_default_key_len() -> usize {
    crypto::DEFAULT_KEY_LEN
}

fn get_default_digest_input() -> String {
    crypto::DEFAULT_DIGEST_INPUT.to_string()
}
