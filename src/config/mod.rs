//! Configuration for a tour run
//!
//! - `types`: per-demo sections with their defaults
//! - `loader`: file discovery, parsing and validation

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::TourConfig;
pub use types::{CryptoConfig, RandomConfig, SequenceConfig};
