/// Handles argument parsing and runs the tour.
pub mod cli;

/// Configuration handling for tour runs.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// The demo catalogue.
pub mod demos;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Directory-scoped file access.
pub mod ioutils;

/// Template rendering, including the integer sequence renderer.
pub mod renderer;
