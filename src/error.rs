use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON config. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Invalid regular expression. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid IP address. Original error: {0}")]
    AddrParseError(#[from] std::net::AddrParseError),

    #[error("Invalid integer. Original error: {0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("Failed to format text.")]
    FmtError(#[from] std::fmt::Error),

    /// The requested sequence is longer than the configured maximum.
    #[error("Sequence {start}..={end} exceeds the maximum length of {max} numbers.")]
    OutOfRange { start: i64, end: i64, max: u64 },

    #[error("Cannot proceed: path '{path}' escapes the scoped directory '{root}'.")]
    PathOutsideRoot { path: String, root: String },

    #[error("Unknown demo '{name}'. Available demos: {available}.")]
    UnknownDemo { name: String, available: String },

    #[error("Config file '{path}' does not exist.")]
    ConfigNotFound { path: String },

    #[error("Unsupported config format for '{path}'. Expected one of: {expected}.")]
    ConfigFormatError { path: String, expected: String },

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
