//! Constants used throughout the showcase application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["showcase.json", "showcase.yaml", "showcase.yml"];

/// Banner printed before the first demo
pub const TOUR_HEADER: &str = "=== Feature Tour ===";

/// Banner printed after the last demo
pub const TOUR_FOOTER: &str = "=== Feature Tour End ===";

/// Sequence template defaults
pub mod sequence {
    pub const DEFAULT_PREFIX: &str = "Numbers: ";
    pub const DEFAULT_SEPARATOR: &str = " ";
    pub const DEFAULT_START: i64 = 1;
    pub const DEFAULT_END: i64 = 5;
    /// Largest number of integers a single `seq` call may produce.
    pub const MAX_SEQUENCE_LEN: u64 = 100_000;
    /// Name under which the sequence template is registered.
    pub const TEMPLATE_NAME: &str = "sequence";
    pub const TEMPLATE: &str =
        "{{ prefix }}{% for i in seq(start, end) %}{{ i }}{{ separator }}{% endfor %}";
}

/// Key derivation and digest defaults
pub mod crypto {
    pub const DEFAULT_PASSWORD: &str = "my password";
    pub const DEFAULT_SALT: &str = "my salt";
    pub const DEFAULT_ITERATIONS: u32 = 4096;
    pub const DEFAULT_KEY_LEN: usize = 32;
    pub const MAX_KEY_LEN: usize = 64;
    pub const DEFAULT_DIGEST_INPUT: &str = "hello world";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
