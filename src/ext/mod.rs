//! Extension traits for standard library types.
//!
//! Each trait lives in a file named after the type it extends.
pub mod path;

pub use path::PathExt;
