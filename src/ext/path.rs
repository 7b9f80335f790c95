use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversion
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use showcase::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("showcase.yaml");
    /// assert_eq!(path.to_str_checked().unwrap(), "showcase.yaml");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns true when the path stays below the directory it is joined to:
    /// it is relative and has no `..`, root or prefix components.
    fn is_contained(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn is_contained(&self) -> bool {
        use std::path::Component;
        self.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}
