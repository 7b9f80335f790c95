use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ext::PathExt;

/// A directory that only hands out paths below its root.
///
/// Every relative path passed in is checked before it is joined, so `..`,
/// absolute paths and drive prefixes are refused with `PathOutsideRoot`.
/// The deepest existing part of the joined path is then resolved, which
/// refuses symlinks inside the root that point out of it. The check happens
/// at join time only. A link swapped in between `join` and the file
/// operation is not detected.
#[derive(Debug, Clone)]
pub struct ScopedDir {
    root: PathBuf,
}

impl ScopedDir {
    /// Opens a scoped view of an existing directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("'{}' is not a directory", root.display()),
            )));
        }
        Ok(Self { root: root.canonicalize()? })
    }

    /// Joins `relative` to the root, refusing paths that would leave it.
    pub fn join<P: AsRef<Path>>(&self, relative: P) -> Result<PathBuf> {
        let relative = relative.as_ref();
        let outside = || Error::PathOutsideRoot {
            path: relative.display().to_string(),
            root: self.root.display().to_string(),
        };
        if !relative.is_contained() {
            return Err(outside());
        }

        let joined = self.root.join(relative);
        let mut existing = joined.as_path();
        while existing.symlink_metadata().is_err() {
            match existing.parent() {
                Some(parent) => existing = parent,
                None => break,
            }
        }
        if !existing.canonicalize()?.starts_with(&self.root) {
            return Err(outside());
        }
        Ok(joined)
    }

    pub fn write<P: AsRef<Path>>(&self, relative: P, content: &str) -> Result<()> {
        let dest_path = self.join(relative)?;
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(dest_path, content).map_err(Error::IoError)
    }

    pub fn read_to_string<P: AsRef<Path>>(&self, relative: P) -> Result<String> {
        let path = self.join(relative)?;
        std::fs::read_to_string(path).map_err(Error::IoError)
    }

    /// Names of the direct children of the root, sorted.
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1).sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::Other(e.into()))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
