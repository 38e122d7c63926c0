//! Filesystem check behind `MessageRecord::has_media_attached`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, WhassupError};

/// Answers whether a regular, readable file exists at a path.
pub trait FileProbe {
    fn is_readable_file(&self, path: &Path) -> bool;
}

/// [`FileProbe`] over the real filesystem. Relative paths resolve against `media_root` when set.
#[derive(Debug, Clone, Default)]
pub struct FsProbe {
    media_root: Option<PathBuf>,
}

impl FsProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_root(root: impl Into<PathBuf>) -> Self {
        Self {
            media_root: Some(root.into()),
        }
    }

    pub fn media_root(&self) -> Option<&Path> {
        self.media_root.as_deref()
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.media_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolves `path` and verifies it is a regular file that can be opened for reading.
    pub fn check(&self, path: &Path) -> Result<PathBuf> {
        let resolved = self.resolve(path);
        let metadata = fs::metadata(&resolved)?;
        if !metadata.is_file() {
            return Err(WhassupError::NotAFile(resolved.display().to_string()));
        }
        File::open(&resolved)?;
        Ok(resolved)
    }
}

impl FileProbe for FsProbe {
    fn is_readable_file(&self, path: &Path) -> bool {
        match self.check(path) {
            Ok(_) => true,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "media file not available");
                false
            }
        }
    }
}
