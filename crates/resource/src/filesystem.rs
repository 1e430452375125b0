//! Filesystem-based asset sink for native platforms.
//!
//! Asset names come from widget tags inside the source figure, so they are
//! treated as untrusted: every name must resolve to a path below the base
//! directory.

use fig2ui_traits::{AssetError, AssetSink};
use std::path::{Component, Path, PathBuf};

/// An asset sink that writes files relative to a base directory,
/// typically the directory of the generated `.ui` document.
#[derive(Debug)]
pub struct FilesystemAssetSink {
    base_path: PathBuf,
}

impl FilesystemAssetSink {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the base path for this sink.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves an asset name below the base path.
    ///
    /// Returns `None` for absolute names and names with `..`, root or prefix components.
    fn resolve_path_safe(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let relative = Path::new(name);
        if relative.is_absolute() {
            return None;
        }
        let all_normal = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !all_normal {
            return None;
        }
        Some(self.base_path.join(relative))
    }
}

impl AssetSink for FilesystemAssetSink {
    fn store(&self, name: &str, data: Vec<u8>) -> Result<(), AssetError> {
        let full_path = self
            .resolve_path_safe(name)
            .ok_or_else(|| AssetError::InvalidName(format!("{} (path traversal blocked)", name)))?;

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        log::debug!("Writing asset {} ({} bytes)", full_path.display(), data.len());
        std::fs::write(&full_path, data).map_err(|e| AssetError::StoreFailed {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve_path_safe(name)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetSink"
    }
}
