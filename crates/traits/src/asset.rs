//! AssetSink trait for abstracting where side-car files are written.
//!
//! The converter emits toolbar icons next to the `.ui` document. Writing goes
//! through this trait so the conversion core never touches the filesystem
//! directly and tests can capture the output in memory.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for asset storage operations.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    #[error("Invalid asset name: {0}")]
    InvalidName(String),

    #[error("Failed to store asset '{name}': {message}")]
    StoreFailed { name: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::Io(err.to_string())
    }
}

/// Shared asset data type (reference-counted bytes).
pub type SharedAssetData = Arc<Vec<u8>>;

/// A destination for named binary assets.
///
/// # Implementations
///
/// - `FilesystemAssetSink` (fig2ui-resource): writes files below a base directory
/// - `InMemoryAssetSink`: keeps everything in memory (always available)
pub trait AssetSink: Send + Sync + Debug {
    /// Store `data` under `name`, replacing any previous asset with that name.
    fn store(&self, name: &str, data: Vec<u8>) -> Result<(), AssetError>;

    /// Check if an asset with this name has been stored.
    fn exists(&self, name: &str) -> bool;

    /// Returns a human-readable name for this sink (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory asset sink.
#[derive(Debug, Default)]
pub struct InMemoryAssetSink {
    assets: std::sync::RwLock<std::collections::BTreeMap<String, SharedAssetData>>,
}

impl InMemoryAssetSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored asset.
    ///
    /// Returns `None` if the lock is poisoned or nothing was stored under `name`.
    pub fn get(&self, name: &str) -> Option<SharedAssetData> {
        self.assets.read().ok()?.get(name).cloned()
    }

    /// Names of all stored assets, sorted.
    pub fn names(&self) -> Vec<String> {
        self.assets
            .read()
            .map(|a| a.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetSink for InMemoryAssetSink {
    fn store(&self, name: &str, data: Vec<u8>) -> Result<(), AssetError> {
        if name.is_empty() {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        let mut assets = self.assets.write().map_err(|_| AssetError::StoreFailed {
            name: name.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(name.to_string(), Arc::new(data));
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.assets
            .read()
            .map(|a| a.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetSink"
    }
}
