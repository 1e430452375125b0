//! Asset sinks for the fig2ui converter.
//!
//! This crate provides platform-specific implementations of the
//! `AssetSink` trait from fig2ui-traits.
//!
//! ## Available Sinks
//!
//! - [`FilesystemAssetSink`]: Writes assets below a base directory
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory sink from fig2ui-traits:
//! - [`InMemoryAssetSink`]: Captures assets in memory

mod filesystem;

pub use filesystem::FilesystemAssetSink;

pub use fig2ui_traits::InMemoryAssetSink;
