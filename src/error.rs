// src/error.rs
use fig2ui_core::BuildError;
use fig2ui_record::RecordError;
use fig2ui_writer::WriteError;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for one conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot derive an output path from '{}': {reason}", input.display())]
    NoOutputPath { input: PathBuf, reason: &'static str },

    #[error("Reading the figure failed: {0}")]
    Record(#[from] RecordError),

    #[error("Building the widget tree failed: {0}")]
    Build(#[from] BuildError),

    #[error("Writing the .ui document failed: {0}")]
    Write(#[from] WriteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
