//! Errors that abort building a document.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("No top-level variable starts with '{prefix}'")]
    RootNotFound { prefix: String },

    #[error("Root variable '{variable}' has no properties")]
    MissingRootProperties { variable: String },

    #[error("Root variable '{variable}' has no usable Position")]
    MissingRootPosition { variable: String },
}
