use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record at '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

impl RecordError {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        RecordError::Malformed {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
