use thiserror::Error;

/// Result type for labscan operations
pub type Result<T> = std::result::Result<T, LabscanError>;

/// Error types for labscan operations
///
/// The classification core is total over its inputs and never produces
/// these; they exist for the CLI and file-reading boundary.
#[derive(Error, Debug)]
pub enum LabscanError {
    /// Invalid input supplied to the tool
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for LabscanError {
    fn from(s: String) -> Self {
        LabscanError::InvalidInput(s)
    }
}

impl From<&str> for LabscanError {
    fn from(s: &str) -> Self {
        LabscanError::InvalidInput(s.to_string())
    }
}
