use std::path::PathBuf;

use thiserror::Error;

/// Every condition that aborts a run. The `Display` text is the message shown to the user.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Expected a file but found a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error("Permission denied when opening {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Invalid file format: expected header `{expected}` but found `{found}`")]
    InvalidHeader { expected: String, found: String },

    #[error("Invalid value on line {line}: score `{value}` for player `{player_id}` is not an integer")]
    InvalidScore {
        line: u64,
        player_id: String,
        value: String
    },

    #[error("Invalid value on line {line}: expected {expected} columns but found {found}")]
    InvalidColumnCount { line: u64, expected: usize, found: usize },

    #[error("Failed to read input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected I/O failure: {0}")]
    Io(#[from] std::io::Error)
}

impl ProcessorError {
    /// Whether the error was caused by the content of the input rather than by accessing it.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ProcessorError::InvalidHeader { .. }
                | ProcessorError::InvalidScore { .. }
                | ProcessorError::InvalidColumnCount { .. }
        )
    }
}
