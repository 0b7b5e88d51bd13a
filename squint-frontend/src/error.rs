use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Reading {path} failed: {source}")]
    FileReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Terminal initialization failed: {0}")]
    TerminalInitializationFailed(std::io::Error),
    #[error("Terminal operation failed: {0}")]
    TerminalOperationFailed(#[from] std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
