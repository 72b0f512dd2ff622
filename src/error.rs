//! Crate-level errors for loading and configuration.

use crate::parse::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an operation (as opposed to per-line parse failures,
/// which a partial load records and moves past).
#[derive(Error, Debug)]
pub enum BreakError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Load aborted at line {line}: {source}")]
    LoadAborted { line: usize, source: ParseError },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BreakError>;
