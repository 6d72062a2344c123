use std::path::PathBuf;
use thiserror::Error;

use crate::ranker::RankerError;
use crate::templater::TemplaterError;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ranking error: {0}")]
    Rank(#[from] RankerError),
    #[error("Template error: {0}")]
    Template(#[from] TemplaterError),
}

/// Coarse failure categories shared by both utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    MalformedInput,
    UndefinedPlaceholder,
    Io,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InputNotFound(_) => ErrorKind::InputNotFound,
            AppError::Rank(RankerError::MalformedStats { .. }) => ErrorKind::MalformedInput,
            AppError::Template(TemplaterError::MalformedMapping { .. }) => {
                ErrorKind::MalformedInput
            }
            AppError::Template(TemplaterError::UndefinedPlaceholder { .. }) => {
                ErrorKind::UndefinedPlaceholder
            }
            AppError::Template(TemplaterError::Write(_))
            | AppError::InvalidPath(_)
            | AppError::Io(_) => ErrorKind::Io,
        }
    }
}
