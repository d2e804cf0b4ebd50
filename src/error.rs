//! Error types for Roster
//!
//! Provides a unified error type for all operations. Missing identifiers on
//! store lookups are not errors; they surface as `None` / `false`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Persistence Format Errors
    // -------------------------------------------------------------------------
    #[error("Unsupported file extension for {0:?}. Please use .txt or .csv")]
    UnsupportedExtension(PathBuf),

    #[error("Missing column in header: {0}")]
    MissingColumn(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Record Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Student ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Grade must be a number between 0 and 100, got {0}")]
    InvalidGrade(f64),

    #[error("Student with ID '{0}' not found")]
    RecordNotFound(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
