//! File format selection by extension

use std::path::Path;

use crate::error::{Result, RosterError};

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.csv`, comma-delimited
    Csv,
    /// `.txt`, pipe-delimited
    Txt,
}

impl FileFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("txt") => Ok(FileFormat::Txt),
            _ => Err(RosterError::UnsupportedExtension(path.to_path_buf())),
        }
    }

    pub fn delimiter(&self) -> u8 {
        match self {
            FileFormat::Csv => b',',
            FileFormat::Txt => b'|',
        }
    }
}
