//! Error types for the conversion pipeline.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Numeric coercion
//! failures never surface here; they only decide whether a column keeps
//! its text.

use std::path::PathBuf;

use pdfplumber::PdfError;
use thiserror::Error;

/// Error type for a conversion run.
///
/// Any error aborts the run before the output file is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input PDF does not exist.
    #[error("File {} not found.", .0.display())]
    InputNotFound(PathBuf),

    /// The PDF could not be opened or a page could not be interpreted.
    #[error("failed to extract tables: {0}")]
    Pdf(#[from] PdfError),

    /// A page selection refers to pages the document does not have.
    #[error("invalid page selection: {0}")]
    InvalidPageRange(String),

    /// Error writing the output file or creating its directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error packaging the workbook archive.
    #[error("failed to build workbook: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
