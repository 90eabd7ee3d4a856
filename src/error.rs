//! Error types for PDF Bookshelf Server

use thiserror::Error;

/// Result type alias for PDF Bookshelf Server
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PDF Bookshelf Server.
///
/// These stay free of HTTP concerns; the status mapping lives at the API
/// boundary in `server`.
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// The PDF library failed while opening or parsing a document
    #[error("PDF extraction failed: {reason}")]
    Extraction { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Return an error message safe to send to clients. File paths are
    /// omitted; extraction failures keep the underlying library message.
    pub fn client_message(&self) -> String {
        match self {
            Error::PdfNotFound { .. } => "Book not found".to_string(),
            Error::Extraction { reason } => format!("Failed to extract text: {}", reason),
            Error::Io(_) => "I/O error".to_string(),
        }
    }
}
