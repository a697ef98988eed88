//! Error types for the docx-text library.

use std::io;
use thiserror::Error;

/// Result type alias for docx-text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting text.
///
/// Every variant carries a human-readable description. Callers that only
/// need "succeeded or failed, with a reason" can rely on `Display` alone.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while opening or reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a readable ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// A required part is missing from the package.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// The part is not well-formed XML.
    #[error("XML parse error: {0}")]
    XmlParse(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::ZipArchive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
