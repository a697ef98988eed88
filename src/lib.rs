//! # docx-text
//!
//! Plain text extraction from Microsoft Word (DOCX) documents.
//!
//! The text of every `w:t` run in `word/document.xml` is concatenated in
//! document order. No paragraph breaks, styles, tables or images are
//! reconstructed.
//!
//! ## Quick Start
//!
//! ```no_run
//! let text = docx_text::extract_text("document.docx")?;
//! println!("{}", text);
//! # Ok::<(), docx_text::Error>(())
//! ```
//!
//! ## Lower-level APIs
//!
//! ```no_run
//! use docx_text::container::Package;
//! use docx_text::docx::{collect_text_runs, TextExtractor, DOCUMENT_PART};
//!
//! // Individual runs instead of the joined text
//! let runs = TextExtractor::open("report.docx")?.runs()?;
//!
//! // Work on the raw part directly
//! let xml = Package::open("report.docx")?.read_xml(DOCUMENT_PART)?;
//! let runs = collect_text_runs(&xml)?;
//! # Ok::<(), docx_text::Error>(())
//! ```

pub mod container;
pub mod docx;
pub mod error;

// Re-exports
pub use container::Package;
pub use docx::TextExtractor;
pub use error::{Error, Result};

use std::path::Path;

/// Extract the plain text of a DOCX file.
///
/// Fails if the file cannot be read, is not a ZIP archive, has no
/// `word/document.xml` part, or that part is not well-formed XML.
///
/// # Example
///
/// ```no_run
/// use docx_text::extract_text;
///
/// let text = extract_text("docs/GRN.docx")?;
/// println!("{}", text);
/// # Ok::<(), docx_text::Error>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    TextExtractor::open(path)?.extract()
}

/// Extract the plain text of a DOCX file held in memory.
///
/// # Example
///
/// ```no_run
/// use docx_text::extract_text_from_bytes;
///
/// let data = std::fs::read("document.docx")?;
/// let text = extract_text_from_bytes(&data)?;
/// # Ok::<(), docx_text::Error>(())
/// ```
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    TextExtractor::from_bytes(data.to_vec())?.extract()
}
