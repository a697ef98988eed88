//! Word (DOCX) text extraction.
//!
//! Only the main document part is read. Its `w:t` text runs are collected
//! in document order and joined without separators, so a word split across
//! differently formatted runs comes back whole.

mod extractor;
mod runs;

pub use extractor::TextExtractor;
pub use runs::collect_text_runs;

/// Name of the package part holding the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Word 2010 extension namespace. Documents commonly declare it; text runs
/// qualified by it are not part of the extracted text.
pub const W14_NS: &str = "http://schemas.microsoft.com/office/word/2010/wordml";

/// Local name of a text run element.
pub const TEXT_LOCAL_NAME: &[u8] = b"t";
