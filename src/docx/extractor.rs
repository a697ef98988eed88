//! Package-level text extraction.

use crate::container::Package;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

use super::{collect_text_runs, DOCUMENT_PART};

/// Extracts the plain text of a Word document.
///
/// The extractor is consumed by [`TextExtractor::extract`]; the package is
/// closed as soon as `word/document.xml` has been read, before any parsing.
pub struct TextExtractor<R> {
    package: Package<R>,
}

impl TextExtractor<BufReader<File>> {
    /// Open a DOCX file for extraction.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            package: Package::open(path)?,
        })
    }
}

impl TextExtractor<Cursor<Vec<u8>>> {
    /// Create an extractor over an in-memory DOCX file.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            package: Package::from_bytes(data)?,
        })
    }
}

impl<R: Read + Seek> TextExtractor<R> {
    /// Create an extractor from an already opened package.
    pub fn from_package(package: Package<R>) -> Self {
        Self { package }
    }

    /// Collect the non-empty text runs of the document, in order.
    pub fn runs(self) -> Result<Vec<String>> {
        let xml = self.read_document()?;
        collect_text_runs(&xml)
    }

    /// Extract the document text: every text run, concatenated.
    pub fn extract(self) -> Result<String> {
        let text = self.runs()?.concat();
        debug!(chars = text.chars().count(), "extracted document text");
        Ok(text)
    }

    fn read_document(self) -> Result<String> {
        let mut package = self.package;
        package.read_xml(DOCUMENT_PART)
    }
}
