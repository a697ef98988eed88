//! ZIP container abstraction for OOXML packages.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, trace};

/// Text encoding detected for an XML part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

/// Rewrite a stale UTF-16 encoding declaration to UTF-8.
///
/// Once UTF-16 content has been decoded into a Rust `String`, the XML
/// declaration no longer describes the bytes quick-xml will see.
fn fix_xml_encoding_declaration(content: String) -> String {
    if !content.starts_with("<?xml") {
        return content;
    }
    let Some(end_decl) = content.find("?>") else {
        return content;
    };

    let (decl, rest) = content.split_at(end_decl + 2);
    let fixed_decl = decl
        .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
        .replace("encoding='UTF-16'", "encoding='UTF-8'")
        .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
        .replace("encoding='utf-16'", "encoding='UTF-8'");

    format!("{}{}", fixed_decl, rest)
}

/// Decode XML part bytes, honouring a UTF-8 or UTF-16 byte order mark.
///
/// Parts without a BOM are decoded as UTF-8 whatever their declaration
/// says; a part declaring another encoding (such as `ISO-8859-1`) with
/// non-UTF-8 bytes fails with [`Error::XmlParse`].
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<(String, XmlEncoding)> {
    if let Some(body) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return Ok((utf8(body)?, XmlEncoding::Utf8Bom));
    }
    if let Some(body) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let content = decode_utf16(body, u16::from_le_bytes)?;
        return Ok((fix_xml_encoding_declaration(content), XmlEncoding::Utf16Le));
    }
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let content = decode_utf16(body, u16::from_be_bytes)?;
        return Ok((fix_xml_encoding_declaration(content), XmlEncoding::Utf16Be));
    }

    Ok((utf8(bytes)?, XmlEncoding::Utf8))
}

fn utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| Error::XmlParse(format!("invalid UTF-8 in XML part: {}", e)))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::XmlParse("UTF-16 XML part has an odd number of bytes".to_string()));
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::XmlParse(format!("invalid UTF-16 in XML part: {}", e)))
}

/// An OOXML package backed by a ZIP archive.
///
/// The archive (and, for [`Package::open`], its file handle) lives exactly
/// as long as the `Package` value.
pub struct Package<R> {
    archive: zip::ZipArchive<R>,
}

impl Package<BufReader<File>> {
    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docx_text::container::Package;
    ///
    /// let mut package = Package::open("document.docx")?;
    /// let xml = package.read_xml("word/document.xml")?;
    /// # Ok::<(), docx_text::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let package = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), entries = package.len(), "opened package");
        Ok(package)
    }
}

impl Package<Cursor<Vec<u8>>> {
    /// Create a package from an in-memory byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }
}

impl<R: Read + Seek> Package<R> {
    /// Create a package from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read an XML part and decode it to a string.
    pub fn read_xml(&mut self, name: &str) -> Result<String> {
        let bytes = self.read_binary(name)?;
        let (content, encoding) = decode_xml_bytes(&bytes)?;
        trace!(part = name, bytes = bytes.len(), ?encoding, "decoded XML part");
        Ok(content)
    }

    /// Read a part as raw bytes.
    pub fn read_binary(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::MissingComponent(name.to_string()),
            other => Error::from(other),
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a part exists in the package.
    pub fn exists(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// List all part names in the package.
    pub fn list_files(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

impl<R: Read + Seek> std::fmt::Debug for Package<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("entries", &self.archive.len())
            .finish()
    }
}
