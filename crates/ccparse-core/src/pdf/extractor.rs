//! PDF text extraction using lopdf and pdf-extract.

use std::any::Any;
use std::borrow::Cow;
use std::fs;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{Result, TextExtractor};
use crate::error::PdfError;
use crate::models::statement::StatementText;

/// Reads statement PDFs from disk and returns their text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of an in-memory PDF.
    pub fn extract_from_mem(&self, data: &[u8]) -> Result<StatementText> {
        let document = PdfDocument::load(data)?;
        let pages = document.page_texts()?;

        debug!("Extracted text from {} pages", pages.len());
        Ok(StatementText::from_pages(pages))
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<StatementText> {
        let data = fs::read(path)?;
        trace!("Read {} bytes from {}", data.len(), path.display());
        self.extract_from_mem(&data)
    }
}

/// A loaded PDF. Dropping it releases the parsed document and any
/// decrypted copy of the bytes.
pub struct PdfDocument<'a> {
    document: Document,
    raw_data: Cow<'a, [u8]>,
}

impl<'a> PdfDocument<'a> {
    /// Parse a PDF, decrypting it if it uses an empty password.
    pub fn load(data: &'a [u8]) -> Result<Self> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads bytes, so hand it the decrypted document
            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted)
        } else {
            Cow::Borrowed(data)
        };

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self { document, raw_data })
    }

    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Text of each page in order. Fails if any page fails.
    ///
    /// pdf-extract panics on some malformed font setups that lopdf loads
    /// without complaint; those panics are reported as extraction errors.
    pub fn page_texts(&self) -> Result<Vec<String>> {
        let data: &[u8] = &self.raw_data;
        match catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        })) {
            Ok(pages) => pages.map_err(|e| PdfError::TextExtraction(e.to_string())),
            Err(panic_info) => {
                let panic_msg = panic_message(panic_info.as_ref());
                warn!(panic = %panic_msg, "pdf-extract panicked");
                Err(PdfError::TextExtraction(format!(
                    "text extraction panicked: {}",
                    panic_msg
                )))
            }
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
