//! Document-to-text collaborator.

mod extractor;

pub use extractor::{PdfDocument, PdfExtractor};

use std::path::Path;

use crate::error::PdfError;
use crate::models::statement::StatementText;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Turns a statement document into its full text.
///
/// Implementations are called once per document and never retried. Any
/// failure makes the document unreadable as a whole; there is no partial
/// text.
pub trait TextExtractor {
    /// Extract the text of every page, joined with `\n` in page order.
    fn extract(&self, path: &Path) -> Result<StatementText>;
}
