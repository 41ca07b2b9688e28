//! Error types for the ccparse-core library.

use thiserror::Error;

/// Main error type for the ccparse library.
#[derive(Error, Debug)]
pub enum CcParseError {
    /// The statement document could not be turned into text.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// A configured pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A document could not be read as text.
///
/// Every variant is recovered at the document boundary: the document is
/// skipped and the batch carries on.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to read the file from disk.
    #[error("failed to read document: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// A pattern in a pattern set is unusable.
///
/// Raised while building a pattern set, never during extraction.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The regex failed to compile.
    #[error("invalid pattern for {field}: {source}")]
    Invalid {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The regex has fewer capture groups than the field formatter reads.
    #[error("pattern for {field} needs {expected} capture group(s): {pattern}")]
    MissingGroups {
        field: String,
        pattern: String,
        expected: usize,
    },
}

/// Result type for the ccparse library.
pub type Result<T> = std::result::Result<T, CcParseError>;
