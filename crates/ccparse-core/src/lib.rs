//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction (the document-to-text collaborator)
//! - Ordered, first-match-wins field extraction (issuer, card suffix,
//!   billing cycle, due date, total due)
//! - Statement data models with stable serialized field order
//! - A sequential batch driver for directories of statements

pub mod batch;
pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use batch::{BatchReport, BatchRunner, SkippedDocument};
pub use error::{CcParseError, PatternError, PdfError, Result};
pub use models::config::ParserConfig;
pub use models::statement::{
    ExtractionRecord, FieldResult, Issuer, StatementText, SummaryEntry, NOT_FOUND,
};
pub use pdf::{PdfExtractor, TextExtractor};
pub use statement::{PatternSet, StatementParser};
