//! Command dispatch and shared console output.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use console::style;

use ccparse_core::{BatchRunner, ExtractionRecord, ParserConfig, PdfExtractor, StatementParser};

/// Parse a single statement or every statement in a directory.
///
/// A path that is neither is reported and is not an error.
pub fn run(path: &Path, config: &ParserConfig) -> anyhow::Result<()> {
    let parser = StatementParser::from_config(config)?;
    let runner = BatchRunner::new(&parser, PdfExtractor::new()).with_output(config.output.clone());

    if path.is_file() && runner.is_document(path) {
        process::run(path, &runner)
    } else if path.is_dir() {
        batch::run(path, &runner)
    } else {
        eprintln!(
            "{} {} is not a valid PDF file or directory",
            style("✗").red(),
            path.display()
        );
        Ok(())
    }
}

/// Header printed before a document is parsed.
pub(crate) fn header(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let rule = "=".repeat(60);
    format!("{}\nParsing: {}\n{}", rule, name, rule)
}

/// The five fields, one per line.
pub(crate) fn format_record(record: &ExtractionRecord) -> String {
    format!(
        "  1. Card Issuer: {}\n  2. Last 4 Digits: {}\n  3. Billing Cycle: {}\n  4. Due Date: {}\n  5. Total Due: {}",
        record.card_issuer,
        record.last_4_digits,
        record.billing_cycle,
        record.due_date,
        record.total_due
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccparse_core::{FieldResult, Issuer};

    #[test]
    fn test_format_record() {
        let record = ExtractionRecord {
            card_issuer: Issuer::Sbi,
            last_4_digits: FieldResult::Found("1234".to_string()),
            billing_cycle: FieldResult::NotFound,
            due_date: FieldResult::Found("05-Feb-2024".to_string()),
            total_due: FieldResult::Found("₹10.00".to_string()),
        };

        let text = format_record(&record);
        assert!(text.contains("Card Issuer: SBI"));
        assert!(text.contains("Billing Cycle: Not Found"));
        assert!(text.contains("Total Due: ₹10.00"));
    }

    #[test]
    fn test_header_uses_file_name() {
        let text = header(Path::new("/tmp/statements/march.pdf"));
        assert!(text.contains("Parsing: march.pdf"));
        assert!(!text.contains("/tmp"));
    }
}
