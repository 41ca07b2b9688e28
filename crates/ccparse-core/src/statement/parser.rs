//! Statement parser running every field extractor over a statement.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{PdfError, Result};
use crate::models::config::ParserConfig;
use crate::models::statement::{ExtractionRecord, FieldResult, Issuer, StatementText};
use crate::pdf::TextExtractor;

use super::rules::PatternSet;

/// Extracts the five statement fields from statement text.
///
/// Extractors are total: each returns a value or its sentinel, and a miss
/// in one never affects another.
#[derive(Debug, Clone)]
pub struct StatementParser {
    patterns: PatternSet,
    currency_symbol: String,
}

impl StatementParser {
    /// Create a parser with the builtin patterns.
    pub fn new() -> Self {
        Self {
            patterns: PatternSet::builtin(),
            currency_symbol: "₹".to_string(),
        }
    }

    /// Create a parser from configuration, compiling any pattern overrides.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        let patterns = PatternSet::from_config(&config.patterns)?;
        Ok(Self::new()
            .with_patterns(patterns)
            .with_currency_symbol(config.extraction.currency_symbol.clone()))
    }

    /// Use a different pattern set.
    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    /// Set the glyph prefixed to the stored total due.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn detect_issuer(&self, text: &StatementText) -> Issuer {
        self.patterns.issuers.detect(text.as_str())
    }

    pub fn extract_last_4_digits(&self, text: &StatementText) -> FieldResult {
        self.patterns.last_4_digits.first_match(text.as_str())
    }

    pub fn extract_billing_cycle(&self, text: &StatementText) -> FieldResult {
        self.patterns.billing_cycle.first_match(text.as_str())
    }

    pub fn extract_due_date(&self, text: &StatementText) -> FieldResult {
        self.patterns.due_date.first_match(text.as_str())
    }

    /// Total due with separators removed and no currency glyph.
    ///
    /// [`StatementParser::parse`] stores the glyph-prefixed form.
    pub fn extract_total_due(&self, text: &StatementText) -> FieldResult {
        self.patterns.total_due.first_match(text.as_str())
    }

    /// Run all extractors in order and build the record.
    pub fn parse(&self, text: &StatementText) -> ExtractionRecord {
        let start = Instant::now();

        let card_issuer = self.detect_issuer(text);
        let last_4_digits = self.extract_last_4_digits(text);
        let billing_cycle = self.extract_billing_cycle(text);
        let due_date = self.extract_due_date(text);
        let total_due = self
            .extract_total_due(text)
            .map(|amount| format!("{}{}", self.currency_symbol, amount));

        let record = ExtractionRecord {
            card_issuer,
            last_4_digits,
            billing_cycle,
            due_date,
            total_due,
        };

        debug!(
            "Extracted fields from {} chars in {}us",
            text.len(),
            start.elapsed().as_micros()
        );
        record
    }

    /// Acquire the text of the document at `path`, then parse it.
    ///
    /// Text acquisition is the only step that can fail; on failure no
    /// record is produced.
    pub fn parse_document<E>(
        &self,
        extractor: &E,
        path: &Path,
    ) -> std::result::Result<ExtractionRecord, PdfError>
    where
        E: TextExtractor + ?Sized,
    {
        let text = extractor.extract(path)?;
        info!("Extracted {} characters from {}", text.len(), path.display());

        if text.as_str().trim().is_empty() {
            warn!("No text extracted from {}, every field will be missing", path.display());
        }

        Ok(self.parse(&text))
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::PatternConfig;
    use crate::models::statement::NOT_FOUND;
    use pretty_assertions::assert_eq;

    const HDFC_STATEMENT: &str = r#"
        HDFC Bank Credit Card Statement
        Card ending in 4321
        Billing Period: 06-Jan-2024 to 05-Feb-2024
        Total Amount Due: Rs. 12,345.67
        Minimum Amount Due: Rs. 620.00
        Due Date: 05-Feb-2024
    "#;

    #[test]
    fn test_parse_hdfc_statement() {
        let parser = StatementParser::new();
        let record = parser.parse(&HDFC_STATEMENT.into());

        assert_eq!(record.card_issuer, Issuer::Hdfc);
        assert_eq!(record.last_4_digits, FieldResult::Found("4321".to_string()));
        assert_eq!(
            record.billing_cycle,
            FieldResult::Found("06-Jan-2024 to 05-Feb-2024".to_string())
        );
        assert_eq!(record.due_date, FieldResult::Found("05-Feb-2024".to_string()));
        assert_eq!(record.total_due, FieldResult::Found("₹12345.67".to_string()));
    }

    #[test]
    fn test_parse_single_line_scenario() {
        let text: StatementText = "HDFC Bank ... Card ending in 4321 ... Total Amount Due: Rs. 12,345.67 ... Due Date: 05-Feb-2024".into();
        let record = StatementParser::new().parse(&text);

        assert_eq!(record.card_issuer, Issuer::Hdfc);
        assert_eq!(record.last_4_digits.as_str(), "4321");
        assert_eq!(record.total_due.as_str(), "₹12345.67");
        assert_eq!(record.due_date.as_str(), "05-Feb-2024");
        assert_eq!(record.billing_cycle.as_str(), NOT_FOUND);
    }

    #[test]
    fn test_total_due_return_value_has_no_glyph() {
        let parser = StatementParser::new();
        let text: StatementText = "Total Amount Due: Rs. 12,345.67".into();

        assert_eq!(
            parser.extract_total_due(&text),
            FieldResult::Found("12345.67".to_string())
        );
        assert_eq!(parser.parse(&text).total_due.as_str(), "₹12345.67");
    }

    #[test]
    fn test_empty_text_yields_all_sentinels() {
        let record = StatementParser::new().parse(&StatementText::from(""));

        assert_eq!(record.card_issuer, Issuer::Unknown);
        assert_eq!(record.last_4_digits, FieldResult::NotFound);
        assert_eq!(record.billing_cycle, FieldResult::NotFound);
        assert_eq!(record.due_date, FieldResult::NotFound);
        assert_eq!(record.total_due, FieldResult::NotFound);
    }

    #[test]
    fn test_unknown_issuer_still_extracts_fields() {
        let text: StatementText = r#"
            Kotak Mahindra Credit Card
            Card Number: XXXX XXXX XXXX 9876
            Statement Period: 01/Mar/24 - 31/Mar/24
            Payment Due Date: 20-Apr-24
            Total Due: 4,560.00
        "#
        .into();

        let record = StatementParser::new().parse(&text);
        assert_eq!(record.card_issuer, Issuer::Unknown);
        assert_eq!(record.last_4_digits.as_str(), "9876");
        assert_eq!(record.billing_cycle.as_str(), "01/Mar/24 to 31/Mar/24");
        assert_eq!(record.due_date.as_str(), "20-Apr-24");
        assert_eq!(record.total_due.as_str(), "₹4560.00");
    }

    #[test]
    fn test_from_config() {
        let mut config = ParserConfig::default();
        config.extraction.currency_symbol = "$".to_string();
        config.patterns = PatternConfig {
            total_due: Some(vec![r"New\s*Balance[\s:]*\$?([\d,]+\.\d{2})".to_string()]),
            ..Default::default()
        };

        let parser = StatementParser::from_config(&config).unwrap();
        let record = parser.parse(&"New Balance: $1,204.18".into());
        assert_eq!(record.total_due.as_str(), "$1204.18");
    }

    #[test]
    fn test_from_config_rejects_bad_pattern() {
        let mut config = ParserConfig::default();
        config.patterns.last_4_digits = Some(vec!["(\\d{4}".to_string()]);

        assert!(StatementParser::from_config(&config).is_err());
    }
}
