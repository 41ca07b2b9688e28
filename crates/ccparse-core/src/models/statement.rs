//! Statement data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved value stored for a field none of whose patterns matched.
///
/// Every field of an [`ExtractionRecord`] is always present; a miss is
/// written as this string rather than `null` so consumers see a stable shape.
pub const NOT_FOUND: &str = "Not Found";

/// Full text of one statement document.
///
/// Page texts are joined with `\n` in document order. The text is created
/// once and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementText(String);

impl StatementText {
    /// Join page texts in document order.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, page) in pages.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(page.as_ref());
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for StatementText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for StatementText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for StatementText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of a single field extractor.
///
/// Serialized as the found string, or as [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldResult {
    Found(String),
    NotFound,
}

impl FieldResult {
    pub fn is_found(&self) -> bool {
        matches!(self, FieldResult::Found(_))
    }

    /// The found value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldResult::Found(v) => Some(v),
            FieldResult::NotFound => None,
        }
    }

    /// Transform a found value, keeping the sentinel as is.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            FieldResult::Found(v) => FieldResult::Found(f(v)),
            FieldResult::NotFound => FieldResult::NotFound,
        }
    }

    /// The stored representation: the value or the sentinel.
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or(NOT_FOUND)
    }
}

impl From<Option<String>> for FieldResult {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldResult::NotFound, FieldResult::Found)
    }
}

impl From<String> for FieldResult {
    fn from(value: String) -> Self {
        if value == NOT_FOUND {
            FieldResult::NotFound
        } else {
            FieldResult::Found(value)
        }
    }
}

impl From<FieldResult> for String {
    fn from(result: FieldResult) -> Self {
        match result {
            FieldResult::Found(v) => v,
            FieldResult::NotFound => NOT_FOUND.to_string(),
        }
    }
}

impl fmt::Display for FieldResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card issuer.
///
/// Closed set. A statement matching none of the known issuers is
/// [`Issuer::Unknown`], never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Issuer {
    Hdfc,
    Icici,
    Sbi,
    Axis,
    Amex,
    Unknown,
}

impl Issuer {
    /// Known issuers in detection order.
    pub const KNOWN: [Issuer; 5] = [
        Issuer::Hdfc,
        Issuer::Icici,
        Issuer::Sbi,
        Issuer::Axis,
        Issuer::Amex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC",
            Issuer::Icici => "ICICI",
            Issuer::Sbi => "SBI",
            Issuer::Axis => "AXIS",
            Issuer::Amex => "AMEX",
            Issuer::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields extracted from one statement.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Detected card issuer.
    pub card_issuer: Issuer,

    /// Last four digits of the card number.
    pub last_4_digits: FieldResult,

    /// Statement period, `"{start} to {end}"`.
    pub billing_cycle: FieldResult,

    /// Payment due date, verbatim.
    pub due_date: FieldResult,

    /// Total amount due with currency prefix, e.g. `"₹12345.67"`.
    pub total_due: FieldResult,
}

/// One entry of the batch summary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// File name of the source document (no directory).
    pub filename: String,

    /// Record extracted from it.
    pub data: ExtractionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_statement_text_joins_pages_with_newline() {
        let text = StatementText::from_pages(["page one", "page two", "page three"]);
        assert_eq!(text.as_str(), "page one\npage two\npage three");

        let empty = StatementText::from_pages(Vec::<String>::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_field_result_serializes_sentinel() {
        assert_eq!(
            serde_json::to_string(&FieldResult::NotFound).unwrap(),
            "\"Not Found\""
        );
        assert_eq!(
            serde_json::to_string(&FieldResult::Found("4321".into())).unwrap(),
            "\"4321\""
        );

        let back: FieldResult = serde_json::from_str("\"Not Found\"").unwrap();
        assert_eq!(back, FieldResult::NotFound);
    }

    #[test]
    fn test_field_result_map_keeps_sentinel() {
        let found = FieldResult::Found("100".into()).map(|v| format!("₹{}", v));
        assert_eq!(found.value(), Some("₹100"));

        let missing = FieldResult::NotFound.map(|v| format!("₹{}", v));
        assert_eq!(missing, FieldResult::NotFound);
        assert_eq!(missing.as_str(), NOT_FOUND);
    }

    #[test]
    fn test_record_key_order() {
        let record = ExtractionRecord {
            card_issuer: Issuer::Unknown,
            last_4_digits: FieldResult::NotFound,
            billing_cycle: FieldResult::NotFound,
            due_date: FieldResult::NotFound,
            total_due: FieldResult::NotFound,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"card_issuer":"UNKNOWN","last_4_digits":"Not Found","billing_cycle":"Not Found","due_date":"Not Found","total_due":"Not Found"}"#
        );
    }

    #[test]
    fn test_issuer_identifiers() {
        let names: Vec<&str> = Issuer::KNOWN.iter().map(Issuer::as_str).collect();
        assert_eq!(names, vec!["HDFC", "ICICI", "SBI", "AXIS", "AMEX"]);
        assert_eq!(serde_json::to_string(&Issuer::Amex).unwrap(), "\"AMEX\"");
    }
}
