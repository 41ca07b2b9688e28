//! Total amount due extraction.

use regex::Captures;

/// Remove thousands separators. Applying it twice changes nothing.
///
/// Handles both western (`12,345.67`) and Indian (`12,34,567.89`) grouping.
pub fn strip_separators(amount: &str) -> String {
    amount.replace(',', "")
}

/// The captured amount with separators removed.
pub fn format_total_due(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| strip_separators(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::super::patterns::PatternSet;
    use super::*;
    use crate::models::statement::FieldResult;
    use pretty_assertions::assert_eq;

    fn total_due(text: &str) -> FieldResult {
        PatternSet::builtin().total_due.first_match(text)
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("12,34,567.89"), "1234567.89");
        assert_eq!(strip_separators("12,345.67"), "12345.67");

        let once = strip_separators("1,000");
        assert_eq!(strip_separators(&once), once);
        assert_eq!(strip_separators("1234567.89"), "1234567.89");
    }

    #[test]
    fn test_total_due_currency_markers() {
        assert_eq!(
            total_due("Total Amount Due: Rs. 12,345.67"),
            FieldResult::Found("12345.67".to_string())
        );
        assert_eq!(
            total_due("Total Due INR 1,00,000"),
            FieldResult::Found("100000".to_string())
        );
        assert_eq!(
            total_due("Amount Payable: ₹ 2,500.00"),
            FieldResult::Found("2500.00".to_string())
        );
        assert_eq!(
            total_due("TOTAL BALANCE DUE 999.5"),
            FieldResult::Found("999.5".to_string())
        );
    }

    #[test]
    fn test_total_beats_minimum_listed_first_in_text() {
        let text = "Minimum Amount Due: 500.00\nTotal Amount Due: 12,000.00";
        assert_eq!(total_due(text), FieldResult::Found("12000.00".to_string()));
    }

    #[test]
    fn test_minimum_amount_fallback() {
        assert_eq!(
            total_due("Minimum Amount Due: Rs 750"),
            FieldResult::Found("750".to_string())
        );
    }

    #[test]
    fn test_outstanding_balance_fallback() {
        assert_eq!(
            total_due("Outstanding Balance: 3,210.40"),
            FieldResult::Found("3210.40".to_string())
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(total_due("Credit Limit: 1,00,000"), FieldResult::NotFound);
    }
}
