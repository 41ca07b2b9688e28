//! Card issuer detection.

use regex::Regex;
use tracing::debug;

use super::compile_pattern;
use crate::error::PatternError;
use crate::models::statement::Issuer;

/// Detection pattern for one issuer. Only existence of a match matters.
#[derive(Debug, Clone)]
pub struct IssuerPattern {
    pub issuer: Issuer,
    pub regex: Regex,
}

impl IssuerPattern {
    pub fn new(issuer: Issuer, pattern: &str) -> Result<Self, PatternError> {
        let regex = compile_pattern(issuer.as_str(), pattern)?;
        Ok(Self { issuer, regex })
    }
}

/// Ordered issuer patterns.
///
/// When a statement mentions several issuers (co-branded cards, partner
/// offers), the issuer listed first wins.
#[derive(Debug, Clone)]
pub struct IssuerDetector {
    patterns: Vec<IssuerPattern>,
}

impl IssuerDetector {
    pub fn new(patterns: Vec<IssuerPattern>) -> Self {
        Self { patterns }
    }

    /// Compile `(issuer, pattern)` pairs in order.
    pub fn compile<S: AsRef<str>>(pairs: &[(Issuer, S)]) -> Result<Self, PatternError> {
        let patterns = pairs
            .iter()
            .map(|(issuer, pattern)| IssuerPattern::new(*issuer, pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(patterns))
    }

    pub fn patterns(&self) -> &[IssuerPattern] {
        &self.patterns
    }

    /// First issuer whose pattern occurs in `text`, else [`Issuer::Unknown`].
    pub fn detect(&self, text: &str) -> Issuer {
        let issuer = self
            .patterns
            .iter()
            .find(|p| p.regex.is_match(text))
            .map(|p| p.issuer)
            .unwrap_or(Issuer::Unknown);

        debug!("Detected issuer: {}", issuer);
        issuer
    }
}

#[cfg(test)]
mod tests {
    use super::super::patterns::PatternSet;
    use super::*;
    use pretty_assertions::assert_eq;

    fn detect(text: &str) -> Issuer {
        PatternSet::builtin().issuers.detect(text)
    }

    #[test]
    fn test_each_issuer() {
        assert_eq!(detect("HDFC Bank Credit Card Statement"), Issuer::Hdfc);
        assert_eq!(detect("ICICIBank Ltd"), Issuer::Icici);
        assert_eq!(detect("SBI Card PRIME"), Issuer::Sbi);
        assert_eq!(detect("State Bank of India"), Issuer::Sbi);
        assert_eq!(detect("Axis Bank Ace"), Issuer::Axis);
        assert_eq!(detect("American Express Platinum"), Issuer::Amex);
        assert_eq!(detect("Your AMEX statement"), Issuer::Amex);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect("hdfc bank"), detect("HDFC BANK"));
        assert_eq!(detect("hdfc bank"), Issuer::Hdfc);
    }

    #[test]
    fn test_first_listed_issuer_wins() {
        // Both patterns match; HDFC is listed before AMEX regardless of
        // where each appears in the text.
        let text = "American Express rewards partner: HDFC Bank";
        assert_eq!(detect(text), Issuer::Hdfc);
    }

    #[test]
    fn test_order_is_data() {
        let detector = IssuerDetector::compile(&[
            (Issuer::Amex, r"American\s*Express"),
            (Issuer::Hdfc, r"HDFC\s*Bank"),
        ])
        .unwrap();

        assert_eq!(
            detector.detect("American Express rewards partner: HDFC Bank"),
            Issuer::Amex
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect("Kotak Mahindra Bank"), Issuer::Unknown);
        assert_eq!(detect(""), Issuer::Unknown);
    }
}
