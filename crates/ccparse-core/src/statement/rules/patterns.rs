//! Builtin patterns for credit-card statement extraction.
//!
//! Lists are in priority order: labelled patterns first, generic fallbacks
//! last. Reordering a list changes results on real statements.

use lazy_static::lazy_static;

use super::amounts::format_total_due;
use super::card::format_last_4_digits;
use super::dates::{format_billing_cycle, format_due_date};
use super::issuer::IssuerDetector;
use super::FieldPatterns;
use crate::error::PatternError;
use crate::models::config::PatternConfig;
use crate::models::statement::Issuer;

pub const ISSUER_PATTERNS: [(Issuer, &str); 5] = [
    (Issuer::Hdfc, r"HDFC\s*Bank"),
    (Issuer::Icici, r"ICICI\s*Bank"),
    (Issuer::Sbi, r"SBI\s*Card|State\s*Bank"),
    (Issuer::Axis, r"Axis\s*Bank"),
    (Issuer::Amex, r"American\s*Express|AMEX"),
];

pub const LAST_4_DIGITS_PATTERNS: [&str; 4] = [
    r"Card\s*(?:Number|No\.?)[\s:]*(?:XXXX|xxxx|\*{4}|\*{12})[\s-]*(\d{4})",
    r"(?:XXXX|xxxx|\*{4}|\*{12})[\s-]*(\d{4})",
    r"Card\s*ending\s*(?:in|with)[\s:]*(\d{4})",
    r"(?:Primary|Credit)\s*Card[\s:]*(?:XXXX|xxxx|\*{4})[\s-]*(\d{4})",
];

pub const BILLING_CYCLE_PATTERNS: [&str; 3] = [
    r"(?:Billing\s*(?:Cycle|Period|Date)[\s:]*)?(\d{1,2}[-/]\w{3}[-/]\d{2,4})\s*(?:to|–|-|through)\s*(\d{1,2}[-/]\w{3}[-/]\d{2,4})",
    r"Statement\s*(?:Period|Date)[\s:]*(\d{1,2}[-/]\w{3}[-/]\d{2,4})\s*(?:to|–|-)\s*(\d{1,2}[-/]\w{3}[-/]\d{2,4})",
    r"From[\s:]*(\d{1,2}[-/]\w{3}[-/]\d{2,4})\s*To[\s:]*(\d{1,2}[-/]\w{3}[-/]\d{2,4})",
];

pub const DUE_DATE_PATTERNS: [&str; 3] = [
    r"(?:Payment\s*)?Due\s*(?:Date|By|On)[\s:]*(\d{1,2}[-/]\w{3,}[-/]\d{2,4})",
    r"Pay\s*(?:By|Before)[\s:]*(\d{1,2}[-/]\w{3,}[-/]\d{2,4})",
    r"Due\s*Date[\s:]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
];

pub const TOTAL_DUE_PATTERNS: [&str; 3] = [
    r"(?:Total\s*(?:Amount\s*)?Due|Amount\s*Payable|Total\s*Balance\s*Due)[\s:]*(?:Rs\.?|INR|₹)?\s*([\d,]+\.?\d*)",
    r"(?:Minimum\s*)?Amount\s*Due[\s:]*(?:Rs\.?|INR|₹)?\s*([\d,]+\.?\d*)",
    r"(?:Outstanding|Payable)\s*(?:Amount|Balance)[\s:]*(?:Rs\.?|INR|₹)?\s*([\d,]+\.?\d*)",
];

lazy_static! {
    static ref BUILTIN: PatternSet = PatternSet::compile(
        &ISSUER_PATTERNS,
        &LAST_4_DIGITS_PATTERNS,
        &BILLING_CYCLE_PATTERNS,
        &DUE_DATE_PATTERNS,
        &TOTAL_DUE_PATTERNS,
    )
    .unwrap();
}

/// Every pattern the statement parser uses.
///
/// Immutable once built. Cloning is cheap; compiled regexes are shared.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub issuers: IssuerDetector,
    pub last_4_digits: FieldPatterns,
    pub billing_cycle: FieldPatterns,
    pub due_date: FieldPatterns,
    pub total_due: FieldPatterns,
}

impl PatternSet {
    /// The builtin pattern set.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Compile a pattern set from raw pattern lists.
    pub fn compile<I, S>(
        issuers: &[(Issuer, I)],
        last_4_digits: &[S],
        billing_cycle: &[S],
        due_date: &[S],
        total_due: &[S],
    ) -> Result<Self, PatternError>
    where
        I: AsRef<str>,
        S: AsRef<str>,
    {
        Ok(Self {
            issuers: IssuerDetector::compile(issuers)?,
            last_4_digits: FieldPatterns::compile(
                "last_4_digits",
                last_4_digits,
                1,
                format_last_4_digits,
            )?,
            billing_cycle: FieldPatterns::compile(
                "billing_cycle",
                billing_cycle,
                2,
                format_billing_cycle,
            )?,
            due_date: FieldPatterns::compile("due_date", due_date, 1, format_due_date)?,
            total_due: FieldPatterns::compile("total_due", total_due, 1, format_total_due)?,
        })
    }

    /// Builtin patterns with the configured lists swapped in.
    pub fn from_config(config: &PatternConfig) -> Result<Self, PatternError> {
        let mut set = Self::builtin();

        if let Some(issuers) = &config.issuers {
            let pairs: Vec<(Issuer, &str)> = issuers
                .iter()
                .map(|p| (p.issuer, p.pattern.as_str()))
                .collect();
            set.issuers = IssuerDetector::compile(&pairs)?;
        }
        if let Some(patterns) = &config.last_4_digits {
            set.last_4_digits =
                FieldPatterns::compile("last_4_digits", patterns, 1, format_last_4_digits)?;
        }
        if let Some(patterns) = &config.billing_cycle {
            set.billing_cycle =
                FieldPatterns::compile("billing_cycle", patterns, 2, format_billing_cycle)?;
        }
        if let Some(patterns) = &config.due_date {
            set.due_date = FieldPatterns::compile("due_date", patterns, 1, format_due_date)?;
        }
        if let Some(patterns) = &config.total_due {
            set.total_due = FieldPatterns::compile("total_due", patterns, 1, format_total_due)?;
        }

        Ok(set)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin()
    }
}
