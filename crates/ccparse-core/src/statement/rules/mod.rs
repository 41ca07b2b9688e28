//! Rule-based field extractors for credit-card statements.
//!
//! Every field is an ordered list of candidate patterns. Candidates are
//! tried against the whole text in list order and the first one that
//! matches decides the value, even if a later candidate would match
//! earlier in the text.

pub mod amounts;
pub mod card;
pub mod dates;
pub mod issuer;
pub mod patterns;

pub use amounts::{format_total_due, strip_separators};
pub use card::format_last_4_digits;
pub use dates::{format_billing_cycle, format_due_date};
pub use issuer::{IssuerDetector, IssuerPattern};
pub use patterns::PatternSet;

use regex::{Captures, Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::error::PatternError;
use crate::models::statement::FieldResult;

/// Turns the captures of a matching candidate into the field value.
///
/// Returning `None` treats the candidate as a miss and moves on to the next.
pub type CaptureFormatter = fn(&Captures<'_>) -> Option<String>;

/// Compile a pattern the way every extractor matches: case-insensitively.
pub fn compile_pattern(field: &str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError::Invalid {
            field: field.to_string(),
            source,
        })
}

/// One candidate pattern for a field.
#[derive(Debug, Clone)]
pub struct CandidatePattern {
    regex: Regex,
    format: CaptureFormatter,
}

/// Ordered candidate patterns for one field.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    field: &'static str,
    candidates: Vec<CandidatePattern>,
}

impl FieldPatterns {
    /// Compile `patterns` in order, all sharing one formatter.
    ///
    /// Each pattern must have at least `groups` capture groups.
    pub fn compile<S: AsRef<str>>(
        field: &'static str,
        patterns: &[S],
        groups: usize,
        format: CaptureFormatter,
    ) -> Result<Self, PatternError> {
        let mut candidates = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = compile_pattern(field, pattern)?;

            // captures_len counts the implicit whole-match group
            if regex.captures_len() - 1 < groups {
                return Err(PatternError::MissingGroups {
                    field: field.to_string(),
                    pattern: pattern.to_string(),
                    expected: groups,
                });
            }

            candidates.push(CandidatePattern { regex, format });
        }

        Ok(Self { field, candidates })
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Value from the first candidate that matches, or [`FieldResult::NotFound`].
    pub fn first_match(&self, text: &str) -> FieldResult {
        for (index, candidate) in self.candidates.iter().enumerate() {
            let Some(caps) = candidate.regex.captures(text) else {
                trace!("{}: pattern {} did not match", self.field, index);
                continue;
            };

            if let Some(value) = (candidate.format)(&caps) {
                debug!("{}: pattern {} matched {:?}", self.field, index, value);
                return FieldResult::Found(value);
            }
        }

        debug!("{}: no pattern matched", self.field);
        FieldResult::NotFound
    }
}

/// Capture group `index` as an owned string, if it took part in the match.
pub(crate) fn group(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index).map(|m| m.as_str().to_string())
}
