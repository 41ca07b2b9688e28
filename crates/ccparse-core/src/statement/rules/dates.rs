//! Billing cycle and due date extraction.
//!
//! Dates are kept exactly as printed (`05-Feb-2024`, `01/Jan/24`,
//! `05/03/2024`). Nothing is parsed into a calendar type, so a statement's
//! own spelling always survives into the output.

use regex::Captures;

use super::group;

/// `"{start} to {end}"` from the first two capture groups.
pub fn format_billing_cycle(caps: &Captures<'_>) -> Option<String> {
    let start = caps.get(1)?.as_str();
    let end = caps.get(2)?.as_str();
    Some(format!("{} to {}", start, end))
}

pub fn format_due_date(caps: &Captures<'_>) -> Option<String> {
    group(caps, 1)
}
