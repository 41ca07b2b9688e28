//! Statement field extraction module.

mod parser;
pub mod rules;

pub use parser::StatementParser;
pub use rules::PatternSet;
