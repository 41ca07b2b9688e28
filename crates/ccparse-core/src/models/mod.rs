//! Data models for statement parsing.

pub mod config;
pub mod statement;
