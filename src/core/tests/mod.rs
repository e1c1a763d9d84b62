//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Line parsers for the four settings formats
//! - Key code registry
//! - Input validation
//! - Tooltip and mesh name helpers
//! - Type tests (ModifierKey, BindAction, records)
//! - Settings documents

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod types_tests;
