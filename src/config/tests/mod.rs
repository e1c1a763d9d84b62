//! Config module tests
//!
//! Contains test suites for settings file management:
//! - ConfigManager loading, saving and backups
//! - Transaction commit and rollback

#[cfg(test)]
mod transaction_tests;
