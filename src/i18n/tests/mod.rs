//! Localization tests
//!
//! - Language file scanner (escapes, BOM, trailing comma, rejections)
//! - Merging over the defaults
//! - Failed loads leave the table untouched
