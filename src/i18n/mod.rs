// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Localized strings for the overlay
//!
//! `Localization` is the key → text table behind every user-facing string.
//! The host owns one instance and passes it by reference to whatever builds
//! display text (key names, action labels, removal rows).
//!
//! # Lifecycle
//!
//! 1. `init_defaults()` (or `with_defaults()`) installs the built-in English text
//! 2. `load_overrides(path)` merges a language file on top
//! 3. `clear()` empties the table
//!
//! A merge only ever adds or replaces keys. A language file that cannot be
//! read, does not parse, or contains no pairs leaves the table exactly as it
//! was, so the overlay keeps working with the defaults.
//!
//! # Example
//!
//! ```
//! use overlay_settings::i18n::Localization;
//!
//! let mut strings = Localization::with_defaults();
//! strings.merge_json(r#"{"key.shift": "MAYUS"}"#)?;
//!
//! assert_eq!(strings.get("key.shift"), "MAYUS");
//! assert_eq!(strings.get("key.ctrl"), "CTRL");
//! assert_eq!(strings.get("no.such.key"), "");
//! # Ok::<(), overlay_settings::i18n::LocalizationError>(())
//! ```

mod defaults;
pub mod json;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use self::defaults::DEFAULT_STRINGS;

/// Errors from loading a language file.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// Language file could not be read.
    #[error("Failed to read language file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text is not a flat object of string pairs.
    #[error("Invalid language file at byte {offset}: {message}")]
    Syntax { offset: usize, message: &'static str },

    /// The object parsed but held no pairs.
    #[error("Language file contains no entries")]
    NoEntries,
}

/// Key → localized text table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Localization {
    entries: HashMap<String, String>,
}

impl Localization {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the built-in strings.
    pub fn with_defaults() -> Self {
        let mut strings = Self::new();
        strings.init_defaults();
        strings
    }

    /// Installs the built-in strings, replacing any value stored under the same key.
    pub fn init_defaults(&mut self) {
        self.entries.reserve(DEFAULT_STRINGS.len());
        for (key, value) in DEFAULT_STRINGS {
            self.entries.insert((*key).to_string(), (*value).to_string());
        }
    }

    /// Merges a language file into the table
    ///
    /// Returns the number of pairs merged. On any error the table is unchanged.
    pub fn load_overrides(&mut self, path: &Path) -> Result<usize, LocalizationError> {
        let bytes = fs::read(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "language file unavailable");
            LocalizationError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let text = String::from_utf8_lossy(&bytes);
        let merged = self.merge_json(&text).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "language file rejected");
        })?;

        debug!(path = %path.display(), merged, "language file loaded");
        Ok(merged)
    }

    /// Same as [`load_overrides`](Self::load_overrides) for text already in memory.
    pub fn merge_json(&mut self, text: &str) -> Result<usize, LocalizationError> {
        let pairs = json::parse_flat_object(text)?;
        if pairs.is_empty() {
            return Err(LocalizationError::NoEntries);
        }

        let merged = pairs.len();
        self.entries.extend(pairs);
        Ok(merged)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored text for `key`, or `""` when there is none.
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets a single entry, returning the previous text.
    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        self.entries.insert(key.to_string(), value.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries sorted by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}

#[cfg(test)]
mod tests;
