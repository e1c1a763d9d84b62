// Copyright 2025 bakri (tidynest@proton.me)
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

//! Overlay Settings
//!
//! The pure-logic layer behind a game build overlay's persistent settings:
//! removal lists, quickbuild slots, rebindable hotkeys and localized text.
//!
//! # Features
//!
//! - **Line Parsers:** Fail-soft parsers for four hand-edited file formats
//! - **Key Registry:** Key code ↔ display name mapping with a modifier cycle
//! - **Localization:** Built-in strings merged with a JSON language file
//! - **Text Helpers:** Tooltip wrapping and mesh name normalisation
//! - **Memory Gate:** Page-protection check before reading scanned addresses
//! - **Atomic Saves:** Settings written via temp file + rename, with backups
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, parsers, key registry, validation, documents)
//! - **`i18n`:** Localization table and the language-file scanner
//! - **`memory`:** Readable-memory gate over a page probe
//! - **`config`:** File operations (reading, atomic writes, backups)
//!
//! # Examples
//!
//! ## Parsing a keybinding file
//!
//! ```
//! use overlay_settings::core::{BindAction, KeybindSet, ModifierKey};
//!
//! let keybinds = KeybindSet::from_text("mod|17\n9|46\n# comment\n99|1\n");
//! assert_eq!(keybinds.modifier(), ModifierKey::Ctrl);
//! assert_eq!(keybinds.code(BindAction::RemoveTarget), 46);
//! assert_eq!(keybinds.skipped(), 1);
//! ```
//!
//! ## Naming keys
//!
//! ```
//! use overlay_settings::core::keycodes::{code_to_name, name_to_code};
//! use overlay_settings::i18n::Localization;
//!
//! let strings = Localization::with_defaults();
//! assert_eq!(code_to_name(0x74, &strings), "F5");
//! assert_eq!(name_to_code("num7", &strings), Some(0x67));
//! ```

pub mod config;
pub mod core;
pub mod i18n;
pub mod memory;

// Re-export commonly used types for convenience
pub use self::core::{
    BindAction, Keybind, KeybindSet, ModifierKey, QuickBuildLayout, RemovalEntry, RemovalList,
};
pub use self::i18n::Localization;
