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

//! src/core/mod.rs
//!
//! Core settings logic
//!
//! This module contains the pure data structures and algorithms behind the
//! overlay settings, including:
//! - Type definitions for removal entries, quickbuild slots and keybinds
//! - Line parsers for the four settings file formats
//! - Key code ↔ name registry
//! - Range validation of bounded fields
//! - Text helpers for mesh names and tooltips
//! - Settings documents and keybinding conflict detection
//!
//! Nothing here touches the file system, so every function can be tested
//! with plain strings.

pub mod conflict;
pub mod keycodes;
pub mod parser;
pub mod settings;
pub mod text;
pub mod types;
pub mod validator;

pub use conflict::{Conflict, ConflictDetector};
pub use settings::{KeybindSet, QuickBuildLayout, RemovalList};
pub use types::*;
pub use validator::ValidationError;

#[cfg(test)]
mod tests;
