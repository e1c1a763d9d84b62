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

//! Range validation for every bounded settings field
//!
//! Settings files are edited by hand and survive across overlay versions,
//! so no numeric field is trusted. Each check takes the raw parsed integer
//! (wide enough to hold `-1` or `256`) and returns the narrowed value only
//! when it is inside the accepted range:
//!
//! | Field         | Accepted     |
//! |---------------|--------------|
//! | slot index    | `0..8`       |
//! | bind index    | `0..17`      |
//! | key code      | `1..=255`    |
//! | rotation step | `0..=90`     |
//! | modifier code | Shift, Ctrl, Alt, RightAlt |

use thiserror::Error;

use crate::core::types::{ModifierKey, BIND_COUNT, MAX_ROTATION_STEP, SLOT_COUNT};

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Quickbuild slot index outside `0..8`
    #[error("Slot index {0} out of range (0-{max})", max = SLOT_COUNT - 1)]
    SlotIndexOutOfRange(i64),

    /// Bind index outside `0..17`
    #[error("Bind index {0} out of range (0-{max})", max = BIND_COUNT - 1)]
    BindIndexOutOfRange(i64),

    /// Key code outside `1..=255`
    #[error("Key code {0} out of range (1-255)")]
    KeyCodeOutOfRange(i64),

    /// Rotation step outside `0..=90`
    #[error("Rotation step {0} out of range (0-{max})", max = MAX_ROTATION_STEP)]
    RotationOutOfRange(i64),

    /// Code is not one of the four modifier keys
    #[error("Key code {0} is not a supported modifier")]
    UnknownModifier(i64),
}

pub fn validate_slot_index(index: i64) -> Result<u8, ValidationError> {
    if (0..SLOT_COUNT as i64).contains(&index) {
        Ok(index as u8)
    } else {
        Err(ValidationError::SlotIndexOutOfRange(index))
    }
}

pub fn validate_bind_index(index: i64) -> Result<u8, ValidationError> {
    if (0..BIND_COUNT as i64).contains(&index) {
        Ok(index as u8)
    } else {
        Err(ValidationError::BindIndexOutOfRange(index))
    }
}

/// Key code 0 means "unassigned" and is never stored.
pub fn validate_key_code(code: i64) -> Result<u8, ValidationError> {
    if (1..=255).contains(&code) {
        Ok(code as u8)
    } else {
        Err(ValidationError::KeyCodeOutOfRange(code))
    }
}

pub fn validate_rotation_step(step: i64) -> Result<u8, ValidationError> {
    if (0..=MAX_ROTATION_STEP as i64).contains(&step) {
        Ok(step as u8)
    } else {
        Err(ValidationError::RotationOutOfRange(step))
    }
}

pub fn validate_modifier_code(code: i64) -> Result<ModifierKey, ValidationError> {
    u8::try_from(code)
        .ok()
        .and_then(ModifierKey::from_code)
        .ok_or(ValidationError::UnknownModifier(code))
}
