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

//! src/core/parser.rs
//!
//! Line parsers for the overlay settings files
//!
//! Four independent grammars, one function each:
//! - Removal list: `mesh|x|y|z` or `@mesh`
//! - Quickbuild slots: `index|name[|texture]` or `rotation|step`
//! - Keybindings: `bindIndex|code` or `mod|code`
//! - Generic INI: `[Section]` or `key = value`
//!
//! # Failure model
//! These files are edited by hand and change shape between versions, so a
//! parser never returns an error. Anything that does not match its grammar,
//! including out-of-range numbers, becomes `Skip` and the caller moves on to
//! the next line. Blank lines and full-line `#`/`;` comments are `Skip` too.
//!
//! # Architecture
//! Field splitting uses nom combinators; range checks are delegated to
//! `validator.rs` so the same limits apply to values set from code.

use nom::{
    bytes::complete::{take_till, take_until},
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, terminated},
    IResult, Parser,
};
use tracing::trace;

use crate::core::{
    types::{
        IniLine, Keybind, KeybindLine, QuickBuildSlot, RemovalEntry, RemovalLine,
        RotationSetting, SlotLine,
    },
    validator::{
        validate_bind_index, validate_key_code, validate_modifier_code, validate_rotation_step,
        validate_slot_index,
    },
};

/// True for lines every grammar ignores: empty after trimming, or a
/// full-line `#` / `;` comment.
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
}

/// Parse one removal-list line
///
/// Format: `mesh|x|y|z` for a single instance, `@mesh` for every instance.
/// An empty mesh name after `@` is accepted.
///
/// # Example
/// ```
/// use overlay_settings::core::parser::parse_removal_line;
/// use overlay_settings::core::types::{RemovalEntry, RemovalLine};
///
/// assert_eq!(
///     parse_removal_line("@PWM_Quarry_2x2"),
///     RemovalLine::Entry(RemovalEntry::TypeRule { mesh: "PWM_Quarry_2x2".to_string() })
/// );
/// ```
pub fn parse_removal_line(line: &str) -> RemovalLine {
    if is_blank_or_comment(line) {
        return RemovalLine::Skip;
    }
    let line = line.trim();

    if let Some(mesh) = line.strip_prefix('@') {
        return RemovalLine::Entry(RemovalEntry::TypeRule {
            mesh: mesh.trim().to_string(),
        });
    }

    let Ok((_, fields)) = pipe_fields(line) else {
        return RemovalLine::Skip;
    };
    let [mesh, x, y, z] = fields.as_slice() else {
        trace!(line, fields = fields.len(), "removal line needs exactly 4 fields");
        return RemovalLine::Skip;
    };

    match (parse_coordinate(x), parse_coordinate(y), parse_coordinate(z)) {
        (Some(x), Some(y), Some(z)) => RemovalLine::Entry(RemovalEntry::Position {
            mesh: mesh.trim().to_string(),
            x,
            y,
            z,
        }),
        _ => RemovalLine::Skip,
    }
}

/// Parse one quickbuild line
///
/// Formats:
/// - `rotation|15` → rotation step (0-90)
/// - `3|Quarry` → slot without icon (files from older versions)
/// - `3|Quarry|T_Quarry_Icon` → slot with icon
pub fn parse_slot_line(line: &str) -> SlotLine {
    if is_blank_or_comment(line) {
        return SlotLine::Skip;
    }

    let Ok((rest, key)) = split_first_pipe(line.trim()) else {
        return SlotLine::Skip;
    };
    let key = key.trim();

    if key == "rotation" {
        return match parse_integer(rest).map(validate_rotation_step) {
            Some(Ok(step)) => SlotLine::Rotation(RotationSetting { step }),
            _ => SlotLine::Skip,
        };
    }

    let Some(Ok(index)) = parse_integer(key).map(validate_slot_index) else {
        return SlotLine::Skip;
    };

    // Texture name is optional so single-field files keep loading
    let (display_name, texture_name) = match split_first_pipe(rest) {
        Ok((texture, name)) => (name, texture),
        Err(_) => (rest, ""),
    };

    SlotLine::Slot(QuickBuildSlot::new(
        index,
        display_name.trim(),
        texture_name.trim(),
    ))
}

/// Parse one keybinding line
///
/// Formats:
/// - `mod|17` → active modifier (must be Shift, Ctrl, Alt or RightAlt)
/// - `4|112` → bind index 4 assigned key code 112
pub fn parse_keybind_line(line: &str) -> KeybindLine {
    if is_blank_or_comment(line) {
        return KeybindLine::Skip;
    }

    let Ok((rest, key)) = split_first_pipe(line.trim()) else {
        return KeybindLine::Skip;
    };
    let key = key.trim();

    if key == "mod" {
        return match parse_integer(rest).map(validate_modifier_code) {
            Some(Ok(modifier)) => KeybindLine::Modifier(modifier),
            _ => KeybindLine::Skip,
        };
    }

    let bind_index = parse_integer(key).map(validate_bind_index);
    let code = parse_integer(rest).map(validate_key_code);

    match (bind_index, code) {
        (Some(Ok(bind_index)), Some(Ok(code))) => KeybindLine::Bind(Keybind { bind_index, code }),
        _ => KeybindLine::Skip,
    }
}

/// Parse one generic INI line
///
/// Inline comments: the first `;` that directly follows a space ends the
/// value. A `;` anywhere else is data, so `Target = ;` keeps `;` as its
/// value.
///
/// # Example
/// ```
/// use overlay_settings::core::parser::parse_ini_line;
/// use overlay_settings::core::types::IniLine;
///
/// assert_eq!(
///     parse_ini_line("Target = ;"),
///     IniLine::KeyValue { key: "Target".to_string(), value: ";".to_string() }
/// );
/// ```
pub fn parse_ini_line(line: &str) -> IniLine {
    if is_blank_or_comment(line) {
        return IniLine::Skip;
    }
    let line = line.trim();

    if let Ok((_, name)) = section_header(line) {
        let name = name.trim();
        return if name.is_empty() {
            IniLine::Skip
        } else {
            IniLine::Section(name.to_string())
        };
    }

    let Some((key, value)) = line.split_once('=') else {
        return IniLine::Skip;
    };
    let key = key.trim();
    if key.is_empty() {
        return IniLine::Skip;
    }

    IniLine::KeyValue {
        key: key.to_string(),
        value: strip_inline_comment(value.trim()).to_string(),
    }
}

/// Split on every `|`, keeping empty fields.
fn pipe_fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('|'), take_till(|c| c == '|')).parse(input)
}

/// Take everything before the first `|`; the remainder follows it.
fn split_first_pipe(input: &str) -> IResult<&str, &str> {
    terminated(take_until("|"), char('|')).parse(input)
}

/// `[name]` spanning the whole (trimmed) line.
fn section_header(input: &str) -> IResult<&str, &str> {
    all_consuming(delimited(char('['), take_until("]"), char(']'))).parse(input)
}

fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    // Index 0 has no preceding space, so a leading ';' is data
    for i in 1..bytes.len() {
        if bytes[i] == b';' && bytes[i - 1] == b' ' {
            return value[..i].trim_end();
        }
    }
    value
}

fn parse_integer(field: &str) -> Option<i64> {
    field.trim().parse::<i64>().ok()
}

fn parse_coordinate(field: &str) -> Option<f32> {
    field
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}
