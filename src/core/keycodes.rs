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

//! src/core/keycodes.rs
//!
//! Key code ↔ display name registry
//!
//! Maps Windows virtual key codes to the names shown in the overlay and
//! back. Classes, in lookup priority:
//!
//! | Class              | Codes          | Name            | Localizable |
//! |--------------------|----------------|-----------------|-------------|
//! | Function keys      | `0x70..=0x87`  | `F1`..`F24`     | no          |
//! | Keypad digits      | `0x60..=0x69`  | `Num0`..`Num9`  | no          |
//! | Keypad operators   | `0x6A..=0x6F`  | `Num *` ...     | yes         |
//! | Punctuation        | OEM codes      | literal glyph   | no          |
//! | Special keys       | Space, Tab ... | `SPACE` ...     | yes         |
//! | Alphanumerics      | `0-9`, `A-Z`   | the character   | no          |
//! | Anything else      |                | `0xHH`          | no          |
//!
//! Both directions read the same `NAMED_KEYS` table, so a name produced by
//! `code_to_name` always resolves back to its code.

use crate::core::types::ModifierKey;
use crate::i18n::Localization;

const FUNCTION_KEY_FIRST: u8 = 0x70;
const FUNCTION_KEY_COUNT: u8 = 24;
const NUMPAD_FIRST: u8 = 0x60;

/// How a fixed key's name is produced.
#[derive(Clone, Copy, Debug)]
enum Label {
    /// Glyph shown as-is in every language
    Literal(&'static str),
    /// Looked up in the localization table, `canonical` when missing
    Localized {
        key: &'static str,
        canonical: &'static str,
    },
}

#[derive(Clone, Copy, Debug)]
struct NamedKey {
    code: u8,
    label: Label,
}

const fn literal(code: u8, glyph: &'static str) -> NamedKey {
    NamedKey {
        code,
        label: Label::Literal(glyph),
    }
}

const fn localized(code: u8, key: &'static str, canonical: &'static str) -> NamedKey {
    NamedKey {
        code,
        label: Label::Localized { key, canonical },
    }
}

const NAMED_KEYS: &[NamedKey] = &[
    // Keypad operators
    localized(0x6A, "key.num_multiply", "Num *"),
    localized(0x6B, "key.num_add", "Num +"),
    localized(0x6C, "key.num_separator", "Num Sep"),
    localized(0x6D, "key.num_subtract", "Num -"),
    localized(0x6E, "key.num_decimal", "Num ."),
    localized(0x6F, "key.num_divide", "Num /"),
    // Punctuation (US layout glyphs)
    literal(0xBA, ";"),
    literal(0xBB, "="),
    literal(0xBC, ","),
    literal(0xBD, "-"),
    literal(0xBE, "."),
    literal(0xBF, "/"),
    literal(0xC0, "`"),
    literal(0xDB, "["),
    literal(0xDC, "\\"),
    literal(0xDD, "]"),
    literal(0xDE, "'"),
    literal(0xE2, "<"),
    // Special keys
    localized(0x20, "key.space", "Space"),
    localized(0x09, "key.tab", "Tab"),
    localized(0x0D, "key.enter", "Enter"),
    localized(0x2D, "key.insert", "Insert"),
    localized(0x2E, "key.delete", "Delete"),
    localized(0x24, "key.home", "Home"),
    localized(0x23, "key.end", "End"),
    localized(0x21, "key.page_up", "PageUp"),
    localized(0x22, "key.page_down", "PageDown"),
];

/// Display name for a key code. Never fails: unknown codes render as `0xHH`.
pub fn code_to_name(code: u8, strings: &Localization) -> String {
    named(code, strings).unwrap_or_else(|| format!("0x{:02X}", code))
}

/// True when `code_to_name` produces a real name rather than the hex fallback.
pub fn is_named(code: u8) -> bool {
    function_key_number(code).is_some()
        || numpad_digit(code).is_some()
        || find_named(code).is_some()
        || is_alphanumeric_code(code)
}

/// Key code for a display name
///
/// Accepts everything `code_to_name` produces, the canonical English name of
/// localizable keys, and `0xHH` literals. Letter-based names are compared
/// case-insensitively. Returns `None` for unknown text and for malformed
/// ranges such as `F0`, `F25` or `Num10`.
pub fn name_to_code(name: &str, strings: &Localization) -> Option<u8> {
    if name.is_empty() {
        return None;
    }

    parse_function_key(name)
        .or_else(|| parse_numpad_digit(name))
        .or_else(|| {
            NAMED_KEYS
                .iter()
                .find(|entry| label_matches(entry.label, name, strings))
                .map(|entry| entry.code)
        })
        .or_else(|| parse_alphanumeric(name))
        .or_else(|| parse_hex_literal(name))
}

/// Display label for a modifier code, Shift's label for unknown codes.
pub fn modifier_name(code: u8, strings: &Localization) -> String {
    let modifier = ModifierKey::from_code(code).unwrap_or_default();
    modifier_label(modifier, strings).to_string()
}

/// Strict inverse of `modifier_name` and `modifier_to_persisted_form`.
pub fn name_to_modifier_code(name: &str, strings: &Localization) -> Option<u8> {
    ModifierKey::ALL
        .into_iter()
        .find(|&modifier| {
            modifier.persisted_form().eq_ignore_ascii_case(name)
                || same_name(modifier_label(modifier, strings), name)
        })
        .map(ModifierKey::code)
}

/// Uppercase ASCII token stored in settings files (`SHIFT` for unknown codes).
pub fn modifier_to_persisted_form(code: u8) -> &'static str {
    ModifierKey::from_code(code)
        .unwrap_or_default()
        .persisted_form()
}

/// Next code in the Shift → Ctrl → Alt → RightAlt cycle; unknown codes reset to Shift.
pub fn next_modifier(code: u8) -> u8 {
    match ModifierKey::from_code(code) {
        Some(modifier) => modifier.next().code(),
        None => ModifierKey::Shift.code(),
    }
}

/// Overlay hint text such as `CTRL + F5`.
pub fn format_binding(code: u8, modifier: Option<ModifierKey>, strings: &Localization) -> String {
    let key = code_to_name(code, strings);
    match modifier {
        Some(modifier) => format!("{} + {}", modifier_label(modifier, strings), key),
        None => key,
    }
}

/// Every code in `1..=255` that has a real name, with that name.
pub fn key_table(strings: &Localization) -> Vec<(u8, String)> {
    (1..=u8::MAX)
        .filter_map(|code| named(code, strings).map(|name| (code, name)))
        .collect()
}

fn modifier_label(modifier: ModifierKey, strings: &Localization) -> &str {
    non_empty_or(strings.get(modifier.label_key()), modifier.canonical_label())
}

fn named(code: u8, strings: &Localization) -> Option<String> {
    if let Some(n) = function_key_number(code) {
        return Some(format!("F{}", n));
    }
    if let Some(d) = numpad_digit(code) {
        return Some(format!("Num{}", d));
    }
    if let Some(entry) = find_named(code) {
        return Some(label_text(entry.label, strings).to_string());
    }
    if is_alphanumeric_code(code) {
        return Some(char::from(code).to_string());
    }
    None
}

fn find_named(code: u8) -> Option<&'static NamedKey> {
    NAMED_KEYS.iter().find(|entry| entry.code == code)
}

fn label_text(label: Label, strings: &Localization) -> &str {
    match label {
        Label::Literal(glyph) => glyph,
        Label::Localized { key, canonical } => non_empty_or(strings.get(key), canonical),
    }
}

fn label_matches(label: Label, name: &str, strings: &Localization) -> bool {
    match label {
        Label::Literal(glyph) => glyph == name,
        Label::Localized { canonical, .. } => {
            same_name(canonical, name) || same_name(label_text(label, strings), name)
        }
    }
}

/// Case-insensitive comparison that also folds non-ASCII letters.
fn same_name(a: &str, b: &str) -> bool {
    !a.is_empty() && (a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase())
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

fn function_key_number(code: u8) -> Option<u8> {
    code.checked_sub(FUNCTION_KEY_FIRST)
        .filter(|offset| *offset < FUNCTION_KEY_COUNT)
        .map(|offset| offset + 1)
}

fn numpad_digit(code: u8) -> Option<u8> {
    code.checked_sub(NUMPAD_FIRST).filter(|digit| *digit <= 9)
}

fn is_alphanumeric_code(code: u8) -> bool {
    code.is_ascii_digit() || code.is_ascii_uppercase()
}

/// `F1`..`F24`, no sign and no leading zero.
fn parse_function_key(name: &str) -> Option<u8> {
    let digits = name.strip_prefix(['F', 'f'])?;
    if digits.is_empty()
        || digits.len() > 2
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let number: u8 = digits.parse().ok()?;
    (1..=FUNCTION_KEY_COUNT)
        .contains(&number)
        .then(|| FUNCTION_KEY_FIRST + number - 1)
}

/// `Num0`..`Num9`, case-insensitive prefix.
fn parse_numpad_digit(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    if bytes.len() != 4 || !name.is_char_boundary(3) || !name[..3].eq_ignore_ascii_case("num") {
        return None;
    }
    let digit = bytes[3];
    digit
        .is_ascii_digit()
        .then(|| NUMPAD_FIRST + (digit - b'0'))
}

fn parse_alphanumeric(name: &str) -> Option<u8> {
    match name.as_bytes() {
        [b] if b.is_ascii_alphanumeric() => Some(b.to_ascii_uppercase()),
        _ => None,
    }
}

/// `0xHH` with exactly two hex digits.
fn parse_hex_literal(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    if bytes.len() != 4 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return None;
    }
    if !bytes[2..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u8::from_str_radix(&name[2..], 16).ok()
}
