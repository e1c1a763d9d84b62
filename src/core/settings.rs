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

//! src/core/settings.rs
//!
//! In-memory settings documents
//!
//! Each document is built by feeding a whole file through its line parser
//! and serializes back to the same format:
//! - `RemovalList`: ordered removal entries and the "is this removed?" query
//! - `QuickBuildLayout`: the 8 quickbuild slots plus the rotation step
//! - `KeybindSet`: the 17 hotkeys plus the active modifier
//!
//! Malformed lines are counted in `skipped()` and otherwise ignored, so a
//! single bad line never costs the user the rest of the file.

use tracing::debug;

use crate::core::{
    conflict::{Conflict, ConflictDetector},
    keycodes::{name_to_code, name_to_modifier_code},
    parser::{
        is_blank_or_comment, parse_ini_line, parse_keybind_line, parse_removal_line,
        parse_slot_line,
    },
    text::component_name_to_mesh_id,
    types::{
        ini_key_to_bind_index, BindAction, IniLine, Keybind, KeybindLine, ModifierKey,
        QuickBuildSlot, RemovalEntry, RemovalLine, RotationSetting, SlotLine, BIND_COUNT,
        SLOT_COUNT,
    },
    validator::{validate_key_code, validate_rotation_step, validate_slot_index, ValidationError},
};
use crate::i18n::Localization;

/// Max distance per axis for a position entry to match a placed instance.
pub const POSITION_TOLERANCE: f32 = 0.5;

/// INI section holding name-based keybinding overrides.
pub const KEYBINDS_SECTION: &str = "Keybinds";

/// INI key in [`KEYBINDS_SECTION`] naming the active modifier.
pub const MODIFIER_INI_KEY: &str = "Modifier";

/// Counts a skipped line, ignoring blanks and comments.
fn count_skip(line: &str, skipped: &mut usize) {
    if !is_blank_or_comment(line) {
        debug!(line, "skipping malformed settings line");
        *skipped += 1;
    }
}

/// Removed objects, in the order the user removed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemovalList {
    entries: Vec<RemovalEntry>,
    skipped: usize,
}

impl RemovalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from the contents of a removal file.
    pub fn from_text(content: &str) -> Self {
        let mut list = Self::new();
        for line in content.lines() {
            match parse_removal_line(line) {
                RemovalLine::Entry(entry) => list.entries.push(entry),
                RemovalLine::Skip => count_skip(line, &mut list.skipped),
            }
        }
        list
    }

    /// Adds an entry unless an identical one is already present.
    pub fn add(&mut self, entry: RemovalEntry) -> bool {
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes the most recent entry (undo).
    pub fn undo(&mut self) -> Option<RemovalEntry> {
        self.entries.pop()
    }

    pub fn entries(&self) -> &[RemovalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Whether a placed instance is hidden by this list
    ///
    /// `component_name` may carry the game's `_<digits>` instance suffix;
    /// entries are compared against the normalized mesh id.
    pub fn is_removed(&self, component_name: &str, x: f32, y: f32, z: f32) -> bool {
        let mesh_id = component_name_to_mesh_id(component_name);
        self.entries.iter().any(|entry| match entry {
            RemovalEntry::TypeRule { mesh } => mesh == mesh_id,
            RemovalEntry::Position {
                mesh,
                x: ex,
                y: ey,
                z: ez,
            } => {
                mesh == mesh_id
                    && (ex - x).abs() <= POSITION_TOLERANCE
                    && (ey - y).abs() <= POSITION_TOLERANCE
                    && (ez - z).abs() <= POSITION_TOLERANCE
            }
        })
    }

    /// Serializes to the removal file format.
    pub fn to_text(&self) -> String {
        let mut out = String::from("# Removed objects: mesh|x|y|z or @mesh for every instance\n");
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

/// The quickbuild bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuickBuildLayout {
    slots: [Option<QuickBuildSlot>; SLOT_COUNT],
    rotation: RotationSetting,
    skipped: usize,
}

impl QuickBuildLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the layout from a quickbuild file. Later lines for the same
    /// slot replace earlier ones.
    pub fn from_text(content: &str) -> Self {
        let mut layout = Self::new();
        for line in content.lines() {
            match parse_slot_line(line) {
                SlotLine::Slot(slot) => {
                    let index = slot.index as usize;
                    layout.slots[index] = Some(slot);
                }
                SlotLine::Rotation(rotation) => layout.rotation = rotation,
                SlotLine::Skip => count_skip(line, &mut layout.skipped),
            }
        }
        layout
    }

    pub fn slot(&self, index: usize) -> Option<&QuickBuildSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> impl Iterator<Item = &QuickBuildSlot> {
        self.slots.iter().flatten()
    }

    /// Assigns a building to a slot, replacing what was there.
    pub fn assign(
        &mut self,
        index: i64,
        display_name: &str,
        texture_name: &str,
    ) -> Result<(), ValidationError> {
        let index = validate_slot_index(index)?;
        self.slots[index as usize] = Some(QuickBuildSlot::new(index, display_name, texture_name));
        Ok(())
    }

    pub fn clear_slot(&mut self, index: usize) -> Option<QuickBuildSlot> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn rotation(&self) -> RotationSetting {
        self.rotation
    }

    pub fn set_rotation_step(&mut self, step: i64) -> Result<(), ValidationError> {
        self.rotation = RotationSetting {
            step: validate_rotation_step(step)?,
        };
        Ok(())
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Serializes to the quickbuild file format.
    pub fn to_text(&self) -> String {
        let mut out = String::from("# Quick build slots: index|name|texture\n");
        out.push_str(&self.rotation.to_string());
        out.push('\n');
        for slot in self.slots() {
            out.push_str(&slot.to_string());
            out.push('\n');
        }
        out
    }
}

/// Key codes for all 17 actions plus the active modifier.
#[derive(Clone, Debug, PartialEq)]
pub struct KeybindSet {
    codes: [u8; BIND_COUNT],
    modifier: ModifierKey,
    skipped: usize,
}

impl Default for KeybindSet {
    fn default() -> Self {
        Self {
            codes: BindAction::ALL.map(BindAction::default_code),
            modifier: ModifierKey::default(),
            skipped: 0,
        }
    }
}

impl KeybindSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a keybinding file on top of the defaults.
    pub fn from_text(content: &str) -> Self {
        let mut set = Self::new();
        for line in content.lines() {
            if !set.apply_line(line) {
                count_skip(line, &mut set.skipped);
            }
        }
        set
    }

    /// Applies one keybinding-file line. Returns false for skipped lines.
    pub fn apply_line(&mut self, line: &str) -> bool {
        match parse_keybind_line(line) {
            KeybindLine::Bind(Keybind { bind_index, code }) => {
                self.codes[bind_index as usize] = code;
                true
            }
            KeybindLine::Modifier(modifier) => {
                self.modifier = modifier;
                true
            }
            KeybindLine::Skip => false,
        }
    }

    /// Applies the `[Keybinds]` section of an INI file
    ///
    /// Keys are action names (`QuickBuild1`, `ToggleOverlay`, ...) and values
    /// are key names as shown in the overlay (`F8`, `Num 5`, `DEL`). The
    /// `Modifier` key selects the active modifier. Returns the number of
    /// entries applied.
    pub fn apply_ini(&mut self, content: &str, strings: &Localization) -> usize {
        let mut in_section = false;
        let mut applied = 0;

        for line in content.lines() {
            match parse_ini_line(line) {
                IniLine::Section(name) => {
                    in_section = name.eq_ignore_ascii_case(KEYBINDS_SECTION);
                }
                IniLine::KeyValue { key, value } if in_section => {
                    if self.apply_ini_entry(&key, &value, strings) {
                        applied += 1;
                    } else {
                        debug!(key = %key, value = %value, "ignoring unknown keybind entry");
                    }
                }
                _ => {}
            }
        }

        applied
    }

    fn apply_ini_entry(&mut self, key: &str, value: &str, strings: &Localization) -> bool {
        if key.eq_ignore_ascii_case(MODIFIER_INI_KEY) {
            return match name_to_modifier_code(value, strings).and_then(ModifierKey::from_code) {
                Some(modifier) => {
                    self.modifier = modifier;
                    true
                }
                None => false,
            };
        }

        let Some(index) = ini_key_to_bind_index(key) else {
            return false;
        };
        match name_to_code(value, strings).map(|code| validate_key_code(code.into())) {
            Some(Ok(code)) => {
                self.codes[index] = code;
                true
            }
            _ => false,
        }
    }

    pub fn code(&self, action: BindAction) -> u8 {
        self.codes[action.index()]
    }

    pub fn set_code(&mut self, action: BindAction, code: i64) -> Result<(), ValidationError> {
        self.codes[action.index()] = validate_key_code(code)?;
        Ok(())
    }

    pub fn modifier(&self) -> ModifierKey {
        self.modifier
    }

    pub fn set_modifier(&mut self, modifier: ModifierKey) {
        self.modifier = modifier;
    }

    /// Advances the modifier one step through its cycle and returns it.
    pub fn cycle_modifier(&mut self) -> ModifierKey {
        self.modifier = self.modifier.next();
        self.modifier
    }

    /// First action (by bind index) assigned `code`.
    pub fn action_for_code(&self, code: u8) -> Option<BindAction> {
        BindAction::ALL
            .into_iter()
            .find(|action| self.codes[action.index()] == code)
    }

    /// All keybinds in bind index order.
    pub fn keybinds(&self) -> impl Iterator<Item = Keybind> + '_ {
        self.codes
            .iter()
            .enumerate()
            .map(|(index, &code)| Keybind {
                bind_index: index as u8,
                code,
            })
    }

    /// Actions sharing a key code.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut detector = ConflictDetector::new();
        for action in BindAction::ALL {
            detector.add_binding(action, self.code(action));
        }
        detector.find_conflicts()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Serializes to the keybinding file format.
    pub fn to_text(&self) -> String {
        let mut out = String::from("# Keybindings: bindIndex|keyCode, mod|modifierCode\n");
        out.push_str(&format!("mod|{}\n", self.modifier.code()));
        for keybind in self.keybinds() {
            out.push_str(&keybind.to_string());
            out.push('\n');
        }
        out
    }
}
