//! src/core/types.rs
//!
//! Core type definitions for overlay settings
//!
//! This module defines the records persisted by the overlay's text files:
//! - `RemovalEntry`: one removed instance, or a rule removing every instance of a mesh
//! - `QuickBuildSlot` / `RotationSetting`: the quickbuild bar and its rotation step
//! - `Keybind` / `ModifierKey` / `BindAction`: rebindable hotkeys
//! - `*Line` enums: the tagged result of parsing one line of each format
//!
//! Every record renders back to exactly one line of its file format through
//! `Display`, so a parsed file can be written out again unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::text::{extract_friendly_name, format_coordinates};
use crate::i18n::Localization;

/// Number of quickbuild slots on the overlay bar.
pub const SLOT_COUNT: usize = 8;

/// Number of rebindable actions.
pub const BIND_COUNT: usize = 17;

/// Largest accepted rotation step, in degrees.
pub const MAX_ROTATION_STEP: u8 = 90;

/// One line of the removal list.
///
/// A `Position` entry identifies a single placed instance by mesh name and
/// world position. A `TypeRule` removes every instance of the mesh.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum RemovalEntry {
    /// A single instance at an exact position
    Position { mesh: String, x: f32, y: f32, z: f32 },
    /// Every instance of a mesh
    TypeRule { mesh: String },
}

impl RemovalEntry {
    /// Mesh name this entry applies to.
    pub fn mesh(&self) -> &str {
        match self {
            RemovalEntry::Position { mesh, .. } | RemovalEntry::TypeRule { mesh } => mesh,
        }
    }

    pub fn is_type_rule(&self) -> bool {
        matches!(self, RemovalEntry::TypeRule { .. })
    }

    /// Short name shown in the overlay (text before the first `-`).
    pub fn friendly_name(&self) -> &str {
        extract_friendly_name(self.mesh())
    }

    /// `(x, y, z)` with one decimal, or `None` for type rules.
    pub fn formatted_coordinates(&self) -> Option<String> {
        match self {
            RemovalEntry::Position { x, y, z, .. } => Some(format_coordinates(*x, *y, *z)),
            RemovalEntry::TypeRule { .. } => None,
        }
    }

    /// Label for the removal list panel. Never persisted.
    pub fn display_label(&self, strings: &Localization) -> String {
        match self.formatted_coordinates() {
            Some(coords) => format!("{} {}", self.friendly_name(), coords),
            None => format!(
                "{} {}",
                self.friendly_name(),
                strings.get("removal.all_instances")
            ),
        }
    }
}

impl fmt::Display for RemovalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalEntry::Position { mesh, x, y, z } => write!(f, "{}|{}|{}|{}", mesh, x, y, z),
            RemovalEntry::TypeRule { mesh } => write!(f, "@{}", mesh),
        }
    }
}

/// A building assigned to one quickbuild slot
///
/// `texture_name` is empty for files written before icons were stored.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QuickBuildSlot {
    /// Slot index in `0..SLOT_COUNT`
    pub index: u8,
    pub display_name: String,
    pub texture_name: String,
}

impl QuickBuildSlot {
    pub fn new(index: u8, display_name: &str, texture_name: &str) -> Self {
        Self {
            index,
            display_name: display_name.to_string(),
            texture_name: texture_name.to_string(),
        }
    }

    pub fn has_texture(&self) -> bool {
        !self.texture_name.is_empty()
    }
}

impl fmt::Display for QuickBuildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Older readers only understand the two-field form
        if self.texture_name.is_empty() {
            write!(f, "{}|{}", self.index, self.display_name)
        } else {
            write!(f, "{}|{}|{}", self.index, self.display_name, self.texture_name)
        }
    }
}

/// Rotation step applied per keypress, in degrees (`0..=90`).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RotationSetting {
    pub step: u8,
}

impl Default for RotationSetting {
    fn default() -> Self {
        Self { step: 15 }
    }
}

impl fmt::Display for RotationSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation|{}", self.step)
    }
}

/// Modifier key held together with every overlay hotkey
///
/// Variants are declared in cycle order, so the derived `Ord` is the
/// order `next()` walks through.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ModifierKey {
    /// VK_SHIFT
    Shift,
    /// VK_CONTROL
    Ctrl,
    /// VK_MENU
    Alt,
    /// VK_RMENU
    RightAlt,
}

impl ModifierKey {
    pub const ALL: [ModifierKey; 4] = [
        ModifierKey::Shift,
        ModifierKey::Ctrl,
        ModifierKey::Alt,
        ModifierKey::RightAlt,
    ];

    /// Virtual key code of this modifier.
    pub fn code(self) -> u8 {
        match self {
            ModifierKey::Shift => 0x10,
            ModifierKey::Ctrl => 0x11,
            ModifierKey::Alt => 0x12,
            ModifierKey::RightAlt => 0xA5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Next modifier in the Shift → Ctrl → Alt → RightAlt → Shift cycle.
    pub fn next(self) -> Self {
        match self {
            ModifierKey::Shift => ModifierKey::Ctrl,
            ModifierKey::Ctrl => ModifierKey::Alt,
            ModifierKey::Alt => ModifierKey::RightAlt,
            ModifierKey::RightAlt => ModifierKey::Shift,
        }
    }

    /// Token written to settings files. Independent of localization.
    pub fn persisted_form(self) -> &'static str {
        match self {
            ModifierKey::Shift => "SHIFT",
            ModifierKey::Ctrl => "CTRL",
            ModifierKey::Alt => "ALT",
            ModifierKey::RightAlt => "RALT",
        }
    }

    /// Localization key of the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            ModifierKey::Shift => "key.shift",
            ModifierKey::Ctrl => "key.ctrl",
            ModifierKey::Alt => "key.alt",
            ModifierKey::RightAlt => "key.ralt",
        }
    }

    /// Label used when the localization table has no entry.
    pub fn canonical_label(self) -> &'static str {
        match self {
            ModifierKey::Shift => "SHIFT",
            ModifierKey::Ctrl => "CTRL",
            ModifierKey::Alt => "ALT",
            ModifierKey::RightAlt => "RIGHT ALT",
        }
    }
}

impl Default for ModifierKey {
    fn default() -> Self {
        ModifierKey::Shift
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.persisted_form())
    }
}

/// The 17 rebindable overlay actions
///
/// The declaration order is the bind index stored in the keybinding file,
/// so variants must never be reordered.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum BindAction {
    QuickBuild1,
    QuickBuild2,
    QuickBuild3,
    QuickBuild4,
    QuickBuild5,
    QuickBuild6,
    QuickBuild7,
    QuickBuild8,
    ToggleOverlay,
    RemoveTarget,
    RemoveAllOfType,
    ToggleRemovalMode,
    RotateClockwise,
    RotateCounterClockwise,
    UndoRemoval,
    ReloadConfig,
    AdvancedBuilderOpen,
}

impl BindAction {
    pub const ALL: [BindAction; BIND_COUNT] = [
        BindAction::QuickBuild1,
        BindAction::QuickBuild2,
        BindAction::QuickBuild3,
        BindAction::QuickBuild4,
        BindAction::QuickBuild5,
        BindAction::QuickBuild6,
        BindAction::QuickBuild7,
        BindAction::QuickBuild8,
        BindAction::ToggleOverlay,
        BindAction::RemoveTarget,
        BindAction::RemoveAllOfType,
        BindAction::ToggleRemovalMode,
        BindAction::RotateClockwise,
        BindAction::RotateCounterClockwise,
        BindAction::UndoRemoval,
        BindAction::ReloadConfig,
        BindAction::AdvancedBuilderOpen,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical key name in the `[Keybinds]` INI section.
    pub fn ini_key(self) -> &'static str {
        match self {
            BindAction::QuickBuild1 => "QuickBuild1",
            BindAction::QuickBuild2 => "QuickBuild2",
            BindAction::QuickBuild3 => "QuickBuild3",
            BindAction::QuickBuild4 => "QuickBuild4",
            BindAction::QuickBuild5 => "QuickBuild5",
            BindAction::QuickBuild6 => "QuickBuild6",
            BindAction::QuickBuild7 => "QuickBuild7",
            BindAction::QuickBuild8 => "QuickBuild8",
            BindAction::ToggleOverlay => "ToggleOverlay",
            BindAction::RemoveTarget => "RemoveTarget",
            BindAction::RemoveAllOfType => "RemoveAllOfType",
            BindAction::ToggleRemovalMode => "ToggleRemovalMode",
            BindAction::RotateClockwise => "RotateClockwise",
            BindAction::RotateCounterClockwise => "RotateCounterClockwise",
            BindAction::UndoRemoval => "UndoRemoval",
            BindAction::ReloadConfig => "ReloadConfig",
            BindAction::AdvancedBuilderOpen => "AdvancedBuilderOpen",
        }
    }

    /// Localization key of the action's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            BindAction::QuickBuild1 => "action.quickbuild_1",
            BindAction::QuickBuild2 => "action.quickbuild_2",
            BindAction::QuickBuild3 => "action.quickbuild_3",
            BindAction::QuickBuild4 => "action.quickbuild_4",
            BindAction::QuickBuild5 => "action.quickbuild_5",
            BindAction::QuickBuild6 => "action.quickbuild_6",
            BindAction::QuickBuild7 => "action.quickbuild_7",
            BindAction::QuickBuild8 => "action.quickbuild_8",
            BindAction::ToggleOverlay => "action.toggle_overlay",
            BindAction::RemoveTarget => "action.remove_target",
            BindAction::RemoveAllOfType => "action.remove_all_of_type",
            BindAction::ToggleRemovalMode => "action.toggle_removal_mode",
            BindAction::RotateClockwise => "action.rotate_cw",
            BindAction::RotateCounterClockwise => "action.rotate_ccw",
            BindAction::UndoRemoval => "action.undo_removal",
            BindAction::ReloadConfig => "action.reload_config",
            BindAction::AdvancedBuilderOpen => "action.advanced_builder_open",
        }
    }

    /// Key code assigned when no keybinding file exists.
    pub fn default_code(self) -> u8 {
        match self {
            // Digit row '1'..'8'
            BindAction::QuickBuild1 => 0x31,
            BindAction::QuickBuild2 => 0x32,
            BindAction::QuickBuild3 => 0x33,
            BindAction::QuickBuild4 => 0x34,
            BindAction::QuickBuild5 => 0x35,
            BindAction::QuickBuild6 => 0x36,
            BindAction::QuickBuild7 => 0x37,
            BindAction::QuickBuild8 => 0x38,
            BindAction::ToggleOverlay => 0x77,         // F8
            BindAction::RemoveTarget => 0x2E,          // Delete
            BindAction::RemoveAllOfType => 0x23,       // End
            BindAction::ToggleRemovalMode => 0x2D,     // Insert
            BindAction::RotateClockwise => 0x45,       // E
            BindAction::RotateCounterClockwise => 0x51, // Q
            BindAction::UndoRemoval => 0x5A,           // Z
            BindAction::ReloadConfig => 0x78,          // F9
            BindAction::AdvancedBuilderOpen => 0x79,   // F10
        }
    }
}

impl fmt::Display for BindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ini_key())
    }
}

/// Canonical INI key for a bind index, `None` outside `0..BIND_COUNT`.
pub fn bind_index_to_ini_key(index: usize) -> Option<&'static str> {
    BindAction::from_index(index).map(BindAction::ini_key)
}

/// Bind index for an INI key name, compared case-insensitively.
pub fn ini_key_to_bind_index(name: &str) -> Option<usize> {
    BindAction::ALL
        .iter()
        .find(|action| action.ini_key().eq_ignore_ascii_case(name))
        .map(|action| action.index())
}

/// One assigned hotkey: bind index `0..17` and key code `1..=255`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Keybind {
    pub bind_index: u8,
    pub code: u8,
}

impl Keybind {
    pub fn action(&self) -> Option<BindAction> {
        BindAction::from_index(self.bind_index as usize)
    }
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.bind_index, self.code)
    }
}

/// Result of parsing one removal-list line.
#[derive(Clone, Debug, PartialEq)]
pub enum RemovalLine {
    Skip,
    Entry(RemovalEntry),
}

/// Result of parsing one quickbuild line.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotLine {
    Skip,
    Slot(QuickBuildSlot),
    Rotation(RotationSetting),
}

/// Result of parsing one keybinding line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeybindLine {
    Skip,
    Bind(Keybind),
    Modifier(ModifierKey),
}

/// Result of parsing one generic INI line.
#[derive(Clone, Debug, PartialEq)]
pub enum IniLine {
    Skip,
    Section(String),
    KeyValue { key: String, value: String },
}
