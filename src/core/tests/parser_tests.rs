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

//! Parser module tests
//!
//! Tests for the settings line parsers:
//! - Removal entries (position and type rule)
//! - Quickbuild slots and the rotation line
//! - Keybinds and the modifier line
//! - INI sections, key/value pairs and inline comments
//! - Skip behaviour for blanks, comments and out-of-range values

use crate::core::{
    parser::*,
    types::{
        IniLine, Keybind, KeybindLine, ModifierKey, QuickBuildSlot, RemovalEntry, RemovalLine,
        RotationSetting, SlotLine,
    },
};

fn position(mesh: &str, x: f32, y: f32, z: f32) -> RemovalLine {
    RemovalLine::Entry(RemovalEntry::Position {
        mesh: mesh.to_string(),
        x,
        y,
        z,
    })
}

fn key_value(key: &str, value: &str) -> IniLine {
    IniLine::KeyValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_blank_and_comment_lines() {
    for line in ["", "   ", "\t", "# removed", "  ; note", "#1|2"] {
        assert!(is_blank_or_comment(line), "{:?}", line);
        assert_eq!(parse_removal_line(line), RemovalLine::Skip);
        assert_eq!(parse_slot_line(line), SlotLine::Skip);
        assert_eq!(parse_keybind_line(line), KeybindLine::Skip);
        assert_eq!(parse_ini_line(line), IniLine::Skip);
    }
    assert!(!is_blank_or_comment("1|2"));
}

#[test]
fn test_parse_removal_position() {
    assert_eq!(
        parse_removal_line("PWM_Quarry_2x2|100.5|-200|50"),
        position("PWM_Quarry_2x2", 100.5, -200.0, 50.0)
    );
}

#[test]
fn test_parse_removal_trims_whitespace() {
    assert_eq!(
        parse_removal_line("  Wall_A | 1 | 2.25 | -3  "),
        position("Wall_A", 1.0, 2.25, -3.0)
    );
}

#[test]
fn test_parse_removal_type_rule() {
    assert_eq!(
        parse_removal_line("@PWM_Quarry_2x2"),
        RemovalLine::Entry(RemovalEntry::TypeRule {
            mesh: "PWM_Quarry_2x2".to_string()
        })
    );
    // An empty mesh after '@' is accepted
    assert_eq!(
        parse_removal_line("@"),
        RemovalLine::Entry(RemovalEntry::TypeRule {
            mesh: String::new()
        })
    );
}

#[test]
fn test_parse_removal_wrong_field_count() {
    assert_eq!(parse_removal_line("Mesh|1|2"), RemovalLine::Skip);
    assert_eq!(parse_removal_line("Mesh|1|2|3|4"), RemovalLine::Skip);
    assert_eq!(parse_removal_line("Mesh"), RemovalLine::Skip);
}

#[test]
fn test_parse_removal_bad_coordinates() {
    assert_eq!(parse_removal_line("Mesh|abc|2|3"), RemovalLine::Skip);
    assert_eq!(parse_removal_line("Mesh|1||3"), RemovalLine::Skip);
    assert_eq!(parse_removal_line("Mesh|inf|2|3"), RemovalLine::Skip);
    assert_eq!(parse_removal_line("Mesh|1|NaN|3"), RemovalLine::Skip);
}

#[test]
fn test_parse_slot_with_texture() {
    assert_eq!(
        parse_slot_line("3|Quarry|T_Quarry_Icon"),
        SlotLine::Slot(QuickBuildSlot::new(3, "Quarry", "T_Quarry_Icon"))
    );
}

#[test]
fn test_parse_slot_without_texture() {
    let SlotLine::Slot(slot) = parse_slot_line("0|Wooden Wall") else {
        panic!("expected a slot");
    };
    assert_eq!(slot.index, 0);
    assert_eq!(slot.display_name, "Wooden Wall");
    assert!(!slot.has_texture());
}

#[test]
fn test_parse_slot_out_of_range() {
    assert_eq!(parse_slot_line("-1|Quarry"), SlotLine::Skip);
    assert_eq!(parse_slot_line("8|Quarry"), SlotLine::Skip);
    assert_eq!(parse_slot_line("x|Quarry"), SlotLine::Skip);
    assert_eq!(parse_slot_line("Quarry"), SlotLine::Skip);
}

#[test]
fn test_parse_rotation() {
    assert_eq!(
        parse_slot_line("rotation|45"),
        SlotLine::Rotation(RotationSetting { step: 45 })
    );
    assert_eq!(
        parse_slot_line("rotation|0"),
        SlotLine::Rotation(RotationSetting { step: 0 })
    );
    assert_eq!(
        parse_slot_line("rotation|90"),
        SlotLine::Rotation(RotationSetting { step: 90 })
    );
    assert_eq!(parse_slot_line("rotation|91"), SlotLine::Skip);
    assert_eq!(parse_slot_line("rotation|-5"), SlotLine::Skip);
    assert_eq!(parse_slot_line("rotation|fast"), SlotLine::Skip);
}

#[test]
fn test_parse_keybind() {
    assert_eq!(
        parse_keybind_line("4|112"),
        KeybindLine::Bind(Keybind {
            bind_index: 4,
            code: 112
        })
    );
    assert_eq!(
        parse_keybind_line(" 16 | 255 "),
        KeybindLine::Bind(Keybind {
            bind_index: 16,
            code: 255
        })
    );
}

#[test]
fn test_parse_keybind_out_of_range() {
    assert_eq!(parse_keybind_line("17|65"), KeybindLine::Skip);
    assert_eq!(parse_keybind_line("-1|65"), KeybindLine::Skip);
    assert_eq!(parse_keybind_line("3|0"), KeybindLine::Skip);
    assert_eq!(parse_keybind_line("3|256"), KeybindLine::Skip);
    assert_eq!(parse_keybind_line("3|F5"), KeybindLine::Skip);
    assert_eq!(parse_keybind_line("3"), KeybindLine::Skip);
}

#[test]
fn test_parse_modifier_line() {
    assert_eq!(
        parse_keybind_line("mod|17"),
        KeybindLine::Modifier(ModifierKey::Ctrl)
    );
    assert_eq!(
        parse_keybind_line("mod|165"),
        KeybindLine::Modifier(ModifierKey::RightAlt)
    );
    // Only the four modifier keys are accepted
    assert_eq!(parse_keybind_line("mod|65"), KeybindLine::Skip);
    assert_eq!(parse_keybind_line("mod|"), KeybindLine::Skip);
}

#[test]
fn test_parse_ini_section() {
    assert_eq!(
        parse_ini_line("[Keybinds]"),
        IniLine::Section("Keybinds".to_string())
    );
    assert_eq!(
        parse_ini_line("  [ General ]  "),
        IniLine::Section("General".to_string())
    );
    assert_eq!(parse_ini_line("[]"), IniLine::Skip);
    assert_eq!(parse_ini_line("[a]b]"), IniLine::Skip);
}

#[test]
fn test_parse_ini_key_value() {
    assert_eq!(parse_ini_line("ToggleOverlay = F8"), key_value("ToggleOverlay", "F8"));
    assert_eq!(parse_ini_line("Name="), key_value("Name", ""));
    assert_eq!(parse_ini_line("Path = a=b"), key_value("Path", "a=b"));
    assert_eq!(parse_ini_line("= value"), IniLine::Skip);
    assert_eq!(parse_ini_line("no equals sign"), IniLine::Skip);
}

#[test]
fn test_parse_ini_inline_comment() {
    assert_eq!(
        parse_ini_line("ToggleOverlay = F8 ; open the overlay"),
        key_value("ToggleOverlay", "F8")
    );
    // ';' not preceded by a space is part of the value
    assert_eq!(parse_ini_line("Target = ;"), key_value("Target", ";"));
    assert_eq!(parse_ini_line("Keys = a;b"), key_value("Keys", "a;b"));
    assert_eq!(parse_ini_line("Keys = ; ;x"), key_value("Keys", ";"));
}

#[test]
fn test_reference_lines() {
    assert_eq!(
        parse_removal_line("PWM_Quarry_2x2|1.5|2.5|3.5"),
        position("PWM_Quarry_2x2", 1.5, 2.5, 3.5)
    );
    assert_eq!(parse_slot_line("rotation|999"), SlotLine::Skip);
}

#[test]
fn test_serialized_lines_reparse() {
    let entry = RemovalEntry::Position {
        mesh: "Mesh".to_string(),
        x: 0.1,
        y: -1e-3,
        z: 123456.78,
    };
    assert_eq!(
        parse_removal_line(&entry.to_string()),
        RemovalLine::Entry(entry)
    );

    let slot = QuickBuildSlot::new(6, "Silo", "T_Silo");
    assert_eq!(parse_slot_line(&slot.to_string()), SlotLine::Slot(slot));

    let rotation = RotationSetting { step: 90 };
    assert_eq!(
        parse_slot_line(&rotation.to_string()),
        SlotLine::Rotation(rotation)
    );

    let keybind = Keybind {
        bind_index: 16,
        code: 0xA0,
    };
    assert_eq!(
        parse_keybind_line(&keybind.to_string()),
        KeybindLine::Bind(keybind)
    );

    for modifier in ModifierKey::ALL {
        let line = format!("mod|{}", modifier.code());
        assert_eq!(parse_keybind_line(&line), KeybindLine::Modifier(modifier));
    }
}
