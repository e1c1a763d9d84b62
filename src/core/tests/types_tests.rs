//! Type tests
//!
//! Tests for the persisted records and their line forms:
//! - `RemovalEntry` display and labels
//! - `QuickBuildSlot` / `RotationSetting` line forms
//! - `ModifierKey` codes, cycle and persisted tokens
//! - `BindAction` indices and INI names

use crate::core::types::*;
use crate::i18n::Localization;

#[test]
fn test_removal_entry_display() {
    let entry = RemovalEntry::Position {
        mesh: "PWM_Quarry_2x2".to_string(),
        x: 100.5,
        y: -200.0,
        z: 50.0,
    };
    assert_eq!(entry.to_string(), "PWM_Quarry_2x2|100.5|-200|50");

    let rule = RemovalEntry::TypeRule {
        mesh: "PWM_Quarry_2x2".to_string(),
    };
    assert_eq!(rule.to_string(), "@PWM_Quarry_2x2");
    assert!(rule.is_type_rule());
    assert!(!entry.is_type_rule());
}

#[test]
fn test_removal_entry_labels() {
    let strings = Localization::with_defaults();

    let entry = RemovalEntry::Position {
        mesh: "Wall-Wood".to_string(),
        x: 1.0,
        y: 2.3,
        z: -3.0,
    };
    assert_eq!(entry.friendly_name(), "Wall");
    assert_eq!(entry.formatted_coordinates().as_deref(), Some("(1.0, 2.3, -3.0)"));
    assert_eq!(entry.display_label(&strings), "Wall (1.0, 2.3, -3.0)");

    let rule = RemovalEntry::TypeRule {
        mesh: "Wall-Wood".to_string(),
    };
    assert_eq!(rule.formatted_coordinates(), None);
    assert_eq!(rule.display_label(&strings), "Wall (all)");
}

#[test]
fn test_quickbuild_slot_display() {
    assert_eq!(
        QuickBuildSlot::new(3, "Quarry", "T_Quarry_Icon").to_string(),
        "3|Quarry|T_Quarry_Icon"
    );
    // Slots without an icon use the short form
    assert_eq!(QuickBuildSlot::new(0, "Wall", "").to_string(), "0|Wall");
}

#[test]
fn test_rotation_setting() {
    assert_eq!(RotationSetting::default().step, 15);
    assert_eq!(RotationSetting { step: 45 }.to_string(), "rotation|45");
}

#[test]
fn test_modifier_codes() {
    assert_eq!(ModifierKey::Shift.code(), 0x10);
    assert_eq!(ModifierKey::Ctrl.code(), 0x11);
    assert_eq!(ModifierKey::Alt.code(), 0x12);
    assert_eq!(ModifierKey::RightAlt.code(), 0xA5);

    for modifier in ModifierKey::ALL {
        assert_eq!(ModifierKey::from_code(modifier.code()), Some(modifier));
    }
    assert_eq!(ModifierKey::from_code(0x41), None);
    assert_eq!(ModifierKey::default(), ModifierKey::Shift);
}

#[test]
fn test_modifier_cycle_visits_all() {
    let mut modifier = ModifierKey::Shift;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(modifier);
        modifier = modifier.next();
    }
    assert_eq!(modifier, ModifierKey::Shift);
    assert_eq!(seen, ModifierKey::ALL);
}

#[test]
fn test_modifier_persisted_form() {
    let forms: Vec<&str> = ModifierKey::ALL.iter().map(|m| m.persisted_form()).collect();
    assert_eq!(forms, vec!["SHIFT", "CTRL", "ALT", "RALT"]);
    assert_eq!(ModifierKey::RightAlt.to_string(), "RALT");
}

#[test]
fn test_bind_action_indices() {
    for (i, action) in BindAction::ALL.iter().enumerate() {
        assert_eq!(action.index(), i);
        assert_eq!(BindAction::from_index(i), Some(*action));
    }
    assert_eq!(BindAction::from_index(BIND_COUNT), None);
    assert_eq!(BindAction::ToggleOverlay.index(), 8);
    assert_eq!(BindAction::AdvancedBuilderOpen.index(), 16);
}

#[test]
fn test_bind_index_ini_key_bijection() {
    for index in 0..BIND_COUNT {
        let key = bind_index_to_ini_key(index).unwrap();
        assert_eq!(ini_key_to_bind_index(key), Some(index));
        assert_eq!(ini_key_to_bind_index(&key.to_lowercase()), Some(index));
        assert_eq!(ini_key_to_bind_index(&key.to_uppercase()), Some(index));
    }
    assert_eq!(bind_index_to_ini_key(BIND_COUNT), None);
    assert_eq!(ini_key_to_bind_index("OpenInventory"), None);
    assert_eq!(ini_key_to_bind_index(""), None);
}

#[test]
fn test_ini_key_names() {
    assert_eq!(bind_index_to_ini_key(0), Some("QuickBuild1"));
    assert_eq!(bind_index_to_ini_key(7), Some("QuickBuild8"));
    assert_eq!(bind_index_to_ini_key(8), Some("ToggleOverlay"));
    assert_eq!(bind_index_to_ini_key(13), Some("RotateCounterClockwise"));
    assert_eq!(ini_key_to_bind_index("removetarget"), Some(9));
}

#[test]
fn test_default_codes_are_unique() {
    let mut codes: Vec<u8> = BindAction::ALL.iter().map(|a| a.default_code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), BIND_COUNT);
    assert!(!codes.contains(&0));
}

#[test]
fn test_keybind_display() {
    let keybind = Keybind {
        bind_index: 9,
        code: 46,
    };
    assert_eq!(keybind.to_string(), "9|46");
    assert_eq!(keybind.action(), Some(BindAction::RemoveTarget));
}
