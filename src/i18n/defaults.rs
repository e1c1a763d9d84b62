//! Built-in English strings
//!
//! Loaded by `Localization::init_defaults`. Override files only need to
//! contain the keys they translate; everything else falls back to these.

pub(crate) const DEFAULT_STRINGS: &[(&str, &str)] = &[
    // Special keys
    ("key.space", "SPACE"),
    ("key.tab", "TAB"),
    ("key.enter", "ENTER"),
    ("key.insert", "INS"),
    ("key.delete", "DEL"),
    ("key.home", "HOME"),
    ("key.end", "END"),
    ("key.page_up", "PGUP"),
    ("key.page_down", "PGDN"),
    // Keypad operators
    ("key.num_multiply", "Num *"),
    ("key.num_add", "Num +"),
    ("key.num_separator", "Num Sep"),
    ("key.num_subtract", "Num -"),
    ("key.num_decimal", "Num ."),
    ("key.num_divide", "Num /"),
    // Modifiers
    ("key.shift", "SHIFT"),
    ("key.ctrl", "CTRL"),
    ("key.alt", "ALT"),
    ("key.ralt", "RIGHT ALT"),
    ("key.none", "Unbound"),
    ("key.press_any", "Press any key..."),
    ("key.waiting", "Waiting for input"),
    // Actions
    ("action.quickbuild_1", "Quick Build 1"),
    ("action.quickbuild_2", "Quick Build 2"),
    ("action.quickbuild_3", "Quick Build 3"),
    ("action.quickbuild_4", "Quick Build 4"),
    ("action.quickbuild_5", "Quick Build 5"),
    ("action.quickbuild_6", "Quick Build 6"),
    ("action.quickbuild_7", "Quick Build 7"),
    ("action.quickbuild_8", "Quick Build 8"),
    ("action.toggle_overlay", "Toggle Overlay"),
    ("action.remove_target", "Remove Target"),
    ("action.remove_all_of_type", "Remove All Of Type"),
    ("action.toggle_removal_mode", "Toggle Removal Mode"),
    ("action.rotate_cw", "Rotate Clockwise"),
    ("action.rotate_ccw", "Rotate Counter-Clockwise"),
    ("action.undo_removal", "Undo Removal"),
    ("action.reload_config", "Reload Config"),
    ("action.advanced_builder_open", "Open Advanced Builder"),
    // Overlay chrome
    ("overlay.title", "Build Overlay"),
    ("overlay.keybinds", "Keybindings"),
    ("overlay.quickbuild", "Quick Build"),
    ("overlay.removals", "Removals"),
    ("overlay.settings", "Settings"),
    ("overlay.language", "Language"),
    ("overlay.close", "Close"),
    ("overlay.save", "Save"),
    ("overlay.cancel", "Cancel"),
    ("overlay.reset", "Reset to Defaults"),
    ("overlay.apply", "Apply"),
    ("overlay.enabled", "Enabled"),
    ("overlay.disabled", "Disabled"),
    ("overlay.modifier", "Modifier"),
    ("overlay.rotation_step", "Rotation Step"),
    ("overlay.degrees", "degrees"),
    ("overlay.reloaded", "Configuration reloaded"),
    ("overlay.saved", "Settings saved"),
    ("overlay.save_failed", "Could not save settings"),
    ("overlay.help", "Help"),
    // Quick build
    ("quickbuild.empty_slot", "Empty Slot"),
    ("quickbuild.assign", "Assign current building"),
    ("quickbuild.clear", "Clear Slot"),
    ("quickbuild.slot", "Slot"),
    ("quickbuild.no_texture", "No Icon"),
    ("quickbuild.select", "Select a building"),
    ("quickbuild.assigned", "Slot assigned"),
    ("quickbuild.cleared", "Slot cleared"),
    ("quickbuild.rotation", "Rotation"),
    // Removal
    ("removal.title", "Removed Objects"),
    ("removal.position_entry", "Single instance"),
    ("removal.type_rule", "All instances"),
    ("removal.all_instances", "(all)"),
    ("removal.count", "Removed objects"),
    ("removal.empty", "Nothing removed yet"),
    ("removal.removed", "Object removed"),
    ("removal.restored", "Object restored"),
    ("removal.undo_empty", "Nothing to undo"),
    ("removal.confirm_type", "Remove every instance of this object?"),
    ("removal.no_target", "No object under cursor"),
    ("removal.target", "Target"),
    ("removal.coordinates", "Coordinates"),
    ("removal.mesh", "Mesh"),
    ("removal.path", "Path"),
    // Status
    ("status.ready", "Ready"),
    ("status.loading", "Loading..."),
    ("status.error", "Error"),
    ("status.unsafe_address", "Target is no longer valid"),
    ("status.language_loaded", "Language file loaded"),
    ("status.language_failed", "Language file could not be loaded; using defaults"),
    ("status.conflict", "Key already in use"),
    ("status.rebound", "Key rebound"),
    ("status.yes", "Yes"),
    ("status.no", "No"),
];
