//! Keybinding conflict detection
//!
//! All overlay hotkeys share one active modifier, so two actions conflict
//! exactly when they are assigned the same key code. Bindings are indexed
//! in a HashMap keyed by code; any code with more than one action is a
//! conflict the overlay asks the user to resolve.

use std::collections::HashMap;

use crate::core::types::BindAction;

/// Groups actions by assigned key code.
pub struct ConflictDetector {
    /// Maps key code to every action using it.
    bindings: HashMap<u8, Vec<BindAction>>,
}

/// Two or more actions assigned the same key.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The shared key code
    pub code: u8,

    /// Actions using this code (always 2 or more), in bind index order
    pub actions: Vec<BindAction>,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn add_binding(&mut self, action: BindAction, code: u8) {
        self.bindings.entry(code).or_default().push(action);
    }

    /// Finds all conflicts, ordered by key code.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(code, actions)| {
                let mut actions = actions.clone();
                actions.sort();
                Conflict {
                    code: *code,
                    actions,
                }
            })
            .collect();
        conflicts.sort_by_key(|c| c.code);
        conflicts
    }

    /// True if `code` is used by 2 or more actions.
    pub fn has_conflict(&self, code: u8) -> bool {
        self.bindings
            .get(&code)
            .map(|actions| actions.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of bindings tracked.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
