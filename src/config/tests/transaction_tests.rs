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

use super::super::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a manager with an existing keybinding file
fn setup_with_keybinds(content: &str) -> (TempDir, ConfigManager) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keybinds.txt"), content).unwrap();
    let manager = ConfigManager::new(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, manager)
}

#[test]
fn test_begin_creates_backup() {
    let (_temp_dir, manager) = setup_with_keybinds("mod|16\n");

    let tx = ConfigTransaction::begin(&manager, SettingsFile::Keybinds).unwrap();

    let backup = tx.backup_path().unwrap();
    assert!(backup.starts_with(manager.backup_dir()));
    assert_eq!(fs::read_to_string(backup).unwrap(), "mod|16\n");
}

#[test]
fn test_commit_replaces_file() {
    let (temp_dir, manager) = setup_with_keybinds("mod|16\n");

    let tx = ConfigTransaction::begin(&manager, SettingsFile::Keybinds).unwrap();
    tx.commit("mod|17\n").unwrap();

    let content = fs::read_to_string(temp_dir.path().join("keybinds.txt")).unwrap();
    assert_eq!(content, "mod|17\n");
}

#[test]
fn test_rollback_restores_original() {
    let (temp_dir, manager) = setup_with_keybinds("mod|16\n");
    let path = temp_dir.path().join("keybinds.txt");

    let tx = ConfigTransaction::begin(&manager, SettingsFile::Keybinds).unwrap();
    fs::write(&path, "garbage").unwrap();

    tx.rollback().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "mod|16\n");

    // Rollback can be retried
    tx.rollback().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "mod|16\n");
}

#[test]
fn test_rollback_without_original_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(temp_dir.path().to_path_buf()).unwrap();
    let path = manager.path_for(SettingsFile::Removals);

    let tx = ConfigTransaction::begin(&manager, SettingsFile::Removals).unwrap();
    assert!(tx.backup_path().is_none());

    fs::write(&path, "@Wall\n").unwrap();
    tx.rollback().unwrap();
    assert!(!path.exists());

    // Nothing to remove the second time
    tx.rollback().unwrap();
}

#[test]
fn test_commit_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(temp_dir.path().to_path_buf()).unwrap();

    ConfigTransaction::begin(&manager, SettingsFile::QuickBuild)
        .unwrap()
        .commit("rotation|30\n")
        .unwrap();

    let content = fs::read_to_string(manager.path_for(SettingsFile::QuickBuild)).unwrap();
    assert_eq!(content, "rotation|30\n");
}
