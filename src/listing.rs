/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! The item source: turns one directory into an [`ItemList`] ready for display.
//!
//! Labels come out exactly [`ITEM_DISPLAY_WIDTH`] columns wide so the render layer
//! never measures text. `.` and `..` are always injected first, which means indices
//! 0 and 1 are stable: 0 is "choose the directory we are in", 1 is "go up".
//! Subdirectories follow (bracketed, sorted by name), then regular files (sorted by
//! name). Anything else a directory can contain (sockets, symlinks, devices) is
//! skipped.

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::{ItemKind, ItemList, ITEM_DISPLAY_WIDTH};

pub const CURRENT_DIR: &str = ".";
pub const PARENT_DIR: &str = "..";

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("could not read directory '{dir}'")]
    ReadDirectory {
        dir: String,
        #[source]
        source: io::Error,
    },
}

/// List `dir` as selectable items. The payload `path` of every item is the bare
/// entry name; joining it onto a base directory is the caller's business.
pub fn read_directory_items(dir: &Path) -> Result<ItemList, BrowseError> {
    let read_dir = fs::read_dir(dir).map_err(|source| BrowseError::ReadDirectory {
        dir: dir.display().to_string(),
        source,
    })?;

    let mut directories: Vec<String> = Vec::new();
    let mut files: Vec<String> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| BrowseError::ReadDirectory {
            dir: dir.display().to_string(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            directories.push(name);
        } else if file_type.is_file() {
            files.push(name);
        }
    }
    directories.sort();
    files.sort();

    let mut items =
        ItemList::with_capacity(2 + directories.len() + files.len());
    items.push(file_label(CURRENT_DIR), CURRENT_DIR, ItemKind::Directory);
    items.push(file_label(PARENT_DIR), PARENT_DIR, ItemKind::Directory);
    for name in directories {
        let label = directory_label(&name);
        items.push(label, name, ItemKind::Directory);
    }
    for name in files {
        let label = file_label(&name);
        items.push(label, name, ItemKind::File);
    }

    Ok(items)
}

/// Directories display between brackets: `[name]`, cropped when the name is long.
fn directory_label(name: &str) -> String {
    let mut label = String::with_capacity(ITEM_DISPLAY_WIDTH);
    label.push('[');
    for ch in name.chars().take(ITEM_DISPLAY_WIDTH - 2) {
        label.push(ch);
    }
    label.push(']');
    pad_label(label)
}

/// Plain entries display as-is, cropped to the item width when long.
fn file_label(name: &str) -> String {
    pad_label(name.chars().take(ITEM_DISPLAY_WIDTH).collect())
}

fn pad_label(mut label: String) -> String {
    let mut columns = label.chars().count();
    while columns < ITEM_DISPLAY_WIDTH {
        label.push(' ');
        columns += 1;
    }
    label
}

#[cfg(test)]
mod tests {
    use std::{fs::File, path::PathBuf};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Build a throwaway directory tree under the system temp dir. Each test gets its
    /// own root so they can run in parallel.
    fn fixture_dir(test_name: &str) -> PathBuf {
        let root = std::env::temp_dir()
            .join(format!("fbrowse_listing_{}_{}", test_name, std::process::id()));
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn injects_dot_and_dot_dot_first() {
        let root = fixture_dir("dots");
        let items = read_directory_items(&root).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, CURRENT_DIR);
        assert_eq!(items[0].kind, ItemKind::Directory);
        assert_eq!(items[0].label, ".              ");
        assert_eq!(items[1].path, PARENT_DIR);
        assert_eq!(items[1].label, "..             ");

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn directories_come_bracketed_and_sorted_before_files() {
        let root = fixture_dir("order");
        fs::create_dir(root.join("zulu")).unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        File::create(root.join("notes.txt")).unwrap();
        File::create(root.join("a.txt")).unwrap();

        let items = read_directory_items(&root).unwrap();

        let paths: Vec<&str> = items.iter().map(|item| item.path.as_str()).collect();
        assert_eq!(paths, vec![".", "..", "alpha", "zulu", "a.txt", "notes.txt"]);
        assert_eq!(items[2].label, "[alpha]        ");
        assert_eq!(items[2].kind, ItemKind::Directory);
        assert_eq!(items[4].label, "a.txt          ");
        assert_eq!(items[4].kind, ItemKind::File);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn long_names_are_cropped_to_the_item_width() {
        let root = fixture_dir("crop");
        fs::create_dir(root.join("a_very_long_directory_name")).unwrap();
        File::create(root.join("really_long_file_name.txt")).unwrap();

        let items = read_directory_items(&root).unwrap();

        assert_eq!(items[2].label, "[a_very_long_d]");
        assert_eq!(items[3].label, "really_long_fil");
        for item in items.iter() {
            assert_eq!(item.label.chars().count(), ITEM_DISPLAY_WIDTH);
        }

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn unreadable_directory_is_a_typed_error() {
        let root = fixture_dir("missing").join("does_not_exist");
        let result = read_directory_items(&root);
        let error = result.unwrap_err();
        assert!(matches!(error, BrowseError::ReadDirectory { .. }));
        assert!(error.to_string().contains("does_not_exist"));
    }
}
