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

use std::ops::Deref;

use serde::Serialize;

/// Every item label is exactly this many columns wide. The item source pads or crops
/// labels on the way in, so the render layer never has to measure text.
pub const ITEM_DISPLAY_WIDTH: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Directory,
}

/// One browsable entry. Immutable once created; `index` is assigned by
/// [`ItemList::push`] and is unique and contiguous from 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    /// Display string, already padded/cropped to [`ITEM_DISPLAY_WIDTH`] columns.
    pub label: String,
    /// Opaque payload: a path fragment the caller joins onto its current directory.
    pub path: String,
    pub kind: ItemKind,
}

/// Ordered collection of [`Item`]s, insertion order = index order.
///
/// Indices are always exactly `0..len()` with no gaps. The field is private so the
/// only way in is [`ItemList::push`], which is what upholds that invariant;
/// [`Deref`] to a slice gives read access (`len`, `get`, iteration) for free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self { Self { items: Vec::new() } }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            items: Vec::with_capacity(size),
        }
    }

    /// Append an item and return its assigned index (always the next integer).
    pub fn push(
        &mut self,
        label: impl Into<String>,
        path: impl Into<String>,
        kind: ItemKind,
    ) -> usize {
        let index = self.items.len();
        self.items.push(Item {
            index,
            label: label.into(),
            path: path.into(),
            kind,
        });
        index
    }

    /// Drop every item. Safe to call on an empty list.
    pub fn clear(&mut self) { self.items.clear(); }
}

impl Deref for ItemList {
    type Target = [Item];
    fn deref(&self) -> &Self::Target { &self.items }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_assigns_contiguous_indices() {
        let mut list = ItemList::new();
        let first = list.push("alpha", "alpha", ItemKind::File);
        let second = list.push("beta", "beta", ItemKind::Directory);
        let third = list.push("gamma", "gamma", ItemKind::File);

        assert_eq!((first, second, third), (0, 1, 2));
        assert_eq!(list.len(), 3);
        for (position, item) in list.iter().enumerate() {
            assert_eq!(item.index, position);
        }
    }

    #[test]
    fn get_returns_item_by_index() {
        let mut list = ItemList::with_capacity(2);
        list.push("one", "one.txt", ItemKind::File);
        list.push("two", "two_dir", ItemKind::Directory);

        let item = list.get(1).unwrap();
        assert_eq!(item.path, "two_dir");
        assert_eq!(item.kind, ItemKind::Directory);
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut list = ItemList::new();
        list.clear();
        assert!(list.is_empty());

        list.push("one", "one", ItemKind::File);
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert!(list.is_empty());

        // Indices restart from 0 after a clear.
        assert_eq!(list.push("two", "two", ItemKind::File), 0);
    }
}
