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

use crate::{ItemList, ViewportWindow};

/// Scroll/selection configuration for one interaction.
///
/// The highlighted position is stored split in two, the same way the viewport math
/// uses it: `scroll_offset_row_index` is where the window starts in the item list,
/// and `raw_caret_row_index` is the selector's row relative to that window. Their sum
/// ([`State::get_focused_index`]) is the absolute index of the highlighted item.
///
/// Invariants while `scroll_active` is true:
/// - `max_display_height <= items.len()`
/// - `scroll_offset_row_index + max_display_height - 1 <= items.len() - 1`
///
/// With `scroll_active` false the whole list is visible: `max_display_height ==
/// items.len()` and `scroll_offset_row_index == 0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub scroll_active: bool,
    /// Number of item rows in the visible window.
    pub max_display_height: usize,
    /// Index of the first visible item (the window origin).
    pub scroll_offset_row_index: usize,
    /// This is not adjusted for [scroll_offset_row_index](State::scroll_offset_row_index).
    pub raw_caret_row_index: usize,
    /// Screen column of the window's left edge.
    pub origin_col: u16,
    /// Screen row of the window's top edge.
    pub origin_row: u16,
    /// Owned for the lifetime of one interaction; rebuilt, never mutated, on the next.
    pub items: ItemList,
}

impl State {
    /// Decide the scroll mode and build the initial viewport for `items`.
    ///
    /// Scrolling is enabled iff there are more items than `requested_height` rows and
    /// the height is positive. A height of 0 is not an error: it falls back to
    /// "show everything", as does any height that already fits the whole list.
    pub fn new(
        items: ItemList,
        origin_col: u16,
        origin_row: u16,
        requested_height: usize,
    ) -> Self {
        let total = items.len();
        let scroll_active = requested_height > 0 && total > requested_height;
        Self {
            scroll_active,
            max_display_height: if scroll_active { requested_height } else { total },
            scroll_offset_row_index: 0,
            raw_caret_row_index: 0,
            origin_col,
            origin_row,
            items,
        }
    }

    /// This is the item index that currently has keyboard focus.
    pub fn get_focused_index(&self) -> usize {
        self.raw_caret_row_index + self.scroll_offset_row_index
    }

    /// Highest item index reachable without shifting the window (the last visible
    /// slot).
    pub fn scroll_ceiling_index(&self) -> usize {
        self.scroll_offset_row_index + self.max_display_height.saturating_sub(1)
    }

    /// Move the caret so `index` has focus. The caller guarantees `index` lies within
    /// the current window.
    pub fn set_focused_index(&mut self, index: usize) {
        self.raw_caret_row_index = index.saturating_sub(self.scroll_offset_row_index);
    }
}

impl ViewportWindow for State {
    fn first_visible_index(&self) -> usize { self.scroll_offset_row_index }

    fn visible_row_count(&self) -> usize { self.max_display_height }

    fn focused_index(&self) -> usize { self.get_focused_index() }

    fn total_item_count(&self) -> usize { self.items.len() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ItemKind;

    fn make_items(count: usize) -> ItemList {
        let mut items = ItemList::with_capacity(count);
        for n in 0..count {
            items.push(format!("item {n}"), format!("item_{n}"), ItemKind::File);
        }
        items
    }

    #[test]
    fn more_items_than_rows_enables_scrolling() {
        let state = State::new(make_items(8), 0, 0, 5);
        assert!(state.scroll_active);
        assert_eq!(state.max_display_height, 5);
        assert_eq!(state.scroll_ceiling_index(), 4);
    }

    #[test]
    fn short_list_shrinks_the_viewport_and_disables_scrolling() {
        let state = State::new(make_items(3), 0, 0, 10);
        assert!(!state.scroll_active);
        assert_eq!(state.max_display_height, 3);
    }

    #[test]
    fn zero_height_falls_back_to_show_everything() {
        let state = State::new(make_items(4), 0, 0, 0);
        assert!(!state.scroll_active);
        assert_eq!(state.max_display_height, 4);
    }

    #[test]
    fn focused_index_is_caret_plus_offset() {
        let mut state = State::new(make_items(10), 0, 0, 4);
        assert_eq!(state.get_focused_index(), 0);

        state.scroll_offset_row_index = 3;
        state.raw_caret_row_index = 2;
        assert_eq!(state.get_focused_index(), 5);
        assert_eq!(state.scroll_ceiling_index(), 6);

        state.set_focused_index(4);
        assert_eq!(state.raw_caret_row_index, 1);
        assert_eq!(state.get_focused_index(), 4);
    }

    #[test]
    fn ceiling_stays_below_total_while_scrolling() {
        let mut state = State::new(make_items(7), 0, 0, 3);
        // Walk the window through every legal origin.
        while state.scroll_ceiling_index() < state.items.len() - 1 {
            assert!(state.scroll_ceiling_index() < state.items.len());
            state.scroll_offset_row_index += 1;
        }
        assert_eq!(state.scroll_ceiling_index(), state.items.len() - 1);
    }
}
