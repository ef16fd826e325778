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

use std::io::{Result, Write};

/// Read access to the window geometry a render component needs. [`State`] implements
/// this; so can any test state.
///
/// [`State`]: crate::State
pub trait ViewportWindow {
    /// Index of the first visible item.
    fn first_visible_index(&self) -> usize;
    /// Number of item rows in the window.
    fn visible_row_count(&self) -> usize;
    /// Index of the item that has keyboard focus.
    fn focused_index(&self) -> usize;
    fn total_item_count(&self) -> usize;
}

/// The render seam between the selector engine and the screen.
///
/// The engine owns no painting. It calls `render_item` for exactly the rows a move
/// touched (the vacated one unselected, the entered one selected), `render_status`
/// for the diagnostic region, and `render_window` when the whole window must be
/// repainted after a scroll reload. Writes are queued against `get_write` and flushed
/// by the caller at the end of each keypress, so the terminal sees them in order.
pub trait FunctionComponent<W: Write, S: ViewportWindow> {
    fn get_write(&mut self) -> &mut W;

    /// Paint exactly one item row, selected or unselected.
    fn render_item(&mut self, state: &S, index: usize, is_selected: bool) -> Result<()>;

    /// Repaint the fixed status region. Implementations may make this a no-op.
    fn render_status(&mut self, state: &S) -> Result<()>;

    /// Blank out the rows the window occupies.
    fn clear_viewport(&mut self, state: &S) -> Result<()>;

    /// Paint every visible row (the focused one selected), then the status region.
    fn render_window(&mut self, state: &S) -> Result<()> {
        let first = state.first_visible_index();
        let last_excl = (first + state.visible_row_count()).min(state.total_item_count());
        let focused = state.focused_index();
        for index in first..last_excl {
            self.render_item(state, index, index == focused)?;
        }
        self.render_status(state)?;
        self.get_write().flush()
    }
}
