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

use crossterm::{cursor::MoveTo,
                queue,
                style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
                terminal::{Clear, ClearType}};

use crate::{FunctionComponent, State, StyleSheet, ViewportWindow, ITEM_DISPLAY_WIDTH};

/// Paints the item window at an absolute screen origin, one row per item. Each row is
/// addressed with `MoveTo` so a single item can be repainted without disturbing its
/// neighbors; that is what makes the two-paint move animation possible.
pub struct ListComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
    /// Screen row for the diagnostic status line. `None` switches the status region
    /// off entirely.
    pub maybe_status_row: Option<u16>,
}

impl<W: Write> FunctionComponent<W, State> for ListComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    fn render_item(&mut self, state: &State, index: usize, is_selected: bool) -> Result<()> {
        // Rows outside the window have no screen position; nothing to paint.
        let Some(viewport_row) = index.checked_sub(state.scroll_offset_row_index) else {
            return Ok(());
        };
        if viewport_row >= state.max_display_height {
            return Ok(());
        }
        let Some(item) = state.items.get(index) else {
            return Ok(());
        };

        let style = if is_selected {
            self.style.selected_style
        } else {
            self.style.unselected_style
        };
        let row = state.origin_row + viewport_row as u16;

        queue! {
            self.write,
            MoveTo(state.origin_col, row),
            // Reset the colors that may have been set by the previous command.
            ResetColor,
            SetForegroundColor(style.fg),
            SetBackgroundColor(style.bg),
            Print(&item.label),
            ResetColor,
        }?;

        Ok(())
    }

    fn render_status(&mut self, state: &State) -> Result<()> {
        let Some(status_row) = self.maybe_status_row else {
            return Ok(());
        };

        let focused = state.get_focused_index();
        let last = state.items.len().saturating_sub(1);
        let path = state
            .items
            .get(focused)
            .map(|item| item.path.as_str())
            .unwrap_or_default();
        let text = format!(
            " Index:{focused}/{last} | Scroll limit:{ceiling} | Scroll active:{active} | Path: {path}",
            ceiling = state.scroll_ceiling_index(),
            active = state.scroll_active,
        );

        let style = self.style.status_style;
        queue! {
            self.write,
            MoveTo(0, status_row),
            ResetColor,
            SetForegroundColor(style.fg),
            SetBackgroundColor(style.bg),
            // Clear the current line.
            Clear(ClearType::CurrentLine),
            Print(text),
            ResetColor,
        }?;

        Ok(())
    }

    fn clear_viewport(&mut self, state: &State) -> Result<()> {
        let blank = " ".repeat(ITEM_DISPLAY_WIDTH);
        let style = self.style.unselected_style;
        for viewport_row in 0..state.visible_row_count() {
            queue! {
                self.write,
                MoveTo(state.origin_col, state.origin_row + viewport_row as u16),
                ResetColor,
                SetForegroundColor(style.fg),
                SetBackgroundColor(style.bg),
                Print(&blank),
            }?;
        }
        queue! {
            self.write,
            ResetColor,
        }?;
        self.write.flush()
    }
}
