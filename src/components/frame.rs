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

//! Backdrop painting for the `fb` binary: the filled window rectangle (drawn twice,
//! offset by one cell, to fake a drop shadow) and full-width colored lines for the
//! info rows. None of this is consumed by the selector engine.

use std::io::{Result, Write};

use crossterm::{cursor::MoveTo,
                queue,
                style::{Color, Print, ResetColor, SetBackgroundColor,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};

use crate::RowStyle;

/// Fill the inclusive rectangle `(x1, y1)..=(x2, y2)` with spaces on `bg`.
pub fn draw_window<W: Write>(
    write: &mut W,
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
    bg: Color,
) -> Result<()> {
    let width = usize::from(x2.saturating_sub(x1)) + 1;
    let fill = " ".repeat(width);
    for row in y1..=y2 {
        queue! {
            write,
            MoveTo(x1, row),
            SetBackgroundColor(bg),
            Print(&fill),
        }?;
    }
    queue! {
        write,
        ResetColor,
    }?;
    Ok(())
}

/// Clear one full screen line and leave the cursor at its start with `style` applied,
/// ready for a `Print`.
pub fn clear_line<W: Write>(write: &mut W, row: u16, style: RowStyle) -> Result<()> {
    queue! {
        write,
        MoveTo(0, row),
        ResetColor,
        SetForegroundColor(style.fg),
        SetBackgroundColor(style.bg),
        Clear(ClearType::CurrentLine),
    }?;
    Ok(())
}
