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

use std::io::{stdout, Result, Write};

use crossterm::{cursor::{Hide, Show},
                execute,
                terminal::{disable_raw_mode, enable_raw_mode}};
use serde::Serialize;

use crate::{enter_selector_loop, is_fully_uninteractive_terminal, plan_move,
            CrosstermKeyPressReader, EventLoopResult, FunctionComponent, ItemKind,
            ItemList, KeyPress, KeyPressReader, ListComponent, MoveDirection,
            SelectorMove, State, StyleSheet, TTYResult, DEVELOPMENT_MODE};

/// Everything the caller needs to know about one completed interaction: which item
/// was highlighted when it ended, and which key ended it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionResult {
    pub index: usize,
    pub label: String,
    /// The item's payload path fragment; the caller joins it onto its own base.
    pub path: String,
    pub kind: ItemKind,
    pub terminal_key: KeyPress,
}

/// This function does the work of rendering the TUI.
///
/// It paints a window of `items` at `(origin_col, origin_row)`, runs the selector
/// until the user confirms with Enter (or bails out with Ctrl+C), and returns the
/// selection. Scrolling is enabled when the list is taller than
/// `max_display_height`; otherwise the whole list is shown and the selector wraps
/// circularly at the ends. A `max_display_height` of 0 also falls back to showing
/// everything.
///
/// Returns `None` without touching the terminal when `items` is empty, or when the
/// terminal is *fully* uninteractive. The latter is useful so that it won't block
/// `cargo test` or non-interactive CI/CD environments.
pub fn select_from_list(
    items: ItemList,
    origin_col: u16,
    origin_row: u16,
    max_display_height: usize,
    maybe_status_row: Option<u16>,
    style: StyleSheet,
) -> Option<SelectionResult> {
    if items.is_empty() {
        return None;
    }
    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        return None;
    }

    let mut state = State::new(items, origin_col, origin_row, max_display_height);
    let mut function_component = ListComponent {
        write: stdout(),
        style,
        maybe_status_row,
    };

    if execute!(function_component.write, Hide).is_err() {
        return None;
    }
    if enable_raw_mode().is_err() {
        execute!(function_component.write, Show).ok();
        return None;
    }

    let session_result = run_session(
        &mut state,
        &mut function_component,
        &mut CrosstermKeyPressReader,
    );

    // Restore the terminal even when the session failed.
    disable_raw_mode().ok();
    execute!(function_component.write, Show).ok();

    match session_result {
        Ok(maybe_selection) => maybe_selection,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "selector session failed", error = ?error);
            None
        }
    }
}

/// One full "show list, collect one choice" interaction, generic over the writer and
/// key source so tests can drive it with scripted keys and a recording component.
///
/// With scrolling active this loops: render the window, wait in the selector loop
/// until a boundary breaks it, shift the window origin one row in the scroll
/// direction, reload. A downward crossing then sweeps the selector through the whole
/// new window so the highlight lands on its last slot (the "continuing scroll"
/// animation); an upward crossing leaves the highlight at the window top.
pub fn run_session<W: Write>(
    state: &mut State,
    function_component: &mut impl FunctionComponent<W, State>,
    reader: &mut impl KeyPressReader,
) -> Result<Option<SelectionResult>> {
    let mut entering_from_below = false;

    loop {
        function_component.render_window(state)?;
        if entering_from_below {
            sweep_to_window_bottom(state, function_component)?;
            entering_from_below = false;
        }

        match enter_selector_loop(state, function_component, reader, keypress_handler)? {
            EventLoopResult::BreakToScroll(MoveDirection::Down) => {
                state.scroll_offset_row_index += 1;
                state.raw_caret_row_index = 0;
                entering_from_below = true;
            }
            EventLoopResult::BreakToScroll(MoveDirection::Up) => {
                state.scroll_offset_row_index -= 1;
                state.raw_caret_row_index = 0;
            }
            EventLoopResult::ExitWithResult(selection) => {
                function_component.clear_viewport(state)?;
                return Ok(Some(selection));
            }
            EventLoopResult::ExitWithoutResult | EventLoopResult::ExitWithError => {
                function_component.clear_viewport(state)?;
                return Ok(None);
            }
            // The selector loop only returns the variants above.
            EventLoopResult::Continue
            | EventLoopResult::ContinueAndRepaint { .. } => {}
        }
    }
}

/// Advance the caret one row at a time through the freshly loaded window, painting
/// each hop, until it rests on the window's last slot. Boundary and refused plans
/// are ignored here: this is replay, not input.
fn sweep_to_window_bottom<W: Write>(
    state: &mut State,
    function_component: &mut impl FunctionComponent<W, State>,
) -> Result<()> {
    for _ in 0..state.max_display_height {
        match plan_move(state, MoveDirection::Down) {
            SelectorMove::To { vacated, entered }
            | SelectorMove::Wrapped { vacated, entered } => {
                state.set_focused_index(entered);
                function_component.render_item(state, vacated, false)?;
                function_component.render_item(state, entered, true)?;
            }
            SelectorMove::Boundary(_) | SelectorMove::Refused => {}
        }
    }
    function_component.render_status(state)?;
    function_component.get_write().flush()
}

fn keypress_handler(state: &mut State, key_press: KeyPress) -> EventLoopResult {
    if DEVELOPMENT_MODE {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "keypress",
            key_press = ?key_press,
            focused = state.get_focused_index(),
            scroll_offset = state.scroll_offset_row_index,
        );
    }

    match key_press {
        // Up / Down.
        KeyPress::Up | KeyPress::Down => {
            let direction = match key_press {
                KeyPress::Up => MoveDirection::Up,
                _ => MoveDirection::Down,
            };
            match plan_move(state, direction) {
                SelectorMove::To { vacated, entered }
                | SelectorMove::Wrapped { vacated, entered } => {
                    state.set_focused_index(entered);
                    EventLoopResult::ContinueAndRepaint { vacated, entered }
                }
                SelectorMove::Boundary(direction) => {
                    EventLoopResult::BreakToScroll(direction)
                }
                SelectorMove::Refused => EventLoopResult::Continue,
            }
        }

        // Enter.
        KeyPress::Enter => {
            let focused = state.get_focused_index();
            match state.items.get(focused) {
                Some(item) => EventLoopResult::ExitWithResult(SelectionResult {
                    index: item.index,
                    label: item.label.clone(),
                    path: item.path.clone(),
                    kind: item.kind,
                    terminal_key: KeyPress::Enter,
                }),
                None => EventLoopResult::ExitWithoutResult,
            }
        }

        KeyPress::CtrlC => EventLoopResult::ExitWithoutResult,

        KeyPress::Error => EventLoopResult::ExitWithError,

        KeyPress::Noop => EventLoopResult::Continue,
    }
}
