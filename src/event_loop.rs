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

use crate::{FunctionComponent, KeyPress, KeyPressReader, MoveDirection, SelectionResult,
            ViewportWindow};

/// What the keypress handler tells the wait loop to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum EventLoopResult {
    /// Nothing happened (unknown key, or a refused move). Keep waiting.
    Continue,
    /// A move was applied: repaint the vacated row unselected and the entered row
    /// selected, then keep waiting.
    ContinueAndRepaint { vacated: usize, entered: usize },
    /// The selector hit a window edge with more items beyond it. Break out so the
    /// session can shift the window and reload.
    BreakToScroll(MoveDirection),
    /// The user confirmed the focused item.
    ExitWithResult(SelectionResult),
    /// The user bailed out (Ctrl+C).
    ExitWithoutResult,
    /// The key source died.
    ExitWithError,
}

/// Block on the key source and feed each key to `on_keypress` until the handler ends
/// the wait: a confirm, a bail-out, or a scroll boundary. Successful moves repaint
/// exactly the two affected rows plus the status region; everything else paints
/// nothing.
pub fn enter_selector_loop<W: Write, S: ViewportWindow>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    reader: &mut impl KeyPressReader,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
) -> Result<EventLoopResult> {
    loop {
        let key_press = reader.read_key_press();
        match on_keypress(state, key_press) {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRepaint { vacated, entered } => {
                function_component.render_item(state, vacated, false)?;
                function_component.render_item(state, entered, true)?;
                function_component.render_status(state)?;
                function_component.get_write().flush()?;
            }
            it => return Ok(it),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ItemKind, ItemList, State, TestVecKeyPressReader, TestStringWriter};

    struct NoopComponent {
        write: TestStringWriter,
        item_renders: usize,
    }

    impl FunctionComponent<TestStringWriter, State> for NoopComponent {
        fn get_write(&mut self) -> &mut TestStringWriter { &mut self.write }

        fn render_item(
            &mut self,
            _state: &State,
            _index: usize,
            _is_selected: bool,
        ) -> Result<()> {
            self.item_renders += 1;
            Ok(())
        }

        fn render_status(&mut self, _state: &State) -> Result<()> { Ok(()) }

        fn clear_viewport(&mut self, _state: &State) -> Result<()> { Ok(()) }
    }

    fn make_state() -> State {
        let mut items = ItemList::new();
        items.push("a", "a", ItemKind::File);
        items.push("b", "b", ItemKind::File);
        State::new(items, 0, 0, 10)
    }

    #[test]
    fn loop_repaints_on_moves_and_exits_on_demand() {
        let mut state = make_state();
        let mut component = NoopComponent {
            write: TestStringWriter::new(),
            item_renders: 0,
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec: vec![KeyPress::Noop, KeyPress::Down, KeyPress::CtrlC],
            index: None,
        };

        let result = enter_selector_loop(
            &mut state,
            &mut component,
            &mut reader,
            |_state, key_press| match key_press {
                KeyPress::Down => EventLoopResult::ContinueAndRepaint {
                    vacated: 0,
                    entered: 1,
                },
                KeyPress::CtrlC => EventLoopResult::ExitWithoutResult,
                _ => EventLoopResult::Continue,
            },
        )
        .unwrap();

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
        // One applied move, two row paints. The Noop key painted nothing.
        assert_eq!(component.item_renders, 2);
    }

    #[test]
    fn boundary_breaks_the_loop_without_painting() {
        let mut state = make_state();
        let mut component = NoopComponent {
            write: TestStringWriter::new(),
            item_renders: 0,
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec: vec![KeyPress::Down],
            index: None,
        };

        let result = enter_selector_loop(
            &mut state,
            &mut component,
            &mut reader,
            |_state, _key_press| EventLoopResult::BreakToScroll(MoveDirection::Down),
        )
        .unwrap();

        assert_eq!(result, EventLoopResult::BreakToScroll(MoveDirection::Down));
        assert_eq!(component.item_renders, 0);
    }
}
