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

//! ### Selector movement and viewport boundaries
//!
//! [`plan_move`] is the whole selector engine: given the current [`State`] and a
//! direction it decides what the keypress means. It never paints and never shifts
//! the window; it only reports. The session layer applies the plan, repaints the
//! two affected rows, and shifts the window when a boundary is reported.
//!
//! ```text
//!                +0--------------------+
//!                |                     |
//!                +--- window origin ---+  <- Boundary(Up) reported here
//!          ->    |         ↑           |      ↑
//!   caret  |     |                     |      |
//!          |     |    within window    |  window height
//!          |     |                     |      |
//!          ->    |         ↓           |      ↓
//!                +--- scroll ceiling --+  <- Boundary(Down) reported here
//!                |                     |
//!                |        below        |
//!                |                     |
//!                +---------------------+  <- Refused at the true last item
//! ```
//!
//! When the whole list fits on screen there are no boundaries at all: walking past
//! either end wraps circularly to the opposite end instead.

use crate::State;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
}

/// What one movement keypress means for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorMove {
    /// Ordinary move within the window: unselect `vacated`, select `entered`.
    To { vacated: usize, entered: usize },
    /// Circular wrap to the opposite end of the list (scrolling inactive only).
    /// On a single-item list `vacated == entered`.
    Wrapped { vacated: usize, entered: usize },
    /// The selector sits on a window edge and more items exist beyond it: the
    /// window must shift. The caret has NOT moved.
    Boundary(MoveDirection),
    /// Hard end of the list while scrolling: nothing happens, nothing repaints.
    Refused,
}

/// Compute the next selector position for one movement keypress.
pub fn plan_move(state: &State, direction: MoveDirection) -> SelectorMove {
    if state.items.is_empty() {
        return SelectorMove::Refused;
    }

    let focused = state.get_focused_index();
    let last = state.items.len() - 1;

    match direction {
        MoveDirection::Down => {
            if !state.scroll_active {
                // After the last item go back to the top.
                if focused == last {
                    SelectorMove::Wrapped {
                        vacated: focused,
                        entered: 0,
                    }
                } else {
                    SelectorMove::To {
                        vacated: focused,
                        entered: focused + 1,
                    }
                }
            } else {
                let ceiling = state.scroll_ceiling_index();
                if focused < ceiling {
                    SelectorMove::To {
                        vacated: focused,
                        entered: focused + 1,
                    }
                } else if ceiling < last {
                    SelectorMove::Boundary(MoveDirection::Down)
                } else {
                    // The window already shows the end of the list.
                    SelectorMove::Refused
                }
            }
        }

        MoveDirection::Up => {
            if !state.scroll_active {
                // Before the first item go back to the bottom.
                if focused == 0 {
                    SelectorMove::Wrapped {
                        vacated: 0,
                        entered: last,
                    }
                } else {
                    SelectorMove::To {
                        vacated: focused,
                        entered: focused - 1,
                    }
                }
            } else {
                let floor = state.scroll_offset_row_index;
                if focused > floor {
                    SelectorMove::To {
                        vacated: focused,
                        entered: focused - 1,
                    }
                } else if floor > 0 {
                    SelectorMove::Boundary(MoveDirection::Up)
                } else {
                    SelectorMove::Refused
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ItemKind, ItemList};

    fn make_state(count: usize, requested_height: usize) -> State {
        let mut items = ItemList::with_capacity(count);
        for n in 0..count {
            items.push(format!("item {n}"), format!("item_{n}"), ItemKind::File);
        }
        State::new(items, 0, 0, requested_height)
    }

    fn apply(state: &mut State, direction: MoveDirection) {
        match plan_move(state, direction) {
            SelectorMove::To { entered, .. } | SelectorMove::Wrapped { entered, .. } => {
                state.set_focused_index(entered);
            }
            SelectorMove::Boundary(_) | SelectorMove::Refused => {}
        }
    }

    #[test]
    fn empty_list_refuses_everything() {
        let state = make_state(0, 5);
        assert_eq!(plan_move(&state, MoveDirection::Down), SelectorMove::Refused);
        assert_eq!(plan_move(&state, MoveDirection::Up), SelectorMove::Refused);
    }

    #[test]
    fn down_moves_within_a_non_scrolling_list() {
        let mut state = make_state(3, 10);
        assert_eq!(
            plan_move(&state, MoveDirection::Down),
            SelectorMove::To {
                vacated: 0,
                entered: 1
            }
        );
        apply(&mut state, MoveDirection::Down);
        apply(&mut state, MoveDirection::Down);
        assert_eq!(state.get_focused_index(), 2);

        // Past the last item: wrap, not a boundary.
        assert_eq!(
            plan_move(&state, MoveDirection::Down),
            SelectorMove::Wrapped {
                vacated: 2,
                entered: 0
            }
        );
    }

    #[test]
    fn up_from_the_top_wraps_to_the_bottom() {
        let state = make_state(4, 10);
        assert_eq!(
            plan_move(&state, MoveDirection::Up),
            SelectorMove::Wrapped {
                vacated: 0,
                entered: 3
            }
        );
    }

    #[test]
    fn full_rotation_returns_to_the_start() {
        // With scrolling disabled, total_items down-moves land back where we began.
        for count in [1, 2, 5, 9] {
            let mut state = make_state(count, 64);
            for _ in 0..count {
                apply(&mut state, MoveDirection::Down);
            }
            assert_eq!(state.get_focused_index(), 0, "count = {count}");
        }
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        let state = make_state(1, 10);
        assert_eq!(
            plan_move(&state, MoveDirection::Down),
            SelectorMove::Wrapped {
                vacated: 0,
                entered: 0
            }
        );
        assert_eq!(
            plan_move(&state, MoveDirection::Up),
            SelectorMove::Wrapped {
                vacated: 0,
                entered: 0
            }
        );
    }

    #[test]
    fn down_boundary_only_at_ceiling_with_items_beyond() {
        let mut state = make_state(5, 3);
        assert!(state.scroll_active);

        // Two ordinary moves reach the ceiling (index 2).
        apply(&mut state, MoveDirection::Down);
        apply(&mut state, MoveDirection::Down);
        assert_eq!(state.get_focused_index(), state.scroll_ceiling_index());

        // At the ceiling with items beyond: boundary, caret untouched.
        assert_eq!(
            plan_move(&state, MoveDirection::Down),
            SelectorMove::Boundary(MoveDirection::Down)
        );
        assert_eq!(state.get_focused_index(), 2);
    }

    #[test]
    fn down_is_refused_once_the_window_shows_the_end() {
        let mut state = make_state(5, 3);
        state.scroll_offset_row_index = 2; // window [2, 3, 4]
        state.raw_caret_row_index = 2; // focused on the true last item
        assert_eq!(state.scroll_ceiling_index(), 4);
        assert_eq!(plan_move(&state, MoveDirection::Down), SelectorMove::Refused);
    }

    #[test]
    fn up_boundary_mirrors_down() {
        let mut state = make_state(5, 3);
        state.scroll_offset_row_index = 1; // window [1, 2, 3]
        state.raw_caret_row_index = 0;

        // At the window origin with earlier items: boundary.
        assert_eq!(
            plan_move(&state, MoveDirection::Up),
            SelectorMove::Boundary(MoveDirection::Up)
        );

        // Same spot but the window is already at the top: refused.
        state.scroll_offset_row_index = 0;
        assert_eq!(plan_move(&state, MoveDirection::Up), SelectorMove::Refused);
    }

    #[test]
    fn boundary_is_never_reported_at_the_true_last_item() {
        for (count, height) in [(5, 3), (6, 2), (10, 9), (4, 1)] {
            let mut state = make_state(count, height);
            // Park the window at the very end and focus the last item.
            state.scroll_offset_row_index = count - state.max_display_height;
            state.raw_caret_row_index = state.max_display_height - 1;
            assert_eq!(state.get_focused_index(), count - 1);
            assert_eq!(
                plan_move(&state, MoveDirection::Down),
                SelectorMove::Refused,
                "count = {count}, height = {height}"
            );
        }
    }

    #[test]
    fn mid_window_moves_are_ordinary_in_both_directions() {
        let mut state = make_state(9, 4);
        state.scroll_offset_row_index = 3; // window [3..=6]
        state.raw_caret_row_index = 2; // focused 5
        assert_eq!(
            plan_move(&state, MoveDirection::Down),
            SelectorMove::To {
                vacated: 5,
                entered: 6
            }
        );
        assert_eq!(
            plan_move(&state, MoveDirection::Up),
            SelectorMove::To {
                vacated: 5,
                entered: 4
            }
        );
    }
}
