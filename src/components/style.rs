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

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowStyle {
    pub fg: Color,
    pub bg: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub unselected_style: RowStyle,
    pub selected_style: RowStyle,
    pub status_style: RowStyle,
}

/// The classic listbox palette: dark rows on a light window, with the highlight and
/// the status region inverted onto blue.
impl Default for StyleSheet {
    fn default() -> Self {
        let unselected_style = RowStyle {
            fg: Color::Black,
            bg: Color::White,
        };
        let selected_style = RowStyle {
            fg: Color::White,
            bg: Color::DarkBlue,
        };
        let status_style = RowStyle {
            fg: Color::White,
            bg: Color::DarkBlue,
        };
        StyleSheet {
            unselected_style,
            selected_style,
            status_style,
        }
    }
}
