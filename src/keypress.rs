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

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;

/// The keys the selector cares about. Everything else the terminal can produce,
/// including a bare or unfinished escape sequence, degrades to [`KeyPress::Noop`]:
/// no position change, no render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPress {
    Up,
    Down,
    Enter,
    /// Raw mode swallows the interrupt signal, so Ctrl+C has to travel through the
    /// event loop as a key.
    CtrlC,
    /// The key source itself failed (e.g. stdin closed underneath us).
    Error,
    #[default]
    Noop,
}

/// Blocking source of one [`KeyPress`] per call. The crossterm implementation reads
/// the real keyboard; tests substitute [`TestVecKeyPressReader`].
///
/// [`TestVecKeyPressReader`]: crate::TestVecKeyPressReader
pub trait KeyPressReader {
    fn read_key_press(&mut self) -> KeyPress;
}

#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> KeyPress { read_key_press() }
}

/// Read one key event and map it for the selector. Arrow-key escape sequences are
/// decoded by crossterm's event parser (ESC `[` `A`/`B` three-token recognition);
/// anything it cannot recognize fails open as [`KeyPress::Noop`].
pub fn read_key_press() -> KeyPress {
    let event = match read() {
        Ok(event) => event,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "could not read key event", error = ?error);
            return KeyPress::Error;
        }
    };

    match event {
        Event::Key(KeyEvent {
            code, modifiers, ..
        }) => match code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                KeyPress::CtrlC
            }
            _ => KeyPress::Noop,
        },
        _ => KeyPress::Noop,
    }
}
