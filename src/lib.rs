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

//! # fbrowse
//!
//! This crate can be used in two ways:
//! 1. As a library. This is useful if you want to put a scrolling selection list in
//!    front of any ordered collection of items in your CLI app. The function that does
//!    the work is [`select_from_list`]: it paints a window of items at a given screen
//!    origin, lets the user move a highlighted selector with the arrow keys, scrolls
//!    the window when the selector reaches its edge, wraps circularly when the whole
//!    list fits on screen, and returns the chosen item together with the key that
//!    ended the interaction.
//! 1. As a binary. The binary target is called `fb` and is a small file browser: it
//!    lists the current directory (with `.` and `..` injected at the top), lets you
//!    descend into subdirectories or climb back out, and prints the path you finally
//!    selected to `stdout`.
//!
//! ## How to use it as a library?
//!
//! ```no_run
//! use fbrowse::{read_directory_items, select_from_list, StyleSheet};
//! use std::path::Path;
//!
//! let items = read_directory_items(Path::new(".")).expect("readable directory");
//! let maybe_selection = select_from_list(
//!     items,
//!     /* origin_col: */ 10,
//!     /* origin_row: */ 7,
//!     /* max_display_height: */ 10,
//!     /* maybe_status_row: */ None,
//!     StyleSheet::default(),
//! );
//!
//! match maybe_selection {
//!     Some(it) => println!("User selected: {}", it.path),
//!     None => println!("User did not select anything"),
//! }
//! ```
//!
//! The scroll/selection engine itself is pure: [`plan_move`] computes what a keypress
//! means for the current [`State`] (move within the window, wrap around, hit a window
//! boundary, or refuse), and the session layer in [`public_api`] applies the plan and
//! drives the paints. Rendering goes through the [`FunctionComponent`] trait, so tests
//! can substitute a recording component and scripted key input for the real terminal.
//!
//! ## How to use it as a binary?
//!
//! ```shell
//! fb                  # browse the current directory
//! fb /etc -t 15       # start in /etc with a 15 row viewport
//! fb --json           # print the final selection as one JSON object
//! fb -l               # also log to log.txt (watch with `tail -f log.txt`)
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod components;
pub mod event_loop;
pub mod function_component;
pub mod item_list;
pub mod keypress;
pub mod listing;
pub mod log_support;
pub mod public_api;
pub mod scroll;
pub mod state;
pub mod term;
pub mod test_utils;

pub use components::*;
pub use event_loop::*;
pub use function_component::*;
pub use item_list::*;
pub use keypress::*;
pub use listing::*;
pub use log_support::*;
pub use public_api::*;
pub use scroll::*;
pub use state::*;
pub use term::*;
pub use test_utils::*;

/// Enable verbose selector-state logging. The logs only materialize when a tracing
/// subscriber is installed (the `fb` binary does that behind `--enable-logging`);
/// you can watch them with `tail -f log.txt`.
pub const DEVELOPMENT_MODE: bool = true;
