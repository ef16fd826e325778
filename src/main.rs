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

//! The `fb` binary: a small file browser on top of [`select_from_list`]. One
//! selection round per directory; picking a directory rebuilds the listing and goes
//! again, picking `.` or a file ends the walk and prints the result.

use std::{env,
          io::{self, Write as _},
          path::{Path, PathBuf}};

use clap::Parser;
use crossterm::{cursor::MoveTo,
                execute, queue,
                style::{Color, Print, ResetColor},
                terminal::{Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};
use fbrowse::{clear_line, draw_window, get_size, get_terminal_width,
              read_directory_items, select_from_list, try_initialize_logging,
              ItemKind, SelectionResult, Size, StyleSheet, CURRENT_DIR,
              DEFAULT_LOG_FILE_NAME, DEFAULT_WIDTH, DEVELOPMENT_MODE,
              ITEM_DISPLAY_WIDTH, PARENT_DIR};
use miette::{IntoDiagnostic, Result};

/// Where the item window sits on screen, matching the classic listbox layout: the
/// list starts a couple of cells inside a framed rectangle, with the diagnostic
/// status line above it.
const LIST_ORIGIN_COL: u16 = 10;
const LIST_ORIGIN_ROW: u16 = 7;
const STATUS_ROW: u16 = 4;
const DEFAULT_TUI_HEIGHT: usize = 10;

#[derive(Debug, Parser)]
#[command(bin_name = "fb")]
#[command(about = "Browse directories with a scrolling list selector", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    /// Directory to start browsing in (defaults to the current directory)
    #[arg(value_name = "dir")]
    start_dir: Option<PathBuf>,

    /// Maximum height of the list viewport (in rows)
    #[arg(value_name = "height", long, short = 't', default_value_t = DEFAULT_TUI_HEIGHT)]
    tui_height: usize,

    /// Print the final selection as one JSON object instead of a bare path
    #[arg(long)]
    json: bool,

    /// Log to log.txt (watch with `tail -f log.txt`)
    #[arg(long, short = 'l')]
    enable_logging: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let _maybe_log_guard = if cli_args.enable_logging {
        Some(try_initialize_logging(DEFAULT_LOG_FILE_NAME)?)
    } else {
        None
    };
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start browsing...", cli_args = ?cli_args);

    let start_dir = match &cli_args.start_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().into_diagnostic()?,
    };
    let start_dir = start_dir.canonicalize().into_diagnostic()?;

    let maybe_chosen = browse(start_dir, cli_args.tui_height)?;

    match maybe_chosen {
        Some((_chosen_path, selection)) if cli_args.json => {
            println!("{}", serde_json::to_string(&selection).into_diagnostic()?);
        }
        Some((chosen_path, _selection)) => {
            println!("{}", chosen_path.display());
        }
        None => {}
    }

    tracing::debug!(message = "Stop browsing...");
    Ok(())
}

/// Wrap the navigation loop in the alternate screen so the user's shell contents
/// survive the session, and leave it again no matter how the loop ended.
fn browse(
    start_dir: PathBuf,
    tui_height: usize,
) -> Result<Option<(PathBuf, SelectionResult)>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).into_diagnostic()?;
    let outcome = navigation_loop(&mut stdout, start_dir, tui_height);
    execute!(stdout, LeaveAlternateScreen).ok();
    outcome
}

/// One selection round per directory. The current directory is plain owned state;
/// the process working directory never changes.
fn navigation_loop(
    write: &mut io::Stdout,
    mut current_dir: PathBuf,
    tui_height: usize,
) -> Result<Option<(PathBuf, SelectionResult)>> {
    let style = StyleSheet::default();

    loop {
        paint_backdrop(write, tui_height).into_diagnostic()?;

        let items = read_directory_items(&current_dir).into_diagnostic()?;
        let maybe_selection = select_from_list(
            items,
            LIST_ORIGIN_COL,
            LIST_ORIGIN_ROW,
            tui_height,
            Some(STATUS_ROW),
            style,
        );
        let Some(selection) = maybe_selection else {
            return Ok(None);
        };

        paint_info_lines(write, &current_dir, &selection, style).into_diagnostic()?;
        if DEVELOPMENT_MODE {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "selection",
                selection = ?selection,
                current_dir = ?current_dir,
            );
        }

        match selection.kind {
            // Item 0 is always `.`: "this directory" is a final answer, not a hop.
            ItemKind::Directory if selection.index != 0 => {
                if selection.path == PARENT_DIR {
                    current_dir.pop();
                } else {
                    current_dir.push(&selection.path);
                }
            }
            _ => {
                let chosen_path = if selection.path == CURRENT_DIR {
                    current_dir.clone()
                } else {
                    current_dir.join(&selection.path)
                };
                return Ok(Some((chosen_path, selection)));
            }
        }
    }
}

/// Clear the screen and paint the framed rectangle the list lives in, drop shadow
/// first so the window overlaps it.
fn paint_backdrop(write: &mut impl io::Write, tui_height: usize) -> io::Result<()> {
    let height = tui_height.max(1) as u16;
    let x1 = LIST_ORIGIN_COL - 2;
    let x2 = LIST_ORIGIN_COL + ITEM_DISPLAY_WIDTH as u16 + 1;
    let y1 = LIST_ORIGIN_ROW - 1;
    let y2 = LIST_ORIGIN_ROW + height;

    queue! {
        write,
        ResetColor,
        Clear(ClearType::All),
    }?;
    draw_window(write, x1 + 1, y1 + 1, x2 + 1, y2 + 1, Color::Black)?;
    draw_window(write, x1, y1, x2, y2, Color::White)?;
    write.flush()
}

/// Two info lines at the bottom of the screen: what was just selected, and where we
/// are now.
fn paint_info_lines(
    write: &mut impl io::Write,
    current_dir: &Path,
    selection: &SelectionResult,
    style: StyleSheet,
) -> io::Result<()> {
    let size = get_size().unwrap_or(Size {
        col_count: DEFAULT_WIDTH as u16,
        row_count: 24,
    });
    let info_row = size.row_count.saturating_sub(3);
    let path_row = size.row_count.saturating_sub(2);
    let max_text_width = get_terminal_width().saturating_sub(2);

    let info_text = format!(
        "Item selected: {} | Index: {} | Key: {:?}",
        selection.path, selection.index, selection.terminal_key
    );
    let path_text = format!("Current Path: {}", current_dir.display());

    clear_line(write, info_row, style.status_style)?;
    queue! {
        write,
        MoveTo(1, info_row),
        Print(clip_to_width(&info_text, max_text_width)),
    }?;

    clear_line(write, path_row, style.status_style)?;
    queue! {
        write,
        MoveTo(1, path_row),
        Print(clip_to_width(&path_text, max_text_width)),
        ResetColor,
    }?;

    write.flush()
}

fn clip_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
