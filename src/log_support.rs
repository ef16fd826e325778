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

use std::fs::OpenOptions;

use miette::{miette, IntoDiagnostic};
use tracing_appender::non_blocking::WorkerGuard;

/// Enable file logging. You can use `tail -f log.txt` to watch the logs.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Install a global tracing subscriber that appends to `file_name`. Logging goes to
/// a file rather than the display because the display belongs to the TUI.
///
/// The returned guard owns the background writer thread; keep it alive for the
/// lifetime of the program or buffered log lines are lost.
pub fn try_initialize_logging(file_name: &str) -> miette::Result<WorkerGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)
        .into_diagnostic()?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| miette!("could not install tracing subscriber: {error}"))?;

    Ok(guard)
}
