// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;
use std::path::Path;

use jiff::Timestamp;

use crate::Logger;
use crate::Severity;
use crate::caller::CallSite;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let now = Timestamp::now();
        let site = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(CallSite::new(Path::new(file), line)),
            _ => None,
        };
        let text = format!("{}\n", record.args());

        if let Err(err) = self.write_line(record.level().into(), now, site, &text) {
            let _ = writeln!(std::io::stderr(), "{err}");
        }
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Set up `logger` as the backend of the [`log`] crate.
///
/// Records carry their own call site, so the caller skip of `logger` plays no part.
///
/// # Errors
///
/// Return an error if the `log` crate already has a logger.
///
/// # Examples
///
/// ```
/// use logforth_console::bridge::setup_log_crate;
///
/// setup_log_crate(logforth_console::default_logger(), log::LevelFilter::Info).unwrap();
/// log::info!("through the log facade");
/// ```
pub fn setup_log_crate(
    logger: &'static Logger,
    max_level: log::LevelFilter,
) -> Result<(), log::SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(max_level);
    Ok(())
}
