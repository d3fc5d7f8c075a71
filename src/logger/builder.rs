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

use std::path::PathBuf;

use jiff::tz::TimeZone;

use super::log_impl::Logger;
use crate::Append;
use crate::Metadata;
use crate::Severities;
use crate::append;
use crate::caller;

/// A builder for configuring a [`Logger`]. See also [`Logger::builder`].
///
/// Everything except the metadata, the severity filter and the caller skip is fixed once the
/// logger is built.
///
/// ## Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use logforth_console::Logger;
/// use logforth_console::Metadata;
/// use logforth_console::append;
///
/// let logger = Logger::builder()
///     .metadata(Metadata::SHORT)
///     .timezone(TimeZone::UTC)
///     .append(append::Stderr::default())
///     .build();
/// ```
#[must_use = "call `build` to create the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    metadata: Metadata,
    severities: Severities,
    append: Option<Box<dyn Append>>,
    timezone: Option<TimeZone>,
    working_dir: Option<PathBuf>,
    colored: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a builder with the default metadata and severities, writing to stdout.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::DEFAULT,
            severities: Severities::DEFAULT,
            append: None,
            timezone: None,
            working_dir: None,
            colored: true,
        }
    }

    /// Set the metadata fields rendered in the line prefix.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the severities whose label is rendered.
    pub fn severities(mut self, severities: Severities) -> Self {
        self.severities = severities;
        self
    }

    /// Set the target of composed lines. Default to [`append::Stdout`].
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.append = Some(append.into());
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Set the directory short call sites are rendered relative to.
    ///
    /// Defaults to `PWD` if set and non-empty, otherwise the process working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Disable colored output. Segments are rendered without escape sequences.
    pub fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Create the [`Logger`].
    pub fn build(self) -> Logger {
        Logger::from_parts(
            self.metadata,
            self.severities,
            self.append.unwrap_or_else(|| Box::new(append::Stdout::default())),
            self.timezone.unwrap_or_else(TimeZone::system),
            self.working_dir.or_else(caller::default_working_dir),
            self.colored,
        )
    }
}
