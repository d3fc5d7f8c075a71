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

use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use super::builder::LoggerBuilder;
use crate::Append;
use crate::Error;
use crate::Metadata;
use crate::Severities;
use crate::Severity;
use crate::caller;
use crate::caller::CallSite;
use crate::layout::Line;
use crate::layout::format_timestamp;

/// A console logger that decorates each message with a colored prefix and writes it in one
/// call to its target.
///
/// The metadata fields, the severity filter and the caller skip can be changed through a
/// shared reference, so a logger can live in a `static` and be reconfigured in place.
///
/// # Caller skip
///
/// All entry points are `#[track_caller]`: a wrapper that is itself `#[track_caller]` is
/// skipped for free. A wrapper that is not can either pass the number of frames to skip with
/// [`Logger::log_with_skip`], or set it with [`Logger::with_caller_skip`] right before the
/// call. The latter value is consumed by the next log call on this instance, whichever thread
/// makes it, so the chained form is not safe on a logger shared between threads. Use
/// [`Logger::log_with_skip`] or a logger per thread instead.
///
/// # Examples
///
/// ```
/// use logforth_console::Logger;
/// use logforth_console::Metadata;
/// use logforth_console::Severities;
///
/// let logger = Logger::new(Metadata::SHORT, Severities::DEFAULT);
/// logger.infoln("server started").unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    metadata: AtomicU8,
    severities: AtomicU8,
    caller_skip: AtomicUsize,
    append: Box<dyn Append>,
    timezone: TimeZone,
    working_dir: Option<PathBuf>,
    colored: bool,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    /// Create a logger writing to stdout with the given metadata fields and severity filter.
    pub fn new(metadata: Metadata, severities: Severities) -> Self {
        LoggerBuilder::new()
            .metadata(metadata)
            .severities(severities)
            .build()
    }

    /// Create a [`LoggerBuilder`] for further configuration.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(super) fn from_parts(
        metadata: Metadata,
        severities: Severities,
        append: Box<dyn Append>,
        timezone: TimeZone,
        working_dir: Option<PathBuf>,
        colored: bool,
    ) -> Self {
        Self {
            metadata: AtomicU8::new(metadata.bits()),
            severities: AtomicU8::new(severities.bits()),
            caller_skip: AtomicUsize::new(0),
            append,
            timezone,
            working_dir,
            colored,
        }
    }

    /// Replace the metadata fields rendered in the line prefix.
    pub fn with_metadata(&self, metadata: Metadata) -> &Self {
        self.metadata.store(metadata.bits(), Ordering::Relaxed);
        self
    }

    /// Replace the severities whose label is rendered.
    pub fn with_severity_filter(&self, severities: Severities) -> &Self {
        self.severities.store(severities.bits(), Ordering::Relaxed);
        self
    }

    /// Skip `skip` extra frames when resolving the call site of the next log call.
    ///
    /// The value is reset to zero by that call, even if it fails or formatting the message
    /// panics. See the type level docs for why this is not safe on a logger shared between
    /// threads.
    ///
    /// A `skip` above zero needs file and line debug info in the binary. Without it, as in the
    /// default `release` profile, the caller segment is left empty; set
    /// `debug = "line-tables-only"` in the profile to keep it.
    pub fn with_caller_skip(&self, skip: usize) -> &Self {
        self.caller_skip.store(skip, Ordering::Relaxed);
        self
    }

    /// The metadata fields currently rendered.
    pub fn metadata(&self) -> Metadata {
        Metadata::from_bits_retain(self.metadata.load(Ordering::Relaxed))
    }

    /// The severities whose label is currently rendered.
    pub fn severities(&self) -> Severities {
        Severities::from_bits_retain(self.severities.load(Ordering::Relaxed))
    }

    /// The pending caller skip of the next log call.
    pub fn caller_skip(&self) -> usize {
        self.caller_skip.load(Ordering::Relaxed)
    }

    /// Flush the target.
    pub fn flush(&self) -> Result<(), Error> {
        self.append.flush()
    }

    /// Write `text` with the given severity.
    ///
    /// Consumes the pending caller skip, which is zero again once this returns, whether the
    /// write succeeded or not.
    #[track_caller]
    pub fn log(&self, severity: Severity, text: &str) -> Result<usize, Error> {
        let skip = self.caller_skip.swap(0, Ordering::Relaxed);
        self.log_at(severity, Location::caller(), skip, Timestamp::now(), text)
    }

    /// Write `text` with the given severity, resolving the call site `skip` frames further out.
    ///
    /// The pending caller skip of this logger is neither read nor reset.
    ///
    /// A `skip` above zero needs file and line debug info in the binary. Without it, as in the
    /// default `release` profile, the caller segment is left empty; set
    /// `debug = "line-tables-only"` in the profile to keep it.
    #[track_caller]
    pub fn log_with_skip(
        &self,
        severity: Severity,
        skip: usize,
        text: &str,
    ) -> Result<usize, Error> {
        self.log_at(severity, Location::caller(), skip, Timestamp::now(), text)
    }

    // The skip is consumed before `shape` runs user formatting code, so a panicking `Display`
    // cannot leave it set.
    #[track_caller]
    fn log_shaped(
        &self,
        severity: Severity,
        shape: impl FnOnce() -> String,
    ) -> Result<usize, Error> {
        let skip = self.caller_skip.swap(0, Ordering::Relaxed);
        let now = Timestamp::now();
        let text = shape();
        self.log_at(severity, Location::caller(), skip, now, &text)
    }

    fn log_at(
        &self,
        severity: Severity,
        location: &'static Location<'static>,
        skip: usize,
        now: Timestamp,
        text: &str,
    ) -> Result<usize, Error> {
        let site = if self.metadata().has_caller() {
            caller::resolve(location, skip)
        } else {
            None
        };
        self.write_line(severity, now, site, text)
    }

    /// Compose the line for an already resolved call site and write it.
    pub(crate) fn write_line(
        &self,
        severity: Severity,
        now: Timestamp,
        site: Option<CallSite>,
        text: &str,
    ) -> Result<usize, Error> {
        let metadata = self.metadata();
        let now = now.to_zoned(self.timezone.clone());
        let timestamp = format_timestamp(metadata, &now);
        let caller = caller::render(site.as_ref(), metadata, self.working_dir.as_deref());

        let line = Line {
            timestamp: &timestamp,
            caller: &caller,
            severity,
            severities: self.severities(),
            colored: self.colored,
            body: text,
        };
        self.append.append(&line.compose())
    }

    /// The directory short call sites are rendered relative to.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Write `msg` as a plain line.
    #[track_caller]
    pub fn print(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Print, || msg.to_string())
    }

    /// Write `msg` followed by a newline.
    #[track_caller]
    pub fn println(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Print, || format!("{msg}\n"))
    }

    /// Write formatted arguments, see [`printf!`](crate::printf!).
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log_shaped(Severity::Print, || fmt::format(args))
    }

    /// Write `msg` with the `[INFO] ` label.
    #[track_caller]
    pub fn info(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Info, || msg.to_string())
    }

    /// Write `msg` with the `[INFO] ` label, followed by a newline.
    #[track_caller]
    pub fn infoln(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Info, || format!("{msg}\n"))
    }

    /// Write formatted arguments with the `[INFO] ` label.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log_shaped(Severity::Info, || fmt::format(args))
    }

    /// Write `msg` with the `[WARN] ` label.
    #[track_caller]
    pub fn warn(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Warn, || msg.to_string())
    }

    /// Write `msg` with the `[WARN] ` label, followed by a newline.
    #[track_caller]
    pub fn warnln(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Warn, || format!("{msg}\n"))
    }

    /// Write formatted arguments with the `[WARN] ` label.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log_shaped(Severity::Warn, || fmt::format(args))
    }

    /// Write `msg` with the `[DEBUG] ` label.
    #[track_caller]
    pub fn debug(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Debug, || msg.to_string())
    }

    /// Write `msg` with the `[DEBUG] ` label, followed by a newline.
    #[track_caller]
    pub fn debugln(&self, msg: impl fmt::Display) -> Result<usize, Error> {
        self.log_shaped(Severity::Debug, || format!("{msg}\n"))
    }

    /// Write formatted arguments with the `[DEBUG] ` label.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log_shaped(Severity::Debug, || fmt::format(args))
    }

    /// Write the description of `err` with the `[ERROR] ` label.
    #[track_caller]
    pub fn error<E>(&self, err: &E) -> Result<usize, Error>
    where
        E: std::error::Error + ?Sized,
    {
        self.log_shaped(Severity::Error, || err.to_string())
    }

    /// Write the description of `err` with the `[ERROR] ` label, followed by a newline.
    #[track_caller]
    pub fn errorln<E>(&self, err: &E) -> Result<usize, Error>
    where
        E: std::error::Error + ?Sized,
    {
        self.log_shaped(Severity::Error, || format!("{err}\n"))
    }

    /// Write formatted arguments with the `[ERROR] ` label.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log_shaped(Severity::Error, || fmt::format(args))
    }
}
