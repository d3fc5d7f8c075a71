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

//! The process-wide default logger and the functions operating on it.
//!
//! Every function here is `#[track_caller]`, so the reported call site is the caller of the
//! function, never this module.

use std::fmt;
use std::sync::OnceLock;

use super::log_impl::Logger;
use crate::Error;
use crate::Metadata;
use crate::Severities;
use crate::Severity;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the process-wide default logger.
///
/// Unless [`set_default_logger`] ran first, it writes to stdout with [`Metadata::DEFAULT`] and
/// [`Severities::DEFAULT`].
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(Metadata::DEFAULT, Severities::DEFAULT))
}

/// Install `logger` as the process-wide default logger.
///
/// # Errors
///
/// Return an error if the default logger is already initialized, either by a previous call or
/// by any use of [`default_logger`].
pub fn set_default_logger(logger: Logger) -> Result<(), Error> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| Error::new("default logger is already initialized"))
}

/// Replace the metadata fields of the default logger.
pub fn with_metadata(metadata: Metadata) -> &'static Logger {
    default_logger().with_metadata(metadata)
}

/// Replace the severity filter of the default logger.
pub fn with_severity_filter(severities: Severities) -> &'static Logger {
    default_logger().with_severity_filter(severities)
}

/// Set the caller skip of the next log call on the default logger.
///
/// See [`Logger`] for why this is not safe when other threads use the default logger.
pub fn with_caller_skip(skip: usize) -> &'static Logger {
    default_logger().with_caller_skip(skip)
}

/// Flush the default logger.
pub fn flush() -> Result<(), Error> {
    default_logger().flush()
}

/// Write `text` with the given severity to the default logger.
#[track_caller]
pub fn log(severity: Severity, text: &str) -> Result<usize, Error> {
    default_logger().log(severity, text)
}

/// Write `text` to the default logger, resolving the call site `skip` frames further out.
#[track_caller]
pub fn log_with_skip(severity: Severity, skip: usize, text: &str) -> Result<usize, Error> {
    default_logger().log_with_skip(severity, skip, text)
}

/// See [`Logger::print`].
#[track_caller]
pub fn print(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().print(msg)
}

/// See [`Logger::println`].
#[track_caller]
pub fn println(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().println(msg)
}

/// See [`Logger::printf`].
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) -> Result<usize, Error> {
    default_logger().printf(args)
}

/// See [`Logger::info`].
#[track_caller]
pub fn info(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().info(msg)
}

/// See [`Logger::infoln`].
#[track_caller]
pub fn infoln(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().infoln(msg)
}

/// See [`Logger::infof`].
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) -> Result<usize, Error> {
    default_logger().infof(args)
}

/// See [`Logger::warn`].
#[track_caller]
pub fn warn(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().warn(msg)
}

/// See [`Logger::warnln`].
#[track_caller]
pub fn warnln(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().warnln(msg)
}

/// See [`Logger::warnf`].
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) -> Result<usize, Error> {
    default_logger().warnf(args)
}

/// See [`Logger::debug`].
#[track_caller]
pub fn debug(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().debug(msg)
}

/// See [`Logger::debugln`].
#[track_caller]
pub fn debugln(msg: impl fmt::Display) -> Result<usize, Error> {
    default_logger().debugln(msg)
}

/// See [`Logger::debugf`].
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) -> Result<usize, Error> {
    default_logger().debugf(args)
}

/// See [`Logger::error`].
#[track_caller]
pub fn error<E>(err: &E) -> Result<usize, Error>
where
    E: std::error::Error + ?Sized,
{
    default_logger().error(err)
}

/// See [`Logger::errorln`].
#[track_caller]
pub fn errorln<E>(err: &E) -> Result<usize, Error>
where
    E: std::error::Error + ?Sized,
{
    default_logger().errorln(err)
}

/// See [`Logger::errorf`].
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) -> Result<usize, Error> {
    default_logger().errorf(args)
}
