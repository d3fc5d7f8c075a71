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

//! Severities of log lines and the filter set selecting which of them render their label.

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::color::Paint;

/// The severity of a log line.
///
/// Only the colored label depends on the severity. The message body is written for every
/// severity regardless of the logger's [`Severities`] filter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Plain output without a label.
    Print,
    /// The "info" severity.
    Info,
    /// The "warn" severity.
    Warn,
    /// The "debug" severity.
    Debug,
    /// The "error" severity.
    Error,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 5] = [
        Severity::Print,
        Severity::Info,
        Severity::Warn,
        Severity::Debug,
        Severity::Error,
    ];

    /// The label text rendered in front of the message body.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Print => "",
            Severity::Info => "[INFO] ",
            Severity::Warn => "[WARN] ",
            Severity::Debug => "[DEBUG] ",
            Severity::Error => "[ERROR] ",
        }
    }

    /// The terminal color template of the label.
    pub fn paint(&self) -> Paint {
        match self {
            Severity::Print => Paint::WHITE,
            Severity::Info => Paint::CYAN,
            Severity::Warn => Paint::YELLOW,
            Severity::Debug => Paint::PURPLE,
            Severity::Error => Paint::RED,
        }
    }

    /// The bit of this severity in a [`Severities`] set.
    pub fn flag(&self) -> Severities {
        match self {
            Severity::Print => Severities::PRINT,
            Severity::Info => Severities::INFO,
            Severity::Warn => Severities::WARN,
            Severity::Debug => Severities::DEBUG,
            Severity::Error => Severities::ERROR,
        }
    }

    /// The name of this severity in upper case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Print => "PRINT",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Debug => "DEBUG",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::new("malformed severity").with_context("input", s))
    }
}

bitflags::bitflags! {
    /// A set of severities whose label is rendered.
    ///
    /// A severity missing from the set still writes its message body, only without the label.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Severities: u8 {
        /// Render the (empty) label of [`Severity::Print`].
        const PRINT = 1 << 0;
        /// Render `[INFO] `.
        const INFO = 1 << 1;
        /// Render `[WARN] `.
        const WARN = 1 << 2;
        /// Render `[DEBUG] `.
        const DEBUG = 1 << 3;
        /// Render `[ERROR] `.
        const ERROR = 1 << 4;

        /// Every severity renders its label.
        const DEFAULT = Self::PRINT.bits()
            | Self::INFO.bits()
            | Self::WARN.bits()
            | Self::DEBUG.bits()
            | Self::ERROR.bits();
    }
}

impl Default for Severities {
    fn default() -> Self {
        Severities::DEFAULT
    }
}

impl Severities {
    /// Whether the label of `severity` is rendered.
    pub fn renders(&self, severity: Severity) -> bool {
        self.contains(severity.flag())
    }
}

impl From<Severity> for Severities {
    fn from(severity: Severity) -> Self {
        severity.flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renders_every_severity() {
        let severities = Severities::default();
        for severity in Severity::ALL {
            assert!(severities.renders(severity), "{severity} should render");
        }
        assert!(Severities::all().contains(Severities::DEFAULT));
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        let severities = Severities::empty();
        assert!(Severity::ALL.iter().all(|s| !severities.renders(*s)));
    }

    #[test]
    fn test_bits_are_independent() {
        let severities = Severities::INFO | Severities::ERROR;
        assert!(severities.renders(Severity::Info));
        assert!(severities.renders(Severity::Error));
        assert!(!severities.renders(Severity::Warn));
        assert!(!severities.renders(Severity::Print));
        assert!(!severities.renders(Severity::Debug));
    }

    #[test]
    fn test_parse_severity() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Print.label(), "");
        assert_eq!(Severity::Info.label(), "[INFO] ");
        assert_eq!(Severity::Warn.label(), "[WARN] ");
        assert_eq!(Severity::Debug.label(), "[DEBUG] ");
        assert_eq!(Severity::Error.label(), "[ERROR] ");
    }
}
