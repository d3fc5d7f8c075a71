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

//! Formatting macros for the formatted-print entry points.
//!
//! Each macro writes to the default logger, or to the logger given as `logger: <expr>;`.

/// Write a formatted plain line.
///
/// ```
/// use logforth_console::Logger;
/// use logforth_console::printf;
///
/// let logger = Logger::default();
/// printf!(logger: logger; "{} + {} = {}\n", 1, 2, 1 + 2).unwrap();
/// printf!("to the default logger\n").unwrap();
/// ```
#[macro_export]
macro_rules! printf {
    (logger: $logger:expr; $($arg:tt)+) => {
        ($logger).printf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::printf(::std::format_args!($($arg)+))
    };
}

/// Write a formatted line with the `[INFO] ` label.
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr; $($arg:tt)+) => {
        ($logger).infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Write a formatted line with the `[WARN] ` label.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr; $($arg:tt)+) => {
        ($logger).warnf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Write a formatted line with the `[DEBUG] ` label.
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr; $($arg:tt)+) => {
        ($logger).debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Write a formatted line with the `[ERROR] ` label.
///
/// ```
/// use logforth_console::Logger;
/// use logforth_console::errorf;
///
/// let logger = Logger::default();
/// errorf!(logger: logger; "code={}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr; $($arg:tt)+) => {
        ($logger).errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}
