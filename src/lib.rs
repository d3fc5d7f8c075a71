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

//! A colored console logger.
//!
//! # Overview
//!
//! Each message is decorated with a prefix made of a timestamp, the call site and a severity
//! label, colored with fixed terminal escape templates, and written to stdout in one write call:
//!
//! ```text
//! 2024-08-11 T22:44:57 +08:00 src/main.rs:12 [INFO] server started
//! ```
//!
//! Which metadata fields are rendered is selected with [`Metadata`], which severities render
//! their label with [`Severities`]. A filtered severity still writes its message body.
//!
//! # Examples
//!
//! Log through the process-wide default logger:
//!
//! ```
//! logforth_console::infoln("hello").unwrap();
//! logforth_console::errorf!("code={}", 42).unwrap();
//! ```
//!
//! Log through an independent logger:
//!
//! ```
//! use logforth_console::Logger;
//! use logforth_console::Metadata;
//! use logforth_console::Severities;
//!
//! let logger = Logger::new(Metadata::SHORT, Severities::WARN | Severities::ERROR);
//! logger.warnln("disk almost full").unwrap();
//! logger.infoln("no label for me").unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub extern crate colored;
pub extern crate jiff;

pub mod append;
pub mod bridge;
pub mod caller;
pub mod color;
pub mod layout;

mod error;
mod logger;
mod macros;
mod metadata;
mod severity;

pub use self::append::Append;
pub use self::error::Error;
pub use self::logger::*;
pub use self::metadata::Metadata;
pub use self::severity::Severities;
pub use self::severity::Severity;
