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

//! Targets that receive composed log lines.

use std::fmt;

use crate::Error;

mod buffer;
mod stdio;

pub use self::buffer::Buffer;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;

/// A target that receives composed log lines.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one composed line to the target in a single write call.
    ///
    /// Returns the number of bytes written.
    fn append(&self, line: &[u8]) -> Result<usize, Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
