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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::append::Append;

/// An appender that collects log lines in memory.
///
/// Clones share the same storage, so a clone kept by the caller observes every line written
/// through the logger that owns the other one.
///
/// # Examples
///
/// ```
/// use logforth_console::Logger;
/// use logforth_console::Metadata;
/// use logforth_console::Severities;
/// use logforth_console::append::Buffer;
///
/// let buffer = Buffer::default();
/// let logger = Logger::builder()
///     .metadata(Metadata::empty())
///     .severities(Severities::empty())
///     .no_color()
///     .append(buffer.clone())
///     .build();
///
/// logger.print("hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    lines: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl Buffer {
    fn lock(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        // a poisoned buffer still holds whole lines
        self.lines.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Every line written so far, concatenated and decoded lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().concat()).into_owned()
    }

    /// The lines written so far, one entry per write.
    pub fn lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }

    /// Remove and return the lines written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
            .into_iter()
            .map(|line| String::from_utf8_lossy(&line).into_owned())
            .collect()
    }
}

impl Append for Buffer {
    fn append(&self, line: &[u8]) -> Result<usize, Error> {
        self.lock().push(line.to_vec());
        Ok(line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_lines() {
        let buffer = Buffer::default();
        let writer = buffer.clone();

        assert_eq!(writer.append(b"first ").unwrap(), 6);
        assert_eq!(writer.append(b"second").unwrap(), 6);

        assert_eq!(buffer.lines(), vec!["first ", "second"]);
        assert_eq!(buffer.contents(), "first second");
        assert_eq!(buffer.take().len(), 2);
        assert!(buffer.lines().is_empty());
    }
}
