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

//! Call site resolution and rendering.

use std::borrow::Cow;
use std::panic::Location;
use std::path::Path;
use std::path::PathBuf;

use crate::Metadata;

/// The source location a log line was emitted from.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CallSite<'a> {
    file: Cow<'a, Path>,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Create a call site from a file path and a line number.
    pub fn new(file: impl Into<Cow<'a, Path>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The source file, as known to the compiler or the debug info.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The line number.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite::new(Path::new(location.file()), location.line())
    }
}

/// Resolve the call site `skip` frames outward from `location`.
///
/// With `skip == 0` this is `location` itself. Otherwise the stack is walked for the frame of
/// `location`, and the `skip`-th frame after it that carries file and line debug info is
/// returned. Symbols are resolved one frame at a time and the walk stops once that frame is
/// found. `None` if either frame cannot be found.
///
/// The walk relies on file and line debug info. A build without it, such as the default
/// `release` profile, resolves nothing for `skip > 0`; `debug = "line-tables-only"` in the
/// profile is enough to keep it working.
pub(crate) fn resolve(
    location: &'static Location<'static>,
    skip: usize,
) -> Option<CallSite<'static>> {
    if skip == 0 {
        return Some(CallSite::from(location));
    }

    let mut found = false;
    let mut remaining = skip;
    let mut site = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if site.is_some() {
                return;
            }
            let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            if !found {
                found = line == location.line() && file.ends_with(location.file());
                return;
            }
            remaining -= 1;
            if remaining == 0 {
                site = Some(CallSite::new(file.to_path_buf(), line));
            }
        });
        site.is_none()
    });
    site
}

/// Render the call site segment selected by `metadata`.
///
/// The segment is `path:line ` with a trailing space, or empty when no caller bit is set or
/// the call site is unknown.
pub fn render(site: Option<&CallSite>, metadata: Metadata, working_dir: Option<&Path>) -> String {
    let Some(site) = site else {
        return String::new();
    };

    let path = if metadata.contains(Metadata::CALLER_SHORT) {
        short_path(site.file(), working_dir)
    } else if metadata.contains(Metadata::CALLER_FULL) {
        full_path(site.file(), working_dir)
    } else {
        return String::new();
    };

    format!("{}:{} ", path.display(), site.line())
}

// Paths the compiler records for workspace crates are already relative. An absolute path outside
// the working directory, or an empty working directory, keeps the full path.
fn short_path<'a>(file: &'a Path, working_dir: Option<&Path>) -> Cow<'a, Path> {
    if file.is_relative() {
        return Cow::Borrowed(file);
    }

    working_dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .and_then(|dir| file.strip_prefix(dir).ok())
        .filter(|rel| !rel.as_os_str().is_empty())
        .map_or(Cow::Borrowed(file), Cow::Borrowed)
}

fn full_path<'a>(file: &'a Path, working_dir: Option<&Path>) -> Cow<'a, Path> {
    match working_dir {
        Some(dir) if file.is_relative() && !dir.as_os_str().is_empty() => {
            Cow::Owned(dir.join(file))
        }
        _ => Cow::Borrowed(file),
    }
}

/// The working directory used when a logger does not configure one.
///
/// A non-empty `PWD` takes precedence, matching what a shell user sees; otherwise the process
/// working directory.
pub(crate) fn default_working_dir() -> Option<PathBuf> {
    std::env::var_os("PWD")
        .filter(|pwd| !pwd.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(file: &str, line: u32) -> CallSite<'static> {
        CallSite::new(PathBuf::from(file), line)
    }

    #[test]
    fn test_short_strips_working_dir() {
        let site = site("/home/dev/app/src/main.rs", 42);
        let rendered = render(
            Some(&site),
            Metadata::CALLER_SHORT,
            Some(Path::new("/home/dev/app")),
        );
        assert_eq!(rendered, "src/main.rs:42 ");
    }

    #[test]
    fn test_short_tolerates_trailing_separator() {
        let site = site("/home/dev/app/src/main.rs", 7);
        let rendered = render(
            Some(&site),
            Metadata::CALLER_SHORT,
            Some(Path::new("/home/dev/app/")),
        );
        assert_eq!(rendered, "src/main.rs:7 ");
    }

    #[test]
    fn test_short_falls_back_to_full_path() {
        let site = site("/opt/other/lib.rs", 3);
        for dir in [Some(Path::new("/home/dev/app")), Some(Path::new("")), None] {
            let rendered = render(Some(&site), Metadata::CALLER_SHORT, dir);
            assert_eq!(rendered, "/opt/other/lib.rs:3 ");
        }
    }

    #[test]
    fn test_short_keeps_relative_path() {
        let site = site("src/lib.rs", 12);
        let rendered = render(Some(&site), Metadata::CALLER_SHORT, Some(Path::new("/x")));
        assert_eq!(rendered, "src/lib.rs:12 ");
    }

    #[test]
    fn test_full_path() {
        let site = site("/home/dev/app/src/main.rs", 42);
        let rendered = render(
            Some(&site),
            Metadata::CALLER_FULL,
            Some(Path::new("/home/dev/app")),
        );
        assert_eq!(rendered, "/home/dev/app/src/main.rs:42 ");

        let site = CallSite::new(PathBuf::from("src/main.rs"), 5);
        let rendered = render(
            Some(&site),
            Metadata::CALLER_FULL,
            Some(Path::new("/home/dev/app")),
        );
        let expected = format!("{}:5 ", Path::new("/home/dev/app").join("src/main.rs").display());
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_short_wins_over_full() {
        let site = site("/home/dev/app/src/main.rs", 1);
        let rendered = render(
            Some(&site),
            Metadata::CALLER_SHORT | Metadata::CALLER_FULL,
            Some(Path::new("/home/dev/app")),
        );
        assert_eq!(rendered, "src/main.rs:1 ");
    }

    #[test]
    fn test_no_caller_bits() {
        let site = site("/home/dev/app/src/main.rs", 1);
        let metadata = Metadata::DATE | Metadata::TIME | Metadata::ZONE;
        assert_eq!(render(Some(&site), metadata, None), "");
        assert_eq!(render(None, Metadata::CALLER_SHORT, None), "");
    }

    #[test]
    fn test_resolve_without_skip_is_direct_location() {
        let location = Location::caller();
        let site = resolve(location, 0).unwrap();
        assert_eq!(site.file(), Path::new(location.file()));
        assert_eq!(site.line(), location.line());
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert!(resolve(Location::caller(), 100_000).is_none());
    }
}
