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

//! Composition of the colored line prefix.

use std::fmt::Write;

use jiff::Zoned;

use crate::Metadata;
use crate::Severities;
use crate::Severity;
use crate::color::Paint;
use crate::color::Painted;

/// Format the timestamp segment selected by `metadata`.
///
/// Each enabled field is followed by a single space, in the fixed order date, time, zone.
/// Disabled fields are omitted entirely.
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
/// use logforth_console::Metadata;
/// use logforth_console::layout::format_timestamp;
///
/// let now = date(2024, 8, 11).at(22, 44, 57, 0).to_zoned(TimeZone::UTC).unwrap();
/// assert_eq!(format_timestamp(Metadata::DATE | Metadata::ZONE, &now), "2024-08-11 Z ");
/// ```
pub fn format_timestamp(metadata: Metadata, now: &Zoned) -> String {
    let mut text = String::new();
    if metadata.contains(Metadata::DATE) {
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{} ", now.strftime("%Y-%m-%d")).unwrap();
    }
    if metadata.contains(Metadata::TIME) {
        write!(&mut text, "{} ", now.strftime("T%H:%M:%S")).unwrap();
    }
    if metadata.contains(Metadata::ZONE) {
        if now.offset().seconds() == 0 {
            text.push_str("Z ");
        } else {
            write!(&mut text, "{} ", now.strftime("%:z")).unwrap();
        }
    }
    text
}

/// The pieces of one log line before they are joined.
#[derive(Debug)]
pub(crate) struct Line<'a> {
    pub(crate) timestamp: &'a str,
    pub(crate) caller: &'a str,
    pub(crate) severity: Severity,
    pub(crate) severities: Severities,
    pub(crate) colored: bool,
    pub(crate) body: &'a str,
}

impl Line<'_> {
    /// Join the prefix and the body into the bytes of a single write.
    pub(crate) fn compose(&self) -> Vec<u8> {
        let mut text = String::with_capacity(self.body.len() + 64);
        write!(
            &mut text,
            "{}{}",
            self.paint(Paint::GREEN, self.timestamp),
            self.paint(Paint::BLUE, self.caller)
        )
        .unwrap();
        if self.severities.renders(self.severity) {
            write!(
                &mut text,
                "{}",
                self.paint(self.severity.paint(), self.severity.label())
            )
            .unwrap();
        }
        text.push_str(self.body);
        text.into_bytes()
    }

    fn paint<'t>(&self, paint: Paint, text: &'t str) -> Painted<'t> {
        if self.colored {
            paint.paint(text)
        } else {
            Painted::plain(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz;
    use jiff::tz::TimeZone;

    use super::*;

    fn shanghai_evening() -> Zoned {
        date(2024, 8, 11)
            .at(22, 44, 57, 0)
            .to_zoned(TimeZone::fixed(tz::offset(8)))
            .unwrap()
    }

    #[test]
    fn test_timestamp_fields_in_order() {
        let now = shanghai_evening();
        assert_eq!(
            format_timestamp(Metadata::DEFAULT, &now),
            "2024-08-11 T22:44:57 +08:00 "
        );
        assert_eq!(format_timestamp(Metadata::SHORT, &now), "T22:44:57 ");
        assert_eq!(format_timestamp(Metadata::empty(), &now), "");
        assert_eq!(
            format_timestamp(Metadata::DATE | Metadata::ZONE, &now),
            "2024-08-11 +08:00 "
        );
    }

    #[test]
    fn test_timestamp_every_combination() {
        let now = shanghai_evening();
        let fields = [
            (Metadata::DATE, "2024-08-11"),
            (Metadata::TIME, "T22:44:57"),
            (Metadata::ZONE, "+08:00"),
        ];
        for bits in 0..=Metadata::all().bits() {
            let metadata = Metadata::from_bits_truncate(bits);
            let expected: String = fields
                .iter()
                .filter(|(flag, _)| metadata.contains(*flag))
                .map(|(_, text)| format!("{text} "))
                .collect();
            assert_eq!(format_timestamp(metadata, &now), expected, "{metadata:?}");
        }
    }

    #[test]
    fn test_utc_zone_is_z() {
        let now = date(2024, 1, 2).at(3, 4, 5, 0).to_zoned(TimeZone::UTC).unwrap();
        assert_eq!(format_timestamp(Metadata::ZONE, &now), "Z ");
        assert_eq!(
            format_timestamp(Metadata::FULL, &now),
            "2024-01-02 T03:04:05 Z "
        );
    }

    #[test]
    fn test_negative_offset() {
        let now = date(2024, 1, 2)
            .at(3, 4, 5, 0)
            .to_zoned(TimeZone::fixed(tz::offset(-5)))
            .unwrap();
        assert_eq!(format_timestamp(Metadata::ZONE, &now), "-05:00 ");
    }

    #[test]
    fn test_compose_with_label() {
        let line = Line {
            timestamp: "T22:44:57 ",
            caller: "src/main.rs:3 ",
            severity: Severity::Warn,
            severities: Severities::DEFAULT,
            colored: true,
            body: "careful",
        };
        let text = String::from_utf8(line.compose()).unwrap();
        assert_eq!(
            text,
            "\x1b[1;32mT22:44:57 \x1b[0m\x1b[1;34msrc/main.rs:3 \x1b[0m\x1b[1;33m[WARN] \x1b[0mcareful"
        );
    }

    #[test]
    fn test_compose_filtered_label() {
        let line = Line {
            timestamp: "",
            caller: "",
            severity: Severity::Warn,
            severities: Severities::INFO,
            colored: true,
            body: "x",
        };
        let text = String::from_utf8(line.compose()).unwrap();
        assert_eq!(text, "\x1b[1;32m\x1b[0m\x1b[1;34m\x1b[0mx");
    }

    #[test]
    fn test_compose_plain_severity_keeps_white_wrapper() {
        let line = Line {
            timestamp: "",
            caller: "",
            severity: Severity::Print,
            severities: Severities::DEFAULT,
            colored: true,
            body: "x",
        };
        let text = String::from_utf8(line.compose()).unwrap();
        assert_eq!(text, "\x1b[1;32m\x1b[0m\x1b[1;34m\x1b[0m\x1b[3;30m\x1b[0mx");
    }

    #[test]
    fn test_compose_without_color() {
        let line = Line {
            timestamp: "T22:44:57 ",
            caller: "src/main.rs:3 ",
            severity: Severity::Error,
            severities: Severities::DEFAULT,
            colored: false,
            body: "boom",
        };
        let text = String::from_utf8(line.compose()).unwrap();
        assert_eq!(text, "T22:44:57 src/main.rs:3 [ERROR] boom");
    }
}
