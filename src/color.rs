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

//! Terminal color templates.

use std::fmt;

use colored::Color;

/// The text style half of a [`Paint`] escape sequence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Style {
    /// Bold text, SGR code `1`.
    Bold,
    /// Italic text, SGR code `3`.
    Italic,
}

impl Style {
    fn code(&self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Italic => "3",
        }
    }
}

/// A fixed terminal escape template: `ESC[<style>;<color>m<text>ESC[0m`.
///
/// The escapes are always emitted, including around an empty string, so every segment of a log
/// line is delimited whether or not it has content.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Paint {
    style: Style,
    color: Color,
}

impl Paint {
    /// Italic black, used for plain lines.
    pub const WHITE: Paint = Paint::new(Style::Italic, Color::Black);
    /// Bold cyan, used for info labels.
    pub const CYAN: Paint = Paint::new(Style::Bold, Color::Cyan);
    /// Bold yellow, used for warn labels.
    pub const YELLOW: Paint = Paint::new(Style::Bold, Color::Yellow);
    /// Bold magenta, used for debug labels.
    pub const PURPLE: Paint = Paint::new(Style::Bold, Color::Magenta);
    /// Bold red, used for error labels.
    pub const RED: Paint = Paint::new(Style::Bold, Color::Red);
    /// Bold green, used for the timestamp.
    pub const GREEN: Paint = Paint::new(Style::Bold, Color::Green);
    /// Bold blue, used for the call site.
    pub const BLUE: Paint = Paint::new(Style::Bold, Color::Blue);
    /// Bold white.
    pub const ASH: Paint = Paint::new(Style::Bold, Color::White);

    /// Create a template from a style and a foreground color.
    pub const fn new(style: Style, color: Color) -> Self {
        Self { style, color }
    }

    /// Wrap `text` in this template.
    pub fn paint(self, text: &str) -> Painted<'_> {
        Painted {
            paint: Some(self),
            text,
        }
    }

    /// The opening escape sequence, e.g. `\x1b[1;36m`.
    pub fn prefix(&self) -> String {
        format!("\x1b[{};{}m", self.style.code(), self.color.to_fg_str())
    }

    /// The closing escape sequence.
    pub const RESET: &'static str = "\x1b[0m";
}

/// Text wrapped in an optional [`Paint`], rendered through [`fmt::Display`].
#[derive(Copy, Clone, Debug)]
pub struct Painted<'a> {
    paint: Option<Paint>,
    text: &'a str,
}

impl<'a> Painted<'a> {
    /// Text rendered as-is, without escapes.
    pub fn plain(text: &'a str) -> Self {
        Self { paint: None, text }
    }
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.paint {
            Some(paint) => write!(f, "{}{}{}", paint.prefix(), self.text, Paint::RESET),
            None => f.write_str(self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_codes() {
        assert_eq!(Paint::WHITE.paint("x").to_string(), "\x1b[3;30mx\x1b[0m");
        assert_eq!(Paint::CYAN.paint("x").to_string(), "\x1b[1;36mx\x1b[0m");
        assert_eq!(Paint::YELLOW.paint("x").to_string(), "\x1b[1;33mx\x1b[0m");
        assert_eq!(Paint::PURPLE.paint("x").to_string(), "\x1b[1;35mx\x1b[0m");
        assert_eq!(Paint::RED.paint("x").to_string(), "\x1b[1;31mx\x1b[0m");
        assert_eq!(Paint::GREEN.paint("x").to_string(), "\x1b[1;32mx\x1b[0m");
        assert_eq!(Paint::BLUE.paint("x").to_string(), "\x1b[1;34mx\x1b[0m");
        assert_eq!(Paint::ASH.paint("x").to_string(), "\x1b[1;37mx\x1b[0m");
    }

    #[test]
    fn test_empty_text_keeps_escapes() {
        assert_eq!(Paint::GREEN.paint("").to_string(), "\x1b[1;32m\x1b[0m");
    }

    #[test]
    fn test_plain() {
        assert_eq!(Painted::plain("hello").to_string(), "hello");
        assert_eq!(Painted::plain("").to_string(), "");
    }
}
