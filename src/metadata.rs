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

//! Metadata fields rendered in front of each log line.

bitflags::bitflags! {
    /// A set of metadata fields rendered in the line prefix.
    ///
    /// The timestamp fields always render in the order date, time, zone. When both caller bits
    /// are set, [`CALLER_SHORT`](Metadata::CALLER_SHORT) wins.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Metadata: u8 {
        /// Calendar date, e.g. `2024-08-11`.
        const DATE = 1 << 0;
        /// Clock time, e.g. `T22:44:57`.
        const TIME = 1 << 1;
        /// UTC offset, e.g. `+08:00` or `Z`.
        const ZONE = 1 << 2;
        /// Absolute `file:line` of the call site.
        const CALLER_FULL = 1 << 3;
        /// `file:line` of the call site relative to the working directory.
        const CALLER_SHORT = 1 << 4;

        /// Date, time, zone and the absolute call site.
        const FULL = Self::DATE.bits()
            | Self::TIME.bits()
            | Self::ZONE.bits()
            | Self::CALLER_FULL.bits();
        /// Time and the relative call site.
        const SHORT = Self::TIME.bits() | Self::CALLER_SHORT.bits();
        /// Date, time, zone and the relative call site.
        const DEFAULT = Self::DATE.bits()
            | Self::TIME.bits()
            | Self::ZONE.bits()
            | Self::CALLER_SHORT.bits();
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata::DEFAULT
    }
}

impl Metadata {
    /// Whether any call site field is selected.
    pub fn has_caller(&self) -> bool {
        self.intersects(Metadata::CALLER_FULL | Metadata::CALLER_SHORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(
            Metadata::FULL,
            Metadata::DATE | Metadata::TIME | Metadata::ZONE | Metadata::CALLER_FULL
        );
        assert_eq!(Metadata::SHORT, Metadata::TIME | Metadata::CALLER_SHORT);
        assert_eq!(Metadata::default(), Metadata::DEFAULT);
        assert!(!Metadata::DEFAULT.contains(Metadata::CALLER_FULL));
    }

    #[test]
    fn test_presets_combine_with_or() {
        let combined = Metadata::SHORT | Metadata::DATE;
        assert!(combined.contains(Metadata::DATE | Metadata::TIME));
        assert!(combined.has_caller());
        assert!(!Metadata::empty().has_caller());
        assert!(!(Metadata::DATE | Metadata::ZONE).has_caller());
    }
}
