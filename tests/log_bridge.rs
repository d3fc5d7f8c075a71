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

#![cfg(feature = "bridge-log")]

use logforth_console::Logger;
use logforth_console::Metadata;
use logforth_console::Severities;
use logforth_console::append::Buffer;
use logforth_console::bridge::setup_log_crate;

#[test]
fn test_log_records_are_written() {
    let buffer = Buffer::default();
    let logger = Logger::builder()
        .metadata(Metadata::CALLER_SHORT)
        .severities(Severities::DEFAULT)
        .no_color()
        .append(buffer.clone())
        .build();
    setup_log_crate(Box::leak(Box::new(logger)), log::LevelFilter::Trace).unwrap();

    let line = line!() + 1;
    log::warn!("x={}", 1);
    log::trace!("fine grained");

    assert_eq!(
        buffer.lines(),
        vec![
            format!("tests/log_bridge.rs:{line} [WARN] x=1\n"),
            format!("tests/log_bridge.rs:{} [DEBUG] fine grained\n", line + 1),
        ]
    );
}
