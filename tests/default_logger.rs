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

use std::sync::OnceLock;

use logforth_console::Logger;
use logforth_console::Metadata;
use logforth_console::Severities;
use logforth_console::Severity;
use logforth_console::append::Buffer;

// Every test in this binary shares the default logger.
fn installed() -> &'static Buffer {
    static BUFFER: OnceLock<Buffer> = OnceLock::new();
    BUFFER.get_or_init(|| {
        let buffer = Buffer::default();
        let logger = Logger::builder()
            .metadata(Metadata::CALLER_SHORT)
            .severities(Severities::DEFAULT)
            .no_color()
            .append(buffer.clone())
            .build();
        logforth_console::set_default_logger(logger).unwrap();
        buffer
    })
}

#[test]
fn test_package_functions_use_default_logger() {
    let buffer = installed();

    let line = line!() + 1;
    logforth_console::infoln("one").unwrap();
    logforth_console::warnf!("two={}", 2).unwrap();
    logforth_console::with_caller_skip(5);
    logforth_console::log(Severity::Debug, "three").unwrap();
    assert_eq!(logforth_console::default_logger().caller_skip(), 0);

    let lines = buffer.take();
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert_eq!(lines[0], format!("tests/default_logger.rs:{line} [INFO] one\n"));
    assert_eq!(lines[1], format!("tests/default_logger.rs:{} [WARN] two=2", line + 1));
    assert!(lines[2].ends_with("[DEBUG] three"), "{lines:?}");
}

#[test]
fn test_default_logger_is_installed_once() {
    installed();

    let err = logforth_console::set_default_logger(Logger::default()).unwrap_err();
    assert_eq!(err.message(), "default logger is already initialized");
    assert!(std::ptr::eq(
        logforth_console::default_logger(),
        logforth_console::default_logger()
    ));
}
