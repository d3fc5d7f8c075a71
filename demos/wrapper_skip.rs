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

use logforth_console::Logger;
use logforth_console::Severity;

// A helper that is not `#[track_caller]` reports its own caller by skipping one frame.
fn audit(logger: &Logger, action: &str) {
    logger
        .log_with_skip(Severity::Info, 1, &format!("audit: {action}\n"))
        .unwrap();
}

#[track_caller]
fn tracked(action: &str) {
    logforth_console::infoln(format_args!("tracked: {action}")).unwrap();
}

fn main() {
    let logger = Logger::default();
    audit(&logger, "login");
    audit(&logger, "logout");

    tracked("no skip needed");

    // the chained form; only sound while no other thread logs through this instance
    logger.with_caller_skip(0).infoln("direct").unwrap();
}
