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
use logforth_console::Metadata;
use logforth_console::Severities;

fn main() {
    logforth_console::println("Hello print!").unwrap();
    logforth_console::infoln("Hello info!").unwrap();
    logforth_console::warnln("Hello warn!").unwrap();
    logforth_console::debugln("Hello debug!").unwrap();
    logforth_console::errorf!("Hello error code={}!\n", 42).unwrap();

    let logger = Logger::new(Metadata::FULL, Severities::WARN | Severities::ERROR);
    logger.infoln("no label, full call site").unwrap();
    logger.warnln("labelled warning").unwrap();

    let err = std::io::Error::other("disk unplugged");
    logger.errorln(&err).unwrap();
}
