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

//! Colorized console echo for development mode.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Level;
use crate::Record;
use crate::layout::TIMESTAMP_LAYOUT;
use crate::time::TimeFormat;

/// Colors for the console echo of each log level.
#[derive(Debug, Clone)]
struct LevelColor {
    debug: Color,
    info: Color,
    warn: Color,
    /// Shared by `Error` and `Panic`.
    error: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            debug: Color::Magenta,
            info: Color::Blue,
            warn: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl LevelColor {
    fn colorize(&self, level: Level) -> ColoredString {
        let color = match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warn => self.warn,
            Level::Error | Level::Panic => self.error,
        };
        ColoredString::from(format!("{level:>5}")).color(color)
    }
}

/// Prints one colorized line for `record` to stdout.
///
/// Always derived from the record directly, independent of the on-disk
/// rendering mode. Purely operator-facing; no machine-readable contract.
pub(crate) fn print(record: &Record, formatter: &dyn TimeFormat) {
    let colors = LevelColor::default();
    let time = formatter.format(record.timestamp(), TIMESTAMP_LAYOUT);

    print!("{} [{}] ", colors.colorize(record.level()), time.italic());
    for entry in record.metadata() {
        print!(
            "{}: {} ",
            entry.key.underline(),
            entry.value.to_string().bright_green()
        );
    }
    println!();
}
