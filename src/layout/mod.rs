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

//! Rendering of records into on-disk lines.

mod json;
mod text;

use crate::Record;
use crate::time::TimeFormat;

/// The timestamp layout used inside rendered lines, in either calendar.
pub(crate) const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// The on-disk rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Layout {
    /// One human-readable line per record.
    Simple,
    /// One single-line JSON object per record.
    #[default]
    Structured,
}

impl Layout {
    pub(crate) fn format(&self, record: &Record, formatter: &dyn TimeFormat) -> String {
        match self {
            Layout::Simple => text::format(record, formatter),
            Layout::Structured => json::format(record, formatter),
        }
    }
}
