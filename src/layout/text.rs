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

//! The simple, human-oriented line format.
//!
//! Output format:
//!
//! ```text
//! [2024-08-11 22:44:57 +0800]  INFO user: "alice" message: "login"
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use serde_json::Value;

use crate::Record;
use crate::layout::TIMESTAMP_LAYOUT;
use crate::time::TimeFormat;

pub(crate) fn format(record: &Record, formatter: &dyn TimeFormat) -> String {
    let mut line = String::with_capacity(64);

    let time = formatter.format(record.timestamp(), TIMESTAMP_LAYOUT);
    let _ = write!(line, "[{time}] {:>5} ", record.level());

    for entry in record.metadata() {
        let _ = write!(line, "{}: \"{}\" ", entry.key, plain(&entry.value));
    }

    line
}

// Values are rendered in their plain display form: strings without JSON
// quoting, everything else as compact JSON.
fn plain(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
