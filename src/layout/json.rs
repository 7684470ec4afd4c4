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

//! The structured, machine-oriented line format.
//!
//! Output format:
//!
//! ```text
//! {"lvl":"INFO","ts":1723416297,"dt":"2024-08-11 22:44:57 +0000","user":"alice","message":"login"}
//! ```
//!
//! Field order is fixed: `lvl`, `ts` (Unix seconds), `dt` (formatted
//! timestamp), then every metadata entry in insertion order. The object is
//! assembled by hand because duplicate keys are allowed and must all appear;
//! a map would collapse them.

use std::fmt::Write;

use serde_json::Value;

use crate::Record;
use crate::layout::TIMESTAMP_LAYOUT;
use crate::time::TimeFormat;

pub(crate) fn format(record: &Record, formatter: &dyn TimeFormat) -> String {
    let mut line = String::with_capacity(128);
    line.push('{');

    push_field(&mut line, "lvl", &Value::from(record.level().as_str()));
    push_field(
        &mut line,
        "ts",
        &Value::from(record.timestamp().timestamp().as_second()),
    );
    push_field(
        &mut line,
        "dt",
        &Value::from(formatter.format(record.timestamp(), TIMESTAMP_LAYOUT)),
    );
    for entry in record.metadata() {
        push_field(&mut line, &entry.key, &entry.value);
    }

    line.push('}');
    line
}

// Keys and values are JSON-encoded individually; `Value`'s Display emits
// compact, escaped JSON.
fn push_field(line: &mut String, key: &str, value: &Value) {
    if line.len() > 1 {
        line.push(',');
    }
    let _ = write!(line, "{}:{}", Value::from(key), value);
}
