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

//! Log records and metadata attach options.

use jiff::Zoned;
use serde::Serialize;
use serde_json::Value;

use crate::Level;

/// One key/value pair of record metadata.
///
/// Keys are not required to be unique; every entry is emitted, in insertion
/// order, by both rendering modes.
#[derive(Clone, Debug)]
pub struct MetadataEntry {
    /// The metadata key. Never blank.
    pub key: String,
    /// The metadata value, already JSON-encoded.
    pub value: Value,
}

/// The payload of one log call: a level, the capture time, and ordered
/// metadata.
///
/// Records are built privately by the level methods of
/// [`Logger`](crate::Logger) and handed to the worker by value; they are never
/// retained after being written.
#[derive(Clone, Debug)]
pub struct Record {
    level: Level,
    timestamp: Zoned,
    metadata: Vec<MetadataEntry>,
}

impl Record {
    pub(crate) fn new(level: Level, options: impl IntoIterator<Item = LogOption>) -> Record {
        let mut record = Record {
            level,
            timestamp: Zoned::now(),
            metadata: Vec::new(),
        };

        for option in options {
            if let Some(entry) = option.entry {
                record.metadata.push(entry);
            }
        }

        record
    }

    // A record with no metadata carries nothing worth writing; such records
    // are dropped before they reach the queue.
    pub(crate) fn is_zero(&self) -> bool {
        self.metadata.is_empty()
    }

    /// The severity of this record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The instant this record was captured, in the system timezone.
    pub fn timestamp(&self) -> &Zoned {
        &self.timestamp
    }

    /// The attached metadata, in insertion order.
    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    #[cfg(test)]
    pub(crate) fn with_timestamp(mut self, timestamp: Zoned) -> Record {
        self.timestamp = timestamp;
        self
    }
}

/// An attach option accepted by the level methods of [`Logger`](crate::Logger).
///
/// Build one with [`with`] or [`with_message`].
#[derive(Clone, Debug)]
pub struct LogOption {
    entry: Option<MetadataEntry>,
}

/// Attaches a key/value pair to a record.
///
/// A key that trims to empty makes this option a no-op. A value that cannot
/// be JSON-encoded degrades to `null` instead of discarding the record.
///
/// # Examples
///
/// ```
/// use rotolog::with;
///
/// let option = with("user", "alice");
/// ```
pub fn with(key: impl Into<String>, value: impl Serialize) -> LogOption {
    let key = key.into();
    if key.trim().is_empty() {
        return LogOption { entry: None };
    }

    let value = serde_json::to_value(value).unwrap_or(Value::Null);
    LogOption {
        entry: Some(MetadataEntry { key, value }),
    }
}

/// Attaches a human-readable message under the `message` key.
///
/// # Examples
///
/// ```
/// use rotolog::with_message;
///
/// let option = with_message("login");
/// ```
pub fn with_message(message: impl Into<String>) -> LogOption {
    with("message", message.into())
}
