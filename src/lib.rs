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

//! Rotolog is an asynchronous, date-rotating file logger.
//!
//! Producers emit leveled records from any thread; a single background worker
//! drains a bounded queue, renders each record as a human-readable or JSON
//! line, and appends it to a file whose name is derived from the record's
//! timestamp. In development mode records are also echoed to the console with
//! per-level colors.
//!
//! # Overview
//!
//! - Level methods never block on file I/O; the only blocking producers see
//!   is backpressure when the bounded queue is full.
//! - Records are written strictly in enqueue order.
//! - File names follow `root/prefix + format(timestamp, layout)[.ext]`, so
//!   two records whose timestamps format to the same bucket share a file.
//!   Files are opened in append mode and accumulate across process runs.
//! - Timestamp formatting is pluggable: [`Gregorian`] and [`Jalali`]
//!   calendars are built in, and any [`TimeFormat`] can be injected.
//! - [`Logger::sync`] flushes everything and shuts the worker down; after it
//!   returns, all further calls are silent no-ops.
//!
//! # Examples
//!
//! ```no_run
//! use rotolog::LoggerBuilder;
//! use rotolog::with;
//! use rotolog::with_message;
//!
//! let logger = LoggerBuilder::new()
//!     .extension("log")
//!     .daily()
//!     .build()
//!     .unwrap();
//!
//! logger.info([with("user", "alice"), with_message("login")]);
//! logger.sync();
//! ```

mod builder;
mod console;
mod error;
mod layout;
mod level;
mod logger;
mod record;
mod sink;
mod time;
mod worker;

pub use builder::LoggerBuilder;
pub use error::Error;
pub use level::Level;
pub use logger::Logger;
pub use record::LogOption;
pub use record::MetadataEntry;
pub use record::Record;
pub use record::with;
pub use record::with_message;
pub use time::Gregorian;
pub use time::Jalali;
pub use time::TimeFormat;
