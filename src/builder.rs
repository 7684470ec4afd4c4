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

//! Configuration and construction of a [`Logger`].

use std::fs;
use std::path::PathBuf;

use crossbeam_channel::bounded;

use crate::Error;
use crate::Logger;
use crate::layout::Layout;
use crate::time::Gregorian;
use crate::time::Jalali;
use crate::time::TimeFormat;
use crate::worker::Worker;

const DAILY_LAYOUT: &str = "%Y-%m-%d";
const MONTHLY_LAYOUT: &str = "%Y-%m";

/// The immutable configuration snapshot the worker runs against.
pub(crate) struct Config {
    pub(crate) development: bool,
    pub(crate) layout: Layout,
    pub(crate) silent: bool,
    pub(crate) root: PathBuf,
    pub(crate) prefix: String,
    pub(crate) extension: String,
    pub(crate) date_layout: String,
    pub(crate) formatter: Box<dyn TimeFormat>,
}

/// A builder for configuring a [`Logger`].
///
/// Setters that take strings ignore blank input and keep the previous value.
///
/// # Examples
///
/// ```no_run
/// use rotolog::LoggerBuilder;
///
/// let logger = LoggerBuilder::new()
///     .buffer_size(10)
///     .extension("log")
///     .daily()
///     .simple(true)
///     .jalali()
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    buffer: usize,
    development: bool,
    simple: bool,
    silent: bool,
    root: PathBuf,
    prefix: String,
    extension: String,
    date_layout: String,
    formatter: Box<dyn TimeFormat>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Creates a builder with the default configuration: buffer of 100
    /// records, development mode, structured rendering, console echo on,
    /// root `./logs`, no prefix or extension, daily rotation, Gregorian
    /// calendar.
    #[must_use]
    pub fn new() -> LoggerBuilder {
        LoggerBuilder {
            buffer: 100,
            development: true,
            simple: false,
            silent: false,
            root: PathBuf::from("./logs"),
            prefix: String::new(),
            extension: String::new(),
            date_layout: DAILY_LAYOUT.to_string(),
            formatter: Box::new(Gregorian),
        }
    }

    /// Sets the capacity of the record queue. Producers block when it fills.
    /// The capacity is at least one record; zero is clamped up.
    #[must_use]
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer = size.max(1);
        self
    }

    /// Switches between development (`true`) and production (`false`) mode.
    ///
    /// Production mode drops debug records and never echoes to the console.
    #[must_use]
    pub fn development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    /// Selects the simple human-readable line format instead of JSON.
    #[must_use]
    pub fn simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    /// Suppresses the console echo in development mode.
    #[must_use]
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Sets the root directory for log files. Ignores blank input.
    #[must_use]
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if !root.as_os_str().to_string_lossy().trim().is_empty() {
            self.root = root;
        }
        self
    }

    /// Sets the file name prefix. Ignores blank input.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.trim().is_empty() {
            self.prefix = prefix;
        }
        self
    }

    /// Sets the file name extension. Leading dots are stripped before use.
    /// Ignores blank input.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        if !extension.trim().is_empty() {
            self.extension = extension;
        }
        self
    }

    /// Rotates files daily (the default).
    #[must_use]
    pub fn daily(mut self) -> Self {
        self.date_layout = DAILY_LAYOUT.to_string();
        self
    }

    /// Rotates files monthly.
    #[must_use]
    pub fn monthly(mut self) -> Self {
        self.date_layout = MONTHLY_LAYOUT.to_string();
        self
    }

    /// Sets a custom strftime layout for rotation buckets. Two records whose
    /// timestamps format to the same string share a file. Ignores blank
    /// input.
    #[must_use]
    pub fn date_layout(mut self, layout: impl Into<String>) -> Self {
        let layout = layout.into();
        if !layout.trim().is_empty() {
            self.date_layout = layout;
        }
        self
    }

    /// Formats timestamps with the Gregorian calendar (the default).
    #[must_use]
    pub fn gregorian(mut self) -> Self {
        self.formatter = Box::new(Gregorian);
        self
    }

    /// Formats timestamps with the Jalali (Persian solar) calendar.
    #[must_use]
    pub fn jalali(mut self) -> Self {
        self.formatter = Box::new(Jalali);
        self
    }

    /// Injects a custom [`TimeFormat`] implementation.
    #[must_use]
    pub fn formatter(mut self, formatter: impl TimeFormat + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Builds the [`Logger`] and starts its worker thread.
    ///
    /// Creates the root directory recursively; a directory that already
    /// exists is fine, any other failure is the construction error. This is
    /// the only operation in the crate that can fail.
    pub fn build(self) -> Result<Logger, Error> {
        fs::create_dir_all(&self.root)?;

        let (sender, receiver) = bounded(self.buffer);
        let config = Config {
            development: self.development,
            layout: if self.simple {
                Layout::Simple
            } else {
                Layout::Structured
            },
            silent: self.silent,
            root: self.root,
            prefix: self.prefix,
            extension: self.extension,
            date_layout: self.date_layout,
            formatter: self.formatter,
        };

        let worker = Worker::new(receiver, config);
        let handle = std::thread::Builder::new()
            .name("rotolog-worker".to_string())
            .spawn(move || worker.run())?;

        Ok(Logger::new(sender, self.development, handle))
    }
}
