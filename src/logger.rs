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

//! The producer-facing logger handle.

use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;

use crate::Level;
use crate::Record;
use crate::record::LogOption;
use crate::worker::Message;

/// The handle producers log through.
///
/// Level methods build a record from the given attach options and enqueue it;
/// they never perform file I/O and never return errors. When the bounded
/// queue is full, the enqueue blocks the caller until the worker catches up —
/// backpressure instead of dropped records.
///
/// [`Logger::sync`] drains the queue and terminates the worker; after it
/// returns the handle is permanently inert. Dropping the logger performs the
/// same flush.
///
/// # Examples
///
/// ```no_run
/// use rotolog::LoggerBuilder;
/// use rotolog::with;
/// use rotolog::with_message;
///
/// let logger = LoggerBuilder::new().build().unwrap();
/// logger.info([with("user", "alice"), with_message("login")]);
/// logger.sync();
/// ```
pub struct Logger {
    sender: Sender<Message>,
    development: bool,
    flushed: AtomicBool,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Logger {
    pub(crate) fn new(
        sender: Sender<Message>,
        development: bool,
        worker: JoinHandle<()>,
    ) -> Logger {
        Logger {
            sender,
            development,
            flushed: AtomicBool::new(false),
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Logs a debug-level record. Dropped outside development mode.
    pub fn debug(&self, options: impl IntoIterator<Item = LogOption>) {
        if !self.development {
            return;
        }
        self.enqueue(Level::Debug, options);
    }

    /// Logs an info-level record.
    pub fn info(&self, options: impl IntoIterator<Item = LogOption>) {
        self.enqueue(Level::Info, options);
    }

    /// Logs a warn-level record.
    pub fn warn(&self, options: impl IntoIterator<Item = LogOption>) {
        self.enqueue(Level::Warn, options);
    }

    /// Logs an error-level record.
    pub fn error(&self, options: impl IntoIterator<Item = LogOption>) {
        self.enqueue(Level::Error, options);
    }

    /// Logs a panic-level record.
    ///
    /// This only records the event; it does not unwind or abort.
    pub fn panic(&self, options: impl IntoIterator<Item = LogOption>) {
        self.enqueue(Level::Panic, options);
    }

    /// Drains all buffered records and terminates the worker.
    ///
    /// Blocks until the worker has drained the queue, closed any open file,
    /// and exited. Idempotent: only the first call does the shutdown, and
    /// concurrent or repeated calls return immediately. Call this before the
    /// process exits to ensure every record is on disk.
    pub fn sync(&self) {
        if self
            .flushed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let _ = self.sender.send(Message::Shutdown);
        let worker = self.worker.lock().ok().and_then(|mut guard| guard.take());
        if let Some(worker) = worker {
            let _ = worker.join();
        }
    }

    fn enqueue(&self, level: Level, options: impl IntoIterator<Item = LogOption>) {
        if self.flushed.load(Ordering::SeqCst) {
            return;
        }

        // A call that attaches no metadata is treated as an accidental empty
        // log call and discarded rather than writing a bare timestamp line.
        let record = Record::new(level, options);
        if record.is_zero() {
            return;
        }

        // Blocks when the queue is at capacity. A send that races past the
        // flushed check after shutdown fails silently; post-shutdown calls
        // are no-ops, not errors.
        let _ = self.sender.send(Message::Record(record));
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.sync();
    }
}
