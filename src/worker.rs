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

//! The single consumer of the record queue.

use std::path::PathBuf;

use crossbeam_channel::Receiver;
use crossbeam_channel::RecvError;
use jiff::Zoned;

use crate::Record;
use crate::builder::Config;
use crate::console;
use crate::sink::FileSink;

#[derive(Debug)]
pub(crate) enum Message {
    Record(Record),
    Shutdown,
}

/// The worker drains the queue in arrival order on its own thread. It is the
/// only entity that touches the file handle and the current-path memo, which
/// rules out file-handle races by construction.
pub(crate) struct Worker {
    receiver: Receiver<Message>,
    config: Config,
    sink: FileSink,
}

impl Worker {
    pub(crate) fn new(receiver: Receiver<Message>, config: Config) -> Worker {
        Worker {
            receiver,
            config,
            sink: FileSink::default(),
        }
    }

    pub(crate) fn run(mut self) {
        loop {
            match self.receiver.recv() {
                Ok(Message::Record(record)) => self.process(record),
                // FIFO puts the shutdown sentinel behind every record sent
                // before the handle flipped to flushed, so the queue is
                // already drained here. Records racing in behind the sentinel
                // are discarded.
                Ok(Message::Shutdown) | Err(RecvError) => break,
            }
        }
        self.sink.close();
    }

    fn process(&mut self, record: Record) {
        let Some(path) = self.rotation_path(record.timestamp()) else {
            return;
        };

        let message = self
            .config
            .layout
            .format(&record, self.config.formatter.as_ref());
        if message.is_empty() {
            return;
        }

        if self.config.development && !self.config.silent {
            console::print(&record, self.config.formatter.as_ref());
        }

        self.sink.write_line(&path, &message);
    }

    // `root/prefix + format(timestamp, layout) [+ "." + ext]`, recomputed per
    // record; a name that formats to empty means the record is skipped rather
    // than written to an empty path.
    fn rotation_path(&self, timestamp: &Zoned) -> Option<PathBuf> {
        let bucket = self
            .config
            .formatter
            .format(timestamp, &self.config.date_layout);
        let mut name = format!("{}{}", self.config.prefix, bucket);
        if name.is_empty() {
            return None;
        }

        let extension = self.config.extension.trim_start_matches('.');
        if !extension.is_empty() {
            name.push('.');
            name.push_str(extension);
        }

        Some(self.config.root.join(name))
    }
}
