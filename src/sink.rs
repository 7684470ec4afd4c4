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

//! The file sink owned by the worker.

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Owns at most one open log file and appends rendered lines to it.
///
/// Exactly one file is open at any instant; switching rotation buckets closes
/// the old file. Open and write failures are swallowed: the handle is dropped
/// so the next record triggers a fresh open attempt, which self-heals
/// transient file errors without crashing the worker.
#[derive(Debug, Default)]
pub(crate) struct FileSink {
    path: Option<PathBuf>,
    file: Option<File>,
}

impl FileSink {
    /// Appends `message` plus a newline to the file at `path`, reusing the
    /// open handle when the path has not changed.
    pub(crate) fn write_line(&mut self, path: &Path, message: &str) {
        self.ensure_open(path);
        if let Some(file) = self.file.as_mut() {
            if writeln!(file, "{message}").is_err() {
                self.close();
            }
        }
    }

    fn ensure_open(&mut self, path: &Path) {
        if self.file.is_some() && self.path.as_deref() == Some(path) {
            return;
        }
        self.close();

        // Append so separate runs sharing a rotation bucket accumulate. Only
        // the root directory is pre-created at construction; intermediate
        // directories implied by the prefix or layout are not.
        match OpenOptions::new().append(true).create(true).open(path) {
            Ok(file) => {
                self.path = Some(path.to_path_buf());
                self.file = Some(file);
            }
            Err(_) => self.close(),
        }
    }

    pub(crate) fn close(&mut self) {
        self.path = None;
        self.file = None;
    }
}
