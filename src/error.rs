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

/// The error returned when a [`Logger`](crate::Logger) cannot be constructed.
///
/// Construction is the only fallible operation: level methods never return
/// errors, and worker-side file failures are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to set up logger: {0}")]
    Io(#[from] std::io::Error),
}
