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

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::Rng;
use rotolog::Gregorian;
use rotolog::LoggerBuilder;
use rotolog::TimeFormat;
use rotolog::with;
use rotolog::with_message;
use serde_json::Value;
use tempfile::TempDir;

// Development mode with the console echo silenced: file behavior only.
fn builder(root: &Path) -> LoggerBuilder {
    LoggerBuilder::new().root(root).silent(true)
}

fn log_lines(root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in fs::read_dir(root).unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        lines.extend(content.lines().map(str::to_string));
    }
    lines
}

#[test]
fn test_daily_structured_scenario() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path()).daily().build().unwrap();

    logger.info([with("user", "alice"), with_message("login")]);
    logger.sync();

    let today = Gregorian.format(&jiff::Zoned::now(), "%Y-%m-%d");
    let content = fs::read_to_string(temp_dir.path().join(&today)).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1);

    let parsed: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["lvl"], "INFO");
    assert_eq!(parsed["user"], "alice");
    assert_eq!(parsed["message"], "login");
    assert!(parsed["ts"].is_i64());
    assert!(parsed["dt"].is_string());
}

#[test]
fn test_empty_metadata_writes_nothing() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path()).build().unwrap();

    logger.info(Vec::new());
    logger.warn([with("   ", "blank keys only")]);
    logger.sync();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_debug_dropped_in_production_mode() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path()).development(false).build().unwrap();

    logger.debug([with_message("should not appear")]);
    logger.sync();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_sync_is_idempotent_and_inert_afterwards() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = Arc::new(builder(temp_dir.path()).build().unwrap());

    logger.info([with_message("before")]);

    let concurrent = {
        let logger = logger.clone();
        thread::spawn(move || logger.sync())
    };
    logger.sync();
    concurrent.join().unwrap();

    // Level methods and further syncs after the flush are silent no-ops.
    logger.info([with_message("after")]);
    logger.debug([with_message("after")]);
    logger.sync();

    let lines = log_lines(temp_dir.path());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("before"));
}

#[test]
fn test_fifo_ordering_under_backpressure() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    // A tiny buffer so producers hit backpressure instead of racing ahead.
    let logger = builder(temp_dir.path()).buffer_size(5).build().unwrap();

    for seq in 0..200 {
        logger.info([with("seq", seq)]);
    }
    logger.sync();

    let lines = log_lines(temp_dir.path());
    assert_eq!(lines.len(), 200);
    for (expected, line) in lines.iter().enumerate() {
        let parsed: Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["seq"], expected as i64);
    }
}

#[test]
fn test_concurrent_producers_lose_nothing() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = Arc::new(builder(temp_dir.path()).buffer_size(8).build().unwrap());

    let producers = (0..8)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                let mut rng = rand::rng();
                for _ in 0..50 {
                    logger.error([with("n", rng.random::<u32>())]);
                }
            })
        })
        .collect::<Vec<_>>();
    for producer in producers {
        producer.join().unwrap();
    }
    logger.sync();

    assert_eq!(log_lines(temp_dir.path()).len(), 400);
}

#[test]
fn test_rotation_splits_buckets() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path())
        .date_layout("%H-%M-%S")
        .build()
        .unwrap();

    logger.info([with("seq", 1)]);
    // Cross a second boundary so the next record lands in a new bucket.
    thread::sleep(Duration::from_millis(1100));
    logger.info([with("seq", 2)]);
    logger.sync();

    let mut entries = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect::<Vec<_>>();
    entries.sort();
    assert_eq!(entries.len(), 2);

    let first = fs::read_to_string(&entries[0]).unwrap();
    let second = fs::read_to_string(&entries[1]).unwrap();
    assert_eq!(first.lines().count(), 1);
    assert_eq!(second.lines().count(), 1);
    assert!(first.contains("\"seq\":1"));
    assert!(second.contains("\"seq\":2"));
}

#[test]
fn test_empty_bucket_drops_records() {
    struct EmptyBucket;
    impl TimeFormat for EmptyBucket {
        fn format(&self, timestamp: &jiff::Zoned, layout: &str) -> String {
            if layout == "bucket" {
                String::new()
            } else {
                Gregorian.format(timestamp, layout)
            }
        }
    }

    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path())
        .date_layout("bucket")
        .formatter(EmptyBucket)
        .build()
        .unwrap();

    logger.error([with_message("nowhere to go")]);
    logger.sync();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_structured_lines_keep_field_order() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path()).build().unwrap();

    logger.warn([with("zeta", 1), with("alpha", 2), with("zeta", 3)]);
    logger.sync();

    let lines = log_lines(temp_dir.path());
    assert_eq!(lines.len(), 1);
    let line = &lines[0];

    serde_json::from_str::<Value>(line).unwrap();
    let positions = ["\"lvl\":", "\"ts\":", "\"dt\":", "\"zeta\":1", "\"alpha\":2", "\"zeta\":3"]
        .map(|field| line.find(field).unwrap());
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_simple_mode_writes_readable_lines() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path())
        .simple(true)
        .prefix("app-")
        .extension(".log")
        .build()
        .unwrap();

    logger.panic([with("user", "alice"), with_message("boom")]);
    logger.sync();

    let today = Gregorian.format(&jiff::Zoned::now(), "%Y-%m-%d");
    let path = temp_dir.path().join(format!("app-{today}.log"));
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("PANIC"));
    assert!(content.contains("user: \"alice\""));
    assert!(content.contains("message: \"boom\""));
}

#[test]
fn test_buckets_accumulate_across_handles() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    for run in 0..2 {
        let logger = builder(temp_dir.path()).build().unwrap();
        logger.info([with("run", run)]);
        logger.sync();
    }

    assert_eq!(log_lines(temp_dir.path()).len(), 2);
}

#[test]
fn test_drop_flushes_buffered_records() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    {
        let logger = builder(temp_dir.path()).build().unwrap();
        logger.info([with_message("flushed on drop")]);
    }

    let lines = log_lines(temp_dir.path());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("flushed on drop"));
}

#[test]
fn test_jalali_buckets_use_the_persian_calendar() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = builder(temp_dir.path()).jalali().monthly().build().unwrap();

    logger.info([with_message("salam")]);
    logger.sync();

    let expected = rotolog::Jalali.format(&jiff::Zoned::now(), "%Y-%m");
    assert!(temp_dir.path().join(&expected).exists());
    // Jalali years run about 621 behind Gregorian ones.
    let year: i64 = expected[..4].parse().unwrap();
    assert!((1300..1500).contains(&year));
}
