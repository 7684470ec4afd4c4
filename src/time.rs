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

//! Pluggable calendar formatting for timestamps.
//!
//! Rotation buckets and rendered timestamps go through a [`TimeFormat`]
//! implementation, so the calendar system can be swapped without touching the
//! worker. Two calendars ship with the crate: [`Gregorian`] and [`Jalali`]
//! (the Persian solar calendar). Custom implementations can be injected via
//! [`LoggerBuilder::formatter`](crate::LoggerBuilder::formatter).

use std::fmt::Write;

use jiff::Zoned;
use jiff::fmt::strtime::BrokenDownTime;

/// Formats an instant against a strftime-style layout string.
pub trait TimeFormat: Send + Sync {
    /// Renders `timestamp` according to `layout`.
    ///
    /// Returning an empty string makes the worker skip the record, so a
    /// layout that fails to render must yield `""` rather than panic.
    fn format(&self, timestamp: &Zoned, layout: &str) -> String;
}

/// The standard calendar, rendered with jiff's strftime support.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gregorian;

impl TimeFormat for Gregorian {
    fn format(&self, timestamp: &Zoned, layout: &str) -> String {
        BrokenDownTime::from(timestamp)
            .to_string(layout)
            .unwrap_or_default()
    }
}

/// The Persian solar calendar.
///
/// The date specifiers `%Y`, `%y`, `%m` and `%d` are rendered in the Jalali
/// calendar; every other specifier (time of day, zone offset, ...) delegates
/// to [`Gregorian`], which is what it means in either calendar.
#[derive(Clone, Copy, Debug, Default)]
pub struct Jalali;

impl TimeFormat for Jalali {
    fn format(&self, timestamp: &Zoned, layout: &str) -> String {
        let date = timestamp.date();
        let (jy, jm, jd) =
            gregorian_to_jalali(i64::from(date.year()), i64::from(date.month()), i64::from(date.day()));

        let mut out = String::with_capacity(layout.len());
        let mut chars = layout.chars();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                out.push(ch);
                continue;
            }
            let Some(spec) = chars.next() else {
                out.push('%');
                break;
            };
            let result = match spec {
                '%' => write!(out, "%"),
                'Y' => write!(out, "{jy}"),
                'y' => write!(out, "{:02}", jy.rem_euclid(100)),
                'm' => write!(out, "{jm:02}"),
                'd' => write!(out, "{jd:02}"),
                other => {
                    let mut spec = String::from('%');
                    spec.push(other);
                    match BrokenDownTime::from(timestamp).to_string(&spec) {
                        Ok(rendered) => write!(out, "{rendered}"),
                        Err(_) => return String::new(),
                    }
                }
            };
            // write! to a String cannot fail.
            let _ = result;
        }
        out
    }
}

// Day-count arithmetic over the 33-year Jalali leap cycle, accurate across
// the Gregorian range this logger will ever see.
fn gregorian_to_jalali(gy: i64, gm: i64, gd: i64) -> (i64, i64, i64) {
    const G_DAYS_IN_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + gd
        + G_DAYS_IN_MONTH[(gm - 1) as usize];

    let mut jy = -1595 + 33 * (days / 12053);
    days %= 12053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    if days < 186 {
        (jy, 1 + days / 31, 1 + days % 31)
    } else {
        (jy, 7 + (days - 186) / 30, 1 + (days - 186) % 30)
    }
}
