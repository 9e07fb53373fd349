// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Refresh scheduling aligned to half-minute boundaries.
//!
//! The panel refreshes on :00 and :30 second marks so successive frames land on predictable
//! timestamps. Clock and sleep are injectable, so the loop is testable without real time.

use std::thread;
use std::time::Duration as StdDuration;

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use tracing::debug;

/// Next `:00` or `:30` second boundary at or after `moment`.
///
/// Sub-second precision is rounded up to the next whole second first, so the returned
/// boundary is never in the past. A moment already on a boundary is returned unchanged.
pub fn next_half_minute_boundary(moment: NaiveDateTime) -> NaiveDateTime {
    let mut moment = if moment.nanosecond() > 0 {
        truncate_to_second(moment) + Duration::seconds(1)
    } else {
        moment
    };

    let excess = moment.second() % 30;
    if excess != 0 {
        moment += Duration::seconds(i64::from(30 - excess));
    }
    moment
}

fn truncate_to_second(moment: NaiveDateTime) -> NaiveDateTime {
    // with_nanosecond(0) only fails for leap-second representations; fall back to the
    // untruncated moment rather than erroring out of a pure helper.
    moment.with_nanosecond(0).unwrap_or(moment)
}

/// Runs a callback on half-minute boundaries.
pub struct Scheduler<C: FnMut()> {
    callback: C,
    clock: Box<dyn FnMut() -> NaiveDateTime>,
    sleep: Box<dyn FnMut(StdDuration)>,
}

impl<C: FnMut()> Scheduler<C> {
    /// Scheduler on the local wall clock and real `thread::sleep`.
    pub fn new(callback: C) -> Self {
        Self {
            callback,
            clock: Box::new(|| Local::now().naive_local()),
            sleep: Box::new(thread::sleep),
        }
    }

    /// Scheduler with an injected clock and sleep, for tests.
    pub fn with_clock(
        callback: C,
        clock: Box<dyn FnMut() -> NaiveDateTime>,
        sleep: Box<dyn FnMut(StdDuration)>,
    ) -> Self {
        Self { callback, clock, sleep }
    }

    /// Runs the loop: `immediate` fires the callback once before the first boundary,
    /// `iterations` bounds the total number of callback invocations (`None` runs forever).
    pub fn run(&mut self, immediate: bool, iterations: Option<u32>) {
        let mut remaining = iterations;

        if immediate {
            debug!("executing immediate refresh override before schedule");
            (self.callback)();
            if let Some(count) = remaining.as_mut() {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    return;
                }
            }
        }

        while remaining.map_or(true, |count| count > 0) {
            let target = self.wait_until_next_boundary();
            debug!(boundary = %target, "reached scheduled refresh time");
            (self.callback)();
            if let Some(count) = remaining.as_mut() {
                *count -= 1;
            }
        }
    }

    /// Blocks until the next half-minute boundary; returns the boundary reached.
    ///
    /// Re-reads the clock after every sleep, so an early wakeup just sleeps again and an
    /// overslept wakeup returns immediately.
    pub fn wait_until_next_boundary(&mut self) -> NaiveDateTime {
        let target = next_half_minute_boundary((self.clock)());
        loop {
            let now = (self.clock)();
            let left = target - now;
            if left <= Duration::zero() {
                return target;
            }
            debug!(
                boundary = %target,
                seconds = left.num_milliseconds() as f64 / 1000.0,
                "sleeping until next boundary"
            );
            (self.sleep)(left.to_std().unwrap_or_default());
        }
    }
}
