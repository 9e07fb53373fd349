// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{DayWindow, Event};

/// Aggregate event coverage per fixed-width time bucket, for the sparkline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DensityProfile {
    bucket_minutes: u32,
    buckets: Vec<u32>,
    max_bucket: u32,
}

impl DensityProfile {
    pub fn bucket_minutes(&self) -> u32 {
        self.bucket_minutes
    }

    /// Covered minutes per bucket, in window order.
    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    /// `max(1, max(buckets))` — safe to divide by even when the day is empty.
    pub fn max_bucket(&self) -> u32 {
        self.max_bucket
    }
}

/// Distributes each event's clamped duration across every bucket it intersects.
///
/// For bucket `[b_start, b_end)` and event interval `[s, e)` (both relative to the window
/// start) the contribution is `max(0, min(e, b_end) - max(s, b_start))`, so an event's
/// contributions always sum to its clamped duration. `bucket_minutes` is floored to 1 and the
/// bucket count to 1; the function is total.
pub fn density_profile(events: &[Event], window: DayWindow, bucket_minutes: u32) -> DensityProfile {
    let bucket_minutes = bucket_minutes.max(1);
    let total = window.total_minutes();
    let count = ((total + bucket_minutes - 1) / bucket_minutes).max(1) as usize;
    let mut buckets = vec![0u32; count];

    for event in events {
        let s = event.start_minute().saturating_sub(window.start_minute());
        let e = event.end_minute().saturating_sub(window.start_minute()).min(total);
        if e <= s {
            continue;
        }

        let first = (s / bucket_minutes) as usize;
        let last = (((e + bucket_minutes - 1) / bucket_minutes) as usize).min(count);
        for (index, bucket) in buckets.iter_mut().enumerate().take(last).skip(first) {
            let b_start = index as u32 * bucket_minutes;
            let b_end = b_start + bucket_minutes;
            *bucket += e.min(b_end).saturating_sub(s.max(b_start));
        }
    }

    let max_bucket = buckets.iter().copied().max().unwrap_or(0).max(1);
    DensityProfile { bucket_minutes, buckets, max_bucket }
}
