// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic fixture days shared by tests, benches and the demo binary.

use super::event::RawEvent;

fn hm(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// The six-event sample day used for previews.
///
/// Two overlapping pairs (Team Lunch / Recruiting Sync, Luke / Kevin) exercise lane
/// assignment and label fanning in previews.
pub fn sample_day() -> Vec<RawEvent> {
    vec![
        RawEvent::new("Design Review", hm(9, 0), hm(9, 45)).with_location("MTV–Aristotle"),
        RawEvent::new("Rachel / Matt", hm(11, 0), hm(11, 30)).with_location("MTV–Descartes"),
        RawEvent::new("Team Lunch", hm(13, 0), hm(14, 0)).with_location("Cafeteria"),
        RawEvent::new("Recruiting Sync", hm(13, 45), hm(14, 30)).with_location("MTV–DaVinci"),
        RawEvent::new("Luke / Matt", hm(16, 0), hm(16, 35)).with_location("MTV–Descartes"),
        RawEvent::new("Kevin / Matt", hm(16, 30), hm(17, 0)).with_location("MTV–Descartes"),
    ]
}

/// A generated day of `count` events with heavy, deterministic overlap.
///
/// Uses a fixed linear-congruential sequence so bench and test runs are comparable across
/// machines and refactors.
pub fn dense_day(count: usize) -> Vec<RawEvent> {
    let mut state = 0x2545_f491u64;
    let mut next = move |bound: u32| -> u32 {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as u32) % bound.max(1)
    };

    let mut events = Vec::with_capacity(count);
    for index in 0..count {
        let start = 8 * 60 + next(12 * 60);
        let duration = 15 + next(105);
        let mut event = RawEvent::new(format!("Meeting {index}"), start, start + duration);
        if index % 3 == 0 {
            event = event.with_location(format!("Room {}", index % 7));
        }
        events.push(event);
    }
    events
}
