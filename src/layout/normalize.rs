// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{DayWindow, Event, EventId, RawEvent};

pub(crate) const UNTITLED_PLACEHOLDER: &str = "(untitled)";

/// Converts raw calendar entries into the normalized, layout-ready event sequence.
///
/// - intervals are clamped to `window`; entries with zero or negative clamped duration are
///   dropped
/// - missing or blank titles become [`UNTITLED_PLACEHOLDER`] — a garbled calendar still
///   produces a renderable scene
/// - output is sorted ascending by `(start_minute, end_minute)`; ties keep input order
///   (stable sort), so layout is deterministic for identical input
/// - ids are assigned from input order before the sort
pub fn normalize_events(raw: &[RawEvent], window: DayWindow) -> Vec<Event> {
    let mut events = Vec::with_capacity(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let start = entry.start_minute().max(window.start_minute());
        let end = entry.end_minute().min(window.end_minute());
        if end <= start {
            continue;
        }

        let title = match entry.title() {
            Some(title) if !title.trim().is_empty() => title.to_owned(),
            _ => UNTITLED_PLACEHOLDER.to_owned(),
        };

        events.push(Event::new(
            EventId::new(index as u32),
            title,
            entry.location().map(str::to_owned),
            start,
            end,
        ));
    }

    events.sort_by_key(|event| (event.start_minute(), event.end_minute()));
    events
}
