// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// Identifier assigned to an event during normalization.
///
/// Ids follow the input order of the raw events (before the start-time sort), so identical
/// input always yields identical ids. The value carries no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ev:{}", self.0)
    }
}

/// A calendar entry as supplied by a provider, before normalization.
///
/// Minutes are minutes-of-day (`0..=1440`). A missing or blank title is legal and is replaced
/// with a placeholder during normalization; malformed entries never fail the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawEvent {
    title: Option<String>,
    location: Option<String>,
    start_minute: u32,
    end_minute: u32,
}

impl RawEvent {
    pub fn new(title: impl Into<String>, start_minute: u32, end_minute: u32) -> Self {
        Self { title: Some(title.into()), location: None, start_minute, end_minute }
    }

    pub fn untitled(start_minute: u32, end_minute: u32) -> Self {
        Self { title: None, location: None, start_minute, end_minute }
    }

    pub fn from_times(title: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self::new(title, minute_of_day(start), minute_of_day(end))
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }
}

/// A normalized event: titled, clamped to the display window, strictly positive duration.
///
/// Immutable for the duration of a render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: String,
    location: Option<String>,
    start_minute: u32,
    end_minute: u32,
}

impl Event {
    pub(crate) fn new(
        id: EventId,
        title: String,
        location: Option<String>,
        start_minute: u32,
        end_minute: u32,
    ) -> Self {
        debug_assert!(end_minute > start_minute);
        Self { id, title, location, start_minute, end_minute }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// True when the two `[start, end)` intervals share at least one minute.
    ///
    /// Touching intervals (one ends exactly where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }
}

/// The `[start, end]` minute range rendered, independent of the full 24-hour day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    start_minute: u32,
    end_minute: u32,
}

impl DayWindow {
    /// Degenerate windows (`end <= start`) are accepted; [`DayWindow::total_minutes`] floors
    /// them to one minute so downstream pixel mapping stays well-defined.
    pub fn new(start_minute: u32, end_minute: u32) -> Self {
        Self { start_minute, end_minute }
    }

    pub fn from_hours(start_hour: u32, end_hour: u32) -> Self {
        Self::new(start_hour * 60, end_hour * 60)
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    /// Window length in minutes, floored to 1.
    pub fn total_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute).max(1)
    }

    /// Inclusive containment; used for the now marker, which is shown at both window edges.
    pub fn contains(&self, minute: u32) -> bool {
        self.start_minute <= minute && minute <= self.end_minute
    }
}

impl Default for DayWindow {
    /// The production default: 08:00–21:00.
    fn default() -> Self {
        Self::from_hours(8, 21)
    }
}

pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::{minute_of_day, DayWindow, Event, EventId, RawEvent};

    #[test]
    fn raw_event_from_times_uses_minutes_of_day() {
        let start = NaiveTime::from_hms_opt(9, 15, 0).expect("time");
        let end = NaiveTime::from_hms_opt(10, 0, 30).expect("time");
        let raw = RawEvent::from_times("Standup", start, end);
        assert_eq!(raw.start_minute(), 9 * 60 + 15);
        // Seconds are dropped; the engine works at minute granularity.
        assert_eq!(raw.end_minute(), 10 * 60);
    }

    #[test]
    fn overlap_is_strict_on_touching_intervals() {
        let a = Event::new(EventId::new(0), "A".to_owned(), None, 0, 30);
        let b = Event::new(EventId::new(1), "B".to_owned(), None, 30, 60);
        let c = Event::new(EventId::new(2), "C".to_owned(), None, 29, 31);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn degenerate_window_floors_to_one_minute() {
        assert_eq!(DayWindow::new(600, 600).total_minutes(), 1);
        assert_eq!(DayWindow::new(700, 600).total_minutes(), 1);
        assert_eq!(DayWindow::from_hours(8, 21).total_minutes(), 13 * 60);
    }

    #[test]
    fn window_containment_is_inclusive_at_both_edges() {
        let window = DayWindow::from_hours(8, 21);
        assert!(window.contains(8 * 60));
        assert!(window.contains(21 * 60));
        assert!(!window.contains(8 * 60 - 1));
        assert!(!window.contains(21 * 60 + 1));
    }

    #[test]
    fn minute_of_day_ignores_seconds() {
        let time = NaiveTime::from_hms_opt(13, 45, 59).expect("time");
        assert_eq!(minute_of_day(time), 13 * 60 + 45);
    }
}
