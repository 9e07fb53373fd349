// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The refresh cycle: fetch events, compose, rasterize, present.
//!
//! Provider failures are absorbed by reusing the last good event list, so a flaky calendar
//! backend degrades to a stale (but correct) day view instead of a blank panel. Frames
//! identical to the last presented one are skipped; e-ink refreshes are slow and flashy.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tracing::{debug, info, warn};

use crate::calendar::CalendarProvider;
use crate::display::{DisplayError, DisplaySink, Rasterizer};
use crate::model::{DayWindow, RawEvent};
use crate::scene::{compose_scene, SceneOptions};

/// What a single refresh did with the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new frame was pushed to the display.
    Presented,
    /// The composed frame matched the last one shown; the panel was left alone.
    SkippedUnchanged,
}

pub struct App<P, R, S>
where
    P: CalendarProvider,
    R: Rasterizer,
    S: DisplaySink<R::Frame>,
{
    provider: P,
    rasterizer: R,
    sink: S,
    window: DayWindow,
    options: SceneOptions,
    last_events: Option<Vec<RawEvent>>,
    last_frame: Option<R::Frame>,
}

impl<P, R, S> App<P, R, S>
where
    P: CalendarProvider,
    R: Rasterizer,
    S: DisplaySink<R::Frame>,
{
    pub fn new(provider: P, rasterizer: R, sink: S, window: DayWindow, options: SceneOptions) -> Self {
        Self {
            provider,
            rasterizer,
            sink,
            window,
            options,
            last_events: None,
            last_frame: None,
        }
    }

    /// Runs one refresh for `now`'s date, marking `now` on the timeline.
    pub fn refresh_at(&mut self, now: NaiveDateTime) -> Result<RefreshOutcome, DisplayError> {
        let minute = now.hour() * 60 + now.minute();
        self.refresh_once(now.date(), Some(minute))
    }

    /// Runs one refresh: fetch, compose, rasterize, present.
    ///
    /// Display errors propagate; provider errors do not. A failed fetch falls back to the
    /// most recent successful event list (or an empty day if there never was one), so the
    /// now marker keeps moving even while the calendar source is down.
    pub fn refresh_once(
        &mut self,
        date: NaiveDate,
        now_minute: Option<u32>,
    ) -> Result<RefreshOutcome, DisplayError> {
        let events = match self.provider.events_for_day(date) {
            Ok(events) => {
                self.last_events = Some(events.clone());
                events
            }
            Err(err) => {
                warn!(%date, error = %err, "event fetch failed, reusing last good events");
                self.last_events.clone().unwrap_or_default()
            }
        };

        let scene = compose_scene(&events, self.window, now_minute, &self.options);
        let frame = self.rasterizer.rasterize(&scene)?;

        if self.last_frame.as_ref() == Some(&frame) {
            debug!(%date, "frame unchanged, skipping display refresh");
            return Ok(RefreshOutcome::SkippedUnchanged);
        }

        self.sink.present(&frame)?;
        info!(%date, events = events.len(), "presented refreshed day view");
        self.last_frame = Some(frame);
        Ok(RefreshOutcome::Presented)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{App, RefreshOutcome};
    use crate::calendar::{CalendarProvider, ProviderError, StaticProvider};
    use crate::display::{AsciiRasterizer, CaptureSink};
    use crate::model::{fixtures, DayWindow, RawEvent};
    use crate::scene::SceneOptions;

    struct FlakyProvider {
        healthy: bool,
        events: Vec<RawEvent>,
    }

    impl CalendarProvider for FlakyProvider {
        fn events_for_day(&mut self, _date: NaiveDate) -> Result<Vec<RawEvent>, ProviderError> {
            if self.healthy {
                Ok(self.events.clone())
            } else {
                Err(ProviderError::Unavailable("backend down".into()))
            }
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).expect("date")
    }

    fn app_with<P: CalendarProvider>(
        provider: P,
    ) -> App<P, AsciiRasterizer, CaptureSink<String>> {
        App::new(
            provider,
            AsciiRasterizer::default(),
            CaptureSink::new(),
            DayWindow::from_hours(8, 21),
            SceneOptions::default(),
        )
    }

    #[test]
    fn refresh_presents_a_frame_with_the_fetched_events() {
        let mut app = app_with(StaticProvider::new(fixtures::sample_day()));

        let outcome = app.refresh_once(date(), Some(13 * 60)).expect("refresh");

        assert_eq!(outcome, RefreshOutcome::Presented);
        assert!(app.sink.frames()[0].contains("Design Review"));
    }

    #[test]
    fn unchanged_frames_are_not_re_presented() {
        let mut app = app_with(StaticProvider::new(fixtures::sample_day()));

        assert_eq!(app.refresh_once(date(), None).expect("refresh"), RefreshOutcome::Presented);
        assert_eq!(
            app.refresh_once(date(), None).expect("refresh"),
            RefreshOutcome::SkippedUnchanged
        );
        assert_eq!(app.sink.frames().len(), 1);
    }

    #[test]
    fn a_moving_now_marker_forces_a_new_frame() {
        let mut app = app_with(StaticProvider::new(fixtures::sample_day()));

        app.refresh_once(date(), Some(10 * 60)).expect("refresh");
        let outcome = app.refresh_once(date(), Some(12 * 60)).expect("refresh");

        assert_eq!(outcome, RefreshOutcome::Presented);
        assert_eq!(app.sink.frames().len(), 2);
    }

    #[test]
    fn provider_failure_reuses_the_last_good_events() {
        let mut app = app_with(FlakyProvider { healthy: true, events: fixtures::sample_day() });
        app.refresh_once(date(), Some(10 * 60)).expect("refresh");

        app.provider.healthy = false;
        let outcome = app.refresh_once(date(), Some(12 * 60)).expect("refresh");

        assert_eq!(outcome, RefreshOutcome::Presented);
        assert!(app.sink.frames()[1].contains("Design Review"));
    }

    #[test]
    fn provider_failure_with_no_history_renders_an_empty_day() {
        let mut app = app_with(FlakyProvider { healthy: false, events: Vec::new() });

        let outcome = app.refresh_once(date(), Some(12 * 60)).expect("refresh");

        assert_eq!(outcome, RefreshOutcome::Presented);
        let frame = &app.sink.frames()[0];
        assert!(frame.contains('│'));
        assert!(!frame.contains('█'));
    }
}
