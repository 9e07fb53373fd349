// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{assign_lanes, density_profile, normalize_events, place_labels, LabelParams};
use crate::model::{DayWindow, Event, RawEvent};

use super::{
    DensityLine, EventTick, GuideKind, GuideMark, LabelBlock, Leader, NowMarker, Point, Scene,
    SceneMetrics, Segment,
};

/// Options for a single compose pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub metrics: SceneMetrics,
    pub device_pixel_ratio: f32,
    pub show_density: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self { metrics: SceneMetrics::default(), device_pixel_ratio: 1.0, show_density: false }
    }
}

/// Runs the full pipeline: normalize → lanes → labels → density → compose.
///
/// Total over its input domain: empty input, degenerate windows and malformed titles all
/// produce a valid (possibly sparse) scene. Identical input yields an identical scene.
pub fn compose_scene(
    raw: &[RawEvent],
    window: DayWindow,
    now_minute: Option<u32>,
    options: &SceneOptions,
) -> Scene {
    let events = normalize_events(raw, window);
    compose_scene_from_events(&events, window, now_minute, options)
}

/// Compose from already-normalized events (must be the normalizer's sorted output).
pub fn compose_scene_from_events(
    events: &[Event],
    window: DayWindow,
    now_minute: Option<u32>,
    options: &SceneOptions,
) -> Scene {
    let metrics = &options.metrics;
    let content_height = metrics.content_height().max(1);
    let padding = metrics.padding_y;
    let axis_x = metrics.axis_x();

    let px_per_minute = content_height as f32 / window.total_minutes() as f32;
    let minute_to_y = |minute: u32| -> i32 {
        (minute.saturating_sub(window.start_minute()) as f32 * px_per_minute).round() as i32
    };

    let axis = Segment {
        from: Point::new(axis_x, padding),
        to: Point::new(axis_x, padding + content_height),
    };

    let mut guides = Vec::<GuideMark>::new();
    let mut minute = (window.start_minute() + 59) / 60 * 60;
    while minute <= window.end_minute() {
        guides.push(GuideMark {
            minute,
            y: padding + minute_to_y(minute),
            kind: GuideKind::Hour,
            label: Some(format_hour_label(minute)),
        });
        let half = minute + 30;
        if half < window.end_minute() {
            guides.push(GuideMark {
                minute: half,
                y: padding + minute_to_y(half),
                kind: GuideKind::HalfHour,
                label: None,
            });
        }
        minute += 60;
    }

    // Vertical extents in content coordinates, then a small deconfliction gap between ticks
    // of directly abutting events so touching intervals stay visually distinguishable.
    let mut y_ranges = events
        .iter()
        .map(|event| (minute_to_y(event.start_minute()), minute_to_y(event.end_minute())))
        .collect::<Vec<_>>();
    for index in 1..y_ranges.len() {
        let (previous_bottom, current_top) = (y_ranges[index - 1].1, y_ranges[index].0);
        if (current_top - previous_bottom).abs() <= 1 {
            y_ranges[index - 1].1 -= metrics.abut_gap / 2;
            y_ranges[index].0 += metrics.abut_gap / 2;
        }
    }

    let lanes = assign_lanes(events);

    let box_height = metrics.label_box_height();
    let desired_tops = events
        .iter()
        .zip(&y_ranges)
        .map(|(event, (top, _))| (event.id(), *top))
        .collect::<Vec<_>>();
    let placement = place_labels(
        &desired_tops,
        LabelParams::new(box_height, metrics.label_min_gap, content_height - box_height),
    );

    let mut ticks = Vec::<EventTick>::with_capacity(events.len());
    let mut leaders = Vec::<Leader>::with_capacity(events.len());
    let mut labels = Vec::<LabelBlock>::with_capacity(events.len());
    for (event, (top, bottom)) in events.iter().zip(&y_ranges) {
        let lane = lanes.lane(event.id());
        let tick_x = axis_x + lane as i32 * metrics.tick_shift;
        ticks.push(EventTick {
            event: event.id(),
            lane,
            x: tick_x,
            y_top: padding + top,
            y_bottom: padding + bottom,
            width: metrics.tick_width,
        });

        // Every normalized event was handed to the placer, so the lookup always hits;
        // the fallback keeps the function total anyway.
        let (column, label_top) = match placement.slot(event.id()) {
            Some(slot) => (slot.column(), slot.top()),
            None => (0, *top),
        };
        let label_x = metrics.label_left(column);
        leaders.push(Leader {
            event: event.id(),
            from: Point::new(tick_x, padding + top),
            to: Point::new(label_x, padding + top),
        });
        labels.push(LabelBlock {
            event: event.id(),
            column,
            x: label_x,
            y: padding + label_top,
            width: metrics.label_col_width,
            height: box_height,
            title: event.title().to_owned(),
            detail: format_detail(event),
        });
    }

    let now = now_minute.filter(|minute| window.contains(*minute)).map(|minute| NowMarker {
        minute,
        y: padding + minute_to_y(minute),
        radius: metrics.now_dot_radius,
    });

    let density = if options.show_density && !events.is_empty() {
        density_line(events, window, metrics)
    } else {
        None
    };

    Scene {
        width: metrics.canvas_width,
        height: metrics.canvas_height,
        device_pixel_ratio: options.device_pixel_ratio,
        axis,
        guides,
        now,
        ticks,
        leaders,
        labels,
        density,
    }
}

fn density_line(events: &[Event], window: DayWindow, metrics: &SceneMetrics) -> Option<DensityLine> {
    let profile = density_profile(events, window, metrics.density_bucket_minutes);
    if profile.buckets().len() <= 1 {
        return None;
    }

    let chart_height = metrics.density_chart_height;
    let base_y = metrics.canvas_height - chart_height - metrics.density_bottom_margin;
    let axis_x = metrics.axis_x();
    let points = profile
        .buckets()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let norm = *value as f32 / profile.max_bucket() as f32;
            let rise = (norm * (chart_height - 4) as f32).round() as i32;
            Point::new(axis_x + index as i32, base_y + chart_height - rise)
        })
        .collect();

    Some(DensityLine { base_y, points })
}

/// "9:00 AM–9:45 AM", with " · <location>" appended when present.
fn format_detail(event: &Event) -> String {
    let mut detail = format!(
        "{}–{}",
        format_minutes(event.start_minute()),
        format_minutes(event.end_minute())
    );
    if let Some(location) = event.location() {
        detail.push_str(" · ");
        detail.push_str(location);
    }
    detail
}

fn format_minutes(minute: u32) -> String {
    let hour = minute / 60;
    let minute = minute % 60;
    let display = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{display}:{minute:02} {suffix}")
}

fn format_hour_label(minute: u32) -> String {
    let hour = minute / 60;
    let display = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{display} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::{compose_scene, format_hour_label, format_minutes, SceneOptions};
    use crate::model::{DayWindow, RawEvent};
    use crate::scene::GuideKind;

    fn window() -> DayWindow {
        DayWindow::from_hours(8, 21)
    }

    fn options() -> SceneOptions {
        SceneOptions::default()
    }

    #[test]
    fn empty_day_produces_a_sparse_but_valid_scene() {
        let scene = compose_scene(&[], window(), None, &options());

        assert!(scene.ticks.is_empty());
        assert!(scene.labels.is_empty());
        assert!(scene.leaders.is_empty());
        assert!(scene.now.is_none());
        assert!(scene.density.is_none());
        // 8 AM through 9 PM inclusive.
        let hours =
            scene.guides.iter().filter(|g| g.kind == GuideKind::Hour).count();
        assert_eq!(hours, 14);
        assert_eq!(scene.axis.from.x, 88);
    }

    #[test]
    fn hour_guides_carry_labels_and_half_hours_do_not() {
        let scene = compose_scene(&[], window(), None, &options());

        let eight = scene.guides.iter().find(|g| g.minute == 8 * 60).expect("8 AM guide");
        assert_eq!(eight.kind, GuideKind::Hour);
        assert_eq!(eight.label.as_deref(), Some("8 AM"));
        assert_eq!(eight.y, options().metrics.padding_y);

        let half = scene.guides.iter().find(|g| g.minute == 8 * 60 + 30).expect("8:30 guide");
        assert_eq!(half.kind, GuideKind::HalfHour);
        assert!(half.label.is_none());

        // No half-hour mark at or past the window end.
        assert!(scene.guides.iter().all(|g| g.minute <= 21 * 60));
        assert!(!scene
            .guides
            .iter()
            .any(|g| g.kind == GuideKind::HalfHour && g.minute + 30 > 21 * 60));
    }

    #[test]
    fn disjoint_events_share_the_axis_lane() {
        let raw = vec![
            RawEvent::new("A", 9 * 60, 9 * 60 + 45),
            RawEvent::new("B", 11 * 60, 11 * 60 + 30),
        ];
        let scene = compose_scene(&raw, window(), None, &options());

        assert_eq!(scene.ticks.len(), 2);
        assert!(scene.ticks.iter().all(|t| t.lane == 0 && t.x == 88));
        // Labels far apart stay in column 0 without overlapping.
        assert!(scene.labels.iter().all(|l| l.column == 0));
        assert!(scene.labels[1].y >= scene.labels[0].y + scene.labels[0].height);
    }

    #[test]
    fn overlapping_events_fan_ticks_and_label_columns() {
        let raw = vec![
            RawEvent::new("Outer", 9 * 60, 10 * 60),
            RawEvent::new("Inner", 9 * 60 + 15, 9 * 60 + 45),
        ];
        let scene = compose_scene(&raw, window(), None, &options());

        assert_eq!(scene.ticks[0].lane, 0);
        assert_eq!(scene.ticks[1].lane, 1);
        assert_eq!(scene.ticks[1].x, 88 + 8);
        // Two-column label fan: chronologically first label in the outer column.
        assert_eq!(scene.labels[0].column, 1);
        assert_eq!(scene.labels[1].column, 0);
        assert_eq!(scene.labels[0].x, 116 + 170);
        assert_eq!(scene.labels[1].x, 116);
    }

    #[test]
    fn touching_ticks_are_deconflicted_by_the_abut_gap() {
        let raw = vec![
            RawEvent::new("First", 16 * 60, 16 * 60 + 30),
            RawEvent::new("Second", 16 * 60 + 30, 17 * 60),
        ];
        let scene = compose_scene(&raw, window(), None, &options());

        // Touching intervals share lane 0 but their ticks must not merge into one bar.
        assert_eq!(scene.ticks[0].lane, 0);
        assert_eq!(scene.ticks[1].lane, 0);
        assert!(scene.ticks[0].y_bottom < scene.ticks[1].y_top);
    }

    #[test]
    fn leaders_run_from_tick_start_to_label_column_edge() {
        let raw = vec![RawEvent::new("A", 9 * 60, 10 * 60)];
        let scene = compose_scene(&raw, window(), None, &options());

        let leader = &scene.leaders[0];
        assert_eq!(leader.from.x, scene.ticks[0].x);
        assert_eq!(leader.from.y, scene.ticks[0].y_top);
        assert_eq!(leader.to.x, scene.labels[0].x);
        assert_eq!(leader.to.y, leader.from.y);
    }

    #[test]
    fn now_marker_appears_only_inside_the_window() {
        let raw = vec![RawEvent::new("A", 9 * 60, 10 * 60)];

        let inside = compose_scene(&raw, window(), Some(12 * 60), &options());
        let marker = inside.now.expect("now marker");
        assert_eq!(marker.minute, 12 * 60);

        let before = compose_scene(&raw, window(), Some(7 * 60), &options());
        assert!(before.now.is_none());
        let after = compose_scene(&raw, window(), Some(22 * 60), &options());
        assert!(after.now.is_none());

        // Both window edges are inclusive.
        assert!(compose_scene(&raw, window(), Some(8 * 60), &options()).now.is_some());
        assert!(compose_scene(&raw, window(), Some(21 * 60), &options()).now.is_some());
    }

    #[test]
    fn density_polyline_is_present_only_when_requested_and_non_empty() {
        let raw = vec![RawEvent::new("A", 9 * 60, 10 * 60)];

        let without = compose_scene(&raw, window(), None, &options());
        assert!(without.density.is_none());

        let mut with_density = options();
        with_density.show_density = true;
        let scene = compose_scene(&raw, window(), None, &with_density);
        let line = scene.density.expect("density line");
        assert_eq!(line.points.len(), (13 * 60) / 10);

        let empty = compose_scene(&[], window(), None, &with_density);
        assert!(empty.density.is_none());
    }

    #[test]
    fn labels_stay_within_the_canvas() {
        let raw = crate::model::fixtures::dense_day(50);
        let scene = compose_scene(&raw, window(), None, &options());

        let metrics = options().metrics;
        for label in &scene.labels {
            assert!(label.y >= metrics.padding_y);
            assert!(label.y + label.height <= metrics.padding_y + metrics.content_height());
        }
    }

    #[test]
    fn detail_line_formats_time_range_and_location() {
        let raw = vec![RawEvent::new("A", 9 * 60, 9 * 60 + 45).with_location("MTV–Aristotle")];
        let scene = compose_scene(&raw, window(), None, &options());

        assert_eq!(scene.labels[0].detail, "9:00 AM–9:45 AM · MTV–Aristotle");
    }

    #[test]
    fn degenerate_window_does_not_panic_and_drops_everything() {
        let raw = vec![RawEvent::new("A", 9 * 60, 10 * 60)];
        let scene = compose_scene(&raw, DayWindow::new(600, 600), None, &options());

        assert!(scene.ticks.is_empty());
        assert!(scene.labels.is_empty());
    }

    #[test]
    fn pipeline_is_deterministic_byte_for_byte() {
        let raw = crate::model::fixtures::dense_day(40);
        let mut opts = options();
        opts.show_density = true;

        let first = compose_scene(&raw, window(), Some(14 * 60), &opts);
        let second = compose_scene(&raw, window(), Some(14 * 60), &opts);
        assert_eq!(
            serde_json::to_string(&first).expect("serialize"),
            serde_json::to_string(&second).expect("serialize"),
        );
    }

    #[test]
    fn formats_twelve_hour_times() {
        assert_eq!(format_minutes(0), "12:00 AM");
        assert_eq!(format_minutes(9 * 60 + 5), "9:05 AM");
        assert_eq!(format_minutes(12 * 60), "12:00 PM");
        assert_eq!(format_minutes(13 * 60 + 30), "1:30 PM");
        assert_eq!(format_hour_label(21 * 60), "9 PM");
    }
}
