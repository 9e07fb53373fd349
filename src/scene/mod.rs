// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The renderable scene: plain geometric primitives plus text, nothing renderer-specific.
//!
//! A [`Scene`] is created once per render cycle from the layout engine's outputs and handed
//! to a rasterizer as data (everything is `Serialize`); it is discarded after rasterization.

use serde::Serialize;

use crate::model::EventId;

pub mod compose;

pub use compose::{compose_scene, compose_scene_from_events, SceneOptions};

/// Geometric constants of the day view, in logical pixels.
///
/// Defaults reproduce the original 480×800 portrait design: timeline axis at x = 88,
/// 8-px lane shift for tick marks, 160-px label columns, 26-px label boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SceneMetrics {
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Vertical padding above and below the timeline content.
    pub padding_y: i32,
    pub hour_column_width: i32,
    pub column_gap: i32,
    pub axis_inset: i32,
    /// Horizontal distance from the axis to the first label column.
    pub label_offset_left: i32,
    pub label_col_width: i32,
    pub label_col_gap: i32,
    pub tick_width: i32,
    /// Horizontal shift per lane for overlapping event ticks.
    pub tick_shift: i32,
    pub label_line_height: i32,
    pub label_lines: i32,
    pub label_box_extra: i32,
    /// Minimum vertical gap between label boxes in the same column.
    pub label_min_gap: i32,
    pub hour_tick_len: i32,
    pub half_hour_tick_len: i32,
    pub now_dot_radius: i32,
    /// Pixels carved out between directly abutting event ticks.
    pub abut_gap: i32,
    pub density_bucket_minutes: u32,
    pub density_chart_height: i32,
    pub density_bottom_margin: i32,
}

impl Default for SceneMetrics {
    fn default() -> Self {
        Self {
            canvas_width: 480,
            canvas_height: 800,
            padding_y: 24,
            hour_column_width: 72,
            column_gap: 16,
            axis_inset: 0,
            label_offset_left: 28,
            label_col_width: 160,
            label_col_gap: 10,
            tick_width: 4,
            tick_shift: 8,
            label_line_height: 11,
            label_lines: 2,
            label_box_extra: 4,
            label_min_gap: 4,
            hour_tick_len: 5,
            half_hour_tick_len: 3,
            now_dot_radius: 5,
            abut_gap: 2,
            density_bucket_minutes: 10,
            density_chart_height: 24,
            density_bottom_margin: 12,
        }
    }
}

impl SceneMetrics {
    /// X of the vertical timeline axis.
    pub fn axis_x(&self) -> i32 {
        self.hour_column_width + self.column_gap + self.axis_inset
    }

    /// Height of the timeline content between the paddings.
    pub fn content_height(&self) -> i32 {
        self.canvas_height - self.padding_y * 2
    }

    pub fn label_box_height(&self) -> i32 {
        self.label_line_height * self.label_lines + self.label_box_extra
    }

    /// Left edge of label column `column`.
    pub fn label_left(&self, column: u32) -> i32 {
        self.axis_x()
            + self.label_offset_left
            + column as i32 * (self.label_col_width + self.label_col_gap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuideKind {
    Hour,
    HalfHour,
}

/// A horizontal guide tick on the axis; hour guides carry a formatted label ("9 AM").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideMark {
    pub minute: u32,
    pub y: i32,
    pub kind: GuideKind,
    pub label: Option<String>,
}

/// The vertical tick marking one event's interval, shifted right by its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventTick {
    pub event: EventId,
    pub lane: u32,
    pub x: i32,
    pub y_top: i32,
    pub y_bottom: i32,
    pub width: i32,
}

/// Connecting line from an event's tick start to its label column's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Leader {
    pub event: EventId,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelBlock {
    pub event: EventId,
    pub column: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Event title, untruncated; wrapping is the rasterizer's concern.
    pub title: String,
    /// Time range plus optional location, e.g. "9:00 AM–9:45 AM · MTV–Aristotle".
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NowMarker {
    pub minute: u32,
    pub y: i32,
    pub radius: i32,
}

/// Normalized coverage sparkline along the bottom of the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DensityLine {
    pub base_y: i32,
    pub points: Vec<Point>,
}

/// The final render-ready structure for one day view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub device_pixel_ratio: f32,
    pub axis: Segment,
    pub guides: Vec<GuideMark>,
    pub now: Option<NowMarker>,
    pub ticks: Vec<EventTick>,
    pub leaders: Vec<Leader>,
    pub labels: Vec<LabelBlock>,
    pub density: Option<DensityLine>,
}

#[cfg(test)]
mod tests {
    use super::SceneMetrics;

    #[test]
    fn default_metrics_match_the_portrait_design() {
        let metrics = SceneMetrics::default();
        assert_eq!(metrics.axis_x(), 88);
        assert_eq!(metrics.content_height(), 752);
        assert_eq!(metrics.label_box_height(), 26);
        assert_eq!(metrics.label_left(0), 116);
        assert_eq!(metrics.label_left(1), 116 + 170);
    }
}
