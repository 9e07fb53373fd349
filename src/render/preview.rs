// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::scene::{GuideKind, Scene};

use super::{Canvas, CanvasError};

/// Character-grid dimensions for the ASCII preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub columns: usize,
    pub rows: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self { columns: 96, rows: 80 }
    }
}

/// Renders a scene to a character grid for terminals, logs and tests.
///
/// Logical pixel coordinates are scaled down to character cells; everything that lands
/// outside the grid is clipped rather than rejected. The output is deterministic for a
/// given scene and options.
pub fn render_scene_ascii(scene: &Scene, options: PreviewOptions) -> Result<String, CanvasError> {
    let columns = options.columns.max(8);
    let rows = options.rows.max(8);
    let mut canvas = Canvas::new(columns, rows)?;

    let scale_x =
        |x: i32| -> i32 { (x as i64 * columns as i64 / scene.width.max(1) as i64) as i32 };
    let scale_y =
        |y: i32| -> i32 { (y as i64 * rows as i64 / scene.height.max(1) as i64) as i32 };

    let axis_x = scale_x(scene.axis.from.x);
    canvas.vline_clipped(axis_x, scale_y(scene.axis.from.y), scale_y(scene.axis.to.y));

    for guide in &scene.guides {
        let y = scale_y(guide.y);
        match guide.kind {
            GuideKind::Hour => canvas.hline_clipped(axis_x - 2, axis_x + 1, y),
            GuideKind::HalfHour => canvas.hline_clipped(axis_x - 1, axis_x, y),
        }
        if let Some(label) = &guide.label {
            let start = axis_x - 4 - label.chars().count() as i32;
            for (offset, ch) in label.chars().enumerate() {
                canvas.set_clipped(start + offset as i32, y, ch);
            }
        }
    }

    for tick in &scene.ticks {
        let x = scale_x(tick.x);
        for y in scale_y(tick.y_top)..=scale_y(tick.y_bottom) {
            canvas.set_clipped(x, y, '█');
        }
    }

    for leader in &scene.leaders {
        let y = scale_y(leader.from.y);
        for x in (scale_x(leader.from.x) + 1)..scale_x(leader.to.x) {
            canvas.set_clipped(x, y, '·');
        }
    }

    let label_columns = scale_x(scene.labels.first().map_or(0, |l| l.width)).max(4) as usize;
    for label in &scene.labels {
        let x = scale_x(label.x);
        let y = scale_y(label.y);
        let title = truncate_with_ellipsis(&label.title, label_columns);
        for (offset, ch) in title.chars().enumerate() {
            canvas.set_clipped(x + offset as i32, y, ch);
        }
        let detail = truncate_with_ellipsis(&label.detail, label_columns);
        for (offset, ch) in detail.chars().enumerate() {
            canvas.set_clipped(x + offset as i32, y + 1, ch);
        }
    }

    if let Some(now) = &scene.now {
        canvas.set_clipped(axis_x, scale_y(now.y), '●');
    }

    if let Some(density) = &scene.density {
        for point in &density.points {
            canvas.set_clipped(scale_x(point.x), scale_y(point.y), '·');
        }
    }

    Ok(canvas.to_string())
}

/// Truncates to `max` character cells, marking the cut with `…`.
pub(crate) fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut truncated = text.chars().take(max - 1).collect::<String>();
    truncated.push('…');
    truncated
}
