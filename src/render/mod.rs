// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering of composed scenes.
//!
//! The e-ink panel gets real pixels from a device-specific rasterizer; this module renders
//! the same [`Scene`](crate::scene::Scene) to a character grid for terminals, logs and tests.

use std::fmt;

pub mod preview;

pub use preview::{render_scene_ascii, PreviewOptions};

/// A fixed-size, bounds-checked character grid.
///
/// Plain characters overwrite (last writer wins); the line-drawing characters `│` and `─`
/// merge into `┼` where they cross, so guides drawn over the axis read as junctions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![' '; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    /// Sets the character at `(x, y)`, merging crossing line characters.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = merge(self.cells[idx], ch);
        Ok(())
    }

    /// Like [`set`](Self::set) but silently drops out-of-bounds writes.
    ///
    /// Scene geometry is produced in logical pixels and scaled down to character cells, so
    /// a coordinate landing one cell past the grid edge is clipping, not a caller bug.
    pub fn set_clipped(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if self.in_bounds(x, y) {
            let idx = y * self.width + x;
            self.cells[idx] = merge(self.cells[idx], ch);
        }
    }

    /// Writes `text` left-to-right starting at `(x, y)`, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }

        let mut x = x;
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(x, y, ch)?;
            x += 1;
        }

        Ok(())
    }

    /// Draws a `─` run from `x0..=x1` at `y`, clipped to the grid.
    pub fn hline_clipped(&mut self, x0: i32, x1: i32, y: i32) {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in min_x..=max_x {
            self.set_clipped(x, y, '─');
        }
    }

    /// Draws a `│` run from `y0..=y1` at `x`, clipped to the grid.
    pub fn vline_clipped(&mut self, x: i32, y0: i32, y1: i32) {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in min_y..=max_y {
            self.set_clipped(x, y, '│');
        }
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}

fn merge(existing: char, incoming: char) -> char {
    match (existing, incoming) {
        ('│', '─') | ('─', '│') | ('┼', '─') | ('┼', '│') => '┼',
        _ => incoming,
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            let row_start = y * self.width;
            let row = &self.cells[row_start..row_start + self.width];
            let trailing = row.iter().rev().take_while(|ch| **ch == ' ').count();
            for ch in &row[..self.width - trailing] {
                f.write_char(*ch)?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
