// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Output seam between scene composition and physical hardware.
//!
//! A [`Rasterizer`] turns a scene into a device frame (character grid, 1-bit bitmap, ...);
//! a [`DisplaySink`] pushes a finished frame at the panel. E-ink refresh cycles are slow and
//! visible, so the app only presents frames that differ from the last one shown.

use std::fmt;
use std::io::Write;

use crate::render::{render_scene_ascii, CanvasError, PreviewOptions};
use crate::scene::Scene;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The scene could not be turned into a frame.
    Rasterize(String),
    /// The frame could not be pushed to the device.
    Sink(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rasterize(reason) => write!(f, "rasterization failed: {reason}"),
            Self::Sink(reason) => write!(f, "display sink failed: {reason}"),
        }
    }
}

impl std::error::Error for DisplayError {}

impl From<CanvasError> for DisplayError {
    fn from(err: CanvasError) -> Self {
        Self::Rasterize(err.to_string())
    }
}

/// Turns a composed scene into a device-specific frame.
pub trait Rasterizer {
    /// Finished frame type; must support equality so the app can skip unchanged refreshes.
    type Frame: Clone + PartialEq;

    fn rasterize(&self, scene: &Scene) -> Result<Self::Frame, DisplayError>;
}

/// Presents finished frames on some output device.
pub trait DisplaySink<F> {
    fn present(&mut self, frame: &F) -> Result<(), DisplayError>;
}

/// Rasterizes scenes to the character-grid preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRasterizer {
    options: PreviewOptions,
}

impl AsciiRasterizer {
    pub fn new(options: PreviewOptions) -> Self {
        Self { options }
    }
}

impl Rasterizer for AsciiRasterizer {
    type Frame = String;

    fn rasterize(&self, scene: &Scene) -> Result<String, DisplayError> {
        Ok(render_scene_ascii(scene, self.options)?)
    }
}

/// Writes text frames to any writer, typically stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DisplaySink<String> for WriterSink<W> {
    fn present(&mut self, frame: &String) -> Result<(), DisplayError> {
        writeln!(self.writer, "{frame}").map_err(|err| DisplayError::Sink(err.to_string()))
    }
}

/// Records every presented frame; a test double for the refresh loop.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink<F> {
    frames: Vec<F>,
}

impl<F> CaptureSink<F> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }
}

impl<F: Clone + PartialEq> DisplaySink<F> for CaptureSink<F> {
    fn present(&mut self, frame: &F) -> Result<(), DisplayError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AsciiRasterizer, CaptureSink, DisplaySink, Rasterizer, WriterSink};
    use crate::model::{fixtures, DayWindow};
    use crate::scene::{compose_scene, SceneOptions};

    #[test]
    fn ascii_rasterizer_produces_a_text_frame() {
        let scene = compose_scene(
            &fixtures::sample_day(),
            DayWindow::from_hours(8, 21),
            None,
            &SceneOptions::default(),
        );
        let frame = AsciiRasterizer::default().rasterize(&scene).expect("frame");
        assert!(frame.contains("Design Review"));
    }

    #[test]
    fn capture_sink_records_presented_frames_in_order() {
        let mut sink = CaptureSink::new();
        sink.present(&"first".to_owned()).expect("present");
        sink.present(&"second".to_owned()).expect("present");
        assert_eq!(sink.frames(), ["first".to_owned(), "second".to_owned()]);
    }

    #[test]
    fn writer_sink_appends_a_trailing_newline() {
        let mut buffer = Vec::new();
        WriterSink::new(&mut buffer).present(&"frame".to_owned()).expect("present");
        assert_eq!(buffer, b"frame\n");
    }
}
