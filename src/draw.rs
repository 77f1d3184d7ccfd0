//! Draw commands and the sinks that consume them.
//!
//! The simulation never talks to a window or a GPU directly. Each tick it
//! produces an ordered list of [`DrawCommand`]s (filled circles) and hands it
//! to a [`RenderSink`], which clears the previous frame and presents the new one.

use crate::error::RenderError;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA color, each component in `0.0..=1.0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether every component is within `0.0..=1.0`.
    pub fn is_normalized(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<Rgba> for wgpu::Color {
    fn from(c: Rgba) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

/// One filled circle, in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Anything that can put a frame of circles on screen (or pretend to).
pub trait RenderSink {
    /// Replace the previous frame with `frame` and present it.
    fn present(&mut self, frame: &[DrawCommand]) -> Result<(), RenderError>;
}

/// Headless sink: logs a short summary of every frame.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &[DrawCommand]) -> Result<(), RenderError> {
        self.frames += 1;
        let max_radius = frame.iter().map(|c| c.radius).fold(0.0_f32, f32::max);
        tracing::debug!(
            frame = self.frames,
            circles = frame.len(),
            max_radius,
            "presented frame"
        );
        Ok(())
    }
}

/// Sink that keeps every frame it is given. Handy for inspecting a run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<DrawCommand>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderSink for RecordingSink {
    fn present(&mut self, frame: &[DrawCommand]) -> Result<(), RenderError> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, frame: &[DrawCommand]) -> Result<(), RenderError> {
        (**self).present(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_conversion() {
        let c = Rgba::from_rgb8(255, 0, 51);
        assert_eq!(c, Rgba::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_normalized_check() {
        assert!(Rgba::WHITE.is_normalized());
        assert!(!Rgba::new(1.5, 0.0, 0.0, 1.0).is_normalized());
        assert!(!Rgba::new(0.0, -0.1, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn test_recording_sink_keeps_frames() {
        let mut sink = RecordingSink::new();
        let cmd = DrawCommand {
            center: Vec2::new(1.0, 2.0),
            radius: 3.0,
            color: Rgba::WHITE,
        };
        sink.present(&[cmd]).unwrap();
        sink.present(&[]).unwrap();

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0], vec![cmd]);
        assert_eq!(sink.last(), Some(&[][..]));
    }

    #[test]
    fn test_log_sink_counts_frames() {
        let mut sink = LogSink::new();
        sink.present(&[]).unwrap();
        sink.present(&[]).unwrap();
        assert_eq!(sink.frames(), 2);
    }
}
