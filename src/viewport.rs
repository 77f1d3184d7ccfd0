//! The fixed drawing area stars live in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable 2D drawing area, in pixels.
///
/// The center doubles as the expansion origin and the rotation pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `(width / 2, height / 2)`.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `p` lies inside `[0, width] x [0, height]`.
    ///
    /// Edges are inclusive: a star sitting exactly on `x == width` is still visible.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        !(p.x < 0.0 || p.x > self.width || p.y < 0.0 || p.y > self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1000.0, 1000.0)
    }
}
