//! 2D rotation about an arbitrary pivot.

use glam::{Mat2, Vec2};

/// A rotation by a fixed angle, built from degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    matrix: Mat2,
}

impl Rotation {
    /// Counter-clockwise (in y-up terms) rotation by `degrees`.
    ///
    /// The matrix is `[[cos θ, -sin θ], [sin θ, cos θ]]` with θ in radians.
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            matrix: Mat2::from_angle(degrees.to_radians()),
        }
    }

    /// The rotation matrix.
    #[inline]
    pub fn matrix(&self) -> Mat2 {
        self.matrix
    }

    /// Rotate `point` about the origin.
    #[inline]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.matrix * point
    }

    /// Rotate `point` about `pivot`: translate by `-pivot`, rotate, translate back.
    #[inline]
    pub fn about(&self, point: Vec2, pivot: Vec2) -> Vec2 {
        self.apply(point - pivot) + pivot
    }
}

/// Shorthand for `Rotation::from_degrees(degrees).about(point, pivot)`.
pub fn rotate_about(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    Rotation::from_degrees(degrees).about(point, pivot)
}
