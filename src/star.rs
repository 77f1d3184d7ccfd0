//! A single point of light and its per-frame update rules.

use crate::random::PositionSource;
use crate::rotation::Rotation;
use crate::viewport::Viewport;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Radius every star starts (and restarts) with.
pub const INITIAL_RADIUS: f32 = 1.0;

/// How a surviving star moves each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarMotion {
    /// Outward scale factor from the viewport center, applied per frame.
    pub expansion: f32,
    /// Radius growth per frame.
    pub radius_step: f32,
}

impl Default for StarMotion {
    fn default() -> Self {
        Self {
            expansion: 1.05,
            radius_step: 0.1,
        }
    }
}

/// Which branch of [`Star::advance`] ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Star was on screen and moved outward.
    Active,
    /// Star had left the viewport and was placed somewhere new.
    Respawned,
}

/// One animated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    position: Vec2,
    /// Frames since the last respawn. Nothing reads it back; kept as carried state.
    depth: f32,
    radius: f32,
}

impl Star {
    /// A fresh star at a random position.
    pub fn spawn(source: &mut PositionSource) -> Self {
        let mut star = Self::at(Vec2::ZERO);
        star.respawn(source);
        star
    }

    /// A fresh star at a known position (depth 0, initial radius).
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            depth: 0.0,
            radius: INITIAL_RADIUS,
        }
    }

    /// A star with explicit state.
    pub fn with_state(position: Vec2, depth: f32, radius: f32) -> Self {
        Self {
            position,
            depth,
            radius,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Move one frame.
    ///
    /// Depth always ticks first. A star outside the viewport is respawned;
    /// one inside is pushed away from the center by `motion.expansion` and
    /// grows by `motion.radius_step`.
    pub fn advance(
        &mut self,
        viewport: &Viewport,
        motion: &StarMotion,
        source: &mut PositionSource,
    ) -> Phase {
        self.depth += 1.0;

        if !viewport.contains(self.position) {
            self.respawn(source);
            return Phase::Respawned;
        }

        let center = viewport.center();
        self.position = (self.position - center) * motion.expansion + center;
        self.radius += motion.radius_step;
        Phase::Active
    }

    /// Rotate about the viewport center by `degrees`. Depth and radius are untouched.
    pub fn rotate(&mut self, degrees: f32, viewport: &Viewport) {
        self.rotate_by(&Rotation::from_degrees(degrees), viewport.center());
    }

    /// Same as [`Star::rotate`] with a prebuilt rotation, so a field can share one matrix.
    #[inline]
    pub(crate) fn rotate_by(&mut self, rotation: &Rotation, pivot: Vec2) {
        self.position = rotation.about(self.position, pivot);
    }

    fn respawn(&mut self, source: &mut PositionSource) {
        // Two independent draws over the same range
        let x = source.sample();
        let y = source.sample();
        self.position = Vec2::new(x, y);
        self.depth = 0.0;
        self.radius = INITIAL_RADIUS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn setup() -> (Viewport, StarMotion, PositionSource) {
        (
            Viewport::default(),
            StarMotion::default(),
            PositionSource::seeded(1000.0, 42),
        )
    }

    #[test]
    fn test_center_star_stays_put_and_grows() {
        let (vp, motion, mut source) = setup();
        let mut star = Star::at(Vec2::new(500.0, 500.0));

        let phase = star.advance(&vp, &motion, &mut source);

        assert_eq!(phase, Phase::Active);
        assert_eq!(star.position(), Vec2::new(500.0, 500.0));
        assert_abs_diff_eq!(star.radius(), 1.1, epsilon = 1e-6);
        assert_eq!(star.depth(), 1.0);
    }

    #[test]
    fn test_active_star_scales_outward() {
        let (vp, motion, mut source) = setup();
        let mut star = Star::with_state(Vec2::new(600.0, 400.0), 3.0, 2.0);

        let phase = star.advance(&vp, &motion, &mut source);

        assert_eq!(phase, Phase::Active);
        assert_abs_diff_eq!(star.x(), 605.0, epsilon = 1e-3);
        assert_abs_diff_eq!(star.y(), 395.0, epsilon = 1e-3);
        assert_abs_diff_eq!(star.radius(), 2.1, epsilon = 1e-6);
        assert_eq!(star.depth(), 4.0);
    }

    #[test]
    fn test_right_edge_is_in_bounds() {
        let (vp, motion, mut source) = setup();
        let mut star = Star::at(Vec2::new(1000.0, 500.0));

        assert_eq!(star.advance(&vp, &motion, &mut source), Phase::Active);
        assert_abs_diff_eq!(star.x(), 1025.0, epsilon = 1e-3);
        assert_abs_diff_eq!(star.radius(), 1.1, epsilon = 1e-6);
    }

    #[test]
    fn test_just_past_right_edge_respawns() {
        let (vp, motion, mut source) = setup();
        let mut star = Star::with_state(Vec2::new(1000.01, 500.0), 12.0, 2.2);

        assert_eq!(star.advance(&vp, &motion, &mut source), Phase::Respawned);
        assert_eq!(star.depth(), 0.0);
        assert_eq!(star.radius(), INITIAL_RADIUS);
        assert!((0.0..1000.0).contains(&star.x()));
        assert!((0.0..1000.0).contains(&star.y()));
    }

    #[test]
    fn test_negative_coordinates_respawn() {
        let (vp, motion, mut source) = setup();
        for pos in [Vec2::new(-0.5, 500.0), Vec2::new(500.0, -3.0)] {
            let mut star = Star::with_state(pos, 5.0, 1.5);
            assert_eq!(star.advance(&vp, &motion, &mut source), Phase::Respawned);
        }
    }

    #[test]
    fn test_respawn_samples_width_square_on_wide_viewport() {
        let vp = Viewport::new(1000.0, 200.0);
        let motion = StarMotion::default();
        let mut source = PositionSource::seeded(vp.width, 5);

        let mut saw_y_beyond_height = false;
        for _ in 0..200 {
            let mut star = Star::at(Vec2::new(-1.0, -1.0));
            star.advance(&vp, &motion, &mut source);
            assert!(star.y() < 1000.0);
            saw_y_beyond_height |= star.y() > vp.height;
        }
        assert!(saw_y_beyond_height);
    }

    #[test]
    fn test_rotate_leaves_depth_and_radius() {
        let vp = Viewport::default();
        let mut star = Star::with_state(Vec2::new(700.0, 500.0), 9.0, 3.3);

        star.rotate(45.0, &vp);

        assert_eq!(star.depth(), 9.0);
        assert_eq!(star.radius(), 3.3);
        assert_abs_diff_eq!(star.position().distance(vp.center()), 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rotate_zero_and_full_turn_are_identity() {
        let vp = Viewport::default();
        let start = Vec2::new(812.5, 133.0);

        for angle in [0.0, 360.0] {
            let mut star = Star::at(start);
            star.rotate(angle, &vp);
            assert_abs_diff_eq!(star.x(), start.x, epsilon = 1e-3);
            assert_abs_diff_eq!(star.y(), start.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_rotate_then_unrotate() {
        let vp = Viewport::default();
        for (angle, start) in [
            (1.0, Vec2::new(10.0, 990.0)),
            (33.3, Vec2::new(500.0, 0.0)),
            (-120.0, Vec2::new(250.0, 750.0)),
            (725.0, Vec2::new(999.0, 1.0)),
        ] {
            let mut star = Star::at(start);
            star.rotate(angle, &vp);
            star.rotate(-angle, &vp);
            assert_abs_diff_eq!(star.x(), start.x, epsilon = 1e-2);
            assert_abs_diff_eq!(star.y(), start.y, epsilon = 1e-2);
        }
    }
}
