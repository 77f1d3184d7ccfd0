//! The star collection and its per-tick orchestration.

use crate::config::StarfieldConfig;
use crate::draw::{DrawCommand, Rgba};
use crate::random::PositionSource;
use crate::rotation::Rotation;
use crate::star::{Phase, Star, StarMotion};
use crate::viewport::Viewport;

/// A fixed-size set of stars sharing one viewport, one motion rule and one
/// random source.
///
/// The field is built once and mutated in place every tick; it never grows
/// or shrinks.
///
/// # Example
///
/// ```ignore
/// let mut field = StarField::new(&StarfieldConfig::default().with_seed(7));
/// field.advance_all();
/// let frame = field.draw_commands(Rgba::WHITE);
/// field.rotate_all(1.0);
/// ```
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    viewport: Viewport,
    motion: StarMotion,
    source: PositionSource,
}

impl StarField {
    /// Spawn `config.star_count` stars at random positions.
    pub fn new(config: &StarfieldConfig) -> Self {
        let source = PositionSource::new(config.viewport.width, config.seed);
        Self::with_source(config.star_count, config.viewport, config.motion, source)
    }

    /// Spawn `count` stars from an explicit source.
    pub fn with_source(
        count: usize,
        viewport: Viewport,
        motion: StarMotion,
        mut source: PositionSource,
    ) -> Self {
        let stars = (0..count).map(|_| Star::spawn(&mut source)).collect();
        Self {
            stars,
            viewport,
            motion,
            source,
        }
    }

    /// Build a field around stars placed by the caller.
    ///
    /// Respawns still draw from `source`.
    pub fn from_stars(
        stars: Vec<Star>,
        viewport: Viewport,
        motion: StarMotion,
        source: PositionSource,
    ) -> Self {
        Self {
            stars,
            viewport,
            motion,
            source,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn motion(&self) -> &StarMotion {
        &self.motion
    }

    /// Advance every star once, in order. Returns how many respawned.
    pub fn advance_all(&mut self) -> usize {
        let Self {
            stars,
            viewport,
            motion,
            source,
        } = self;

        stars
            .iter_mut()
            .map(|star| star.advance(viewport, motion, source))
            .filter(|phase| *phase == Phase::Respawned)
            .count()
    }

    /// Rotate every star about the viewport center by `degrees`.
    pub fn rotate_all(&mut self, degrees: f32) {
        let rotation = Rotation::from_degrees(degrees);
        let pivot = self.viewport.center();
        for star in &mut self.stars {
            star.rotate_by(&rotation, pivot);
        }
    }

    /// Current state as filled circles, one per star, in star order.
    pub fn draw_commands(&self, color: Rgba) -> Vec<DrawCommand> {
        self.stars
            .iter()
            .map(|star| DrawCommand {
                center: star.position(),
                radius: star.radius(),
                color,
            })
            .collect()
    }

    /// One full frame: advance all, capture the frame, then rotate all.
    ///
    /// The frame shows post-advance, pre-rotation positions.
    pub fn tick(&mut self, degrees: f32, color: Rgba) -> Vec<DrawCommand> {
        let respawned = self.advance_all();
        tracing::trace!(respawned, "advanced star field");
        let frame = self.draw_commands(color);
        self.rotate_all(degrees);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    fn seeded_field(count: usize, seed: u64) -> StarField {
        StarField::new(
            &StarfieldConfig::default()
                .with_star_count(count)
                .with_seed(seed),
        )
    }

    #[test]
    fn test_new_spawns_requested_count_in_bounds() {
        let field = seeded_field(200, 1);
        assert_eq!(field.len(), 200);
        for star in field.stars() {
            assert!(field.viewport().contains(star.position()));
            assert_eq!(star.radius(), 1.0);
            assert_eq!(star.depth(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_evolution() {
        let mut a = seeded_field(50, 77);
        let mut b = seeded_field(50, 77);
        for _ in 0..300 {
            assert_eq!(a.tick(1.0, Rgba::WHITE), b.tick(1.0, Rgba::WHITE));
        }
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_advance_all_counts_respawns() {
        let stars = vec![
            Star::at(Vec2::new(500.0, 500.0)),
            Star::at(Vec2::new(-1.0, 500.0)),
            Star::at(Vec2::new(500.0, 1001.0)),
        ];
        let mut field = StarField::from_stars(
            stars,
            Viewport::default(),
            StarMotion::default(),
            PositionSource::seeded(1000.0, 3),
        );

        assert_eq!(field.advance_all(), 2);
        assert_eq!(field.stars()[0].depth(), 1.0);
        assert_eq!(field.stars()[1].depth(), 0.0);
    }

    #[test]
    fn test_tick_draws_before_rotating() {
        let stars = vec![Star::at(Vec2::new(600.0, 500.0))];
        let mut field = StarField::from_stars(
            stars,
            Viewport::default(),
            StarMotion::default(),
            PositionSource::seeded(1000.0, 3),
        );

        let frame = field.tick(90.0, Rgba::WHITE);

        // Frame holds the advanced but not yet rotated position
        assert_abs_diff_eq!(frame[0].center.x, 605.0, epsilon = 1e-3);
        assert_abs_diff_eq!(frame[0].center.y, 500.0, epsilon = 1e-3);
        assert_abs_diff_eq!(frame[0].radius, 1.1, epsilon = 1e-6);

        // Star itself has been rotated a quarter turn afterwards
        let p = field.stars()[0].position();
        assert_abs_diff_eq!(p.x, 500.0, epsilon = 1e-3);
        assert_abs_diff_eq!(p.y, 605.0, epsilon = 1e-3);
    }

    #[test]
    fn test_draw_commands_follow_star_order() {
        let field = seeded_field(20, 11);
        let color = Rgba::from_rgb8(179, 12, 130);
        let frame = field.draw_commands(color);

        assert_eq!(frame.len(), field.len());
        for (cmd, star) in frame.iter().zip(field.stars()) {
            assert_eq!(cmd.center, star.position());
            assert_eq!(cmd.radius, star.radius());
            assert_eq!(cmd.color, color);
        }
    }

    #[test]
    fn test_rotate_all_keeps_field_size() {
        let mut field = seeded_field(64, 2);
        for _ in 0..10 {
            field.rotate_all(1.0);
        }
        assert_eq!(field.len(), 64);
    }
}
