//! Random placement for new and respawned stars.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Uniform coordinate source over `[0, extent)`.
///
/// A single generator is owned for the whole run. x and y are drawn
/// independently from the same range, so placements cover an
/// `extent x extent` square regardless of the viewport's height.
///
/// ```ignore
/// let mut source = PositionSource::seeded(1000.0, 42);
/// let x = source.sample();
/// ```
#[derive(Debug, Clone)]
pub struct PositionSource {
    rng: SmallRng,
    dist: Uniform<f32>,
    extent: f32,
}

impl PositionSource {
    /// Reproducible source: the same seed yields the same sequence.
    pub fn seeded(extent: f32, seed: u64) -> Self {
        Self::from_rng(extent, SmallRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy(extent: f32) -> Self {
        Self::from_rng(extent, SmallRng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn new(extent: f32, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(extent, seed),
            None => Self::from_entropy(extent),
        }
    }

    fn from_rng(extent: f32, rng: SmallRng) -> Self {
        Self {
            rng,
            dist: Uniform::new(0.0, extent),
            extent,
        }
    }

    /// Upper (exclusive) bound of the sampled range.
    #[inline]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// One draw from `[0, extent)`.
    #[inline]
    pub fn sample(&mut self) -> f32 {
        self.dist.sample(&mut self.rng)
    }
}
