//! Run configuration.
//!
//! Every tunable lives in one immutable [`StarfieldConfig`] that is handed to
//! the star field and the render loop at construction. Values can come from
//! the builder methods, a JSON file, or both (file first, then overrides).
//!
//! ```ignore
//! let config = StarfieldConfig::from_json_file("warp.json")?
//!     .with_star_count(500)
//!     .with_seed(42);
//! config.validate()?;
//! ```
//!
//! A JSON file may specify any subset of fields:
//!
//! ```json
//! {
//!     "viewport": { "width": 1280, "height": 720 },
//!     "star_count": 400,
//!     "motion": { "expansion": 1.03 },
//!     "tick_interval_ms": 33
//! }
//! ```

use crate::draw::Rgba;
use crate::error::ConfigError;
use crate::star::StarMotion;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Everything a starfield run needs to know up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Drawing area, also the window's inner size.
    pub viewport: Viewport,
    /// Number of stars, fixed for the run.
    pub star_count: usize,
    /// Expansion and growth per frame.
    pub motion: StarMotion,
    /// Rotation applied to every star each tick, in degrees.
    pub rotation_step: f32,
    /// Flat sleep between simulating a tick and presenting it.
    pub tick_interval_ms: u64,
    pub star_color: Rgba,
    pub clear_color: Rgba,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Window title.
    pub title: String,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            star_count: 200,
            motion: StarMotion::default(),
            rotation_step: 1.0,
            tick_interval_ms: 100,
            star_color: Rgba::WHITE,
            clear_color: Rgba::BLACK,
            seed: None,
            title: "Starfield simulation".to_string(),
        }
    }
}

impl StarfieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_star_count(mut self, count: usize) -> Self {
        self.star_count = count;
        self
    }

    pub fn with_motion(mut self, expansion: f32, radius_step: f32) -> Self {
        self.motion = StarMotion {
            expansion,
            radius_step,
        };
        self
    }

    pub fn with_rotation_step(mut self, degrees: f32) -> Self {
        self.rotation_step = degrees;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn with_star_color(mut self, color: Rgba) -> Self {
        self.star_color = color;
        self
    }

    pub fn with_clear_color(mut self, color: Rgba) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive and finite, got {}x{}",
                width, height
            )));
        }
        if self.star_count == 0 {
            return Err(ConfigError::Invalid("star_count must be at least 1".into()));
        }
        if !(self.motion.expansion.is_finite() && self.motion.expansion > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "motion.expansion must be positive and finite, got {}",
                self.motion.expansion
            )));
        }
        if !self.motion.radius_step.is_finite() {
            return Err(ConfigError::Invalid("motion.radius_step must be finite".into()));
        }
        if !self.rotation_step.is_finite() {
            return Err(ConfigError::Invalid("rotation_step must be finite".into()));
        }
        for (name, color) in [("star_color", self.star_color), ("clear_color", self.clear_color)] {
            if !color.is_normalized() {
                return Err(ConfigError::Invalid(format!(
                    "{} components must be within 0..=1, got {:?}",
                    name, color
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StarfieldConfig::default();
        assert_eq!(config.viewport, Viewport::new(1000.0, 1000.0));
        assert_eq!(config.star_count, 200);
        assert_eq!(config.motion.expansion, 1.05);
        assert_eq!(config.motion.radius_step, 0.1);
        assert_eq!(config.rotation_step, 1.0);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.star_color, Rgba::WHITE);
        assert_eq!(config.clear_color, Rgba::BLACK);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = StarfieldConfig::from_json_str(
            r#"{ "star_count": 42, "motion": { "expansion": 1.02 }, "seed": 9 }"#,
        )
        .unwrap();

        assert_eq!(config.star_count, 42);
        assert_eq!(config.motion.expansion, 1.02);
        assert_eq!(config.motion.radius_step, 0.1);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.viewport, Viewport::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = StarfieldConfig::from_json_str("{ star_count: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = StarfieldConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            StarfieldConfig::default().with_viewport(0.0, 100.0),
            StarfieldConfig::default().with_viewport(100.0, -1.0),
            StarfieldConfig::default().with_viewport(f32::NAN, 100.0),
            StarfieldConfig::default().with_star_count(0),
            StarfieldConfig::default().with_motion(0.0, 0.1),
            StarfieldConfig::default().with_motion(1.05, f32::INFINITY),
            StarfieldConfig::default().with_rotation_step(f32::NAN),
            StarfieldConfig::default().with_star_color(Rgba::new(2.0, 0.0, 0.0, 1.0)),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_builder_round_trips_through_json() {
        let config = StarfieldConfig::new()
            .with_viewport(1280.0, 720.0)
            .with_star_count(300)
            .with_tick_interval(Duration::from_millis(16))
            .with_seed(5)
            .with_title("warp");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(StarfieldConfig::from_json_str(&json).unwrap(), config);
    }
}
