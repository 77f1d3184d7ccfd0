//! # Starfield
//!
//! A classic warp-speed effect: stars appear anywhere in the viewport, drift
//! away from the center while growing, and slowly rotate around it.
//!
//! The simulation is plain CPU state ([`StarField`]) that produces an ordered
//! list of filled circles every tick. Whatever consumes those circles is a
//! [`RenderSink`]; the crate ships a winit/wgpu window sink and headless sinks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use starfield::prelude::*;
//!
//! fn main() -> Result<(), StarfieldError> {
//!     let config = StarfieldConfig::default()
//!         .with_star_count(200)
//!         .with_viewport(1000.0, 1000.0);
//!     starfield::run(config)
//! }
//! ```
//!
//! ## One Tick
//!
//! ```ignore
//! let respawned = field.advance_all();   // move or respawn every star
//! let frame = field.draw_commands(color); // snapshot {x, y, r} per star
//! field.rotate_all(1.0);                 // rotate everything about the center
//! sink.present(&frame)?;
//! ```
//!
//! All stars are advanced before any star is rotated. [`StarField::tick`] does
//! the three steps in this order.
//!
//! ## Star Rules
//!
//! | Situation | Effect |
//! |-----------|--------|
//! | Every frame | `depth += 1` |
//! | Outside `[0, width] x [0, height]` | new random position, `depth = 0`, `radius = 1` |
//! | Inside | `p = (p - center) * expansion + center`, `radius += radius_step` |
//! | Rotate | `p = R(θ) (p - center) + center` |

pub mod config;
pub mod draw;
pub mod error;
pub mod field;
mod gpu;
pub mod random;
pub mod rotation;
pub mod runner;
pub mod star;
pub mod time;
pub mod viewport;
mod window;

pub use config::StarfieldConfig;
pub use draw::{DrawCommand, LogSink, RecordingSink, RenderSink, Rgba};
pub use error::{ConfigError, GpuError, RenderError, StarfieldError};
pub use field::StarField;
pub use glam::Vec2;
pub use random::PositionSource;
pub use rotation::{rotate_about, Rotation};
pub use runner::{run_headless, Runner};
pub use star::{Phase, Star, StarMotion};
pub use viewport::Viewport;
pub use window::run;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use starfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::StarfieldConfig;
    pub use crate::draw::{DrawCommand, RenderSink, Rgba};
    pub use crate::error::StarfieldError;
    pub use crate::field::StarField;
    pub use crate::runner::{run_headless, Runner};
    pub use crate::star::{Phase, Star, StarMotion};
    pub use crate::time::TickClock;
    pub use crate::viewport::Viewport;
    pub use crate::window::run;
    pub use crate::Vec2;
}
