//! # Palette
//!
//! A denser, faster starfield in magenta on deep blue.
//!
//! Run with: `cargo run --example palette --release`

use starfield::prelude::*;
use std::time::Duration;

fn main() -> Result<(), StarfieldError> {
    let config = StarfieldConfig::default()
        .with_viewport(1000.0, 1000.0)
        .with_star_count(600)
        .with_motion(1.03, 0.05)
        .with_rotation_step(0.5)
        .with_tick_interval(Duration::from_millis(16))
        .with_star_color(Rgba::from_rgb8(179, 12, 130))
        .with_clear_color(Rgba::from_rgb8(0, 0, 40))
        .with_title("Starfield - palette");

    starfield::run(config)
}
