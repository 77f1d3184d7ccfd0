//! # Frame Stats
//!
//! Runs the simulation without a window and prints how the field evolves:
//! how many stars respawn per tick and how large the biggest one gets.
//!
//! Run with: `cargo run --example frame_stats -- 500`

use starfield::prelude::*;

fn main() {
    let ticks: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);

    let config = StarfieldConfig::default().with_seed(7);
    let mut field = StarField::new(&config);

    println!("=== Starfield Frame Stats ===");
    println!("Stars: {}", field.len());
    println!("Ticks: {}", ticks);
    println!();

    let mut total_respawns = 0;
    for tick in 0..ticks {
        let respawned = field.advance_all();
        let frame = field.draw_commands(config.star_color);
        field.rotate_all(config.rotation_step);

        total_respawns += respawned;
        if tick % 50 == 0 {
            let max_radius = frame.iter().map(|c| c.radius).fold(0.0_f32, f32::max);
            println!(
                "tick {:>5}: respawned {:>3}, largest radius {:>5.1}",
                tick, respawned, max_radius
            );
        }
    }

    println!();
    println!(
        "Average respawns per tick: {:.2}",
        total_respawns as f32 / ticks.max(1) as f32
    );
}
