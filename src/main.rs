//! Starfield
//!
//! Opens a window and plays the warp-speed starfield until it is closed.
//!
//! # Usage
//!
//! ```bash
//! # Default 1000x1000 window, 200 stars, 100 ms per tick
//! starfield
//!
//! # Reproducible run with more stars
//! starfield --stars 500 --seed 42
//!
//! # Settings from a JSON file, overridden on the command line
//! starfield --config warp.json --tick-ms 33
//!
//! # No window: simulate 600 ticks and log each frame
//! starfield --headless 600 --log-level debug
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use starfield::StarfieldConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Warp-speed starfield
#[derive(Parser, Debug)]
#[command(name = "starfield")]
#[command(author, version, about = "Warp-speed starfield animation", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// JSON config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport (and window) width
    #[arg(long)]
    width: Option<f32>,

    /// Viewport (and window) height
    #[arg(long)]
    height: Option<f32>,

    /// Number of stars
    #[arg(short, long)]
    stars: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Sleep per tick in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Run without a window for this many ticks
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<StarfieldConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading config from {}", path.display());
                StarfieldConfig::from_json_file(path)?
            }
            None => StarfieldConfig::default(),
        };

        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(config.viewport.width);
            let height = self.height.unwrap_or(config.viewport.height);
            config = config.with_viewport(width, height);
        }
        if let Some(stars) = self.stars {
            config = config.with_star_count(stars);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.tick_ms {
            config = config.with_tick_interval(Duration::from_millis(ms));
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starfield v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.load_config()?;

    match cli.headless {
        Some(ticks) => starfield::run_headless(config, ticks)?,
        None => starfield::run(config)?,
    }

    Ok(())
}
