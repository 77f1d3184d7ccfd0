//! The per-tick render loop body, independent of any window.

use crate::config::StarfieldConfig;
use crate::draw::{LogSink, RenderSink};
use crate::error::{RenderError, StarfieldError};
use crate::field::StarField;
use crate::time::TickClock;

/// Drives a [`StarField`] into a [`RenderSink`] one tick at a time.
///
/// Each [`Runner::step`] advances every star, captures the frame, rotates
/// every star, sleeps the configured interval, and finally presents the
/// captured frame.
pub struct Runner<S: RenderSink> {
    field: StarField,
    clock: TickClock,
    sink: S,
    config: StarfieldConfig,
}

impl<S: RenderSink> Runner<S> {
    pub fn new(config: StarfieldConfig, sink: S) -> Self {
        let field = StarField::new(&config);
        Self::with_field(config, field, sink)
    }

    /// Use a field built elsewhere, e.g. with hand-placed stars.
    pub fn with_field(config: StarfieldConfig, field: StarField, sink: S) -> Self {
        Self {
            clock: TickClock::new(config.tick_interval()),
            field,
            sink,
            config,
        }
    }

    /// Run one tick.
    pub fn step(&mut self) -> Result<(), RenderError> {
        let frame = self
            .field
            .tick(self.config.rotation_step, self.config.star_color);
        self.clock.pace();
        self.sink.present(&frame)
    }

    /// Run exactly `ticks` ticks, skipping frames the sink could not present.
    pub fn run_for(&mut self, ticks: u64) -> Result<(), StarfieldError> {
        for _ in 0..ticks {
            match self.step() {
                Ok(()) => {}
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => tracing::warn!("Skipped frame: {}", e),
            }
        }
        Ok(())
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    /// Give back the sink, dropping the field.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Run without a window for `ticks` ticks, logging each frame.
pub fn run_headless(config: StarfieldConfig, ticks: u64) -> Result<(), StarfieldError> {
    config.validate()?;
    tracing::info!(
        stars = config.star_count,
        ticks,
        interval_ms = config.tick_interval_ms,
        "Starting headless run"
    );

    let mut runner = Runner::new(config, LogSink::new());
    runner.run_for(ticks)?;

    tracing::info!(
        frames = runner.sink().frames(),
        elapsed_ms = runner.clock().elapsed().as_millis() as u64,
        "Headless run finished"
    );
    Ok(())
}
