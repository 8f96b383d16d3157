//! Host frame loop: tick, render, then wait out the rest of the frame

use crate::config::DisplayConfig;
use crate::error::ConfigurationError;
use crate::game_of_life::{Grid, TickScheduler};
use crate::render::Renderer;
use anyhow::Result;
use std::fmt;
use std::time::{Duration, Instant};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Requested,
    Extinct,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub generations: u64,
    pub final_living: usize,
    pub reason: StopReason,
}

impl fmt::Display for LoopSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::Requested => "stop requested",
            StopReason::Extinct => "all cells died",
            StopReason::Stable => "pattern stopped changing",
        };
        write!(
            f,
            "Stopped after {} generations ({}), {} living cells",
            self.generations, reason, self.final_living
        )
    }
}

/// Fixed-rate simulation loop
#[derive(Debug, Clone)]
pub struct FrameLoop {
    frame_duration: Duration,
    max_generations: Option<u64>,
    stop_when_stable: bool,
}

impl FrameLoop {
    pub fn new(
        fps: u32,
        max_generations: Option<u64>,
        stop_when_stable: bool,
    ) -> Result<Self, ConfigurationError> {
        if fps == 0 {
            return Err(ConfigurationError::InvalidFps(fps));
        }

        Ok(Self {
            frame_duration: Duration::from_secs(1) / fps,
            max_generations,
            stop_when_stable,
        })
    }

    pub fn from_settings(display: &DisplayConfig) -> Result<Self, ConfigurationError> {
        Self::new(display.fps, display.max_generations, display.stop_when_stable)
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Run until a stop condition holds.
    ///
    /// The initial generation is drawn before the first tick. `should_stop` is
    /// polled once per frame, before ticking.
    pub fn run<R, F>(&self, grid: &mut Grid, renderer: &mut R, mut should_stop: F) -> Result<LoopSummary>
    where
        R: Renderer + ?Sized,
        F: FnMut() -> bool,
    {
        let start_generation = grid.generation();
        renderer.draw(grid)?;

        let mut frame_start = Instant::now();
        let reason = loop {
            if let Some(max) = self.max_generations {
                if grid.generation() - start_generation >= max {
                    break StopReason::GenerationLimit;
                }
            }
            if should_stop() {
                break StopReason::Requested;
            }

            let report = TickScheduler::tick(grid);
            renderer.draw(grid)?;

            if self.stop_when_stable {
                if report.living == 0 {
                    break StopReason::Extinct;
                }
                if report.is_unchanged() {
                    break StopReason::Stable;
                }
            }

            self.pace(frame_start);
            frame_start = Instant::now();
        };

        let summary = LoopSummary {
            generations: grid.generation() - start_generation,
            final_living: grid.living_count(),
            reason,
        };
        log::info!("{}", summary);
        Ok(summary)
    }

    /// Sleep for whatever is left of the frame; never when running behind
    fn pace(&self, frame_start: Instant) {
        if let Some(remaining) = self.frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
