//! Conway's Game of Life on a fixed-size grid
//!
//! The simulation core (grid, neighbor counting, transition rule and the
//! synchronous tick) knows nothing about drawing. Renderers and the host frame
//! loop read the committed grid between ticks.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod host;
pub mod logging;
pub mod render;
pub mod utils;

pub use config::{EdgePolicy, Settings};
pub use error::ConfigurationError;
pub use game_of_life::{Cell, Grid, StabilityAnalysis, TickScheduler, TransitionEngine};
pub use host::{FrameLoop, LoopSummary, StopReason};

use anyhow::Result;

/// Build the initial grid described by the settings.
///
/// A configured pattern wins over random initialization; otherwise the grid is
/// filled from the seed and threshold.
pub fn build_grid(settings: &Settings) -> Result<Grid> {
    settings.validate()?;
    let edge_policy = settings.grid.edge_policy;

    let grid = if let Some(cells) = &settings.pattern.cells {
        Grid::from_pattern(cells, edge_policy)?
    } else if let Some(path) = &settings.pattern.file {
        game_of_life::load_pattern_from_file(path, edge_policy)?
    } else {
        let seed = settings.seed.resolve();
        log::info!("Using seed={}, threshold={}", seed, settings.seed.threshold);
        Grid::random(
            settings.grid.rows,
            settings.grid.columns,
            edge_policy,
            seed,
            settings.seed.threshold,
        )?
    };

    if settings.pattern.is_set()
        && (grid.rows() as i64 != settings.grid.rows || grid.columns() as i64 != settings.grid.columns)
    {
        log::warn!(
            "Pattern is {}x{}; ignoring configured {}x{}",
            grid.rows(),
            grid.columns(),
            settings.grid.rows,
            settings.grid.columns
        );
    }

    log::debug!(
        "Built {}x{} {:?} grid with {} living cells",
        grid.rows(),
        grid.columns(),
        grid.edge_policy(),
        grid.living_count()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_random_grid() {
        let mut settings = Settings::default();
        settings.grid.rows = 6;
        settings.grid.columns = 9;
        settings.seed.seed = Some(77);

        let grid = build_grid(&settings).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (6, 9));
        assert_eq!(grid, build_grid(&settings).unwrap());
    }

    #[test]
    fn test_pattern_overrides_dimensions() {
        let mut settings = Settings::default();
        settings.pattern.cells = Some(vec![0, 1, 1, 0]);

        let grid = build_grid(&settings).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (2, 2));
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_invalid_settings_fail_before_building() {
        let mut settings = Settings::default();
        settings.seed.threshold = 2.0;

        let err = build_grid(&settings).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::InvalidThreshold(2.0))
        );
    }
}
