//! Synchronous generation stepping

use super::neighbors::count_live_neighbors;
use super::{Grid, TransitionEngine};
use rayon::prelude::*;

/// What changed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Generation number after the commit
    pub generation: u64,
    pub living: usize,
    pub births: usize,
    pub deaths: usize,
}

impl TickReport {
    /// No cell changed state, so every later generation is identical
    pub fn is_unchanged(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// Drives full-grid generation steps
pub struct TickScheduler;

impl TickScheduler {
    /// Advance the grid by one generation.
    ///
    /// Every next state is computed from the committed generation before any
    /// cell is committed, so neighbor counts never see a mix of old and new
    /// values regardless of traversal order.
    pub fn tick(grid: &mut Grid) -> TickReport {
        let next = Self::compute(grid);
        grid.stage(&next);
        let (births, deaths) = grid.commit();

        let report = TickReport {
            generation: grid.generation(),
            living: grid.living_count(),
            births,
            deaths,
        };
        log::trace!(
            "generation {}: {} living (+{} -{})",
            report.generation,
            report.living,
            report.births,
            report.deaths
        );
        report
    }

    /// Advance the grid by `generations` ticks
    pub fn run(grid: &mut Grid, generations: usize) -> Vec<TickReport> {
        (0..generations).map(|_| Self::tick(grid)).collect()
    }

    /// Compute phase: read-only over the committed generation.
    fn compute(grid: &Grid) -> Vec<bool> {
        grid.cells()
            .par_iter()
            .map(|cell| {
                let neighbors = count_live_neighbors(grid, cell.row(), cell.column());
                TransitionEngine::next_state(cell.is_alive(), neighbors)
            })
            .collect()
    }
}
