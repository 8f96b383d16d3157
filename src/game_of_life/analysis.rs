//! Stability analysis of a pattern's evolution

use super::{Grid, TickScheduler};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis of how a pattern behaves over a bounded number of generations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    /// Generations simulated to produce this analysis
    pub generations_observed: usize,
    /// First generation with no living cells, if any
    pub extinct_at: Option<usize>,
    /// Whether the first generation reproduces itself
    pub is_still_life: bool,
    /// Whether the starting state recurs with a period greater than one
    pub is_oscillator: bool,
    /// Period of oscillation (if oscillator)
    pub oscillation_period: Option<usize>,
}

impl StabilityAnalysis {
    /// Simulate a copy of `grid` for `max_period` generations and classify it.
    ///
    /// The grid itself is left untouched.
    pub fn observe(grid: &Grid, max_period: usize) -> Self {
        let mut scratch = grid.clone();
        let mut path = Vec::with_capacity(max_period + 1);
        path.push(scratch.alive_flags());

        for _ in 0..max_period {
            TickScheduler::tick(&mut scratch);
            path.push(scratch.alive_flags());
        }

        Self::analyze(&path)
    }

    /// Classify an evolution path of alive-flag snapshots
    pub fn analyze(path: &[Vec<bool>]) -> Self {
        let generations_observed = path.len().saturating_sub(1);
        let extinct_at = path
            .iter()
            .position(|flags| flags.iter().all(|&alive| !alive));

        let is_still_life = path.len() >= 2 && path[0] == path[1];
        let oscillation_period = if is_still_life {
            None
        } else {
            Self::find_period(path)
        };

        Self {
            generations_observed,
            extinct_at,
            is_still_life,
            is_oscillator: oscillation_period.is_some(),
            oscillation_period,
        }
    }

    /// Smallest period > 1 after which the starting state recurs
    fn find_period(path: &[Vec<bool>]) -> Option<usize> {
        (2..path.len()).find(|&period| {
            path[0] == path[period]
                && (1..period)
                    .filter(|&i| i + period < path.len())
                    .all(|i| path[i] == path[i + period])
        })
    }

    /// Whether the pattern settled into a fixed or repeating state
    pub fn is_stable(&self) -> bool {
        self.is_still_life || self.is_oscillator
    }
}

impl fmt::Display for StabilityAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stability ({} generations observed):", self.generations_observed)?;

        let kind = match (self.extinct_at, self.is_still_life, self.oscillation_period) {
            (Some(0), _, _) => "Empty".to_string(),
            (_, true, _) => "Still Life".to_string(),
            (_, _, Some(period)) => format!("Oscillator (period {})", period),
            (Some(generation), _, _) => format!("Dies out at generation {}", generation),
            _ => "Other".to_string(),
        };
        writeln!(f, "  Type: {}", kind)
    }
}
