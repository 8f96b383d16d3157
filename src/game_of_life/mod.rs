//! Game of Life core functionality

pub mod analysis;
pub mod grid;
pub mod io;
pub mod neighbors;
pub mod rules;
pub mod tick;

pub use analysis::StabilityAnalysis;
pub use grid::{Cell, Grid};
pub use io::{create_example_patterns, load_pattern_from_file, parse_pattern};
pub use neighbors::{count_live_neighbors, MOORE_OFFSETS};
pub use rules::TransitionEngine;
pub use tick::{TickReport, TickScheduler};
