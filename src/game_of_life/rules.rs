//! Conway's transition rule

/// Maps a cell's committed state and live-neighbor count to its next state
pub struct TransitionEngine;

impl TransitionEngine {
    /// Next alive flag for a cell.
    ///
    /// | current | live neighbors | next  |
    /// |---------|----------------|-------|
    /// | alive   | < 2            | dead  |
    /// | alive   | 2 or 3         | alive |
    /// | alive   | > 3            | dead  |
    /// | dead    | 3              | alive |
    /// | dead    | otherwise      | dead  |
    pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
        match (alive, live_neighbors) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3) => true,            // Birth
            _ => false,
        }
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_counts() -> &'static [u8] {
        &[2, 3]
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_counts() -> &'static [u8] {
        &[3]
    }

    /// Maximum possible neighbor count in a Moore neighborhood
    pub fn max_neighbor_count() -> u8 {
        8
    }
}
