//! Moore-neighborhood counting under the grid's edge policy

use super::Grid;
use crate::config::EdgePolicy;

/// `(row, column)` deltas of the eight Moore neighbors
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Count living neighbors of the cell at `(row, column)`.
///
/// Only committed state is read. Under [`EdgePolicy::Toroidal`] each axis
/// wraps independently; under [`EdgePolicy::Bounded`] off-grid neighbors are
/// skipped. On very small toroidal grids several offsets can land on the same
/// cell and each landing is counted.
pub fn count_live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let policy = grid.edge_policy();

    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = resolve(row, dr, grid.rows(), policy)?;
            let c = resolve(column, dc, grid.columns(), policy)?;
            Some((r, c))
        })
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

/// Apply one axis offset, returning `None` when the neighbor does not exist
#[inline]
fn resolve(position: usize, offset: isize, size: usize, policy: EdgePolicy) -> Option<usize> {
    let target = position as isize + offset;
    match policy {
        EdgePolicy::Toroidal => Some(target.rem_euclid(size as isize) as usize),
        EdgePolicy::Bounded => {
            if target >= 0 && (target as usize) < size {
                Some(target as usize)
            } else {
                None
            }
        }
    }
}
