//! Grid representation and utilities for Game of Life

use crate::config::EdgePolicy;
use crate::error::ConfigurationError;
use itertools::iproduct;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// A single cell of the grid.
///
/// `alive` is the last committed generation. `next_state` holds the value
/// computed for the generation being built and only becomes `alive` on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
    next_state: bool,
}

impl Cell {
    fn new(row: usize, column: usize, alive: bool) -> Self {
        Self {
            row,
            column,
            alive,
            next_state: alive,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// `(row, column)` of this cell
    pub fn coordinate(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The pending state computed by the last tick's compute phase
    pub fn next_state(&self) -> bool {
        self.next_state
    }
}

/// Represents a Game of Life grid
///
/// Cells are stored row-major; the flat index of `(row, column)` is
/// `row * columns + column`. Neighbor lookups always go through coordinates
/// so both axes wrap the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    edge_policy: EdgePolicy,
    generation: u64,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(rows: i64, columns: i64, edge_policy: EdgePolicy) -> Result<Self, ConfigurationError> {
        let (rows, columns) = Self::checked_dimensions(rows, columns)?;
        Self::build(rows, columns, edge_policy, |_, _| false)
    }

    /// Create a grid whose initial state is drawn from a seeded generator.
    ///
    /// One `f64` is drawn per cell in row-major order and the cell starts alive
    /// when the draw is below `threshold`. The same seed and threshold always
    /// reproduce the same grid.
    pub fn random(
        rows: i64,
        columns: i64,
        edge_policy: EdgePolicy,
        seed: i64,
        threshold: f64,
    ) -> Result<Self, ConfigurationError> {
        let (rows, columns) = Self::checked_dimensions(rows, columns)?;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigurationError::InvalidThreshold(threshold));
        }

        let mut rng = StdRng::seed_from_u64(seed as u64);
        Self::build(rows, columns, edge_policy, |_, _| rng.random::<f64>() < threshold)
    }

    /// Create a square grid from a flat sequence of 0/1 values.
    ///
    /// The side length is the integer square root of the pattern length.
    pub fn from_pattern(pattern: &[u8], edge_policy: EdgePolicy) -> Result<Self, ConfigurationError> {
        if pattern.is_empty() {
            return Err(ConfigurationError::EmptyPattern);
        }

        let side = integer_sqrt(pattern.len());
        if side * side != pattern.len() {
            return Err(ConfigurationError::PatternNotSquare { len: pattern.len() });
        }

        if let Some(position) = pattern.iter().position(|&value| value > 1) {
            return Err(ConfigurationError::InvalidPatternSymbol {
                symbol: pattern[position].to_string(),
                position,
            });
        }

        Self::build(side, side, edge_policy, |row, column| pattern[row * side + column] == 1)
    }

    /// Create a grid from rows of booleans. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>, edge_policy: EdgePolicy) -> Result<Self, ConfigurationError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(ConfigurationError::InvalidDimensions {
                rows: height as i64,
                columns: width as i64,
            });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ConfigurationError::RaggedRows {
                    row: i,
                    actual: row.len(),
                    expected: width,
                });
            }
        }

        Self::build(height, width, edge_policy, |row, column| rows[row][column])
    }

    fn checked_dimensions(rows: i64, columns: i64) -> Result<(usize, usize), ConfigurationError> {
        let invalid = || ConfigurationError::InvalidDimensions { rows, columns };

        if rows <= 0 || columns <= 0 {
            return Err(invalid());
        }

        let height = usize::try_from(rows).map_err(|_| invalid())?;
        let width = usize::try_from(columns).map_err(|_| invalid())?;
        let bytes = height
            .checked_mul(width)
            .and_then(|count| count.checked_mul(std::mem::size_of::<Cell>()))
            .ok_or_else(invalid)?;
        if bytes > isize::MAX as usize {
            return Err(invalid());
        }

        Ok((height, width))
    }

    fn build<F>(
        rows: usize,
        columns: usize,
        edge_policy: EdgePolicy,
        mut alive: F,
    ) -> Result<Self, ConfigurationError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(rows * columns)
            .map_err(|_| ConfigurationError::InvalidDimensions {
                rows: rows as i64,
                columns: columns as i64,
            })?;
        cells.extend(
            iproduct!(0..rows, 0..columns).map(|(row, column)| Cell::new(row, column, alive(row, column))),
        );

        Ok(Self {
            rows,
            columns,
            cells,
            edge_policy,
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Number of generations committed since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Convert a 1D index back to `(row, column)`
    #[inline]
    pub fn coordinate_of(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get the cell at coordinates
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if row < self.rows && column < self.columns {
            self.cells.get(self.index_of(row, column))
        } else {
            None
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Committed state at coordinates; out of bounds cells are dead
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(Cell::is_alive)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Visit every cell in row-major order
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Cell),
    {
        self.cells.iter().for_each(visitor);
    }

    /// Committed alive flags in row-major order
    pub fn alive_flags(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_alive).collect()
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.alive)
            .map(Cell::coordinate)
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Check if no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.alive)
    }

    /// Record the pending state of every cell. `next` is row-major.
    pub(crate) fn stage(&mut self, next: &[bool]) {
        debug_assert_eq!(next.len(), self.cells.len());
        for (cell, &state) in self.cells.iter_mut().zip(next) {
            cell.next_state = state;
        }
    }

    /// Promote every pending state to the committed generation.
    ///
    /// Returns `(births, deaths)`.
    pub(crate) fn commit(&mut self) -> (usize, usize) {
        let mut births = 0;
        let mut deaths = 0;

        for cell in &mut self.cells {
            match (cell.alive, cell.next_state) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
            cell.alive = cell.next_state;
        }

        self.generation += 1;
        (births, deaths)
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let symbol = if self.is_alive(row, column) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
