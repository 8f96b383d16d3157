//! Display and output formatting utilities

use crate::game_of_life::Grid;

/// Text renderings of a grid
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.columns() * 3 + 1));
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                output.push(if grid.is_alive(row, column) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for column in 0..grid.columns() {
            output.push_str(&format!("{:2}", column % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for column in 0..grid.columns() {
                output.push_str(if grid.is_alive(row, column) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line summary used under each frame
    pub fn format_status(grid: &Grid) -> String {
        format!(
            "Generation {} | Living: {} | {}x{} {:?}",
            grid.generation(),
            grid.living_count(),
            grid.rows(),
            grid.columns(),
            grid.edge_policy()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
