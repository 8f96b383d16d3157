//! Terminal renderer

use super::Renderer;
use crate::game_of_life::Grid;
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Redraws the whole grid as block characters on every frame
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: true,
        }
    }

    /// Append frames instead of redrawing in place
    pub fn scrolling(mut self) -> Self {
        self.clear_screen = false;
        self
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, grid: &Grid) -> Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&GridFormatter::format_grid_compact(grid));
        frame.push_str(&GridFormatter::format_status(grid));
        frame.push('\n');

        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .context("Failed to write frame to terminal")
    }
}
