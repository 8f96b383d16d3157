//! JSON-lines renderer: one object per frame with the quads of live cells

use super::{Quad, QuadLayout, Renderer};
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Frame {
    generation: u64,
    rows: usize,
    columns: usize,
    living: usize,
    quads: Vec<CellQuad>,
}

#[derive(Debug, Serialize)]
struct CellQuad {
    row: usize,
    column: usize,
    quad: Quad,
}

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn frame(grid: &Grid) -> Frame {
        let layout = QuadLayout::new(grid.rows(), grid.columns());
        let mut quads = Vec::new();
        grid.for_each(|cell| {
            if cell.is_alive() {
                quads.push(CellQuad {
                    row: cell.row(),
                    column: cell.column(),
                    quad: layout.quad(cell.row(), cell.column()),
                });
            }
        });

        Frame {
            generation: grid.generation(),
            rows: grid.rows(),
            columns: grid.columns(),
            living: quads.len(),
            quads,
        }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn draw(&mut self, grid: &Grid) -> Result<()> {
        let frame = Self::frame(grid);
        serde_json::to_writer(&mut self.out, &frame).context("Failed to serialize frame")?;
        writeln!(self.out).context("Failed to write frame")?;
        self.out.flush().context("Failed to flush frame")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgePolicy;
    use crate::game_of_life::TickScheduler;
    use serde_json::Value;

    #[test]
    fn test_one_line_per_frame() {
        let mut grid = Grid::from_pattern(&[0, 1, 0, 0, 1, 0, 0, 1, 0], EdgePolicy::Bounded).unwrap();
        let mut buffer = Vec::new();
        {
            let mut renderer = JsonRenderer::new(&mut buffer);
            renderer.draw(&grid).unwrap();
            TickScheduler::tick(&mut grid);
            renderer.draw(&grid).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let frames: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["generation"], 0);
        assert_eq!(frames[1]["generation"], 1);
        assert_eq!(frames[1]["living"], 3);

        // The vertical blinker turned horizontal: all quads share row 1
        let quads = frames[1]["quads"].as_array().unwrap();
        assert!(quads.iter().all(|q| q["row"] == 1));
        assert_eq!(quads[0]["quad"]["x0"], -1.0);
    }
}
