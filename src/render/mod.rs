//! Rendering collaborators.
//!
//! Renderers only read committed grid state, between ticks. Geometry lives
//! here, keyed by cell coordinate, and never on the cells themselves.

pub mod geometry;
pub mod json;
pub mod terminal;

pub use geometry::{Quad, QuadLayout, QUAD_VERTEX_FLOATS};
pub use json::JsonRenderer;
pub use terminal::TerminalRenderer;

use crate::config::RendererKind;
use crate::game_of_life::Grid;
use anyhow::Result;
use std::io::Write;

/// Draws one frame of the grid
pub trait Renderer {
    fn draw(&mut self, grid: &Grid) -> Result<()>;
}

/// Draws nothing. Useful for headless runs and timing.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _grid: &Grid) -> Result<()> {
        Ok(())
    }
}

/// Build the renderer selected in the settings, writing to `out`
pub fn renderer_for<'a, W: Write + 'a>(kind: RendererKind, out: W) -> Box<dyn Renderer + 'a> {
    match kind {
        RendererKind::Terminal => Box::new(TerminalRenderer::new(out)),
        RendererKind::Json => Box::new(JsonRenderer::new(out)),
        RendererKind::None => Box::new(NullRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgePolicy;

    #[test]
    fn test_renderer_for_kinds() {
        let grid = Grid::from_pattern(&[1, 0, 0, 1], EdgePolicy::Toroidal).unwrap();

        let mut buffer = Vec::new();
        renderer_for(RendererKind::None, &mut buffer).draw(&grid).unwrap();
        assert!(buffer.is_empty());

        let mut buffer = Vec::new();
        renderer_for(RendererKind::Json, &mut buffer).draw(&grid).unwrap();
        assert!(buffer.starts_with(b"{"));

        let mut buffer = Vec::new();
        renderer_for(RendererKind::Terminal, &mut buffer).draw(&grid).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("Living: 2"));
    }
}
