//! Per-cell quad geometry in normalized device coordinates

use serde::Serialize;

/// Axis-aligned quad in normalized device coordinates ([-1, 1] on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quad {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// Floats per quad when drawn as two triangles of `(x, y, z)` vertices
pub const QUAD_VERTEX_FLOATS: usize = 18;

impl Quad {
    /// Two right-angle triangles covering the quad, z = 0.
    ///
    /// Triangle order: bottom-left half first, then top-right half.
    pub fn vertices(&self) -> [f32; QUAD_VERTEX_FLOATS] {
        let Quad { x0, y0, x1, y1 } = *self;
        [
            x0, y1, 0.0, //
            x1, y0, 0.0, //
            x0, y0, 0.0, //
            x0, y1, 0.0, //
            x1, y1, 0.0, //
            x1, y0, 0.0, //
        ]
    }
}

/// Maps grid coordinates to quads.
///
/// Columns run left to right along x. Row 0 is the top edge (y = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadLayout {
    rows: usize,
    columns: usize,
}

impl QuadLayout {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn quad(&self, row: usize, column: usize) -> Quad {
        let width = 2.0 / self.columns as f32;
        let height = 2.0 / self.rows as f32;

        let x0 = column as f32 * width - 1.0;
        let y1 = 1.0 - row as f32 * height;

        Quad {
            x0,
            y0: y1 - height,
            x1: x0 + width,
            y1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_corner_quads() {
        let layout = QuadLayout::new(4, 2);

        let top_left = layout.quad(0, 0);
        assert_close(top_left.x0, -1.0);
        assert_close(top_left.x1, 0.0);
        assert_close(top_left.y1, 1.0);
        assert_close(top_left.y0, 0.5);

        let bottom_right = layout.quad(3, 1);
        assert_close(bottom_right.x0, 0.0);
        assert_close(bottom_right.x1, 1.0);
        assert_close(bottom_right.y0, -1.0);
        assert_close(bottom_right.y1, -0.5);
    }

    #[test]
    fn test_single_cell_fills_viewport() {
        let quad = QuadLayout::new(1, 1).quad(0, 0);
        assert_eq!(quad, Quad { x0: -1.0, y0: -1.0, x1: 1.0, y1: 1.0 });
    }

    #[test]
    fn test_vertices() {
        let quad = Quad { x0: -1.0, y0: -1.0, x1: 1.0, y1: 1.0 };
        let vertices = quad.vertices();

        assert_eq!(&vertices[..9], &[-1.0, 1.0, 0.0, 1.0, -1.0, 0.0, -1.0, -1.0, 0.0]);
        assert_eq!(&vertices[9..], &[-1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, -1.0, 0.0]);
        assert!(vertices.iter().step_by(3).all(|x| (-1.0..=1.0).contains(x)));
    }
}
