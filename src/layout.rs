use crate::matrix_config::LedGeometry;

/// Where each LED of a matrix sits, relative to the top-left corner of the matrix.
///
/// Depends only on the matrix dimensions and LED geometry, so it is computed once
/// when a matrix is built. Both dimensions must be at least 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    matrix_width: usize,
    matrix_height: usize,
    geometry: LedGeometry,
}

impl Layout {
    pub fn new(matrix_width: usize, matrix_height: usize, geometry: LedGeometry) -> Self {
        Self {
            matrix_width,
            matrix_height,
            geometry,
        }
    }

    pub fn total_width(&self) -> f32 {
        let n = self.matrix_width as f32;
        self.geometry.led_width * n + self.geometry.led_spacing_width * (n - 1.0)
    }

    pub fn total_height(&self) -> f32 {
        let n = self.matrix_height as f32;
        self.geometry.led_height * n + self.geometry.led_spacing_height * (n - 1.0)
    }

    /// Horizontal distance from one LED to the next in a row
    pub fn row_advance(&self) -> f32 {
        self.geometry.led_width + self.geometry.led_spacing_width
    }

    /// Vertical distance from one row to the next
    pub fn column_advance(&self) -> f32 {
        self.geometry.led_height + self.geometry.led_spacing_height
    }

    /// Cursor delta from the end of a row of `row_cell_count` LEDs to the start of the next row
    pub fn row_return(&self, row_cell_count: usize) -> (f32, f32) {
        (-self.row_advance() * row_cell_count as f32, self.column_advance())
    }

    /// Offset that centres the matrix on a canvas, clamped to zero when the matrix doesn't fit
    pub fn margin(&self, canvas_width: f32, canvas_height: f32) -> (f32, f32) {
        (
            ((canvas_width - self.total_width()) / 2.0).max(0.0),
            ((canvas_height - self.total_height()) / 2.0).max(0.0),
        )
    }

    /// Top-left corner of the LED at `(row, col)`, relative to the matrix origin
    pub fn cell_position(&self, row: usize, col: usize) -> (f32, f32) {
        (
            col as f32 * self.row_advance(),
            row as f32 * self.column_advance(),
        )
    }

    /// The `(row, col)` of the LED covering a point relative to the matrix origin.
    ///
    /// Points in the gaps between LEDs or outside the matrix hit nothing.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = hit(x, self.row_advance(), self.geometry.led_width, self.matrix_width)?;
        let row = hit(y, self.column_advance(), self.geometry.led_height, self.matrix_height)?;
        Some((row, col))
    }
}

fn hit(offset: f32, stride: f32, extent: f32, count: usize) -> Option<usize> {
    if !(offset >= 0.0) {
        return None;
    }
    let index = (offset / stride).floor();
    if index >= count as f32 || offset - index * stride >= extent {
        return None;
    }
    Some(index as usize)
}
