//! Drawing a matrix onto a [`Canvas`].
//!
//! The canvas only knows how to draw at its cursor, so the matrix is drawn by walking
//! the cursor across each row, then back to the first column and down a row. Every
//! translate in the walk is relative to the previous one, so the order of calls is
//! load-bearing: skipping or reordering a cell shifts every cell after it.

use crate::canvas::{Canvas, TransformScope};
use crate::layout::Layout;
use crate::matrix_config::StyleConfig;
use crate::matrix_state::MatrixState;

/// Draw every LED of `state`, centred on `canvas`.
///
/// The canvas transform is the same after drawing as it was before.
pub fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &MatrixState,
    style: &mut StyleConfig<C::Shape, C::Colour>,
    layout: &Layout,
) {
    let (margin_x, margin_y) = layout.margin(canvas.width(), canvas.height());
    log::trace!(
        "Drawing {}x{} matrix with margin ({margin_x}, {margin_y}).",
        state.width(),
        state.height()
    );

    let mut canvas = TransformScope::new(canvas);
    canvas.translate(margin_x, margin_y);

    let row_count = state.height();
    for (i, row) in state.rows().enumerate() {
        for &lit in row {
            let colour = style.colour_for(lit);
            canvas.set_fill_colour(&mut style.led_shape, colour);
            canvas.draw_shape(&style.led_shape);
            canvas.translate(layout.row_advance(), 0.0);
        }

        if i + 1 != row_count {
            let (dx, dy) = layout.row_return(row.len());
            canvas.translate(dx, dy);
        }
    }
}
