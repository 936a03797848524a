use std::ops::{Deref, DerefMut};

/// A 2D drawing surface with a transform stack, supplied by whatever hosts the matrix.
///
/// Drawing is relative: `draw_shape` places a shape at the current cursor, and
/// `translate` moves the cursor by accumulating offsets.
pub trait Canvas {
    /// A drawable template for a single LED
    type Shape;
    /// A packed colour value
    type Colour: Copy;

    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Save the current transform
    fn push_transform(&mut self);
    /// Restore the most recently saved transform
    fn pop_transform(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);

    fn set_fill_colour(&mut self, shape: &mut Self::Shape, colour: Self::Colour);
    /// Draw `shape` at the current cursor
    fn draw_shape(&mut self, shape: &Self::Shape);

    /// A rectangle of the given size with no stroke
    fn create_rect_shape(&mut self, width: f32, height: f32) -> Self::Shape;
    fn pack_colour(&self, intensity: u8) -> Self::Colour;
}

/// Holds a saved transform for as long as it lives, restoring it on drop.
pub struct TransformScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> TransformScope<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.push_transform();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for TransformScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for TransformScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for TransformScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.pop_transform();
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{Call, MockCanvas};
    use super::*;

    #[test]
    fn scope_restores_transform_on_drop() {
        let mut canvas = MockCanvas::new(100.0, 100.0);
        canvas.translate(1.0, 2.0);
        {
            let mut scope = TransformScope::new(&mut canvas);
            scope.translate(10.0, 10.0);
            assert_eq!(scope.cursor, (11.0, 12.0));
        }
        assert_eq!(canvas.cursor, (1.0, 2.0));
        assert!(canvas.saved.is_empty());
        assert_eq!(canvas.calls.first(), Some(&Call::Translate(1.0, 2.0)));
        assert_eq!(canvas.calls.last(), Some(&Call::Pop));
    }
}
