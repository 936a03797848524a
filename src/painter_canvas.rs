use crate::canvas::Canvas;
use eframe::egui::{Color32, Painter, Rect, Rounding, Stroke, Vec2};

/// A single LED as drawn by egui
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LedShape {
    pub size: Vec2,
    pub rounding: Rounding,
    pub fill: Color32,
    pub stroke: Stroke,
}

impl LedShape {
    /// Round the corners fully, so square LEDs become circles
    pub fn round(self) -> Self {
        Self {
            rounding: Rounding::same(self.size.min_elem() / 2.0),
            ..self
        }
    }
}

/// Draws onto an egui painter, with the cursor starting at the top-left of `rect`
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
    cursor: Vec2,
    saved: Vec<Vec2>,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            cursor: Vec2::ZERO,
            saved: Vec::new(),
        }
    }
}

impl Canvas for PainterCanvas<'_> {
    type Shape = LedShape;
    type Colour = Color32;

    fn width(&self) -> f32 {
        self.rect.width()
    }

    fn height(&self) -> f32 {
        self.rect.height()
    }

    fn push_transform(&mut self) {
        self.saved.push(self.cursor);
    }

    fn pop_transform(&mut self) {
        match self.saved.pop() {
            Some(cursor) => self.cursor = cursor,
            None => log::warn!("Transform popped without a matching push."),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.cursor += Vec2::new(dx, dy);
    }

    fn set_fill_colour(&mut self, shape: &mut LedShape, colour: Color32) {
        shape.fill = colour;
    }

    fn draw_shape(&mut self, shape: &LedShape) {
        let min = self.rect.min + self.cursor;
        self.painter.rect(
            Rect::from_min_size(min, shape.size),
            shape.rounding,
            shape.fill,
            shape.stroke,
        );
    }

    fn create_rect_shape(&mut self, width: f32, height: f32) -> LedShape {
        LedShape {
            size: Vec2::new(width, height),
            rounding: Rounding::none(),
            fill: Color32::TRANSPARENT,
            stroke: Stroke::NONE,
        }
    }

    fn pack_colour(&self, intensity: u8) -> Color32 {
        Color32::from_gray(intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Context, LayerId, Pos2};

    #[test]
    fn cursor_follows_transform_stack() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(300.0, 200.0));
        let painter = Painter::new(Context::default(), LayerId::background(), rect);
        let mut canvas = PainterCanvas::new(&painter, rect);

        assert_eq!((canvas.width(), canvas.height()), (300.0, 200.0));

        canvas.push_transform();
        canvas.translate(5.0, 6.0);
        canvas.translate(1.0, 1.0);
        assert_eq!(canvas.cursor, Vec2::new(6.0, 7.0));
        canvas.pop_transform();
        assert_eq!(canvas.cursor, Vec2::ZERO);

        // An unbalanced pop leaves the cursor where it is
        canvas.translate(3.0, 3.0);
        canvas.pop_transform();
        assert_eq!(canvas.cursor, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn default_shape_is_unstroked_grey_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));
        let painter = Painter::new(Context::default(), LayerId::background(), rect);
        let mut canvas = PainterCanvas::new(&painter, rect);

        let mut shape = canvas.create_rect_shape(25.0, 20.0);
        assert_eq!(shape.stroke, Stroke::NONE);
        assert_eq!(shape.size, Vec2::new(25.0, 20.0));

        let grey = canvas.pack_colour(127);
        canvas.set_fill_colour(&mut shape, grey);
        assert_eq!(shape.fill, Color32::from_gray(127));
        assert_eq!(shape.round().rounding, Rounding::same(10.0));
    }
}
