use crate::canvas::Canvas;
use image::{ImageError, Rgba, RgbaImage};
use std::path::Path;

/// A filled, axis-aligned rectangle of pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub width: f32,
    pub height: f32,
    pub fill: Rgba<u8>,
}

/// Renders into an in-memory RGBA image, for snapshots without a window
pub struct ImageCanvas {
    image: RgbaImage,
    cursor: (f32, f32),
    saved: Vec<(f32, f32)>,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            cursor: (0.0, 0.0),
            saved: Vec::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the image out, in the format implied by the file extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        log::info!("Saving {}x{} snapshot to {}.", self.image.width(), self.image.height(), path.as_ref().display());
        self.image.save(path)
    }
}

/// Pixel span `[start, end)` covered by `offset..offset + extent`, clipped to `0..limit`
fn span(offset: f32, extent: f32, limit: u32) -> (u32, u32) {
    let clip = |v: f32| v.round().clamp(0.0, limit as f32) as u32;
    (clip(offset), clip(offset + extent))
}

impl Canvas for ImageCanvas {
    type Shape = PixelRect;
    type Colour = Rgba<u8>;

    fn width(&self) -> f32 {
        self.image.width() as f32
    }

    fn height(&self) -> f32 {
        self.image.height() as f32
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
        self.cursor.0 += dx;
        self.cursor.1 += dy;
    }

    fn set_fill_colour(&mut self, shape: &mut PixelRect, colour: Rgba<u8>) {
        shape.fill = colour;
    }

    fn draw_shape(&mut self, shape: &PixelRect) {
        let (x0, x1) = span(self.cursor.0, shape.width, self.image.width());
        let (y0, y1) = span(self.cursor.1, shape.height, self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, shape.fill);
            }
        }
    }

    fn create_rect_shape(&mut self, width: f32, height: f32) -> PixelRect {
        PixelRect {
            width,
            height,
            fill: Rgba([0, 0, 0, 0]),
        }
    }

    fn pack_colour(&self, intensity: u8) -> Rgba<u8> {
        Rgba([intensity, intensity, intensity, u8::MAX])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led_matrix::LedMatrix;
    use crate::matrix_config::MatrixConfiguration;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const GREY: Rgba<u8> = Rgba([127, 127, 127, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn small_config() -> MatrixConfiguration {
        MatrixConfiguration {
            matrix_width: 2,
            matrix_height: 2,
            led_width: 4.0,
            led_height: 4.0,
            led_spacing_width: 2.0,
            led_spacing_height: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn draws_centred_leds_in_their_colours() {
        // 10x10 matrix on a 20x14 image: margin is (5, 2)
        let mut canvas = ImageCanvas::new(20, 14, BLACK);
        let mut matrix = LedMatrix::new(&mut canvas, &small_config()).unwrap();
        matrix.set_state(1, 0, true);
        matrix.draw(&mut canvas);

        let image = canvas.image();
        assert_eq!(*image.get_pixel(4, 2), BLACK);
        assert_eq!(*image.get_pixel(5, 2), GREY);
        assert_eq!(*image.get_pixel(8, 5), GREY);
        assert_eq!(*image.get_pixel(9, 2), BLACK);
        assert_eq!(*image.get_pixel(11, 2), WHITE);
        assert_eq!(*image.get_pixel(14, 5), WHITE);
        assert_eq!(*image.get_pixel(15, 5), BLACK);
        assert_eq!(*image.get_pixel(5, 8), GREY);
        assert_eq!(*image.get_pixel(11, 11), GREY);
        assert_eq!(*image.get_pixel(11, 12), BLACK);
    }

    #[test]
    fn leds_off_the_image_are_clipped() {
        let mut canvas = ImageCanvas::new(7, 7, BLACK);
        let config = MatrixConfiguration { initial_state: true, ..small_config() };
        let mut matrix = LedMatrix::new(&mut canvas, &config).unwrap();
        matrix.draw(&mut canvas);

        let image = canvas.image();
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(6, 6), WHITE);
        assert_eq!(*image.get_pixel(4, 0), BLACK);
    }

    #[test]
    fn span_clips_to_image() {
        assert_eq!(span(-3.0, 5.0, 10), (0, 2));
        assert_eq!(span(8.0, 5.0, 10), (8, 10));
        assert_eq!(span(12.0, 5.0, 10), (10, 10));
    }
}
