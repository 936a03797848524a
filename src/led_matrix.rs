use crate::canvas::Canvas;
use crate::error::ConfigError;
use crate::layout::Layout;
use crate::matrix_config::{MatrixConfiguration, StyleConfig};
use crate::matrix_state::MatrixState;
use crate::renderer;

/// A grid of LEDs that can be switched on and off, and drawn centred on a canvas.
///
/// `S` is the shape drawn for each LED and `K` the colour type, both as defined by the
/// [`Canvas`] the matrix is drawn on.
#[derive(Clone, Debug)]
pub struct LedMatrix<S, K> {
    state: MatrixState,
    style: StyleConfig<S, K>,
    layout: Layout,
}

impl<S, K: Copy> LedMatrix<S, K> {
    /// Build a matrix of plain rectangular LEDs, with the shape and colours made by `canvas`
    pub fn new<C>(canvas: &mut C, config: &MatrixConfiguration) -> Result<Self, ConfigError>
    where
        C: Canvas<Shape = S, Colour = K> + ?Sized,
    {
        config.validate()?;
        let style = StyleConfig {
            led_shape: canvas.create_rect_shape(config.led_width, config.led_height),
            geometry: config.geometry(),
            led_off_colour: canvas.pack_colour(config.led_off_intensity),
            led_on_colour: canvas.pack_colour(config.led_on_intensity),
        };
        Self::with_style(config, style)
    }

    /// Build a matrix with a custom LED shape and colours.
    ///
    /// Dimensions and initial state come from `config`; geometry comes from `style`,
    /// so the LED size and spacing in `config` are ignored.
    pub fn with_style(config: &MatrixConfiguration, style: StyleConfig<S, K>) -> Result<Self, ConfigError> {
        let state = MatrixState::new(config.matrix_width, config.matrix_height, config.initial_state);
        Self::from_parts(state, style)
    }

    /// Wrap an existing grid in a (possibly different) style
    pub fn from_parts(state: MatrixState, style: StyleConfig<S, K>) -> Result<Self, ConfigError> {
        if state.width() == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if state.height() == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        style.geometry.validate()?;

        let layout = Layout::new(state.width(), state.height(), style.geometry);
        log::debug!(
            "Built {}x{} LED matrix, {}x{} units.",
            state.width(),
            state.height(),
            layout.total_width(),
            layout.total_height()
        );

        Ok(Self { state, style, layout })
    }

    /// Take the matrix apart, e.g. to restyle it with [`LedMatrix::from_parts`]
    pub fn into_parts(self) -> (MatrixState, StyleConfig<S, K>) {
        (self.state, self.style)
    }

    /// Draw the matrix centred on `canvas`
    pub fn draw<C>(&mut self, canvas: &mut C)
    where
        C: Canvas<Shape = S, Colour = K> + ?Sized,
    {
        renderer::draw(canvas, &self.state, &mut self.style, &self.layout);
    }

    pub fn get_state(&self, x: isize, y: isize) -> Option<bool> {
        self.state.get(x, y)
    }

    pub fn set_state(&mut self, x: isize, y: isize, state: bool) {
        self.state.set(x, y, state);
    }

    pub fn set_column(&mut self, x: isize, state: bool) {
        self.state.set_column(x, state);
    }

    pub fn set_row(&mut self, y: isize, state: bool) {
        self.state.set_row(y, state);
    }

    /// See [`MatrixState::set_with_predicate`]; the predicate is called with `(row, col)`.
    pub fn set_with_predicate<P>(&mut self, predicate: P, state: bool, set_others: bool)
    where
        P: FnMut(usize, usize) -> bool,
    {
        self.state.set_with_predicate(predicate, state, set_others);
    }

    pub fn state(&self) -> &MatrixState {
        &self.state
    }

    pub fn style(&self) -> &StyleConfig<S, K> {
        &self.style
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn matrix_width(&self) -> usize {
        self.state.width()
    }

    pub fn matrix_height(&self) -> usize {
        self.state.height()
    }

    pub fn led_width(&self) -> f32 {
        self.style.geometry.led_width
    }

    pub fn led_height(&self) -> f32 {
        self.style.geometry.led_height
    }

    pub fn led_spacing_width(&self) -> f32 {
        self.style.geometry.led_spacing_width
    }

    pub fn led_spacing_height(&self) -> f32 {
        self.style.geometry.led_spacing_height
    }

    pub fn led_shape(&self) -> &S {
        &self.style.led_shape
    }

    pub fn led_off_colour(&self) -> K {
        self.style.led_off_colour
    }

    pub fn led_on_colour(&self) -> K {
        self.style.led_on_colour
    }
}
