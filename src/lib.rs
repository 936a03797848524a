//! A rectangular grid of on/off LEDs, drawn centred onto a host-provided canvas.
//!
//! The host owns the window and the frame loop, and calls [`LedMatrix::draw`] once per
//! frame with something implementing [`Canvas`]. Two canvases are provided: one over an
//! egui painter, and one over an in-memory image.

pub mod canvas;
pub mod error;
pub mod image_canvas;
pub mod layout;
pub mod led_matrix;
pub mod matrix_config;
pub mod matrix_state;
pub mod painter_canvas;
pub mod renderer;

pub use canvas::Canvas;
pub use error::{AppError, ConfigError};
pub use led_matrix::LedMatrix;
pub use matrix_config::{LedGeometry, MatrixConfiguration, StyleConfig};
pub use matrix_state::MatrixState;
