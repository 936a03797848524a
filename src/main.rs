mod clargs;
mod matrix_app;

use crate::clargs::LedMatrixArgs;
use crate::matrix_app::MatrixApp;
use clap::Parser;
use eframe::{egui, NativeOptions};
use image::Rgba;
use ledmatrix::image_canvas::ImageCanvas;
use ledmatrix::{AppError, LedMatrix, MatrixConfiguration};
use simple_logger::SimpleLogger;

const WINDOW_WIDTH_INITIAL: f32 = 600.0;
const WINDOW_HEIGHT_INITIAL: f32 = 300.0;

fn main() {
    let args = LedMatrixArgs::parse();

    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .expect("Unable to start logger!");

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: LedMatrixArgs) -> Result<(), AppError> {
    // Load the configuration, then apply any overrides from the command line
    let mut config = match &args.config {
        Some(path) => MatrixConfiguration::from_json_file(path)?,
        None => MatrixConfiguration::default(),
    };
    if let Some(width) = args.width {
        config.matrix_width = width;
    }
    if let Some(height) = args.height {
        config.matrix_height = height;
    }
    config.initial_state |= args.lit;
    config.validate()?;

    if let Some(path) = &args.snapshot {
        let mut canvas = ImageCanvas::new(args.canvas_width, args.canvas_height, Rgba([0, 0, 0, u8::MAX]));
        let mut matrix = LedMatrix::new(&mut canvas, &config)?;
        matrix.draw(&mut canvas);
        canvas.save(path)?;
        return Ok(());
    }

    // Setup window options
    let options = NativeOptions {
        initial_window_size: Some(egui::Vec2::new(WINDOW_WIDTH_INITIAL, WINDOW_HEIGHT_INITIAL)),
        ..Default::default()
    };

    // Start the GUI
    eframe::run_native(
        "LED Matrix",
        options,
        Box::new(move |_cc| Box::new(MatrixApp::new(config))),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}
