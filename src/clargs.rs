use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about=None)]
pub(crate) struct LedMatrixArgs {
    /// Path to a JSON matrix configuration; missing fields take their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Width of the matrix, in number of LEDs
    #[arg(short = 'x', long)]
    pub width: Option<usize>,

    /// Height of the matrix, in number of LEDs
    #[arg(short = 'y', long)]
    pub height: Option<usize>,

    /// Start with every LED on
    #[arg(long)]
    pub lit: bool,

    /// Render a single frame to this PNG file and exit, without opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Width of the snapshot image, in pixels
    #[arg(long, default_value = "600")]
    pub canvas_width: u32,

    /// Height of the snapshot image, in pixels
    #[arg(long, default_value = "300")]
    pub canvas_height: u32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}
