use eframe::egui::{Color32, Context, Rounding, Sense};
use eframe::{egui, App, Frame};
use ledmatrix::painter_canvas::{LedShape, PainterCanvas};
use ledmatrix::{LedMatrix, MatrixConfiguration};

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

type EguiMatrix = LedMatrix<LedShape, Color32>;

pub struct DisplaySettings {
    pub round_leds: bool,
}

pub struct MatrixApp {
    matrix_config: MatrixConfiguration,
    matrix: Option<EguiMatrix>,
    status_msg: String,
    display_settings: DisplaySettings,
    selected_line: usize,
}

impl MatrixApp {
    pub fn new(matrix_config: MatrixConfiguration) -> Self {
        Self {
            matrix_config,
            matrix: None,
            status_msg: format!("Welcome to LED Matrix v{}", VERSION.unwrap_or("unknown")),
            display_settings: DisplaySettings { round_leds: false },
            selected_line: 0,
        }
    }
}

impl App for MatrixApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Render the menu bar
        egui::TopBottomPanel::top("menu bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                // Matrix configuration settings
                ui.menu_button("Matrix", |ui| {
                    ui.add(egui::Slider::new(&mut self.matrix_config.matrix_width, 1..=64).text("Width"));
                    ui.add(egui::Slider::new(&mut self.matrix_config.matrix_height, 1..=64).text("Height"));
                    ui.checkbox(&mut self.matrix_config.initial_state, "Start lit");
                    if ui.button("Apply").clicked() {
                        // Dropping the matrix makes the central panel build a fresh one
                        self.matrix = None;
                        ui.close_menu();
                    }
                    ui.label("Note: applying builds a new matrix, so the current pattern is lost!");
                });

                // Bulk updates
                ui.menu_button("Pattern", |ui| {
                    let Some(matrix) = self.matrix.as_mut() else {
                        ui.label("No matrix yet.");
                        return;
                    };

                    if ui.button("Clear").clicked() {
                        matrix.set_with_predicate(|_, _| true, false, false);
                    }
                    if ui.button("Fill").clicked() {
                        matrix.set_with_predicate(|_, _| true, true, false);
                    }
                    if ui.button("Checkerboard").clicked() {
                        matrix.set_with_predicate(|row, col| (row + col) % 2 == 0, true, true);
                    }

                    ui.separator();
                    let max_line = matrix.matrix_width().max(matrix.matrix_height()) - 1;
                    ui.add(egui::Slider::new(&mut self.selected_line, 0..=max_line).text("Line"));
                    let line = self.selected_line as isize;
                    ui.horizontal(|ui| {
                        if ui.button("Light row").clicked() {
                            matrix.set_row(line, true);
                        }
                        if ui.button("Clear row").clicked() {
                            matrix.set_row(line, false);
                        }
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Light column").clicked() {
                            matrix.set_column(line, true);
                        }
                        if ui.button("Clear column").clicked() {
                            matrix.set_column(line, false);
                        }
                    });
                });

                // Display settings
                ui.menu_button("Display", |ui| {
                    if ui.checkbox(&mut self.display_settings.round_leds, "Round LEDs").changed() {
                        self.restyle();
                    }
                });
            });
        });

        // Render the matrix
        egui::CentralPanel::default().show(ctx, |ui| {
            // Allocate our painter
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
            let mut canvas = PainterCanvas::new(&painter, response.rect);

            if self.matrix.is_none() {
                self.build_matrix(&mut canvas);
            }
            let Some(matrix) = self.matrix.as_mut() else {
                return;
            };

            // Toggle whichever LED was clicked
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let layout = matrix.layout();
                    let (margin_x, margin_y) = layout.margin(response.rect.width(), response.rect.height());
                    let offset = pos - response.rect.min;
                    if let Some((row, col)) = layout.cell_at(offset.x - margin_x, offset.y - margin_y) {
                        let (x, y) = (col as isize, row as isize);
                        let lit = matrix.get_state(x, y).unwrap_or(false);
                        matrix.set_state(x, y, !lit);
                        log::debug!("Toggled LED ({x}, {y}).");
                    }
                }
            }

            matrix.draw(&mut canvas);
        });

        // Render the status message at the bottom of the screen
        egui::TopBottomPanel::bottom("status_msg").show(ctx, |ui| {
            ui.label(self.status_msg.clone());
        });
    }
}

impl MatrixApp {
    fn set_status_msg(&mut self, msg: String) {
        self.status_msg = format!(">> {msg}");
    }

    fn build_matrix(&mut self, canvas: &mut PainterCanvas) {
        match LedMatrix::new(canvas, &self.matrix_config) {
            Ok(matrix) => {
                self.set_status_msg(format!(
                    "Built {}x{} matrix",
                    matrix.matrix_width(),
                    matrix.matrix_height()
                ));
                self.matrix = Some(matrix);
                self.selected_line = 0;
                self.restyle();
            }
            Err(e) => {
                log::error!("Failed to build matrix.");
                log::debug!("Failed to build matrix with following error: {e}");
                self.set_status_msg(format!("Invalid matrix configuration: {e}"));
            }
        }
    }

    /// Rebuild the current matrix with the display settings applied, keeping its LED states
    fn restyle(&mut self) {
        let Some(matrix) = self.matrix.take() else {
            return;
        };

        let (state, mut style) = matrix.into_parts();
        style.led_shape = if self.display_settings.round_leds {
            style.led_shape.round()
        } else {
            LedShape {
                rounding: Rounding::none(),
                ..style.led_shape
            }
        };

        match LedMatrix::from_parts(state, style) {
            Ok(matrix) => self.matrix = Some(matrix),
            Err(e) => self.set_status_msg(format!("Unable to restyle matrix: {e}")),
        }
    }
}
