use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Options recognised when constructing an LED matrix.
///
/// Any field missing from a deserialized configuration takes its default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatrixConfiguration {
    pub initial_state: bool,
    pub matrix_width: usize,
    pub matrix_height: usize,
    pub led_width: f32,
    pub led_height: f32,
    pub led_spacing_width: f32,
    pub led_spacing_height: f32,
    /// Grey level of an LED that is off
    pub led_off_intensity: u8,
    /// Grey level of an LED that is on
    pub led_on_intensity: u8,
}

impl Default for MatrixConfiguration {
    fn default() -> Self {
        Self {
            initial_state: false,
            matrix_width: 8,
            matrix_height: 8,
            led_width: 25.0,
            led_height: 25.0,
            led_spacing_width: 5.0,
            led_spacing_height: 5.0,
            led_off_intensity: 127,
            led_on_intensity: 255,
        }
    }
}

impl MatrixConfiguration {
    /// Read a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, crate::error::AppError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Geometry of a single LED and the gaps between them
    pub fn geometry(&self) -> LedGeometry {
        LedGeometry {
            led_width: self.led_width,
            led_height: self.led_height,
            led_spacing_width: self.led_spacing_width,
            led_spacing_height: self.led_spacing_height,
        }
    }

    /// Reject configurations whose layout would be empty or negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix_width == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if self.matrix_height == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        self.geometry().validate()
    }
}

/// LED size and spacing, in canvas units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LedGeometry {
    pub led_width: f32,
    pub led_height: f32,
    pub led_spacing_width: f32,
    pub led_spacing_height: f32,
}

impl LedGeometry {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.led_width), ("height", self.led_height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidLedSize { axis, value });
            }
        }
        for (axis, value) in [("width", self.led_spacing_width), ("height", self.led_spacing_height)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpacing { axis, value });
            }
        }
        Ok(())
    }
}

/// How a matrix looks: the shape drawn for each LED and its two colours.
///
/// Fixed once the matrix is built. To restyle, build a new matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig<S, K> {
    pub led_shape: S,
    pub geometry: LedGeometry,
    pub led_off_colour: K,
    pub led_on_colour: K,
}

impl<S, K: Copy> StyleConfig<S, K> {
    pub fn colour_for(&self, state: bool) -> K {
        if state {
            self.led_on_colour
        } else {
            self.led_off_colour
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn defaults_describe_an_eight_by_eight_matrix() {
        let config = MatrixConfiguration::default();
        assert_eq!((config.matrix_width, config.matrix_height), (8, 8));
        assert_eq!((config.led_width, config.led_height), (25.0, 25.0));
        assert_eq!((config.led_spacing_width, config.led_spacing_height), (5.0, 5.0));
        assert_eq!((config.led_off_intensity, config.led_on_intensity), (127, 255));
        assert!(!config.initial_state);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MatrixConfiguration =
            serde_json::from_str(r#"{ "matrix_width": 3, "initial_state": true }"#).unwrap();
        assert_eq!(config.matrix_width, 3);
        assert_eq!(config.matrix_height, 8);
        assert!(config.initial_state);
        assert_eq!(config.led_width, 25.0);
    }

    fn write_config(name: &str, json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ledmatrix-{}-{name}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn json_file_is_read_and_validated() {
        let path = write_config("valid", r#"{ "matrix_height": 3, "led_off_intensity": 10 }"#);
        let config = MatrixConfiguration::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.matrix_height, 3);
        assert_eq!(config.led_off_intensity, 10);
        assert_eq!(config.matrix_width, 8);
    }

    #[test]
    fn json_file_with_zero_width_is_rejected() {
        let path = write_config("zero-width", r#"{ "matrix_width": 0 }"#);
        let result = MatrixConfiguration::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::ZeroDimension { axis: "width" }))
        ));
    }

    #[test]
    fn json_file_errors_are_reported() {
        let path = write_config("malformed", "{ \"matrix_width\": ");
        let result = MatrixConfiguration::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AppError::Json(_))));

        let missing = std::env::temp_dir().join("ledmatrix-no-such-config.json");
        assert!(matches!(MatrixConfiguration::from_json_file(missing), Err(AppError::Io(_))));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let config = MatrixConfiguration { matrix_width: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension { axis: "width" }));

        let config = MatrixConfiguration { matrix_height: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension { axis: "height" }));
    }

    #[test]
    fn non_positive_led_sizes_are_rejected() {
        let config = MatrixConfiguration { led_width: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLedSize { axis: "width", .. })));

        let config = MatrixConfiguration { led_height: -3.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLedSize { axis: "height", .. })));

        let config = MatrixConfiguration { led_width: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn spacing_may_be_zero_but_not_negative() {
        let config = MatrixConfiguration { led_spacing_width: 0.0, led_spacing_height: 0.0, ..Default::default() };
        assert_eq!(config.validate(), Ok(()));

        let config = MatrixConfiguration { led_spacing_height: -1.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpacing { axis: "height", .. })));
    }

    #[test]
    fn colour_follows_state() {
        let style = StyleConfig {
            led_shape: (),
            geometry: MatrixConfiguration::default().geometry(),
            led_off_colour: 127u8,
            led_on_colour: 255u8,
        };
        assert_eq!(style.colour_for(true), 255);
        assert_eq!(style.colour_for(false), 127);
    }
}
