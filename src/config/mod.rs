#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::chart::ChartSettings;
use crate::utils::error::{QuadrantError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_max_number, validate_path, validate_positive_number, Validate,
};

pub use toml_config::ChartConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "initiatives.png";
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const MIN_DIMENSION: u32 = 200;
pub const MAX_DIMENSION: u32 = 10_000;
/// 點陣圖緩衝區上限 (RGB, 約 150 MB)
pub const MAX_PIXELS: u64 = 50_000_000;

/// Bounds each side of the image, then the total pixel count.
pub(crate) fn validate_dimensions(width_field: &str, height_field: &str, width: u32, height: u32) -> Result<()> {
    validate_positive_number(width_field, width, MIN_DIMENSION)?;
    validate_max_number(width_field, width, MAX_DIMENSION)?;
    validate_positive_number(height_field, height, MIN_DIMENSION)?;
    validate_max_number(height_field, height, MAX_DIMENSION)?;

    let pixels = width as u64 * height as u64;
    if pixels > MAX_PIXELS {
        return Err(QuadrantError::InvalidConfigValueError {
            field: format!("{}x{}", width_field, height_field),
            value: format!("{}x{}", width, height),
            reason: format!("Image must have at most {} pixels", MAX_PIXELS),
        });
    }
    Ok(())
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub output_path: String,
    pub width: u32,
    pub height: u32,
    pub display: bool,
    pub chart: ChartSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            display: true,
            chart: ChartSettings::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the file's `[chart]` table.
    pub fn from_chart_config(file: &ChartConfig) -> Self {
        let defaults = Self::default();
        Self {
            output_path: file
                .chart
                .output_path
                .clone()
                .unwrap_or(defaults.output_path),
            width: file.chart.width.unwrap_or(defaults.width),
            height: file.chart.height.unwrap_or(defaults.height),
            display: defaults.display,
            chart: file.chart_settings(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_file_extension("output_path", &self.output_path, &["png"])?;
        validate_dimensions("width", "height", self.width, self.height)?;
        self.chart.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.output_path, "initiatives.png");
        assert!(config.display);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = ChartConfig::from_toml_str("[chart]\nwidth = 900\noutput_path = \"out.png\"\n").unwrap();
        let config = AppConfig::from_chart_config(&file);
        assert_eq!(config.width, 900);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.output_path, "out.png");
    }

    #[test]
    fn test_small_dimensions_rejected() {
        let config = AppConfig {
            height: 50,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_large_dimensions_rejected() {
        let config = AppConfig {
            width: 70_000,
            height: 70_000,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            QuadrantError::InvalidConfigValueError { ref field, .. } if field == "width"
        ));

        let at_limit = AppConfig {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION / 2,
            ..AppConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_pixel_count_capped() {
        let config = AppConfig {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            QuadrantError::InvalidConfigValueError { ref field, .. } if field == "widthxheight"
        ));
    }
}
