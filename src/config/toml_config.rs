use crate::domain::chart::ChartSettings;
use crate::utils::error::{QuadrantError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional chart configuration file. Every key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default)]
    pub chart: ChartSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSection {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub axis_max: Option<f64>,
    pub midpoint: Option<f64>,
    pub label_offset: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quadrant_labels: Option<bool>,
    pub output_path: Option<String>,
}

impl ChartConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuadrantError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| QuadrantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Chart settings with file values laid over the built-in defaults.
    pub fn chart_settings(&self) -> ChartSettings {
        let defaults = ChartSettings::default();
        let section = &self.chart;
        ChartSettings {
            title: section.title.clone().unwrap_or(defaults.title),
            x_label: section.x_label.clone().unwrap_or(defaults.x_label),
            y_label: section.y_label.clone().unwrap_or(defaults.y_label),
            axis_max: section.axis_max.unwrap_or(defaults.axis_max),
            midpoint: section.midpoint.unwrap_or(defaults.midpoint),
            label_offset: section.label_offset.unwrap_or(defaults.label_offset),
            quadrant_labels: section.quadrant_labels.unwrap_or(defaults.quadrant_labels),
        }
    }
}

impl Validate for ChartSettings {
    fn validate(&self) -> Result<()> {
        use crate::domain::model::{RATING_MAX, RATING_MIN};
        use crate::utils::validation::{validate_non_empty_string, validate_range};

        validate_non_empty_string("chart.title", &self.title)?;
        validate_non_empty_string("chart.x_label", &self.x_label)?;
        validate_non_empty_string("chart.y_label", &self.y_label)?;

        // 所有評分都必須落在可見範圍內
        if !(self.axis_max.is_finite() && self.axis_max > RATING_MAX) {
            return Err(QuadrantError::InvalidConfigValueError {
                field: "chart.axis_max".to_string(),
                value: self.axis_max.to_string(),
                reason: format!("Value must be a finite number greater than {}", RATING_MAX),
            });
        }

        validate_range("chart.midpoint", self.midpoint, RATING_MIN, RATING_MAX)?;
        validate_range("chart.label_offset", self.label_offset, 0.0, 1.0)?;
        Ok(())
    }
}

impl Validate for ChartConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::{validate_file_extension, validate_path};

        self.chart_settings().validate()?;

        // 未填的一邊以預設值計算總像素
        if self.chart.width.is_some() || self.chart.height.is_some() {
            super::validate_dimensions(
                "chart.width",
                "chart.height",
                self.chart.width.unwrap_or(super::DEFAULT_WIDTH),
                self.chart.height.unwrap_or(super::DEFAULT_HEIGHT),
            )?;
        }
        if let Some(path) = &self.chart.output_path {
            validate_path("chart.output_path", path)?;
            validate_file_extension("chart.output_path", path, &["png"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_chart_config() {
        let toml_content = r#"
[chart]
title = "Q3 Roadmap"
x_label = "Effort"
y_label = "Impact"
axis_max = 6.0
midpoint = 2.5
label_offset = 0.1
width = 1024
height = 768
quadrant_labels = true
output_path = "roadmap.png"
"#;

        let config = ChartConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let settings = config.chart_settings();
        assert_eq!(settings.title, "Q3 Roadmap");
        assert_eq!(settings.x_label, "Effort");
        assert_eq!(settings.axis_max, 6.0);
        assert_eq!(settings.midpoint, 2.5);
        assert!(settings.quadrant_labels);
        assert_eq!(config.chart.width, Some(1024));
        assert_eq!(config.chart.output_path.as_deref(), Some("roadmap.png"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(config.chart_settings(), ChartSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ChartConfig::from_toml_str("[chart]\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, QuadrantError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_axis_max_must_cover_ratings() {
        let config = ChartConfig::from_toml_str("[chart]\naxis_max = 5.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_midpoint_outside_ratings_rejected() {
        let config = ChartConfig::from_toml_str("[chart]\nmidpoint = 0.5\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_path_must_be_png() {
        let config = ChartConfig::from_toml_str("[chart]\noutput_path = \"chart.jpg\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let config = ChartConfig::from_toml_str("[chart]\nwidth = 70000\nheight = 70000\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            QuadrantError::InvalidConfigValueError { ref field, .. } if field == "chart.width"
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[chart]\ntitle = \"From file\"\n")
            .unwrap();

        let config = ChartConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.chart_settings().title, "From file");
    }
}
