use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadrantError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Chart rendering failed: {message}")]
    RenderError { message: String },

    #[error("Font registration failed: {message}")]
    FontError { message: String },

    #[error("Configuration error: {field} - {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Viewer could not be opened: {message}")]
    ViewerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Rendering,
    Display,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuadrantError {
    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            QuadrantError::IoError(_) => ErrorCategory::Input,
            QuadrantError::RenderError { .. } | QuadrantError::FontError { .. } => {
                ErrorCategory::Rendering
            }
            QuadrantError::ConfigValidationError { .. }
            | QuadrantError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuadrantError::ViewerError { .. } => ErrorCategory::Display,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 圖片已存檔，檢視器失敗只是警告
            QuadrantError::ViewerError { .. } => ErrorSeverity::Low,
            QuadrantError::ConfigValidationError { .. }
            | QuadrantError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            QuadrantError::RenderError { .. } | QuadrantError::IoError(_) => ErrorSeverity::High,
            QuadrantError::FontError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuadrantError::IoError(_) => {
                "Check that the output directory exists and is writable, and that input is readable"
            }
            QuadrantError::RenderError { .. } => {
                "Check the output path and chart dimensions, then run again"
            }
            QuadrantError::FontError { .. } => "The bundled font is corrupt; reinstall the tool",
            QuadrantError::ConfigValidationError { .. } => {
                "Fix the TOML syntax in the chart configuration file"
            }
            QuadrantError::InvalidConfigValueError { .. } => {
                "Correct the reported option on the command line or in the [chart] table"
            }
            QuadrantError::ViewerError { .. } => "Open the saved image manually",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuadrantError::IoError(e) => format!("Could not read input or write the chart: {}", e),
            QuadrantError::RenderError { message } => format!("Could not draw the chart: {}", message),
            QuadrantError::FontError { .. } => "Could not load the chart font".to_string(),
            QuadrantError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            QuadrantError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Option '{}' has invalid value '{}': {}", field, value, reason),
            QuadrantError::ViewerError { message } => {
                format!("Chart saved, but no viewer could be opened: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuadrantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let viewer = QuadrantError::ViewerError {
            message: "no display".to_string(),
        };
        assert_eq!(viewer.severity(), ErrorSeverity::Low);
        assert_eq!(viewer.category(), ErrorCategory::Display);

        let io = QuadrantError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.severity(), ErrorSeverity::High);
        assert!(io.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = QuadrantError::InvalidConfigValueError {
            field: "width".to_string(),
            value: "10".to_string(),
            reason: "Value must be at least 200".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for width: 10 (Value must be at least 200)"
        );
    }
}
