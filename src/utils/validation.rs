use crate::utils::error::{QuadrantError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension)
            if allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(extension)) =>
        {
            Ok(())
        }
        Some(extension) => Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_max_number(field_name: &str, value: u32, max_value: u32) -> Result<()> {
    if value > max_value {
        return Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at most {}", max_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Inclusive range check. Values that are unordered against the bounds
/// (NaN) are rejected.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if !(value >= min && value <= max) {
        return Err(QuadrantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
