use crate::utils::error::{AppendError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppendError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppendError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_suffix(field_name: &str, suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(AppendError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix cannot be empty".to_string(),
        });
    }

    if suffix.contains(['/', '\\', '\0']) {
        return Err(AppendError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix must be part of a file name, not a path".to_string(),
        });
    }

    Ok(())
}

/// Each payload line is written verbatim followed by a newline, so it must be a single line.
pub fn validate_payload_lines(field_name: &str, lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return Err(AppendError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one line is required".to_string(),
        });
    }

    for line in lines {
        if line.contains(['\n', '\r', '\0']) {
            return Err(AppendError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: line.escape_debug().to_string(),
                reason: "Line contains a line break or null byte".to_string(),
            });
        }
    }

    Ok(())
}
