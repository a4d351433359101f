use std::path::PathBuf;
use thiserror::Error;

/// Exit code for filesystem failures during discovery or appending.
pub const EXIT_IO_FAILURE: i32 = 1;
/// Exit code for unusable settings.
pub const EXIT_CONFIG_FAILURE: i32 = 2;

#[derive(Error, Debug)]
pub enum AppendError {
    #[error("Failed to list directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppendError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppendError::Discovery { .. } | AppendError::Append { .. } => EXIT_IO_FAILURE,
            AppendError::ConfigParse(_)
            | AppendError::ConfigError { .. }
            | AppendError::InvalidConfigValueError { .. } => EXIT_CONFIG_FAILURE,
        }
    }

    /// Underlying OS error kind, when the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            AppendError::Discovery { source, .. } | AppendError::Append { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppendError::Discovery { .. } => "Check that the sandbox root exists and is readable",
            AppendError::Append { .. } => {
                "Check file permissions; files before this one were already modified"
            }
            AppendError::ConfigParse(_) => "Make sure the config file is valid TOML",
            AppendError::ConfigError { .. } | AppendError::InvalidConfigValueError { .. } => {
                "Fix the setting and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppendError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let discovery = AppendError::Discovery {
            path: PathBuf::from("/missing"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(discovery.exit_code(), EXIT_IO_FAILURE);
        assert_eq!(discovery.io_kind(), Some(io::ErrorKind::NotFound));

        let invalid = AppendError::InvalidConfigValueError {
            field: "suffix".to_string(),
            value: String::new(),
            reason: "empty".to_string(),
        };
        assert_eq!(invalid.exit_code(), EXIT_CONFIG_FAILURE);
        assert_eq!(invalid.io_kind(), None);
    }

    #[test]
    fn test_display_includes_path() {
        let err = AppendError::Append {
            path: PathBuf::from("node1/bitcoin.conf"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("node1/bitcoin.conf"));
    }
}
