#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{AppendPayload, DEFAULT_SUFFIX};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_payload_lines, validate_suffix, Validate};
use serde::Serialize;
use std::path::{Path, PathBuf};
use toml_config::FileConfig;

/// Resolved settings for one run.
#[derive(Debug, Clone, Serialize)]
pub struct AppendSettings {
    pub sandbox_root: PathBuf,
    pub suffix: String,
    pub payload: AppendPayload,
    pub dry_run: bool,
}

impl AppendSettings {
    pub fn new(sandbox_root: impl Into<PathBuf>) -> Self {
        Self {
            sandbox_root: sandbox_root.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
            payload: AppendPayload::default(),
            dry_run: false,
        }
    }

    /// Applies keys present in the settings file over the current values.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(suffix) = file.append.suffix {
            self.suffix = suffix;
        }
        if let Some(lines) = file.append.lines {
            self.payload = AppendPayload::new(lines);
        }
        self
    }
}

impl Validate for AppendSettings {
    fn validate(&self) -> Result<()> {
        validate_path("sandbox_root", &self.sandbox_root.to_string_lossy())?;
        validate_suffix("suffix", &self.suffix)?;
        validate_payload_lines("lines", self.payload.lines())?;
        Ok(())
    }
}

impl ConfigProvider for AppendSettings {
    fn sandbox_root(&self) -> &Path {
        &self.sandbox_root
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn payload(&self) -> &AppendPayload {
        &self.payload
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}
