use crate::core::discovery::{discover_candidates, discover_subdirectories};
use crate::core::writer::append_all;
use crate::domain::model::{AppendPayload, RunReport};
use crate::domain::ports::{ConfigProvider, ConfigTree};
use crate::utils::error::Result;
use std::path::Path;

/// Walks a sandbox root and appends the payload to every matching config file.
pub struct BatchAppender<T: ConfigTree> {
    tree: T,
    suffix: String,
    payload: AppendPayload,
    dry_run: bool,
}

impl<T: ConfigTree> BatchAppender<T> {
    pub fn new(tree: T, suffix: impl Into<String>, payload: AppendPayload) -> Self {
        Self {
            tree,
            suffix: suffix.into(),
            payload,
            dry_run: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(tree: T, config: &C) -> Self {
        Self::new(tree, config.suffix(), config.payload().clone()).with_dry_run(config.dry_run())
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, root: &Path) -> Result<RunReport> {
        tracing::info!("🔍 Scanning {}", root.display());

        let subdirectories = discover_subdirectories(&self.tree, root)?;
        let candidates = discover_candidates(&self.tree, root, &subdirectories, &self.suffix)?;
        tracing::info!(
            "Found {} {} files in {} subdirectories",
            candidates.len(),
            self.suffix,
            subdirectories.len()
        );

        let appended = if self.dry_run {
            for candidate in &candidates {
                tracing::info!("Would append to {}", candidate.path.display());
            }
            0
        } else {
            append_all(&self.tree, &candidates, &self.payload)?
        };

        Ok(RunReport {
            subdirectories: subdirectories.len(),
            candidates: candidates.len(),
            appended,
            dry_run: self.dry_run,
        })
    }
}
