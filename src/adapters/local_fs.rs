use crate::domain::model::AppendPayload;
use crate::domain::ports::ConfigTree;
use crate::utils::error::{AppendError, Result};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `ConfigTree` backed by the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    fn list(dir: &Path) -> Result<Vec<(OsString, PathBuf)>> {
        let discovery_err = |source: std::io::Error| AppendError::Discovery {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(discovery_err)? {
            let entry = entry.map_err(discovery_err)?;
            entries.push((entry.file_name(), entry.path()));
        }
        Ok(entries)
    }
}

// Type checks go through fs::metadata so symlinks count as their targets.
// A dangling link is neither a directory nor a file.
fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

impl ConfigTree for LocalFs {
    fn subdirectories(&self, root: &Path) -> Result<Vec<OsString>> {
        Ok(Self::list(root)?
            .into_iter()
            .filter(|(_, path)| is_dir(path))
            .map(|(name, _)| name)
            .collect())
    }

    fn matching_files(&self, dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
        Ok(Self::list(dir)?
            .into_iter()
            .filter(|(name, path)| {
                name.as_encoded_bytes().ends_with(suffix.as_bytes()) && is_file(path)
            })
            .map(|(_, path)| path)
            .collect())
    }

    fn append(&self, path: &Path, payload: &AppendPayload) -> Result<()> {
        let append_err = |source: std::io::Error| AppendError::Append {
            path: path.to_path_buf(),
            source,
        };

        // No create(true): the file has to still be there from discovery.
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(append_err)?;

        let mut writer = BufWriter::new(file);
        for line in payload.lines() {
            writeln!(writer, "{}", line).map_err(append_err)?;
        }
        writeln!(writer).map_err(append_err)?;
        writer.flush().map_err(append_err)?;

        Ok(())
    }
}
