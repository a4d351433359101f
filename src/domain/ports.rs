use crate::domain::model::AppendPayload;
use crate::utils::error::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Filesystem operations the batch appender needs.
pub trait ConfigTree {
    /// Names of directories directly under `root`, in listing order.
    fn subdirectories(&self, root: &Path) -> Result<Vec<OsString>>;

    /// Regular files directly under `dir` whose names end with `suffix`, in listing order.
    fn matching_files(&self, dir: &Path, suffix: &str) -> Result<Vec<PathBuf>>;

    /// Appends `payload` to an existing file. Must not create the file.
    fn append(&self, path: &Path, payload: &AppendPayload) -> Result<()>;
}

pub trait ConfigProvider {
    fn sandbox_root(&self) -> &Path;
    fn suffix(&self) -> &str;
    fn payload(&self) -> &AppendPayload;
    fn dry_run(&self) -> bool;
}
