use crate::domain::model::CandidateFile;
use crate::domain::ports::ConfigTree;
use crate::utils::error::Result;
use std::ffi::OsString;
use std::path::Path;

/// Directories directly under the sandbox root, in listing order.
pub fn discover_subdirectories<T: ConfigTree>(tree: &T, root: &Path) -> Result<Vec<OsString>> {
    let dirs = tree.subdirectories(root)?;
    tracing::debug!("Found {} subdirectories under {}", dirs.len(), root.display());
    Ok(dirs)
}

/// Files with `suffix` inside each subdirectory, flattened in subdirectory order.
pub fn discover_candidates<T: ConfigTree>(
    tree: &T,
    root: &Path,
    subdirectories: &[OsString],
    suffix: &str,
) -> Result<Vec<CandidateFile>> {
    let mut candidates = Vec::new();

    for subdirectory in subdirectories {
        let dir = root.join(subdirectory);
        let files = tree.matching_files(&dir, suffix)?;
        if files.is_empty() {
            tracing::debug!("No {} files in {}", suffix, dir.display());
        }

        candidates.extend(files.into_iter().map(|path| CandidateFile {
            subdirectory: subdirectory.clone(),
            path,
        }));
    }

    Ok(candidates)
}
