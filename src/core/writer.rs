use crate::domain::model::{AppendPayload, CandidateFile};
use crate::domain::ports::ConfigTree;
use crate::utils::error::Result;

/// Appends `payload` to each candidate in order and returns how many were written.
///
/// The first failure stops the batch. Files already written keep the payload.
pub fn append_all<T: ConfigTree>(
    tree: &T,
    candidates: &[CandidateFile],
    payload: &AppendPayload,
) -> Result<usize> {
    let mut appended = 0;

    for candidate in candidates {
        if let Err(e) = tree.append(&candidate.path, payload) {
            tracing::error!(
                "Append aborted after {} of {} files: {}",
                appended,
                candidates.len(),
                e
            );
            return Err(e);
        }
        appended += 1;
        tracing::info!("✏️  Appended {} lines to {}", payload.lines().len(), candidate.path.display());
    }

    Ok(appended)
}
