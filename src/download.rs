//! Saving a result artifact to disk.
//!
//! The payload is written to a temporary file next to the destination and then
//! moved into place. The temporary file is dropped (and removed, if it still
//! exists) as soon as the save has been attempted.

use crate::error::ClientError;
use crate::submission::ResultArtifact;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Save `artifact` into `dir` under its fixed download name.
pub fn save(artifact: &ResultArtifact, dir: &Path) -> Result<PathBuf, ClientError> {
    let target = dir.join(artifact.kind.download_name());

    let mut staging = tempfile::Builder::new()
        .prefix(".ocr_result")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| ClientError::Save(format!("Failed to create temp file: {}", e)))?;

    staging
        .write_all(&artifact.payload)
        .map_err(|e| ClientError::Save(format!("Failed to write temp file: {}", e)))?;

    staging
        .persist(&target)
        .map_err(|e| ClientError::Save(format!("Failed to move into place: {}", e.error)))?;

    tracing::info!(
        "Saved {} bytes to {}",
        artifact.payload.len(),
        target.display()
    );

    Ok(target)
}
