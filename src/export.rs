// Snapshot export: indented JSON, optionally written to a file

use crate::models::MetricSnapshot;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Default output file, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "system_metrics.json";

/// Returned in place of the snapshot when export fails.
pub const EMPTY_ENCODING: &str = "{}";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Two-space indented JSON. Deterministic for a given snapshot.
pub fn encode(snapshot: &MetricSnapshot) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Create or truncate `path` and write `encoded`. The handle is closed on every return path.
pub fn write_to(path: &Path, encoded: &str) -> Result<(), ExportError> {
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(encoded.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}

/// Encode, and write when `path` is given.
pub fn try_export(snapshot: &MetricSnapshot, path: Option<&Path>) -> Result<String, ExportError> {
    let encoded = encode(snapshot)?;
    if let Some(path) = path {
        write_to(path, &encoded)?;
        info!(path = %path.display(), "Metrics exported");
    }
    Ok(encoded)
}

/// Fail-soft export: logs the failure and returns `{}` instead of an error.
pub fn export_snapshot(snapshot: &MetricSnapshot, path: Option<&Path>) -> String {
    match try_export(snapshot, path) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!(error = %e, "Error exporting metrics");
            EMPTY_ENCODING.to_string()
        }
    }
}
