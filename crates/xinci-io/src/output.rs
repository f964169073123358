use std::fs;
use std::path::{Path, PathBuf};

use xinci_core::types::DiscoveryReport;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render a report as pretty JSON (two-space indent, non-ASCII kept verbatim)
pub fn render_report(report: &DiscoveryReport) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Serialize fully in memory first so a failure never leaves a partial file
pub fn write_report(path: &Path, report: &DiscoveryReport) -> Result<(), OutputError> {
    let json = render_report(report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved {} candidates to {}", report.len(), path.display());
    Ok(())
}
