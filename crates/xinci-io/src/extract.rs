use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use zip::ZipArchive;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static tag pattern"));

const MARKUP_EXTENSIONS: [&str; 3] = [".html", ".xhtml", ".htm"];

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// How a document is turned into text, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    /// Zip bundle of (X)HTML files, e.g. ePub
    MarkupArchive,
    Unsupported,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => DocumentKind::PlainText,
            "epub" | "zip" => DocumentKind::MarkupArchive,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Read a document into a single text blob.
///
/// Unsupported extensions yield an empty string rather than an error; callers
/// treat empty content as "nothing to analyze".
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    match DocumentKind::from_path(path) {
        DocumentKind::PlainText => {
            tracing::debug!("Reading plain text: {}", path.display());
            let bytes = read_bytes(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        DocumentKind::MarkupArchive => {
            tracing::info!("Unpacking markup archive: {}", path.display());
            let bytes = read_bytes(path)?;
            read_markup_archive(path, &bytes)
        }
        DocumentKind::Unsupported => {
            tracing::warn!("Unsupported document type: {}", path.display());
            Ok(String::new())
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractError> {
    fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_markup_archive(path: &Path, bytes: &[u8]) -> Result<String, ExtractError> {
    let archive_err = |source| ExtractError::Archive {
        path: path.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_err)?;
    let mut fragments = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_err)?;
        let name = entry.name().to_lowercase();
        if !MARKUP_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            continue;
        }

        let mut raw = Vec::new();
        entry.read_to_end(&mut raw).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        fragments.push(strip_tags(&String::from_utf8_lossy(&raw)));
    }

    tracing::debug!("Collected {} markup fragments", fragments.len());
    Ok(fragments.join("\n"))
}

/// Remove every `<...>` span. Not a markup parser: entities stay as written.
pub fn strip_tags(markup: &str) -> String {
    TAG.replace_all(markup, "").into_owned()
}
