use std::path::{Path, PathBuf};

use anyhow::Context;
use xinci_config::Config;
use xinci_core::language::WordDiscoverer;
use xinci_core::types::DiscoveryOutcome;
use xinci_io::{extract_text, write_report};
use xinci_lang_chinese::{ChineseDiscoverer, load_known_words};

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    Written { path: PathBuf, candidates: usize },
    /// Nothing to analyze; no output file was written
    NoContent,
}

/// Extract, discover and save for one document.
///
/// Extraction and output failures abort the run before anything is written.
pub fn run(document: &Path, config: &Config) -> anyhow::Result<RunOutcome> {
    let text = extract_text(document)
        .with_context(|| format!("Failed to extract text from {}", document.display()))?;
    if text.is_empty() {
        tracing::warn!("Extracted text is empty");
        return Ok(RunOutcome::NoContent);
    }

    let known = load_known_words(&config.dictionary);
    let discoverer = ChineseDiscoverer::new(config.discovery.clone());

    let report = match discoverer.discover(&text, &known) {
        DiscoveryOutcome::Found(report) => report,
        DiscoveryOutcome::NoContent => return Ok(RunOutcome::NoContent),
    };

    let path = PathBuf::from(&config.output.path);
    write_report(&path, &report).context("Failed to save results")?;

    Ok(RunOutcome::Written {
        path,
        candidates: report.len(),
    })
}
