use std::fs;
use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;
use xinci_config::dictionary::DictionaryConfig;
use xinci_core::dictionary::{FileOutcome, KnownWordLoader, KnownWords, SkipReason};

/// Fields of list items that name a known word, in order of preference
const WORD_FIELDS: [&str; 2] = ["char", "word"];

/// Collects known words from JSON dictionaries shaped like
/// `{ "key": ["词", {"char": "字"}, {"word": "词语"}] }`.
///
/// Only list-valued entries contribute: plain string items, and the `char`
/// field of object items (`word` when `char` is not a string). Every other shape is
/// ignored.
pub struct JsonKnownWordLoader {
    extensions: Vec<String>,
}

impl Default for JsonKnownWordLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonKnownWordLoader {
    pub fn new() -> Self {
        Self::with_extensions(["json"])
    }

    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Load one file into `known`, reporting what happened
    fn load_file(path: &Path, known: &mut KnownWords) -> FileOutcome {
        let skipped = |reason| FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason,
        };

        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => return skipped(SkipReason::Unreadable(e.to_string())),
        };
        let data: Value = match serde_json::from_str(&json) {
            Ok(data) => data,
            Err(e) => return skipped(SkipReason::Malformed(e.to_string())),
        };
        let Value::Object(entries) = data else {
            return skipped(SkipReason::NotAnObject);
        };

        let mut words = 0;
        for items in entries.values().filter_map(Value::as_array) {
            for item in items {
                match item {
                    Value::String(word) => {
                        known.insert(word.as_str());
                        words += 1;
                    }
                    Value::Object(fields) => {
                        if let Some(word) = WORD_FIELDS.iter().find_map(|f| fields.get(*f)?.as_str()) {
                            known.insert(word);
                            words += 1;
                        }
                    }
                    _ => {}
                }
            }
        }

        FileOutcome::Loaded {
            path: path.to_path_buf(),
            words,
        }
    }
}

impl KnownWordLoader for JsonKnownWordLoader {
    fn load_from_dir(&self, root: &Path) -> KnownWords {
        let mut known = KnownWords::new();

        if !root.exists() {
            tracing::info!("Dictionary directory {} not found, no known-word filtering", root.display());
            return known;
        }

        tracing::info!("Loading known words from: {}", root.display());
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    known.record(FileOutcome::Skipped {
                        path,
                        reason: SkipReason::Unreadable(e.to_string()),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.accepts(entry.path()) {
                continue;
            }

            let outcome = Self::load_file(entry.path(), &mut known);
            match &outcome {
                FileOutcome::Loaded { words, .. } => {
                    tracing::debug!("Loaded {} words from {}", words, outcome.path().display());
                }
                FileOutcome::Skipped { reason, .. } => {
                    tracing::warn!("Skipping dictionary {}: {}", outcome.path().display(), reason);
                }
            }
            known.record(outcome);
        }

        tracing::info!(
            "Loaded {} known words ({} files skipped)",
            known.len(),
            known.skipped().count()
        );
        known
    }

    fn supported_formats(&self) -> Vec<String> {
        self.extensions.clone()
    }
}

/// Load every configured dictionary root into one set
pub fn load_known_words(config: &DictionaryConfig) -> KnownWords {
    if !config.enabled {
        tracing::info!("Known-word filtering disabled");
        return KnownWords::new();
    }

    let loader = JsonKnownWordLoader::with_extensions(&config.extensions);
    config
        .roots()
        .map(|root| loader.load_from_dir(Path::new(root)))
        .fold(KnownWords::new(), KnownWords::merge)
}
