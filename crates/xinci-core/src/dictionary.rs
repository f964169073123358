use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Harvests known words from dictionary files on disk
pub trait KnownWordLoader {
    /// Load every known word under `root`. Never fails: unusable files are
    /// reported as [`FileOutcome::Skipped`] and a missing root yields an
    /// empty set.
    fn load_from_dir(&self, root: &Path) -> KnownWords;

    /// Supported file extensions, lowercase and without the dot
    fn supported_formats(&self) -> Vec<String>;
}

/// What happened to a single dictionary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Loaded { path: PathBuf, words: usize },
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Loaded { path, .. } | FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("Unreadable: {0}")]
    Unreadable(String),

    #[error("Malformed: {0}")]
    Malformed(String),

    #[error("Top-level value is not an object")]
    NotAnObject,
}

/// Read-only exclusion set built once per run
#[derive(Debug, Clone, Default)]
pub struct KnownWords {
    words: HashSet<String>,
    outcomes: Vec<FileOutcome>,
}

impl KnownWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            outcomes: Vec::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }

    /// Merge another set into this one, keeping both outcome logs
    pub fn merge(mut self, other: KnownWords) -> Self {
        self.words.extend(other.words);
        self.outcomes.extend(other.outcomes);
        self
    }
}
