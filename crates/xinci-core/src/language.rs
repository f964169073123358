use crate::dictionary::KnownWords;
use crate::types::DiscoveryOutcome;

/// New-word discovery interface for language implementations
pub trait WordDiscoverer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Normalize raw text before splitting
    fn normalize(&self, text: &str) -> String;

    /// Break text into the runs inside which n-grams are counted
    fn segment(&self, text: &str) -> Vec<String>;

    /// Score and rank candidate words, excluding anything in `known`
    fn discover(&self, text: &str, known: &KnownWords) -> DiscoveryOutcome;
}
