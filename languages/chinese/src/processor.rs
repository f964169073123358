use xinci_config::discovery::DiscoveryConfig;
use xinci_core::dictionary::KnownWords;
use xinci_core::language::WordDiscoverer;
use xinci_core::preprocess::{NfkcPreprocessor, Preprocessor, RawPreprocessor};
use xinci_core::types::{CorpusStats, DiscoveryOutcome, DiscoveryReport};

use crate::adjacency::Adjacency;
use crate::ngram::NgramTable;
use crate::ranker::{Thresholds, rank};
use crate::segmenter::split_segments;

/// Statistics for one document.
///
/// Owns the n-gram table and neighbour distributions for the duration of a
/// single discovery run. Nothing in here outlives the run or is shared with
/// another document.
#[derive(Debug)]
pub struct AnalysisContext {
    segments: usize,
    table: NgramTable,
    adjacency: Adjacency,
}

impl AnalysisContext {
    /// Count n-grams up to `max_word_len + 1` characters (the extra length
    /// feeds the neighbour distributions of the longest candidates)
    pub fn build(segments: &[String], max_word_len: usize, workers: usize) -> Self {
        let table = NgramTable::from_segments_parallel(segments, max_word_len + 1, workers);
        let adjacency = Adjacency::build(&table);

        Self {
            segments: segments.len(),
            table,
            adjacency,
        }
    }

    pub fn table(&self) -> &NgramTable {
        &self.table
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            segments: self.segments,
            total_len: self.table.total_len(),
            distinct_ngrams: self.table.len(),
        }
    }
}

/// Chinese new-word discovery
pub struct ChineseDiscoverer {
    config: DiscoveryConfig,
}

impl ChineseDiscoverer {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }
}

impl Default for ChineseDiscoverer {
    fn default() -> Self {
        Self::new(DiscoveryConfig::default())
    }
}

impl WordDiscoverer for ChineseDiscoverer {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn normalize(&self, text: &str) -> String {
        if self.config.normalize {
            NfkcPreprocessor.process(text)
        } else {
            RawPreprocessor.process(text)
        }
    }

    fn segment(&self, text: &str) -> Vec<String> {
        split_segments(&self.normalize(text))
    }

    fn discover(&self, text: &str, known: &KnownWords) -> DiscoveryOutcome {
        tracing::info!("Preprocessing text...");
        let segments = self.segment(text);
        if segments.is_empty() {
            tracing::warn!("No usable Chinese content found");
            return DiscoveryOutcome::NoContent;
        }

        let context = AnalysisContext::build(&segments, self.config.max_word_len, self.config.threads);
        let stats = context.stats();
        tracing::info!(
            "Analyzing {} characters in {} segments ({} distinct n-grams)",
            stats.total_len,
            stats.segments,
            stats.distinct_ngrams
        );

        tracing::info!("Scoring cohesion (PMI) and freedom (entropy)...");
        let thresholds = Thresholds::from(&self.config);
        let mut candidates = rank(context.table(), context.adjacency(), known, &thresholds);
        if let Some(limit) = self.config.limit {
            candidates.truncate(limit);
        }
        tracing::info!("Found {} candidate words", candidates.len());

        DiscoveryOutcome::Found(DiscoveryReport { candidates, stats })
    }
}
