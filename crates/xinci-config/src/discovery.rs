use std::env;

use serde::{Deserialize, Serialize};

/// PMI threshold when boundary entropy also filters candidates
pub const DEFAULT_MIN_PMI_WITH_ENTROPY: f64 = 4.0;
/// PMI threshold when cohesion is the only statistical filter
pub const DEFAULT_MIN_PMI_WITHOUT_ENTROPY: f64 = 3.0;
/// Longest candidate accepted by validation
pub const MAX_WORD_LEN_LIMIT: usize = 64;

fn default_max_word_len() -> usize {
    4
}

fn default_min_count() -> u64 {
    5
}

fn default_min_entropy() -> f64 {
    0.8
}

fn default_entropy_filter() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Longest candidate, in characters. Counting goes one further for neighbours.
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
    #[serde(default = "default_min_count")]
    pub min_count: u64,
    /// Unset means "pick by `entropy_filter`", see [`DiscoveryConfig::min_pmi`]
    #[serde(default, alias = "min_cohesion")]
    pub min_pmi: Option<f64>,
    #[serde(default = "default_min_entropy", alias = "min_freedom")]
    pub min_entropy: f64,
    #[serde(default = "default_entropy_filter")]
    pub entropy_filter: bool,
    /// Counting workers, 0 = one per CPU
    pub threads: usize,
    /// Keep only the top N candidates
    pub limit: Option<usize>,
    /// NFKC-normalize the text before splitting
    pub normalize: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_word_len: default_max_word_len(),
            min_count: default_min_count(),
            min_pmi: None,
            min_entropy: default_min_entropy(),
            entropy_filter: default_entropy_filter(),
            threads: 0,
            limit: None,
            normalize: false,
        }
    }
}

impl DiscoveryConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let max_word_len = env::var("XINCI_MAX_WORD_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_word_len);

        let min_count = env::var("XINCI_MIN_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_count);

        let min_pmi = env::var("XINCI_MIN_PMI").ok().and_then(|v| v.parse().ok());

        let min_entropy = env::var("XINCI_MIN_ENTROPY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_entropy);

        let entropy_filter = env::var("XINCI_ENTROPY_FILTER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.entropy_filter);

        let threads = env::var("XINCI_THREADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.threads);

        Self {
            max_word_len,
            min_count,
            min_pmi,
            min_entropy,
            entropy_filter,
            threads,
            ..defaults
        }
    }

    /// Effective cohesion threshold
    pub fn min_pmi(&self) -> f64 {
        match self.min_pmi {
            Some(value) => value,
            None if self.entropy_filter => DEFAULT_MIN_PMI_WITH_ENTROPY,
            None => DEFAULT_MIN_PMI_WITHOUT_ENTROPY,
        }
    }
}
