use std::cmp::Reverse;

use xinci_config::discovery::DiscoveryConfig;
use xinci_core::dictionary::KnownWords;
use xinci_core::types::Candidate;

use crate::adjacency::Adjacency;
use crate::ngram::NgramTable;
use crate::scoring::{cohesion, freedom};

/// Fixed acceptance thresholds for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub max_word_len: usize,
    pub min_count: u64,
    pub min_pmi: f64,
    /// `None` disables boundary-entropy filtering
    pub min_entropy: Option<f64>,
}

impl From<&DiscoveryConfig> for Thresholds {
    fn from(config: &DiscoveryConfig) -> Self {
        Self {
            max_word_len: config.max_word_len,
            min_count: config.min_count,
            min_pmi: config.min_pmi(),
            min_entropy: config.entropy_filter.then_some(config.min_entropy),
        }
    }
}

/// Score every eligible substring and return the survivors in rank order.
///
/// A substring of 2..=`max_word_len` characters survives when its count,
/// cohesion and (if enabled) freedom all reach their thresholds and it is not
/// a known word. Survivors are ordered by count descending, then by text.
pub fn rank(
    table: &NgramTable,
    adjacency: &Adjacency,
    known: &KnownWords,
    thresholds: &Thresholds,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (word, count) in table.iter() {
        let len = word.chars().count();
        if len < 2 || len > thresholds.max_word_len {
            continue;
        }
        if count < thresholds.min_count || known.contains(word) {
            continue;
        }

        let Some(pmi) = cohesion(table, word) else {
            continue;
        };
        if pmi < thresholds.min_pmi {
            continue;
        }

        let free = freedom(adjacency, word);
        if let Some(min_entropy) = thresholds.min_entropy {
            if free < min_entropy {
                continue;
            }
        }

        candidates.push(Candidate {
            text: word.to_owned(),
            count,
            cohesion: pmi,
            freedom: free,
        });
    }

    candidates.sort_by(|a, b| {
        (Reverse(a.count), &a.text).cmp(&(Reverse(b.count), &b.text))
    });
    candidates
}
