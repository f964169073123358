use serde::ser::{Serialize, SerializeMap, Serializer};

/// A scored multi-character substring that passed every filter
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub count: u64,
    /// Minimum PMI over all internal split points
    pub cohesion: f64,
    /// Minimum of left and right boundary entropy
    pub freedom: f64,
}

impl Candidate {
    /// Length in code points
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Figures describing the analysed corpus, for logging and diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub segments: usize,
    /// Sum of segment lengths in code points
    pub total_len: usize,
    pub distinct_ngrams: usize,
}

/// Ranked discovery output.
///
/// Candidates are kept in rank order (count descending, then text). The
/// serialized form is a JSON object keyed by candidate text in that order:
///
/// ```json
/// { "血红蛋白": { "count": 12, "pmi": 7.41, "entropy": 1.92 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryReport {
    pub candidates: Vec<Candidate>,
    pub stats: CorpusStats,
}

impl DiscoveryReport {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, text: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.text == text)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }
}

#[derive(serde::Serialize)]
struct CandidateStats {
    count: u64,
    pmi: f64,
    entropy: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Serialize for DiscoveryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.candidates.len()))?;
        for candidate in &self.candidates {
            map.serialize_entry(
                &candidate.text,
                &CandidateStats {
                    count: candidate.count,
                    pmi: round2(candidate.cohesion),
                    entropy: round2(candidate.freedom),
                },
            )?;
        }
        map.end()
    }
}

/// Result of running discovery over one text blob
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryOutcome {
    /// No CJK segment survived splitting; nothing to analyze
    NoContent,
    Found(DiscoveryReport),
}
