use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

/// Document-wide substring frequency table.
///
/// Holds the count of every contiguous substring of length `1..=max_gram_len`
/// observed inside any segment. Overlapping occurrences are counted
/// independently; occurrences in different segments are summed.
///
/// # Invariants
/// - Every key is between 1 and `max_gram_len` code points long
/// - Every stored count is >= 1
/// - `total_len` is the sum of the lengths of all ingested segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NgramTable {
    max_gram_len: usize,
    total_len: usize,
    counts: HashMap<String, u64>,
}

impl NgramTable {
    pub fn new(max_gram_len: usize) -> Self {
        Self {
            max_gram_len,
            total_len: 0,
            counts: HashMap::new(),
        }
    }

    /// Count every segment on the current thread
    pub fn from_segments(segments: &[String], max_gram_len: usize) -> Self {
        let mut table = Self::new(max_gram_len);
        for segment in segments {
            table.add_segment(segment);
        }
        table
    }

    /// Count segments across `workers` threads (0 = one per CPU).
    ///
    /// Segments are split into chunks, each chunk builds a partial table on
    /// its own thread, and the partials are summed. The result is identical
    /// to [`NgramTable::from_segments`] whatever the chunking.
    pub fn from_segments_parallel(segments: &[String], max_gram_len: usize, workers: usize) -> Self {
        let workers = if workers == 0 { num_cpus::get() } else { workers };
        if workers <= 1 || segments.len() < 2 {
            return Self::from_segments(segments, max_gram_len);
        }

        let chunk_size = segments.len().div_ceil(workers);
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for chunk in segments.chunks(chunk_size) {
                let tx = tx.clone();
                scope.spawn(move || {
                    let partial = Self::from_segments(chunk, max_gram_len);
                    // rx is alive until after the scope joins
                    let _ = tx.send(partial);
                });
            }
        });
        drop(tx);

        let mut table = Self::new(max_gram_len);
        for partial in rx.iter() {
            table.merge(partial);
        }

        tracing::debug!(
            "Merged {} partial n-gram tables ({} distinct)",
            segments.len().div_ceil(chunk_size),
            table.len()
        );
        table
    }

    /// Ingest one segment.
    pub fn add_segment(&mut self, segment: &str) {
        let chars: Vec<char> = segment.chars().collect();
        self.total_len += chars.len();

        for start in 0..chars.len() {
            let longest = self.max_gram_len.min(chars.len() - start);
            for n in 1..=longest {
                let gram: String = chars[start..start + n].iter().collect();
                *self.counts.entry(gram).or_insert(0) += 1;
            }
        }
    }

    /// Sum another table into this one. Both must share `max_gram_len`.
    pub fn merge(&mut self, other: NgramTable) {
        debug_assert_eq!(self.max_gram_len, other.max_gram_len);

        self.total_len += other.total_len;
        for (gram, count) in other.counts {
            *self.counts.entry(gram).or_insert(0) += count;
        }
    }

    /// Occurrence count, 0 when never seen
    pub fn count(&self, gram: &str) -> u64 {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    pub fn contains(&self, gram: &str) -> bool {
        self.counts.contains_key(gram)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(gram, count)| (gram.as_str(), *count))
    }

    /// Number of distinct substrings
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Probability denominator shared by every substring length
    pub fn total_len(&self) -> usize {
        self.total_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counts_every_length_up_to_max() {
        let table = NgramTable::from_segments(&segments(&["甲乙甲乙"]), 3);

        assert_eq!(table.count("甲"), 2);
        assert_eq!(table.count("甲乙"), 2);
        assert_eq!(table.count("乙甲"), 1);
        assert_eq!(table.count("甲乙甲"), 1);
        assert_eq!(table.count("乙甲乙"), 1);
        assert_eq!(table.count("甲乙甲乙"), 0);
        assert_eq!(table.total_len(), 4);
    }

    #[test]
    fn test_overlapping_occurrences_counted_independently() {
        let table = NgramTable::from_segments(&segments(&["哈哈哈哈"]), 2);
        assert_eq!(table.count("哈哈"), 3);
        assert_eq!(table.count("哈"), 4);
    }

    #[test]
    fn test_counts_aggregate_across_segments() {
        let table = NgramTable::from_segments(&segments(&["蛋白质", "白蛋白"]), 3);
        assert_eq!(table.count("蛋白"), 2);
        assert_eq!(table.count("白"), 2);
        // never spans the boundary between segments
        assert_eq!(table.count("质白"), 0);
        assert_eq!(table.total_len(), 6);
    }

    #[test]
    fn test_short_segment_only_counts_what_fits() {
        let table = NgramTable::from_segments(&segments(&["血红"]), 5);
        assert_eq!(table.len(), 3);
        assert_eq!(table.count("血红"), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = segments(&[
            "血红蛋白的含量",
            "测血红蛋白值",
            "白蛋白偏低",
            "血红蛋白浓度",
            "阿司匹林",
            "阿司匹林肠溶片",
            "蛋白质",
        ]);
        let sequential = NgramTable::from_segments(&input, 5);
        for workers in [2, 3, 7, 16] {
            let parallel = NgramTable::from_segments_parallel(&input, 5, workers);
            assert_eq!(parallel, sequential, "workers = {workers}");
        }
    }

    #[test]
    fn test_segment_order_does_not_matter() {
        let forward = segments(&["血红蛋白", "蛋白质", "红细胞"]);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            NgramTable::from_segments(&forward, 3),
            NgramTable::from_segments(&backward, 3)
        );
    }
}
