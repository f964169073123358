use std::collections::HashMap;

use crate::ngram::NgramTable;

/// Left and right neighbour distributions, derived from an [`NgramTable`].
///
/// For every substring `w` of length >= 2 with count `c`, `c` is appended to
/// the right list of `w` minus its last character, and to the left list of
/// `w` minus its first character. Each entry therefore stands for one distinct
/// extending character. No source text is re-scanned.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    right: HashMap<String, Vec<u64>>,
    left: HashMap<String, Vec<u64>>,
}

impl Adjacency {
    pub fn build(table: &NgramTable) -> Self {
        let mut right: HashMap<String, Vec<u64>> = HashMap::new();
        let mut left: HashMap<String, Vec<u64>> = HashMap::new();

        for (gram, count) in table.iter() {
            let mut chars = gram.char_indices();
            let Some((_, first)) = chars.next() else {
                continue;
            };
            let Some((last_start, _)) = chars.last() else {
                // single character
                continue;
            };

            // "ABC" means "AB" can be followed by "C"
            let prefix = &gram[..last_start];
            if table.contains(prefix) {
                right.entry(prefix.to_owned()).or_default().push(count);
            }

            // ...and "BC" can be preceded by "A"
            let suffix = &gram[first.len_utf8()..];
            if table.contains(suffix) {
                left.entry(suffix.to_owned()).or_default().push(count);
            }
        }

        // Table iteration order is arbitrary; keep entropy sums reproducible
        for counts in right.values_mut().chain(left.values_mut()) {
            counts.sort_unstable();
        }

        Self { right, left }
    }

    /// Counts of each distinct right extension, empty if never extended
    pub fn right(&self, word: &str) -> &[u64] {
        self.right.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Counts of each distinct left extension, empty if never extended
    pub fn left(&self, word: &str) -> &[u64] {
        self.left.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(segments: &[&str], max_gram_len: usize) -> NgramTable {
        let segments: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
        NgramTable::from_segments(&segments, max_gram_len)
    }

    #[test]
    fn test_neighbours_from_longer_grams() {
        let t = table(&["蛋白质", "蛋白尿", "蛋白质", "白蛋白"], 3);
        let adjacency = Adjacency::build(&t);

        // 蛋白质 x2, 蛋白尿 x1
        assert_eq!(adjacency.right("蛋白"), &[1, 2]);
        // only 白蛋白 extends to the left
        assert_eq!(adjacency.left("蛋白"), &[1]);
    }

    #[test]
    fn test_fixed_follower_gives_single_entry() {
        let t = table(&["血红蛋白血红蛋白血红蛋白"], 4);
        let adjacency = Adjacency::build(&t);
        assert_eq!(adjacency.right("血红蛋"), &[3]);
    }

    #[test]
    fn test_unknown_word_has_no_neighbours() {
        let adjacency = Adjacency::build(&table(&["血红"], 3));
        assert!(adjacency.right("阿司").is_empty());
        assert!(adjacency.left("血红").is_empty());
    }
}
