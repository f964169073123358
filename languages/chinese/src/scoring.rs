//! Cohesion (PMI) and freedom (boundary entropy) scores.

use crate::adjacency::Adjacency;
use crate::ngram::NgramTable;

/// Pointwise mutual information of `word`, minimised over its split points.
///
/// For each split `word = a + b`, with `P(x) = count(x) / total_len`:
/// `log2(P(word) / (P(a) * P(b)))`. Splits where either part is absent are
/// skipped; `None` means no split could be scored.
pub fn cohesion(table: &NgramTable, word: &str) -> Option<f64> {
    let count = table.count(word);
    let total = table.total_len() as f64;
    if count == 0 || total == 0.0 {
        return None;
    }

    let p_word = count as f64 / total;
    let mut weakest: Option<f64> = None;

    for (split, _) in word.char_indices().skip(1) {
        let (head, tail) = word.split_at(split);
        let (c1, c2) = (table.count(head), table.count(tail));
        if c1 == 0 || c2 == 0 {
            continue;
        }

        let p1 = c1 as f64 / total;
        let p2 = c2 as f64 / total;
        let pmi = (p_word / (p1 * p2)).log2();
        weakest = Some(weakest.map_or(pmi, |w| w.min(pmi)));
    }

    weakest
}

/// Shannon entropy (bits) of a count distribution; 0 for an empty one
pub fn entropy(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}

/// The less free of the two boundaries
pub fn freedom(adjacency: &Adjacency, word: &str) -> f64 {
    let right = entropy(adjacency.right(word));
    let left = entropy(adjacency.left(word));
    right.min(left)
}
