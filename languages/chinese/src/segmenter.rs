/// First code point of the core CJK Unified Ideographs block used for splitting
pub const CJK_FIRST: char = '\u{4E00}';
/// Last code point considered (the GB-era upper bound of the block)
pub const CJK_LAST: char = '\u{9FA5}';

pub fn is_cjk(c: char) -> bool {
    (CJK_FIRST..=CJK_LAST).contains(&c)
}

/// Split text into maximal runs of CJK ideographs.
///
/// Any run of non-CJK characters acts as a boundary, so n-grams never span
/// punctuation, whitespace or Latin text. Runs of a single character carry no
/// n-gram of length 2 and are dropped.
pub fn split_segments(text: &str) -> Vec<String> {
    text.split(|c: char| !is_cjk(c))
        .filter(|s| s.chars().count() > 1)
        .map(str::to_owned)
        .collect()
}
