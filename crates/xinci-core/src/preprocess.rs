use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default: NFKC, which folds CJK compatibility ideographs onto unified ones
    fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        text.nfkc().collect()
    }
}

pub struct NfkcPreprocessor;
impl Preprocessor for NfkcPreprocessor {}

/// Leaves the text untouched
pub struct RawPreprocessor;
impl Preprocessor for RawPreprocessor {
    fn process(&self, text: &str) -> String {
        text.to_string()
    }
}
