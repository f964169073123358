pub mod adjacency;
pub mod loader;
pub mod ngram;
pub mod processor;
pub mod ranker;
pub mod scoring;
pub mod segmenter;

pub use adjacency::Adjacency;
pub use loader::{JsonKnownWordLoader, load_known_words};
pub use ngram::NgramTable;
pub use processor::{AnalysisContext, ChineseDiscoverer};
pub use ranker::{Thresholds, rank};
pub use segmenter::split_segments;
