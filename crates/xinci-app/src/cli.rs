use std::path::PathBuf;

use clap::Parser;
use xinci_config::Config;

/// Discover new Chinese words in a document
#[derive(Parser, Debug)]
#[clap(name = "xinci", about = "Unsupervised new-word discovery for Chinese text")]
pub struct Args {
    /// Document to analyze (.txt, .epub or .zip)
    pub document: PathBuf,

    /// Output JSON path
    pub output: Option<PathBuf>,

    /// JSON profile replacing the environment defaults
    #[clap(short = 'p', long)]
    pub profile: Option<PathBuf>,

    /// Known-word dictionary directory
    #[clap(short = 'd', long)]
    pub dict_dir: Option<String>,

    /// Do not load any known-word dictionary
    #[clap(long)]
    pub no_dict: bool,

    #[clap(short = 'n', long)]
    pub max_word_len: Option<usize>,

    #[clap(short = 'c', long)]
    pub min_count: Option<u64>,

    #[clap(long, alias = "min-cohesion", allow_negative_numbers = true)]
    pub min_pmi: Option<f64>,

    #[clap(long, alias = "min-freedom")]
    pub min_entropy: Option<f64>,

    /// Rank on cohesion only
    #[clap(long)]
    pub no_entropy: bool,

    /// Counting threads, 0 = one per CPU
    #[clap(short = 'j', long)]
    pub threads: Option<usize>,

    /// Keep only the top N candidates
    #[clap(long)]
    pub limit: Option<usize>,

    /// NFKC-normalize text before splitting
    #[clap(long)]
    pub normalize: bool,

    /// Log as JSON lines
    #[clap(long)]
    pub log_json: bool,
}

impl Args {
    /// Command-line flags win over profile and environment
    pub fn apply(&self, config: &mut Config) {
        let discovery = &mut config.discovery;
        if let Some(v) = self.max_word_len {
            discovery.max_word_len = v;
        }
        if let Some(v) = self.min_count {
            discovery.min_count = v;
        }
        if let Some(v) = self.min_pmi {
            discovery.min_pmi = Some(v);
        }
        if let Some(v) = self.min_entropy {
            discovery.min_entropy = v;
        }
        if self.no_entropy {
            discovery.entropy_filter = false;
        }
        if let Some(v) = self.threads {
            discovery.threads = v;
        }
        if self.limit.is_some() {
            discovery.limit = self.limit;
        }
        if self.normalize {
            discovery.normalize = true;
        }

        if let Some(dir) = &self.dict_dir {
            config.dictionary.root = dir.clone();
        }
        if self.no_dict {
            config.dictionary.enabled = false;
        }

        if let Some(output) = &self.output {
            config.output.path = output.to_string_lossy().into_owned();
        }
    }
}
