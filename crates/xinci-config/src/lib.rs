use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::discovery::{DiscoveryConfig, MAX_WORD_LEN_LIMIT};
use self::output::OutputConfig;

pub mod dictionary;
pub mod discovery;
pub mod output;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("max_word_len must be between 2 and 64, got {0}")]
    MaxWordLen(usize),

    #[error("min_count must be at least 1")]
    MinCount,

    #[error("{name} must be a finite, non-negative number, got {value}")]
    Threshold { name: &'static str, value: f64 },

    #[error("dictionary extension list is empty")]
    NoExtensions,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub discovery: DiscoveryConfig,
    pub dictionary: DictionaryConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Defaults overlaid with `XINCI_*` environment variables
    pub fn new() -> Self {
        Config {
            discovery: DiscoveryConfig::new(),
            dictionary: DictionaryConfig::new(),
            output: OutputConfig::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.discovery;
        if !(2..=MAX_WORD_LEN_LIMIT).contains(&d.max_word_len) {
            return Err(ConfigError::MaxWordLen(d.max_word_len));
        }
        if d.min_count == 0 {
            return Err(ConfigError::MinCount);
        }

        let min_pmi = d.min_pmi();
        if !min_pmi.is_finite() {
            return Err(ConfigError::Threshold {
                name: "min_pmi",
                value: min_pmi,
            });
        }
        // PMI may legitimately be negative; entropy may not
        if !d.min_entropy.is_finite() || d.min_entropy < 0.0 {
            return Err(ConfigError::Threshold {
                name: "min_entropy",
                value: d.min_entropy,
            });
        }

        if self.dictionary.enabled && self.dictionary.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{DEFAULT_MIN_PMI_WITHOUT_ENTROPY, DEFAULT_MIN_PMI_WITH_ENTROPY};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.discovery.max_word_len, 4);
        assert_eq!(config.discovery.min_count, 5);
        assert_eq!(config.discovery.min_entropy, 0.8);
        assert!(config.discovery.entropy_filter);
        assert_eq!(config.dictionary.root, "dicts");
        assert_eq!(config.output.path, "discovered_words.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_pmi_follows_entropy_toggle() {
        let mut discovery = DiscoveryConfig::default();
        assert_eq!(discovery.min_pmi(), DEFAULT_MIN_PMI_WITH_ENTROPY);

        discovery.entropy_filter = false;
        assert_eq!(discovery.min_pmi(), DEFAULT_MIN_PMI_WITHOUT_ENTROPY);

        discovery.min_pmi = Some(2.5);
        assert_eq!(discovery.min_pmi(), 2.5);
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        let json = r#"{ "discovery": { "min_count": 2, "min_cohesion": 3.5 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.discovery.min_count, 2);
        assert_eq!(config.discovery.min_pmi(), 3.5);
        assert_eq!(config.discovery.max_word_len, 4);
        assert_eq!(config.dictionary.extensions, vec!["json".to_string()]);
    }

    #[test]
    fn test_validate_rejects_short_words() {
        let mut config = Config::default();
        config.discovery.max_word_len = 1;
        assert_eq!(config.validate(), Err(ConfigError::MaxWordLen(1)));
    }

    #[test]
    fn test_validate_rejects_oversized_words() {
        let mut config = Config::default();
        config.discovery.max_word_len = MAX_WORD_LEN_LIMIT;
        assert!(config.validate().is_ok());

        config.discovery.max_word_len = MAX_WORD_LEN_LIMIT + 1;
        assert_eq!(config.validate(), Err(ConfigError::MaxWordLen(MAX_WORD_LEN_LIMIT + 1)));

        config.discovery.max_word_len = usize::MAX;
        assert_eq!(config.validate(), Err(ConfigError::MaxWordLen(usize::MAX)));
    }

    #[test]
    fn test_validate_rejects_zero_min_count() {
        let mut config = Config::default();
        config.discovery.min_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::MinCount));
    }

    #[test]
    fn test_validate_rejects_negative_entropy() {
        let mut config = Config::default();
        config.discovery.min_entropy = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Threshold { name: "min_entropy", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_pmi() {
        let mut config = Config::default();
        config.discovery.min_pmi = Some(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Threshold { name: "min_pmi", .. })
        ));
    }

    #[test]
    fn test_roots_lists_primary_first() {
        let mut config = Config::default();
        config.dictionary.additional_paths = vec!["extra".to_string()];
        let roots: Vec<&str> = config.dictionary.roots().collect();
        assert_eq!(roots, vec!["dicts", "extra"]);
    }
}
