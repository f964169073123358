use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_root() -> String {
    "dicts".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Known-word root directory
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default)]
    pub additional_paths: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            root: default_root(),
            additional_paths: vec![],
            extensions: default_extensions(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let root = env::var("XINCI_DICT_DIR").unwrap_or_else(|_| default_root());

        Self {
            root,
            ..Self::default()
        }
    }

    /// Every configured root, primary first
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.root.as_str()).chain(self.additional_paths.iter().map(String::as_str))
    }
}
