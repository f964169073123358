use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "discovered_words.json".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        let path = env::var("XINCI_OUTPUT").unwrap_or_else(|_| default_path());
        Self { path }
    }
}
