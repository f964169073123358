use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use xinci_config::Config;

use crate::cli::Args;

/// Load a JSON profile; missing fields take their defaults
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading profile: {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open profile {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(config)
}

/// Environment (or profile), then command-line overrides, then validation
pub fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.profile {
        Some(path) => load_profile(path)?,
        None => Config::new(),
    };

    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
