//! `linkdispatch config` – show where the config lives and what it contains.

use anyhow::Result;
use linkdispatch_core::config::{self, LinkConfig};

pub fn run_config(cfg: &LinkConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
