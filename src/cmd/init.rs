//! Initialize checkblock in a project directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use checkblock::config::Config;
use checkblock::paths::{BLOCKS_DIR, CONFIG_DIR, PROJECT_CONFIG};
use checkblock::ui;

const DEFAULT_CONFIG: &str = "\
# checkblock project configuration
store:
  dir: .checkblock/blocks
  extension: yml
";

/// Create `.checkblock/blocks` and write a default `config.yml`.
///
/// An existing config is kept unless `force` is set, and must still load.
pub fn cmd_init(force: bool) -> Result<()> {
    fs::create_dir_all(BLOCKS_DIR)
        .with_context(|| format!("Failed to create {}", BLOCKS_DIR))?;

    let config_path = Path::new(PROJECT_CONFIG);
    if config_path.exists() && !force {
        Config::load_from(config_path).with_context(|| {
            format!("Existing {} is invalid (use --force to replace it)", PROJECT_CONFIG)
        })?;
        ui::warn(&format!(
            "{} already exists (use --force to overwrite)",
            PROJECT_CONFIG
        ));
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", PROJECT_CONFIG))?;

    ui::success(&format!("Initialized {}", CONFIG_DIR));
    Ok(())
}
