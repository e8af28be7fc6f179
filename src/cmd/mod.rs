//! Command module structure for checkblock CLI

use anyhow::Result;

use checkblock::config::Config;
use checkblock::repository::FileCheckRepository;

pub mod block;
pub mod init;
pub mod util;

/// Load the merged configuration and open the block store it points at.
pub fn open_repository() -> Result<FileCheckRepository> {
    let config = Config::load()?;
    Ok(FileCheckRepository::from_config(&config))
}
