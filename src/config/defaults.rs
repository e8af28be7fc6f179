//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths::BLOCKS_DIR;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_store_dir, PathBuf, PathBuf::from(BLOCKS_DIR));
default_fn!(default_extension, String, "yml".to_string());

/// Where named check blocks are kept
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one file per block (default: .checkblock/blocks)
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
    /// File extension for stored blocks, without the dot (default: yml)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            extension: default_extension(),
        }
    }
}
