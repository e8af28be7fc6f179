//! # checkblock
//!
//! Validated check-document blocks for data-quality scans.
//!
//! A check block pairs a target path with an optional inline document written
//! in a YAML-based checks language. The document is checked for YAML
//! well-formedness when the block is built, and can later be written to the
//! target path for a scan engine to pick up.
//!
//! ## Modules
//!
//! - [`check`] - The check block and its persistence
//! - [`error`] - Error raised for malformed inline documents
//! - [`repository`] - Named storage for blocks
//! - [`config`] - Tool configuration
//! - [`ui`] - Terminal output helpers
//!
//! ## Example
//!
//! ```no_run
//! use checkblock::check::CheckConfiguration;
//!
//! let check = CheckConfiguration::new(
//!     "checks.yml",
//!     Some("checks for my_table:\n  - row_count > 0".to_string()),
//! )
//! .expect("document is valid YAML");
//!
//! check.persist().expect("Failed to write checks.yml");
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod repository;
pub mod ui;

pub use check::CheckConfiguration;
pub use error::ConfigurationError;

/// Default path constants for the checkblock directory structure.
pub mod paths {
    /// Directory holding project state: `.checkblock`
    pub const CONFIG_DIR: &str = ".checkblock";
    /// Project configuration file: `.checkblock/config.yml`
    pub const PROJECT_CONFIG: &str = ".checkblock/config.yml";
    /// Directory containing stored blocks: `.checkblock/blocks`
    pub const BLOCKS_DIR: &str = ".checkblock/blocks";
}
