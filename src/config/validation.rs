//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::StoreConfig;
use super::Config;

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.store.validate()
    }
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            anyhow::bail!("store.dir must not be empty");
        }

        if self.extension.is_empty() {
            anyhow::bail!("store.extension must not be empty");
        }

        if self.extension.starts_with('.') {
            anyhow::bail!(
                "store.extension must not start with '.', got '{}'",
                self.extension
            );
        }

        if self.extension.contains(['/', '\\']) {
            anyhow::bail!(
                "store.extension must not contain path separators, got '{}'",
                self.extension
            );
        }

        Ok(())
    }
}
