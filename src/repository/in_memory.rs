use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::check::CheckConfiguration;

use super::check_repository::{validate_block_name, CheckRepository};

/// In-memory implementation of CheckRepository for testing.
#[derive(Default)]
pub struct InMemoryCheckRepository {
    blocks: RefCell<BTreeMap<String, CheckConfiguration>>,
}

impl InMemoryCheckRepository {
    /// Create a new empty InMemoryCheckRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new InMemoryCheckRepository with pre-populated blocks.
    pub fn with_blocks(blocks: Vec<(String, CheckConfiguration)>) -> Self {
        Self {
            blocks: RefCell::new(blocks.into_iter().collect()),
        }
    }
}

impl CheckRepository for InMemoryCheckRepository {
    fn load(&self, name: &str) -> Result<CheckConfiguration> {
        validate_block_name(name)?;
        self.blocks
            .borrow()
            .get(name)
            .cloned()
            .context(format!("Check block not found: {}", name))
    }

    fn save(&self, name: &str, check: &CheckConfiguration) -> Result<()> {
        validate_block_name(name)?;
        self.blocks
            .borrow_mut()
            .insert(name.to_string(), check.clone());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_block_name(name)?;
        self.blocks
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .context(format!("Check block not found: {}", name))
    }

    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.blocks.borrow().keys().cloned().collect())
    }
}
