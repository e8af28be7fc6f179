use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::check::CheckConfiguration;
use crate::config::Config;

/// A trait for loading and saving check blocks by name.
pub trait CheckRepository {
    /// Load a block by name. Stored text is validated again on the way in.
    fn load(&self, name: &str) -> Result<CheckConfiguration>;

    /// Store a block under a name, replacing any previous block.
    fn save(&self, name: &str, check: &CheckConfiguration) -> Result<()>;

    /// Remove a stored block.
    fn delete(&self, name: &str) -> Result<()>;

    /// Names of all stored blocks, sorted.
    fn list_names(&self) -> Result<Vec<String>>;
}

/// Block names end up as file names, so keep them to a safe alphabet.
pub fn validate_block_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Block name must not be empty");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        anyhow::bail!(
            "Invalid block name '{}': character '{}' is not allowed (use letters, digits, '-' or '_')",
            name,
            c
        );
    }
    Ok(())
}

/// File-based implementation of CheckRepository.
///
/// Each block lives in `<store_dir>/<name>.<extension>` as a YAML mapping.
pub struct FileCheckRepository {
    store_dir: PathBuf,
    extension: String,
}

impl FileCheckRepository {
    /// Create a new FileCheckRepository for the given store directory.
    pub fn new(store_dir: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            store_dir,
            extension: extension.into(),
        }
    }

    /// Create a repository from the loaded tool configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store.dir.clone(), config.store.extension.clone())
    }

    /// Get the store directory path.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    fn block_path(&self, name: &str) -> PathBuf {
        self.store_dir.join(format!("{}.{}", name, self.extension))
    }
}

impl CheckRepository for FileCheckRepository {
    fn load(&self, name: &str) -> Result<CheckConfiguration> {
        validate_block_name(name)?;
        let path = self.block_path(name);
        if !path.exists() {
            anyhow::bail!("Check block not found: {}", name);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read check block from {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse check block '{}'", name))
    }

    fn save(&self, name: &str, check: &CheckConfiguration) -> Result<()> {
        validate_block_name(name)?;
        fs::create_dir_all(&self.store_dir).with_context(|| {
            format!(
                "Failed to create block store at {}",
                self.store_dir.display()
            )
        })?;

        let content = serde_yaml::to_string(check)?;
        let path = self.block_path(name);
        let tmp_path = path.with_extension(format!("{}.tmp", self.extension));
        fs::write(&tmp_path, &content)
            .with_context(|| format!("Failed to write check block to {}", tmp_path.display()))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e)
                .with_context(|| format!("Failed to save check block to {}", path.display()));
        }
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_block_name(name)?;
        let path = self.block_path(name);
        if !path.exists() {
            anyhow::bail!("Check block not found: {}", name);
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete check block at {}", path.display()))
    }

    fn list_names(&self) -> Result<Vec<String>> {
        if !self.store_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.store_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo(tmp: &TempDir) -> FileCheckRepository {
        FileCheckRepository::new(tmp.path().join("blocks"), "yml")
    }

    fn sample() -> CheckConfiguration {
        CheckConfiguration::new(
            "checks.yml",
            Some("checks for my_table:\n  - row_count > 0".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);

        repo.save("orders", &sample()).unwrap();
        let loaded = repo.load("orders").unwrap();

        assert_eq!(loaded, sample());
        assert!(tmp.path().join("blocks/orders.yml").exists());
        assert!(!tmp.path().join("blocks/orders.yml.tmp").exists());
    }

    #[test]
    fn test_save_replaces_existing_block() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);

        repo.save("orders", &sample()).unwrap();
        let replacement = CheckConfiguration::new("other.yml", None).unwrap();
        repo.save("orders", &replacement).unwrap();

        assert_eq!(repo.load("orders").unwrap(), replacement);
    }

    #[test]
    fn test_load_missing_block() {
        let tmp = TempDir::new().unwrap();
        let err = repo(&tmp).load("missing").unwrap_err();
        assert!(err.to_string().contains("Check block not found: missing"));
    }

    #[test]
    fn test_load_rejects_tampered_block() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);
        fs::create_dir_all(repo.store_dir()).unwrap();
        fs::write(
            repo.store_dir().join("bad.yml"),
            "check_document_path: checks.yml\ncheck_document_text: 'key: [unterminated'\n",
        )
        .unwrap();

        let err = repo.load("bad").unwrap_err();
        assert!(err.to_string().contains("Failed to parse check block 'bad'"));
        assert!(format!("{:#}", err).contains("The provided checks YAML is not valid"));
    }

    #[test]
    fn test_list_names_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);

        repo.save("zeta", &sample()).unwrap();
        repo.save("alpha", &sample()).unwrap();
        fs::write(repo.store_dir().join("notes.txt"), "ignored").unwrap();
        fs::create_dir_all(repo.store_dir().join("nested.yml")).unwrap();

        assert_eq!(repo.list_names().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_names_without_store_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(repo(&tmp).list_names().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);

        repo.save("orders", &sample()).unwrap();
        repo.delete("orders").unwrap();

        assert!(repo.list_names().unwrap().is_empty());
        assert!(repo.delete("orders").is_err());
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);
        // a directory where the block file should go makes the rename fail
        fs::create_dir_all(repo.store_dir().join("orders.yml").join("occupied")).unwrap();

        let err = repo.save("orders", &sample()).unwrap_err();

        assert!(err.to_string().contains("Failed to save check block"));
        assert!(!repo.store_dir().join("orders.yml.tmp").exists());
    }

    #[test]
    fn test_failed_temp_write_names_path() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);
        fs::create_dir_all(repo.store_dir().join("orders.yml.tmp")).unwrap();

        let err = repo.save("orders", &sample()).unwrap_err();
        assert!(err.to_string().contains("orders.yml.tmp"));
    }

    #[test]
    fn test_invalid_block_names() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);

        for name in ["", "../escape", "with space", "a/b", "dot.name"] {
            assert!(repo.save(name, &sample()).is_err(), "name {:?}", name);
        }
        assert!(validate_block_name("orders_2024-daily").is_ok());
    }
}
