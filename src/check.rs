//! The check block: a target path plus an optional inline check document.
//!
//! A [`CheckConfiguration`] can only be obtained through [`CheckConfiguration::new`]
//! (or deserialization, which routes through it), so holding one means any
//! inline document it carries is well-formed YAML. The document's meaning in
//! the checks language is never inspected.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigurationError;

/// A check document and the location it is persisted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCheckConfiguration")]
pub struct CheckConfiguration {
    check_document_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    check_document_text: Option<String>,
}

/// Field values as stored, before validation.
#[derive(Deserialize)]
struct RawCheckConfiguration {
    check_document_path: PathBuf,
    #[serde(default)]
    check_document_text: Option<String>,
}

impl TryFrom<RawCheckConfiguration> for CheckConfiguration {
    type Error = ConfigurationError;

    fn try_from(raw: RawCheckConfiguration) -> Result<Self, Self::Error> {
        Self::new(raw.check_document_path, raw.check_document_text)
    }
}

impl CheckConfiguration {
    /// Display name of this block type.
    pub const BLOCK_TYPE_NAME: &'static str = "SodaCL Check";

    /// Build a block, rejecting inline text that does not parse as YAML.
    ///
    /// Empty text is treated like absent text and skips validation. Only the
    /// YAML syntax is checked, so duplicate mapping keys are accepted. The
    /// text is kept exactly as given.
    pub fn new(
        check_document_path: impl Into<PathBuf>,
        check_document_text: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        if let Some(text) = check_document_text.as_deref().filter(|t| !t.is_empty()) {
            serde_yaml::from_str::<serde::de::IgnoredAny>(text)
                .map_err(ConfigurationError::invalid_yaml)?;
        }

        Ok(Self {
            check_document_path: check_document_path.into(),
            check_document_text,
        })
    }

    /// Build a block whose inline text is read from a local document file.
    pub fn from_document_file(
        check_document_path: impl Into<PathBuf>,
        document: &Path,
    ) -> Result<Self> {
        let text = fs::read_to_string(document)
            .with_context(|| format!("Failed to read check document {}", document.display()))?;

        Ok(Self::new(check_document_path, Some(text))?)
    }

    pub fn check_document_path(&self) -> &Path {
        &self.check_document_path
    }

    /// The inline document, or `None` when absent or empty.
    pub fn check_document_text(&self) -> Option<&str> {
        self.check_document_text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// True when [`persist`](Self::persist) would write a file.
    pub fn has_document(&self) -> bool {
        self.check_document_text().is_some() && !self.check_document_path.as_os_str().is_empty()
    }

    /// Write the inline document to the check document path.
    ///
    /// The text is written as a single YAML string scalar, replacing whatever
    /// the file held before. Does nothing when either field is absent or
    /// empty. The parent directory must already exist; I/O failures are
    /// returned as-is.
    pub fn persist(&self) -> io::Result<()> {
        let Some(text) = self.check_document_text() else {
            return Ok(());
        };
        if self.check_document_path.as_os_str().is_empty() {
            return Ok(());
        }

        let encoded = serde_yaml::to_string(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.check_document_path, encoded)
    }
}
