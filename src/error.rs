//! Error raised when a check block is built from invalid input.

use std::fmt;

/// The inline check document is not well-formed YAML.
///
/// Carries the parser error so callers can inspect line and column
/// information through [`std::error::Error::source`].
#[derive(Debug)]
pub struct ConfigurationError {
    source: serde_yaml::Error,
}

impl ConfigurationError {
    pub(crate) fn invalid_yaml(source: serde_yaml::Error) -> Self {
        Self { source }
    }

    /// Location of the parse failure, if the parser reported one.
    pub fn location(&self) -> Option<serde_yaml::Location> {
        self.source.location()
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The provided checks YAML is not valid. Error is: {}",
            self.source
        )
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
