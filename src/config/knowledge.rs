//! Knowledge base configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Knowledge base configuration
///
/// With no content directory set, hosts fall back to the built-in demo
/// content set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeConfig {
    /// Directory of `<label>.yaml` condition documents
    #[serde(default)]
    pub content_dir: Option<PathBuf>,
}

impl KnowledgeConfig {
    /// The configured content directory, if any.
    pub fn content_dir(&self) -> Option<&Path> {
        self.content_dir.as_deref()
    }

    /// Validate knowledge configuration
    ///
    /// A missing directory is not checked here; an unreadable store only
    /// degrades interviews at runtime.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(dir) = &self.content_dir {
            if dir.as_os_str().is_empty() {
                return Err(ValidationError::EmptyContentDir);
            }
        }
        Ok(())
    }
}
