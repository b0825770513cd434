//! File-based Knowledge Base Adapter
//!
//! Reads one YAML document per condition from a content directory:
//! `<dir>/<label>.yaml`. A missing file is a content gap (`Ok(None)`);
//! unreadable or malformed files are adapter errors, which the
//! application shell degrades into skipped questions.
//!
//! # Document format
//!
//! ```yaml
//! description: Acne is a common skin condition...
//! causes:
//!   - Excess oil production in the skin
//! symptoms:
//!   - Pimples, blackheads or whiteheads
//! treatment:
//!   - Wash the affected area gently twice a day
//! questions:
//!   - "Do you see pimples, blackheads or whiteheads on the area?"
//!   - "Is the affected skin oily to the touch?"
//!   - "Is the area on your face, chest or upper back?"
//!   - "Did the spots appear gradually rather than overnight?"
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{ConditionLabel, QuestionNumber};
use crate::domain::knowledge::ConditionRecord;
use crate::ports::{KnowledgeBase, KnowledgeError};

/// Knowledge base backed by a directory of YAML documents.
#[derive(Debug, Clone)]
pub struct FileKnowledgeBase {
    content_dir: PathBuf,
}

impl FileKnowledgeBase {
    /// Creates a knowledge base over a content directory.
    ///
    /// # Arguments
    /// * `content_dir` - Directory holding one `<label>.yaml` per condition
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for a condition.
    ///
    /// Labels never name anything outside the content directory; a label
    /// with path syntax resolves to no document at all.
    fn record_path(&self, label: &ConditionLabel) -> Option<PathBuf> {
        let name = label.as_str();
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return None;
        }
        Some(self.content_dir.join(format!("{name}.yaml")))
    }

    async fn read_record(
        &self,
        label: &ConditionLabel,
    ) -> Result<Option<ConditionRecord>, KnowledgeError> {
        let path = match self.record_path(label) {
            Some(path) => path,
            None => return Ok(None),
        };

        if !path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| KnowledgeError::io(e.to_string()))?;

        let record = serde_yaml::from_str(&yaml)
            .map_err(|e| KnowledgeError::malformed_record(label.clone(), e.to_string()))?;

        Ok(Some(record))
    }
}

#[async_trait]
impl KnowledgeBase for FileKnowledgeBase {
    async fn fetch_question(
        &self,
        label: &ConditionLabel,
        number: QuestionNumber,
    ) -> Result<Option<String>, KnowledgeError> {
        // An empty bank entry counts as missing content.
        Ok(self
            .read_record(label)
            .await?
            .map(|record| record.question(number).to_string())
            .filter(|text| !text.is_empty()))
    }

    async fn fetch_record(
        &self,
        label: &ConditionLabel,
    ) -> Result<Option<ConditionRecord>, KnowledgeError> {
        self.read_record(label).await
    }
}
