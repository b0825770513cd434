//! Knowledge Base Port - Interface to per-condition content.
//!
//! Serves the yes/no question banks used during interviews and the full
//! condition records shown with a final suggestion. Missing content is a
//! normal answer (`Ok(None)`), not an error; sessions degrade gracefully
//! when the knowledge base has gaps.

use async_trait::async_trait;

use crate::domain::foundation::{ConditionLabel, QuestionNumber};
use crate::domain::knowledge::ConditionRecord;

/// Errors that can occur while reading the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Knowledge store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed record for '{label}': {reason}")]
    MalformedRecord { label: ConditionLabel, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl KnowledgeError {
    /// Creates a store unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        KnowledgeError::Unavailable(message.into())
    }

    /// Creates a malformed record error.
    pub fn malformed_record(label: ConditionLabel, reason: impl Into<String>) -> Self {
        KnowledgeError::MalformedRecord {
            label,
            reason: reason.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        KnowledgeError::IoError(message.into())
    }
}

/// Port for condition content lookups
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Fetch one interview question for a condition
    ///
    /// # Arguments
    /// * `label` - The condition whose bank is consulted
    /// * `number` - 1-based position within the bank
    ///
    /// # Returns
    /// The question text, or `None` when the condition has no such question
    ///
    /// # Errors
    /// Returns `KnowledgeError` only for store failures, never for gaps
    async fn fetch_question(
        &self,
        label: &ConditionLabel,
        number: QuestionNumber,
    ) -> Result<Option<String>, KnowledgeError>;

    /// Fetch the full record for a condition
    ///
    /// # Arguments
    /// * `label` - The condition to look up
    ///
    /// # Returns
    /// The condition record, or `None` when the condition is unknown
    ///
    /// # Errors
    /// Returns `KnowledgeError` only for store failures, never for gaps
    async fn fetch_record(
        &self,
        label: &ConditionLabel,
    ) -> Result<Option<ConditionRecord>, KnowledgeError>;
}
