//! In-memory Knowledge Base Adapter
//!
//! Serves condition records from a plain map. `builtin()` loads the demo
//! content set so the crate works end to end without any external
//! content; `with_record` seeds arbitrary content for tests.

use async_trait::async_trait;
use std::collections::HashMap;

use super::builtin::demo_records;
use crate::domain::foundation::{ConditionLabel, QuestionNumber};
use crate::domain::knowledge::ConditionRecord;
use crate::ports::{KnowledgeBase, KnowledgeError};

/// Knowledge base backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct StaticKnowledgeBase {
    records: HashMap<String, ConditionRecord>,
}

impl StaticKnowledgeBase {
    /// Creates an empty knowledge base.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Creates a knowledge base loaded with the built-in demo content.
    pub fn builtin() -> Self {
        Self {
            records: demo_records().clone(),
        }
    }

    /// Adds or replaces the record for a condition.
    pub fn with_record(mut self, label: ConditionLabel, record: ConditionRecord) -> Self {
        self.records.insert(label.as_str().to_string(), record);
        self
    }

    /// Number of conditions with content.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[async_trait]
impl KnowledgeBase for StaticKnowledgeBase {
    async fn fetch_question(
        &self,
        label: &ConditionLabel,
        number: QuestionNumber,
    ) -> Result<Option<String>, KnowledgeError> {
        // An empty bank entry counts as missing content.
        Ok(self
            .records
            .get(label.as_str())
            .map(|record| record.question(number))
            .filter(|text| !text.is_empty())
            .map(str::to_string))
    }

    async fn fetch_record(
        &self,
        label: &ConditionLabel,
    ) -> Result<Option<ConditionRecord>, KnowledgeError> {
        Ok(self.records.get(label.as_str()).cloned())
    }
}
