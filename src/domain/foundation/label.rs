//! Condition label value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Label naming the sentinel "no condition present" class.
pub const HEALTHY_LABEL: &str = "healthy";

/// A condition label from the classifier's closed vocabulary.
///
/// Labels are stored trimmed and lowercased so that lookups against the
/// knowledge base and comparisons against the healthy sentinel are
/// case-insensitive. The sentinel label [`HEALTHY_LABEL`] is a legal value
/// and marks the absence of a lesion rather than a condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionLabel(String);

impl ConditionLabel {
    /// Creates a label, normalizing case and surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let normalized = raw.into().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self(normalized))
    }

    /// Returns the healthy sentinel label.
    pub fn healthy() -> Self {
        Self(HEALTHY_LABEL.to_string())
    }

    /// True when this label is the healthy sentinel.
    pub fn is_healthy(&self) -> bool {
        self.0 == HEALTHY_LABEL
    }

    /// Returns the normalized label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConditionLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
