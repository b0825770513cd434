//! Single classifier prediction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Confidence, ConditionLabel};

/// One entry of a classifier ranking: a condition label and the
/// classifier's confidence in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePrediction {
    pub label: ConditionLabel,
    pub confidence: Confidence,
}

impl CandidatePrediction {
    /// Creates a prediction from an already-validated label and score.
    pub fn new(label: ConditionLabel, confidence: Confidence) -> Self {
        Self { label, confidence }
    }

    /// True when this prediction names the healthy sentinel.
    pub fn is_healthy(&self) -> bool {
        self.label.is_healthy()
    }
}

impl fmt::Display for CandidatePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.confidence)
    }
}
