//! Ranked pair of candidate conditions under disambiguation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionLabel, DomainError};

use super::prediction::CandidatePrediction;

/// Position within a [`CandidateSet`].
///
/// The interview engine and the vote tally address candidates through this
/// two-value index instead of raw integers, so an out-of-bounds candidate
/// reference cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSlot {
    /// The classifier's top-1 prediction.
    First,
    /// The classifier's top-2 prediction.
    Second,
}

impl CandidateSlot {
    /// Both slots in rank order.
    pub const ALL: [CandidateSlot; 2] = [CandidateSlot::First, CandidateSlot::Second];

    /// Zero-based rank of this slot.
    pub fn index(&self) -> usize {
        match self {
            CandidateSlot::First => 0,
            CandidateSlot::Second => 1,
        }
    }

    /// The other slot of the pair.
    pub fn other(&self) -> Self {
        match self {
            CandidateSlot::First => CandidateSlot::Second,
            CandidateSlot::Second => CandidateSlot::First,
        }
    }

    /// The slot following this one in rank order, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            CandidateSlot::First => Some(CandidateSlot::Second),
            CandidateSlot::Second => None,
        }
    }
}

/// The top-2 classifier predictions, ranked by descending confidence.
///
/// # Invariants
///
/// - Always holds exactly two predictions.
/// - `first` has confidence greater than or equal to `second`.
/// - Equal confidences keep the classifier's own ordering (stable rank).
///
/// The two labels are not required to be distinct, and either or both may
/// be the healthy sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    first: CandidatePrediction,
    second: CandidatePrediction,
}

impl CandidateSet {
    /// Builds the set from a classifier ranking.
    ///
    /// Predictions are ranked by descending confidence (stable, so equal
    /// scores keep their incoming order) and the top two are kept. Fewer
    /// than two predictions is a wiring bug in the classifier integration
    /// and fails fast with a contract violation.
    pub fn from_predictions(
        mut predictions: Vec<CandidatePrediction>,
    ) -> Result<Self, DomainError> {
        if predictions.len() < 2 {
            return Err(DomainError::contract_violation(
                "classifier ranking must contain at least two candidates",
            )
            .with_detail("candidate_count", predictions.len().to_string()));
        }
        predictions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        let mut iter = predictions.into_iter();
        let first = iter.next().ok_or_else(Self::missing_candidate)?;
        let second = iter.next().ok_or_else(Self::missing_candidate)?;
        Ok(Self { first, second })
    }

    // Unreachable after the length check; kept so construction never panics.
    fn missing_candidate() -> DomainError {
        DomainError::contract_violation("classifier ranking ended before two candidates")
    }

    /// Returns the prediction in the given slot.
    pub fn get(&self, slot: CandidateSlot) -> &CandidatePrediction {
        match slot {
            CandidateSlot::First => &self.first,
            CandidateSlot::Second => &self.second,
        }
    }

    /// The top-1 prediction.
    pub fn first(&self) -> &CandidatePrediction {
        &self.first
    }

    /// The top-2 prediction.
    pub fn second(&self) -> &CandidatePrediction {
        &self.second
    }

    /// Label of the prediction in the given slot.
    pub fn label(&self, slot: CandidateSlot) -> &ConditionLabel {
        &self.get(slot).label
    }

    /// The slot holding the healthy sentinel, if present.
    ///
    /// When both candidates are healthy the first slot is reported; the
    /// distinction never matters because neither slot is interviewed.
    pub fn healthy_slot(&self) -> Option<CandidateSlot> {
        CandidateSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot).is_healthy())
    }

    /// True when either candidate is the healthy sentinel.
    pub fn contains_healthy(&self) -> bool {
        self.healthy_slot().is_some()
    }
}
