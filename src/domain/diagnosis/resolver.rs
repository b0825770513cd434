//! Diagnosis resolver - turns a finished vote tally into a final suggestion.

use serde::{Deserialize, Serialize};

use crate::domain::classification::{CandidateSet, CandidateSlot};
use crate::domain::foundation::{ConditionLabel, QUESTION_BANK_SIZE};
use crate::domain::interview::VoteTally;

/// The final outcome of a diagnostic interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Diagnosis {
    /// A specific condition is suggested.
    Condition { label: ConditionLabel },

    /// No lesion detected: the healthy reading stands.
    NoLesionDetected,
}

impl Diagnosis {
    /// Creates a condition suggestion.
    pub fn condition(label: ConditionLabel) -> Self {
        Self::Condition { label }
    }

    /// The suggested condition label, if any.
    pub fn label(&self) -> Option<&ConditionLabel> {
        match self {
            Self::Condition { label } => Some(label),
            Self::NoLesionDetected => None,
        }
    }

    /// True for the "no lesion detected" outcome.
    pub fn is_no_lesion(&self) -> bool {
        matches!(self, Self::NoLesionDetected)
    }
}

/// Resolves final suggestions from candidate pairs and vote tallies.
///
/// The resolver is pure and deterministic: the same candidates and votes
/// always produce the same diagnosis, with no dependence on how or when
/// the votes were collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisResolver {
    confirmation_threshold: u8,
}

impl Default for DiagnosisResolver {
    /// Strict-majority cut of the four-question bank: a condition facing
    /// the healthy sentinel needs more than 2 votes to be suggested.
    fn default() -> Self {
        Self {
            confirmation_threshold: (QUESTION_BANK_SIZE / 2) as u8,
        }
    }
}

impl DiagnosisResolver {
    /// Creates a resolver with an explicit confirmation threshold.
    ///
    /// The threshold only matters when one candidate is the healthy
    /// sentinel: the other candidate must collect strictly more votes than
    /// the threshold to be suggested.
    pub fn with_threshold(confirmation_threshold: u8) -> Self {
        Self {
            confirmation_threshold,
        }
    }

    /// The configured confirmation threshold.
    pub fn confirmation_threshold(&self) -> u8 {
        self.confirmation_threshold
    }

    /// Resolves the final diagnosis.
    ///
    /// # Algorithm
    /// - Healthy sentinel present: the non-healthy candidate is suggested
    ///   only with strictly more votes than the confirmation threshold;
    ///   otherwise the outcome is no lesion detected.
    /// - No sentinel: the candidate with more votes is suggested.
    /// - Tie: the first slot wins, favoring the classifier's top-1.
    ///
    /// # Edge Cases
    /// - Both candidates healthy: no lesion detected (a healthy slot never
    ///   collects votes, so the threshold can never be cleared).
    /// - All-zero tally over two conditions: tie, first slot suggested.
    pub fn resolve(&self, candidates: &CandidateSet, votes: &VoteTally) -> Diagnosis {
        if let Some(healthy) = candidates.healthy_slot() {
            let contender = healthy.other();
            if candidates.get(contender).is_healthy() {
                return Diagnosis::NoLesionDetected;
            }
            if votes.get(contender) > self.confirmation_threshold {
                return Diagnosis::condition(candidates.label(contender).clone());
            }
            return Diagnosis::NoLesionDetected;
        }

        let winner = votes.leader().unwrap_or(CandidateSlot::First);
        Diagnosis::condition(candidates.label(winner).clone())
    }
}
