//! Per-candidate vote tally.

use serde::{Deserialize, Serialize};

use crate::domain::classification::CandidateSlot;

/// Count of "yes" answers credited to each candidate slot.
///
/// A "yes" answer to a candidate's question adds one vote to that slot;
/// "no" answers add nothing. The healthy sentinel is never interviewed, so
/// its slot stays at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VoteTally {
    first: u8,
    second: u8,
}

impl VoteTally {
    /// A fresh tally with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tally from explicit counts.
    pub fn from_counts(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Adds one vote to the given slot.
    pub fn record_yes(&mut self, slot: CandidateSlot) {
        match slot {
            CandidateSlot::First => self.first += 1,
            CandidateSlot::Second => self.second += 1,
        }
    }

    /// Votes credited to the given slot.
    pub fn get(&self, slot: CandidateSlot) -> u8 {
        match slot {
            CandidateSlot::First => self.first,
            CandidateSlot::Second => self.second,
        }
    }

    /// The slot with strictly more votes, or None on a tie.
    pub fn leader(&self) -> Option<CandidateSlot> {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(CandidateSlot::First),
            std::cmp::Ordering::Less => Some(CandidateSlot::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Total votes across both slots.
    pub fn total(&self) -> u8 {
        self.first + self.second
    }
}
