//! Interview phase state machine.
//!
//! Defines the lifecycle phases of a diagnostic interview and valid
//! transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle phase of a diagnostic interview.
///
/// Interviews move through these phases from classification to outcome:
/// - `Idle`: candidates known, no question asked yet
/// - `Interviewing`: walking a candidate's question bank
/// - `Resolving`: questioning finished, outcome being computed
/// - `Done`: outcome announced, read-only
/// - `Abandoned`: host cancelled the session before an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    /// Session created from a candidate pair, nothing asked yet.
    #[default]
    Idle,

    /// A candidate's questions are being asked and answered.
    Interviewing,

    /// All questioning exhausted, votes are being resolved.
    Resolving,

    /// Final suggestion announced, interview is read-only.
    Done,

    /// Session cancelled before reaching an outcome.
    Abandoned,
}

impl InterviewPhase {
    /// Returns true if answers can be delivered in this phase.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::Interviewing)
    }

    /// Returns true if the interview is still in flight.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Done | Self::Abandoned)
    }

    /// Returns true if this is a terminal phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Abandoned)
    }
}

impl StateMachine for InterviewPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InterviewPhase::*;
        matches!(
            (self, target),
            // First askable candidate found
            (Idle, Interviewing) |
            // Every candidate was the healthy sentinel, nothing to ask
            (Idle, Resolving) |
            // Question banks exhausted
            (Interviewing, Resolving) |
            // Votes resolved and outcome announced
            (Resolving, Done) |
            // Host cancellation from any non-terminal phase
            (Idle, Abandoned) |
            (Interviewing, Abandoned) |
            (Resolving, Abandoned)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InterviewPhase::*;
        match self {
            Idle => vec![Interviewing, Resolving, Abandoned],
            Interviewing => vec![Resolving, Abandoned],
            Resolving => vec![Done, Abandoned],
            Done => vec![],
            Abandoned => vec![],
        }
    }
}
