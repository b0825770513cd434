//! Interview reducer inputs and outputs.
//!
//! The engine consumes [`InterviewEvent`]s and emits [`InterviewEffect`]s;
//! everything asynchronous (question lookups, presentation) happens in the
//! application shell that interprets the effects.

use serde::{Deserialize, Serialize};

use crate::domain::classification::CandidateSlot;
use crate::domain::diagnosis::Diagnosis;
use crate::domain::foundation::QuestionNumber;

/// A user's reply to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// True for a "yes" reply.
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Something that happened to an interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewEvent {
    /// The session should begin questioning (or resolve immediately when
    /// there is nothing to ask).
    Started,

    /// The shell confirmed the posed question is in front of the user.
    /// Until this arrives, incoming answers are dropped.
    QuestionPresented,

    /// The user answered the question on display.
    Answered(Answer),

    /// The knowledge base had no text for the posed question; the current
    /// candidate is exhausted with the votes collected so far.
    QuestionUnavailable,

    /// The host cancelled the session.
    Abandoned,
}

/// Work the shell must carry out after an event is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewEffect {
    /// Fetch and present the numbered question of the given candidate.
    PoseQuestion {
        slot: CandidateSlot,
        number: QuestionNumber,
    },

    /// Present the final outcome.
    AnnounceDiagnosis { diagnosis: Diagnosis },
}
