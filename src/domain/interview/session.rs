//! Interview session aggregate.
//!
//! A session owns every piece of mutable state for one disambiguation run:
//! the candidate pair, the vote tally, the question cursor, and the debounce
//! flag. Sessions never share state, so two interviews can run concurrently
//! without coordination.

use serde::{Deserialize, Serialize};

use crate::domain::classification::{CandidateSet, CandidateSlot};
use crate::domain::diagnosis::Diagnosis;
use crate::domain::foundation::{
    DomainError, ErrorCode, InterviewId, QuestionNumber, StateMachine, Timestamp,
};

use super::events::Answer;
use super::phase::InterviewPhase;
use super::tally::VoteTally;

/// Position within the question walk: which candidate is under interview
/// and which bank question is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewCursor {
    slot: CandidateSlot,
    question: QuestionNumber,
}

impl InterviewCursor {
    /// The candidate under interview.
    pub fn slot(&self) -> CandidateSlot {
        self.slot
    }

    /// The current question number.
    pub fn question(&self) -> QuestionNumber {
        self.question
    }
}

/// Interview session aggregate - one disambiguation run over a candidate pair.
///
/// # Invariants
///
/// - `cursor` is Some exactly while the phase is `Interviewing`
/// - `awaiting_answer` is only true while the phase is `Interviewing`
/// - a healthy-sentinel candidate is never placed under the cursor and
///   never accumulates votes
/// - `outcome` is Some exactly once the phase is `Done`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    /// Unique identifier for this session.
    id: InterviewId,

    /// The ranked candidate pair under disambiguation.
    candidates: CandidateSet,

    /// "Yes" votes collected per candidate slot.
    votes: VoteTally,

    /// Current lifecycle phase.
    phase: InterviewPhase,

    /// Question position while interviewing, None otherwise.
    cursor: Option<InterviewCursor>,

    /// True while a presented question waits for its answer. Answers
    /// arriving while false are dropped by the engine.
    awaiting_answer: bool,

    /// Final diagnosis once resolved.
    outcome: Option<Diagnosis>,

    /// When the session was created.
    started_at: Timestamp,

    /// When the session last changed.
    updated_at: Timestamp,
}

impl InterviewSession {
    /// Creates a fresh session over a validated candidate pair.
    pub fn new(candidates: CandidateSet) -> Self {
        let now = Timestamp::now();
        Self {
            id: InterviewId::new(),
            candidates,
            votes: VoteTally::new(),
            phase: InterviewPhase::Idle,
            cursor: None,
            awaiting_answer: false,
            outcome: None,
            started_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &InterviewId {
        &self.id
    }

    /// Returns the candidate pair.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Returns the vote tally.
    pub fn votes(&self) -> &VoteTally {
        &self.votes
    }

    /// Returns the current phase.
    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    /// Returns the question cursor while interviewing.
    pub fn cursor(&self) -> Option<InterviewCursor> {
        self.cursor
    }

    /// True while a presented question waits for its answer.
    pub fn awaiting_answer(&self) -> bool {
        self.awaiting_answer
    }

    /// Returns the final diagnosis once the session is done.
    pub fn outcome(&self) -> Option<&Diagnosis> {
        self.outcome.as_ref()
    }

    /// Returns when the session was created.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the session last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Puts the given candidate under interview, starting at its first
    /// bank question.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the phase is not Idle or Interviewing,
    ///   or if the slot holds the healthy sentinel
    pub fn begin_candidate(&mut self, slot: CandidateSlot) -> Result<(), DomainError> {
        if self.candidates.get(slot).is_healthy() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "The healthy sentinel is never interviewed",
            ));
        }
        match self.phase {
            InterviewPhase::Idle => {
                self.transition_phase(InterviewPhase::Interviewing)?;
            }
            InterviewPhase::Interviewing => {}
            other => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Cannot begin a candidate while {:?}", other),
                ));
            }
        }
        self.cursor = Some(InterviewCursor {
            slot,
            question: QuestionNumber::FIRST,
        });
        self.awaiting_answer = false;
        self.touch();
        Ok(())
    }

    /// Marks the current question as presented, opening the answer window.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no question is under the cursor
    pub fn mark_question_presented(&mut self) -> Result<(), DomainError> {
        if self.cursor.is_none() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No question is pending presentation",
            ));
        }
        self.awaiting_answer = true;
        self.touch();
        Ok(())
    }

    /// Records an answer to the presented question and closes the answer
    /// window. A "yes" credits one vote to the candidate under interview.
    ///
    /// # Errors
    ///
    /// - `NotAwaitingAnswer` if no presented question is waiting
    pub fn record_answer(&mut self, answer: Answer) -> Result<(), DomainError> {
        if !self.awaiting_answer {
            return Err(DomainError::new(
                ErrorCode::NotAwaitingAnswer,
                "No presented question is awaiting an answer",
            ));
        }
        let cursor = self.cursor.ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Answer window open without a cursor",
            )
        })?;
        if answer.is_yes() {
            self.votes.record_yes(cursor.slot);
        }
        self.awaiting_answer = false;
        self.touch();
        Ok(())
    }

    /// Moves the cursor to a later question of the current candidate.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if not interviewing, if the answer window
    ///   is still open, or if the target does not advance the cursor
    pub fn advance_to_question(&mut self, number: QuestionNumber) -> Result<(), DomainError> {
        let cursor = self.cursor.ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No candidate is under interview",
            )
        })?;
        if self.awaiting_answer {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot advance past an unanswered question",
            ));
        }
        if number <= cursor.question {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Question {} does not advance the cursor past {}",
                    number, cursor.question
                ),
            ));
        }
        self.cursor = Some(InterviewCursor {
            slot: cursor.slot,
            question: number,
        });
        self.touch();
        Ok(())
    }

    /// Ends questioning and enters resolution.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if resolution cannot start from the
    ///   current phase
    pub fn start_resolution(&mut self) -> Result<(), DomainError> {
        self.transition_phase(InterviewPhase::Resolving)?;
        self.cursor = None;
        self.awaiting_answer = false;
        self.touch();
        Ok(())
    }

    /// Stores the resolved diagnosis and finishes the session.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the phase is Resolving
    pub fn complete(&mut self, diagnosis: Diagnosis) -> Result<(), DomainError> {
        self.transition_phase(InterviewPhase::Done)?;
        self.outcome = Some(diagnosis);
        self.touch();
        Ok(())
    }

    /// Cancels the session before an outcome.
    ///
    /// # Errors
    ///
    /// - `InterviewFinished` if the session already reached a terminal phase
    pub fn abandon(&mut self) -> Result<(), DomainError> {
        if self.phase.is_terminal() {
            return Err(DomainError::new(
                ErrorCode::InterviewFinished,
                "Session already reached a terminal phase",
            ));
        }
        self.transition_phase(InterviewPhase::Abandoned)?;
        self.cursor = None;
        self.awaiting_answer = false;
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to a new phase using the state machine.
    fn transition_phase(&mut self, target: InterviewPhase) -> Result<(), DomainError> {
        self.phase = self.phase.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot transition interview from {:?} to {:?}",
                    self.phase, target
                ),
            )
        })?;
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
