//! Interview engine.
//!
//! A pure reducer over [`InterviewSession`]: each applied event mutates the
//! session and returns the effects the shell must carry out. The engine
//! never performs I/O and never awaits; fetching question text and talking
//! to the user happen wherever the effects are interpreted.
//!
//! Protocol, per session:
//!
//! 1. `Started` begins the walk. The first non-healthy candidate gets a
//!    `PoseQuestion` effect; if both candidates are the healthy sentinel
//!    the session resolves immediately.
//! 2. The shell fetches the question text and, once it is on screen, feeds
//!    back `QuestionPresented`. Only then are answers accepted; anything
//!    arriving earlier is dropped as a duplicate tap.
//! 3. Each `Answered` closes the answer window, credits a vote on "yes",
//!    and either poses the candidate's next question, moves to the next
//!    non-healthy candidate, or resolves.
//! 4. `QuestionUnavailable` exhausts the current candidate early with the
//!    votes collected so far; the walk continues, never blocks.

use crate::domain::classification::{CandidateSet, CandidateSlot};
use crate::domain::diagnosis::DiagnosisResolver;
use crate::domain::foundation::{DomainError, ErrorCode, QuestionNumber, StateMachine};

use super::events::{InterviewEffect, InterviewEvent};
use super::phase::InterviewPhase;
use super::session::InterviewSession;

/// Pure state-machine reducer driving diagnostic interviews.
#[derive(Debug, Clone, Default)]
pub struct InterviewEngine {
    resolver: DiagnosisResolver,
}

impl InterviewEngine {
    /// Creates an engine with the default resolution policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an explicit resolution policy.
    pub fn with_resolver(resolver: DiagnosisResolver) -> Self {
        Self { resolver }
    }

    /// The resolution policy in use.
    pub fn resolver(&self) -> &DiagnosisResolver {
        &self.resolver
    }

    /// Applies one event to the session and returns the effects to run.
    ///
    /// Late deliveries are tolerated where the outside world can race the
    /// session (answers, presentation acks, and cancellations against an
    /// already-terminal session are silent no-ops). Protocol violations
    /// that only a mis-wired shell can produce are errors.
    pub fn apply(
        &self,
        session: &mut InterviewSession,
        event: InterviewEvent,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        match event {
            InterviewEvent::Started => self.start(session),
            InterviewEvent::QuestionPresented => Self::on_question_presented(session),
            InterviewEvent::Answered(answer) => self.on_answered(session, answer),
            InterviewEvent::QuestionUnavailable => self.on_question_unavailable(session),
            InterviewEvent::Abandoned => Self::on_abandoned(session),
        }
    }

    fn start(&self, session: &mut InterviewSession) -> Result<Vec<InterviewEffect>, DomainError> {
        if session.phase() != InterviewPhase::Idle {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Session already started (phase {:?})", session.phase()),
            ));
        }
        match Self::next_askable(session.candidates(), None) {
            Some(slot) => Self::pose_first_question(session, slot),
            None => self.resolve_now(session),
        }
    }

    fn on_question_presented(
        session: &mut InterviewSession,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        if session.phase().is_terminal() {
            // Presentation ack racing a cancellation; nothing to do.
            return Ok(Vec::new());
        }
        session.mark_question_presented()?;
        Ok(Vec::new())
    }

    fn on_answered(
        &self,
        session: &mut InterviewSession,
        answer: super::events::Answer,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        if !session.awaiting_answer() {
            // Duplicate tap or an answer ahead of the presentation ack.
            return Ok(Vec::new());
        }
        session.record_answer(answer)?;
        let cursor = session.cursor().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                "Answer recorded without a question cursor",
            )
        })?;
        match cursor.question().next() {
            Some(number) => {
                session.advance_to_question(number)?;
                Ok(vec![InterviewEffect::PoseQuestion {
                    slot: cursor.slot(),
                    number,
                }])
            }
            None => self.advance_past(session, cursor.slot()),
        }
    }

    fn on_question_unavailable(
        &self,
        session: &mut InterviewSession,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        if session.phase().is_terminal() {
            return Ok(Vec::new());
        }
        let cursor = session.cursor().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No candidate is under interview",
            )
        })?;
        self.advance_past(session, cursor.slot())
    }

    fn on_abandoned(session: &mut InterviewSession) -> Result<Vec<InterviewEffect>, DomainError> {
        if session.phase().is_terminal() {
            // Duplicate cancellation; keep it idempotent.
            return Ok(Vec::new());
        }
        session.abandon()?;
        Ok(Vec::new())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Walk helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves past an exhausted candidate: next non-healthy candidate, or
    /// resolution when none remain.
    fn advance_past(
        &self,
        session: &mut InterviewSession,
        exhausted: CandidateSlot,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        match Self::next_askable(session.candidates(), Some(exhausted)) {
            Some(slot) => Self::pose_first_question(session, slot),
            None => self.resolve_now(session),
        }
    }

    fn pose_first_question(
        session: &mut InterviewSession,
        slot: CandidateSlot,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        session.begin_candidate(slot)?;
        Ok(vec![InterviewEffect::PoseQuestion {
            slot,
            number: QuestionNumber::FIRST,
        }])
    }

    /// Finds the next interviewable candidate in rank order, skipping the
    /// healthy sentinel.
    fn next_askable(candidates: &CandidateSet, after: Option<CandidateSlot>) -> Option<CandidateSlot> {
        let mut slot = match after {
            None => Some(CandidateSlot::First),
            Some(s) => s.next(),
        };
        while let Some(s) = slot {
            if !candidates.get(s).is_healthy() {
                return Some(s);
            }
            slot = s.next();
        }
        None
    }

    fn resolve_now(
        &self,
        session: &mut InterviewSession,
    ) -> Result<Vec<InterviewEffect>, DomainError> {
        session.start_resolution()?;
        let diagnosis = self.resolver.resolve(session.candidates(), session.votes());
        session.complete(diagnosis.clone())?;
        Ok(vec![InterviewEffect::AnnounceDiagnosis { diagnosis }])
    }
}
