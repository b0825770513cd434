//! InterviewService - the asynchronous shell around the interview engine.
//!
//! Owns the session registry, calls the classifier once per interview, and
//! interprets the engine's effects against the knowledge-base and presenter
//! ports. Degradation policy lives here: knowledge-base failures become
//! `QuestionUnavailable` events fed back into the engine, never aborted
//! sessions.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::classification::{CandidateSet, LesionImage};
use crate::domain::diagnosis::Diagnosis;
use crate::domain::foundation::{DomainError, InterviewId};
use crate::domain::interview::{
    Answer, InterviewEffect, InterviewEngine, InterviewEvent, InterviewPhase, InterviewSession,
};
use crate::ports::{
    ClassifierError, KnowledgeBase, LesionClassifier, PresenterError, SessionPresenter,
};

/// Errors surfaced by the interview service.
///
/// Knowledge-base failures are deliberately absent. The service degrades
/// them into skipped questions or a no-lesion presentation instead of
/// failing the interview.
#[derive(Debug, Error)]
pub enum InterviewServiceError {
    /// The classifier could not produce a ranking for the image.
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Output could not be delivered to the user.
    #[error("Presenter error: {0}")]
    Presenter(#[from] PresenterError),

    /// No live session with this id.
    #[error("Interview not found: {0}")]
    NotFound(InterviewId),

    /// Domain rule violation, including malformed classifier output.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Snapshot returned when an interview starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartedInterview {
    /// Handle for subsequent `answer`/`abandon` calls.
    pub id: InterviewId,
    /// `Interviewing` when a question is on display, `Done` when the
    /// session resolved without asking anything.
    pub phase: InterviewPhase,
}

/// What became of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was counted; the session is now in this phase.
    Recorded { phase: InterviewPhase },
    /// No question was awaiting an answer, so the reply was ignored.
    Dropped,
}

/// Drives diagnostic interviews from classification to outcome.
///
/// One instance serves many concurrent interviews. Sessions are kept in
/// memory only; a completed or abandoned interview disappears from the
/// registry and its id stops resolving.
pub struct InterviewService<C, K, P>
where
    C: LesionClassifier,
    K: KnowledgeBase,
    P: SessionPresenter,
{
    classifier: Arc<C>,
    knowledge: Arc<K>,
    presenter: Arc<P>,
    engine: InterviewEngine,
    sessions: RwLock<HashMap<InterviewId, InterviewSession>>,
}

impl<C, K, P> InterviewService<C, K, P>
where
    C: LesionClassifier + 'static,
    K: KnowledgeBase + 'static,
    P: SessionPresenter + 'static,
{
    /// Creates a service with the default engine tuning.
    pub fn new(classifier: Arc<C>, knowledge: Arc<K>, presenter: Arc<P>) -> Self {
        Self::with_engine(classifier, knowledge, presenter, InterviewEngine::default())
    }

    /// Creates a service around a pre-configured engine.
    pub fn with_engine(
        classifier: Arc<C>,
        knowledge: Arc<K>,
        presenter: Arc<P>,
        engine: InterviewEngine,
    ) -> Self {
        Self {
            classifier,
            knowledge,
            presenter,
            engine,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of interviews currently in flight.
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Starts an interview for a lesion image.
    ///
    /// Classifies the image, builds the candidate pair, and runs the
    /// session until it suspends on its first question or resolves
    /// immediately (both candidates healthy).
    pub async fn start(&self, image: LesionImage) -> Result<StartedInterview, InterviewServiceError> {
        let predictions = self.classifier.classify(&image).await?;
        let candidates = CandidateSet::from_predictions(predictions)?;

        let mut session = InterviewSession::new(candidates);
        let id = *session.id();
        info!(
            interview = %id,
            first = %session.candidates().first(),
            second = %session.candidates().second(),
            "Interview started"
        );

        let effects = self.engine.apply(&mut session, InterviewEvent::Started)?;
        self.run_effects(&mut session, effects).await?;

        let phase = session.phase();
        if !phase.is_terminal() {
            self.sessions.write().await.insert(id, session);
        }

        Ok(StartedInterview { id, phase })
    }

    /// Feeds a user's answer into its interview.
    ///
    /// Returns [`AnswerOutcome::Dropped`] when no question was awaiting an
    /// answer; votes and the question walk are untouched in that case.
    pub async fn answer(
        &self,
        id: InterviewId,
        answer: Answer,
    ) -> Result<AnswerOutcome, InterviewServiceError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(InterviewServiceError::NotFound(id))?;

        let was_awaiting = session.awaiting_answer();
        let effects = self
            .engine
            .apply(session, InterviewEvent::Answered(answer))?;
        self.run_effects(session, effects).await?;

        let phase = session.phase();
        debug!(
            interview = %id,
            answer = ?answer,
            counted = was_awaiting,
            phase = ?phase,
            "Answer processed"
        );

        if phase.is_terminal() {
            sessions.remove(&id);
            debug!(interview = %id, "Session removed from registry");
        }

        if was_awaiting {
            Ok(AnswerOutcome::Recorded { phase })
        } else {
            Ok(AnswerOutcome::Dropped)
        }
    }

    /// Cancels an interview and forgets its session.
    pub async fn abandon(&self, id: InterviewId) -> Result<(), InterviewServiceError> {
        let mut sessions = self.sessions.write().await;
        let mut session = sessions
            .remove(&id)
            .ok_or(InterviewServiceError::NotFound(id))?;

        // Abandonment emits no effects, so there is nothing to interpret.
        self.engine.apply(&mut session, InterviewEvent::Abandoned)?;
        info!(interview = %id, "Interview abandoned");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Effect interpretation
    // ─────────────────────────────────────────────────────────────────────

    /// Interprets engine effects until the session suspends or completes.
    ///
    /// Effects cascade: a missing question feeds `QuestionUnavailable` back
    /// into the engine, which may pose the next candidate's question or
    /// announce the final outcome.
    async fn run_effects(
        &self,
        session: &mut InterviewSession,
        effects: Vec<InterviewEffect>,
    ) -> Result<(), InterviewServiceError> {
        let mut queue: VecDeque<InterviewEffect> = effects.into();

        while let Some(effect) = queue.pop_front() {
            match effect {
                InterviewEffect::PoseQuestion { slot, number } => {
                    let id = *session.id();
                    let label = session.candidates().label(slot).clone();

                    let fetched = self.knowledge.fetch_question(&label, number).await;
                    let event = match fetched {
                        Ok(Some(text)) => {
                            self.presenter.show_question(id, &text).await?;
                            InterviewEvent::QuestionPresented
                        }
                        Ok(None) => {
                            warn!(
                                interview = %id,
                                label = %label,
                                number = number.value(),
                                "Question missing from knowledge base, candidate exhausted"
                            );
                            InterviewEvent::QuestionUnavailable
                        }
                        Err(err) => {
                            warn!(
                                interview = %id,
                                label = %label,
                                number = number.value(),
                                error = %err,
                                "Knowledge base failed, candidate exhausted"
                            );
                            InterviewEvent::QuestionUnavailable
                        }
                    };

                    queue.extend(self.engine.apply(session, event)?);
                }
                InterviewEffect::AnnounceDiagnosis { diagnosis } => {
                    self.present_diagnosis(*session.id(), &diagnosis).await?;
                }
            }
        }

        Ok(())
    }

    /// Pushes the final outcome through the presenter.
    ///
    /// A suggested condition whose record cannot be fetched falls back to
    /// the no-lesion presentation rather than an error.
    async fn present_diagnosis(
        &self,
        id: InterviewId,
        diagnosis: &Diagnosis,
    ) -> Result<(), InterviewServiceError> {
        match diagnosis.label() {
            Some(label) => match self.knowledge.fetch_record(label).await {
                Ok(Some(record)) => {
                    info!(interview = %id, label = %label, "Interview resolved to a condition");
                    self.presenter.show_result(id, label, &record).await?;
                }
                Ok(None) => {
                    warn!(
                        interview = %id,
                        label = %label,
                        "No record for suggested condition, presenting no-lesion outcome"
                    );
                    self.presenter.show_no_lesion_detected(id).await?;
                }
                Err(err) => {
                    warn!(
                        interview = %id,
                        label = %label,
                        error = %err,
                        "Knowledge base failed for record, presenting no-lesion outcome"
                    );
                    self.presenter.show_no_lesion_detected(id).await?;
                }
            },
            None => {
                info!(interview = %id, "Interview resolved with no lesion detected");
                self.presenter.show_no_lesion_detected(id).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::CandidatePrediction;
    use crate::domain::foundation::{
        Confidence, ConditionLabel, ErrorCode, QuestionNumber, QUESTION_BANK_SIZE,
    };
    use crate::domain::knowledge::ConditionRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Mock implementations for testing

    struct MockClassifier {
        outcome: Result<Vec<CandidatePrediction>, ClassifierError>,
    }

    impl MockClassifier {
        fn ranking(pairs: &[(&str, f32)]) -> Self {
            let predictions = pairs
                .iter()
                .map(|(label, confidence)| {
                    CandidatePrediction::new(
                        ConditionLabel::new(*label).unwrap(),
                        Confidence::try_new(*confidence).unwrap(),
                    )
                })
                .collect();
            Self {
                outcome: Ok(predictions),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: Err(ClassifierError::model_unavailable("model not loaded")),
            }
        }
    }

    #[async_trait]
    impl LesionClassifier for MockClassifier {
        async fn classify(
            &self,
            _image: &LesionImage,
        ) -> Result<Vec<CandidatePrediction>, ClassifierError> {
            self.outcome.clone()
        }
    }

    struct MockKnowledge {
        questions: HashMap<(String, u8), String>,
        records: HashMap<String, ConditionRecord>,
        fail: bool,
    }

    impl MockKnowledge {
        fn empty() -> Self {
            Self {
                questions: HashMap::new(),
                records: HashMap::new(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::empty()
            }
        }

        fn with_full_bank(mut self, label: &str) -> Self {
            for number in 1..=QUESTION_BANK_SIZE as u8 {
                self.questions.insert(
                    (label.to_string(), number),
                    format!("{label} question {number}?"),
                );
            }
            self
        }

        fn without_question(mut self, label: &str, number: u8) -> Self {
            self.questions.remove(&(label.to_string(), number));
            self
        }

        fn with_record(mut self, label: &str, description: &str) -> Self {
            let questions =
                std::array::from_fn(|i| format!("{label} question {}?", i + 1));
            self.records.insert(
                label.to_string(),
                ConditionRecord::new(description, vec![], vec![], vec![], questions),
            );
            self
        }
    }

    #[async_trait]
    impl KnowledgeBase for MockKnowledge {
        async fn fetch_question(
            &self,
            label: &ConditionLabel,
            number: QuestionNumber,
        ) -> Result<Option<String>, crate::ports::KnowledgeError> {
            if self.fail {
                return Err(crate::ports::KnowledgeError::unavailable("store down"));
            }
            Ok(self
                .questions
                .get(&(label.as_str().to_string(), number.value()))
                .cloned())
        }

        async fn fetch_record(
            &self,
            label: &ConditionLabel,
        ) -> Result<Option<ConditionRecord>, crate::ports::KnowledgeError> {
            if self.fail {
                return Err(crate::ports::KnowledgeError::unavailable("store down"));
            }
            Ok(self.records.get(label.as_str()).cloned())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Shown {
        Question(String),
        Result { label: String, description: String },
        NoLesion,
    }

    struct RecordingPresenter {
        shown: Mutex<Vec<Shown>>,
    }

    impl RecordingPresenter {
        fn new() -> Self {
            Self {
                shown: Mutex::new(Vec::new()),
            }
        }

        fn shown(&self) -> Vec<Shown> {
            self.shown.lock().unwrap().clone()
        }

        fn questions(&self) -> Vec<String> {
            self.shown()
                .into_iter()
                .filter_map(|s| match s {
                    Shown::Question(text) => Some(text),
                    _ => None,
                })
                .collect()
        }
    }

    #[async_trait]
    impl SessionPresenter for RecordingPresenter {
        async fn show_question(
            &self,
            _interview: InterviewId,
            text: &str,
        ) -> Result<(), PresenterError> {
            self.shown.lock().unwrap().push(Shown::Question(text.to_string()));
            Ok(())
        }

        async fn show_result(
            &self,
            _interview: InterviewId,
            label: &ConditionLabel,
            record: &ConditionRecord,
        ) -> Result<(), PresenterError> {
            self.shown.lock().unwrap().push(Shown::Result {
                label: label.as_str().to_string(),
                description: record.description.clone(),
            });
            Ok(())
        }

        async fn show_no_lesion_detected(
            &self,
            _interview: InterviewId,
        ) -> Result<(), PresenterError> {
            self.shown.lock().unwrap().push(Shown::NoLesion);
            Ok(())
        }
    }

    /// Succeeds for the first N `show_question` calls, then fails.
    struct FlakyPresenter {
        succeed_first: u32,
        calls: Mutex<u32>,
    }

    impl FlakyPresenter {
        fn failing_after(succeed_first: u32) -> Self {
            Self {
                succeed_first,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl SessionPresenter for FlakyPresenter {
        async fn show_question(
            &self,
            _interview: InterviewId,
            _text: &str,
        ) -> Result<(), PresenterError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls > self.succeed_first {
                Err(PresenterError::delivery_failed("ui thread gone"))
            } else {
                Ok(())
            }
        }

        async fn show_result(
            &self,
            _interview: InterviewId,
            _label: &ConditionLabel,
            _record: &ConditionRecord,
        ) -> Result<(), PresenterError> {
            Ok(())
        }

        async fn show_no_lesion_detected(
            &self,
            _interview: InterviewId,
        ) -> Result<(), PresenterError> {
            Ok(())
        }
    }

    fn service_with(
        classifier: MockClassifier,
        knowledge: MockKnowledge,
        presenter: RecordingPresenter,
    ) -> (
        InterviewService<MockClassifier, MockKnowledge, RecordingPresenter>,
        Arc<RecordingPresenter>,
    ) {
        let presenter = Arc::new(presenter);
        let service = InterviewService::new(
            Arc::new(classifier),
            Arc::new(knowledge),
            Arc::clone(&presenter),
        );
        (service, presenter)
    }

    fn image() -> LesionImage {
        LesionImage::from_bytes(vec![0xFF, 0xD8, 0xFF])
    }

    mod starting {
        use super::*;

        #[tokio::test]
        async fn poses_first_question_and_registers_session() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty().with_full_bank("acne").with_full_bank("eczema"),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();

            assert_eq!(started.phase, InterviewPhase::Interviewing);
            assert_eq!(service.active_count().await, 1);
            assert_eq!(
                presenter.shown(),
                vec![Shown::Question("acne question 1?".to_string())]
            );
        }

        #[tokio::test]
        async fn classifier_failure_surfaces() {
            let (service, _) = service_with(
                MockClassifier::failing(),
                MockKnowledge::empty(),
                RecordingPresenter::new(),
            );

            let result = service.start(image()).await;

            assert!(matches!(
                result,
                Err(InterviewServiceError::Classifier(
                    ClassifierError::ModelUnavailable(_)
                ))
            ));
            assert_eq!(service.active_count().await, 0);
        }

        #[tokio::test]
        async fn single_prediction_is_a_contract_violation() {
            let (service, _) = service_with(
                MockClassifier::ranking(&[("acne", 0.9)]),
                MockKnowledge::empty(),
                RecordingPresenter::new(),
            );

            let result = service.start(image()).await;

            match result {
                Err(InterviewServiceError::Domain(err)) => {
                    assert_eq!(err.code, ErrorCode::ContractViolation);
                }
                other => panic!("expected contract violation, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn double_healthy_completes_without_questions() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("healthy", 0.9), ("healthy", 0.8)]),
                MockKnowledge::empty(),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();

            assert_eq!(started.phase, InterviewPhase::Done);
            assert_eq!(service.active_count().await, 0);
            assert_eq!(presenter.shown(), vec![Shown::NoLesion]);
        }
    }

    mod answering {
        use super::*;

        #[tokio::test]
        async fn full_interview_reaches_a_condition() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty()
                    .with_full_bank("acne")
                    .with_full_bank("eczema")
                    .with_record("acne", "A common skin condition."),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();

            // Yes to everything about acne, no to everything about eczema.
            for _ in 0..QUESTION_BANK_SIZE {
                service.answer(started.id, Answer::Yes).await.unwrap();
            }
            for _ in 0..QUESTION_BANK_SIZE - 1 {
                service.answer(started.id, Answer::No).await.unwrap();
            }
            let last = service.answer(started.id, Answer::No).await.unwrap();

            assert_eq!(
                last,
                AnswerOutcome::Recorded {
                    phase: InterviewPhase::Done
                }
            );
            assert_eq!(presenter.questions().len(), 2 * QUESTION_BANK_SIZE);
            assert_eq!(
                presenter.shown().last(),
                Some(&Shown::Result {
                    label: "acne".to_string(),
                    description: "A common skin condition.".to_string(),
                })
            );
        }

        #[tokio::test]
        async fn completed_session_leaves_the_registry() {
            let (service, _) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty().with_full_bank("acne").with_full_bank("eczema"),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();
            for _ in 0..2 * QUESTION_BANK_SIZE {
                service.answer(started.id, Answer::No).await.unwrap();
            }

            assert_eq!(service.active_count().await, 0);
            let late = service.answer(started.id, Answer::Yes).await;
            assert!(matches!(late, Err(InterviewServiceError::NotFound(_))));
        }

        #[tokio::test]
        async fn unknown_interview_is_not_found() {
            let (service, _) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty(),
                RecordingPresenter::new(),
            );

            let result = service.answer(InterviewId::new(), Answer::Yes).await;

            assert!(matches!(result, Err(InterviewServiceError::NotFound(_))));
        }

        #[tokio::test]
        async fn answer_is_dropped_after_presentation_failure() {
            let presenter = Arc::new(FlakyPresenter::failing_after(1));
            let service = InterviewService::new(
                Arc::new(MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)])),
                Arc::new(
                    MockKnowledge::empty()
                        .with_full_bank("acne")
                        .with_full_bank("eczema"),
                ),
                Arc::clone(&presenter),
            );

            let started = service.start(image()).await.unwrap();

            // The second question never reaches the screen.
            let failed = service.answer(started.id, Answer::Yes).await;
            assert!(matches!(failed, Err(InterviewServiceError::Presenter(_))));

            // With no question on display the next reply is ignored.
            let outcome = service.answer(started.id, Answer::Yes).await.unwrap();
            assert_eq!(outcome, AnswerOutcome::Dropped);
        }
    }

    mod knowledge_degradation {
        use super::*;

        #[tokio::test]
        async fn missing_question_moves_to_next_candidate() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty()
                    .with_full_bank("acne")
                    .with_full_bank("eczema")
                    .without_question("acne", 2),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();
            service.answer(started.id, Answer::Yes).await.unwrap();

            // Question 2 of acne is gone, so eczema's bank starts instead.
            assert_eq!(
                presenter.questions(),
                vec![
                    "acne question 1?".to_string(),
                    "eczema question 1?".to_string(),
                ]
            );
            assert_eq!(service.active_count().await, 1);
        }

        #[tokio::test]
        async fn failing_store_resolves_without_questions() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::failing(),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();

            // Both candidates exhaust immediately; the tie falls to the top
            // candidate, whose record is also unavailable.
            assert_eq!(started.phase, InterviewPhase::Done);
            assert_eq!(presenter.shown(), vec![Shown::NoLesion]);
            assert_eq!(service.active_count().await, 0);
        }

        #[tokio::test]
        async fn missing_record_falls_back_to_no_lesion() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty().with_full_bank("acne").with_full_bank("eczema"),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();
            for _ in 0..2 * QUESTION_BANK_SIZE {
                service.answer(started.id, Answer::Yes).await.unwrap();
            }

            assert_eq!(presenter.shown().last(), Some(&Shown::NoLesion));
        }
    }

    mod abandonment {
        use super::*;

        #[tokio::test]
        async fn abandon_forgets_the_session() {
            let (service, _) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty().with_full_bank("acne").with_full_bank("eczema"),
                RecordingPresenter::new(),
            );

            let started = service.start(image()).await.unwrap();
            service.abandon(started.id).await.unwrap();

            assert_eq!(service.active_count().await, 0);
            let late = service.answer(started.id, Answer::Yes).await;
            assert!(matches!(late, Err(InterviewServiceError::NotFound(_))));
        }

        #[tokio::test]
        async fn abandon_unknown_is_not_found() {
            let (service, _) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty(),
                RecordingPresenter::new(),
            );

            let result = service.abandon(InterviewId::new()).await;

            assert!(matches!(result, Err(InterviewServiceError::NotFound(_))));
        }
    }

    mod concurrency {
        use super::*;

        #[tokio::test]
        async fn interviews_are_isolated() {
            let (service, presenter) = service_with(
                MockClassifier::ranking(&[("acne", 0.9), ("eczema", 0.6)]),
                MockKnowledge::empty().with_full_bank("acne").with_full_bank("eczema"),
                RecordingPresenter::new(),
            );

            let a = service.start(image()).await.unwrap();
            let b = service.start(image()).await.unwrap();
            assert_eq!(service.active_count().await, 2);

            // Answering one interview never advances the other.
            service.answer(a.id, Answer::Yes).await.unwrap();
            service.abandon(b.id).await.unwrap();

            assert_eq!(service.active_count().await, 1);
            assert_eq!(presenter.questions().len(), 3);
        }
    }
}
