//! Scripted Classifier Adapter
//!
//! A configurable stand-in for the real model runtime. Returns pre-loaded
//! rankings in order, optionally falls back to a fixed ranking, and can
//! inject errors. Lets interviews run in tests and demos without
//! inference hardware.
//!
//! This adapter is for *testing and demos*; it panics if its internal
//! locks are poisoned. Production hosts implement `LesionClassifier`
//! against their own model runtime.
//!
//! # Example
//!
//! ```ignore
//! let classifier = ScriptedClassifier::new()
//!     .with_ranking(acne_vs_eczema)
//!     .with_error(ClassifierError::model_unavailable("warming up"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::classification::{CandidatePrediction, LesionImage};
use crate::ports::{ClassifierError, LesionClassifier};

/// One scripted classification outcome.
#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Ranking(Vec<CandidatePrediction>),
    Error(ClassifierError),
}

/// Classifier that replays a script instead of running a model.
pub struct ScriptedClassifier {
    script: Mutex<VecDeque<ScriptedOutcome>>,
    fallback: Option<Vec<CandidatePrediction>>,
    calls: Mutex<usize>,
}

impl ScriptedClassifier {
    /// Creates a classifier with an empty script.
    ///
    /// Classifying past the end of the script fails with an inference
    /// error, so tests notice unplanned calls.
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: None,
            calls: Mutex::new(0),
        }
    }

    /// Creates a classifier that returns the same ranking for every image.
    pub fn fixed(ranking: Vec<CandidatePrediction>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Some(ranking),
            calls: Mutex::new(0),
        }
    }

    /// Queues a ranking to return.
    pub fn with_ranking(self, ranking: Vec<CandidatePrediction>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedOutcome::Ranking(ranking));
        self
    }

    /// Queues an error to return.
    pub fn with_error(self, error: ClassifierError) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedOutcome::Error(error));
        self
    }

    /// Number of classify calls made so far.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn next_outcome(&self) -> Option<ScriptedOutcome> {
        self.script.lock().unwrap().pop_front()
    }
}

impl Default for ScriptedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LesionClassifier for ScriptedClassifier {
    async fn classify(
        &self,
        _image: &LesionImage,
    ) -> Result<Vec<CandidatePrediction>, ClassifierError> {
        *self.calls.lock().unwrap() += 1;

        match self.next_outcome() {
            Some(ScriptedOutcome::Ranking(ranking)) => Ok(ranking),
            Some(ScriptedOutcome::Error(error)) => Err(error),
            None => match &self.fallback {
                Some(ranking) => Ok(ranking.clone()),
                None => Err(ClassifierError::inference_failed(
                    "classifier script exhausted",
                )),
            },
        }
    }
}
