//! Interview engine tuning

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::diagnosis::DiagnosisResolver;
use crate::domain::foundation::QUESTION_BANK_SIZE;
use crate::domain::interview::InterviewEngine;

/// Interview engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Votes a condition needs strictly more of to beat the healthy
    /// sentinel
    #[serde(default = "default_confirmation_threshold")]
    pub confirmation_threshold: u8,

    /// Bound of the presenter event channel
    #[serde(default = "default_presenter_capacity")]
    pub presenter_capacity: usize,
}

impl EngineConfig {
    /// Builds the interview engine this configuration describes.
    pub fn engine(&self) -> InterviewEngine {
        InterviewEngine::with_resolver(DiagnosisResolver::with_threshold(
            self.confirmation_threshold,
        ))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        // A threshold at or past the bank size can never be exceeded.
        if usize::from(self.confirmation_threshold) >= QUESTION_BANK_SIZE {
            return Err(ValidationError::ThresholdTooHigh);
        }
        if self.presenter_capacity == 0 {
            return Err(ValidationError::ZeroPresenterCapacity);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confirmation_threshold: default_confirmation_threshold(),
            presenter_capacity: default_presenter_capacity(),
        }
    }
}

fn default_confirmation_threshold() -> u8 {
    (QUESTION_BANK_SIZE / 2) as u8
}

fn default_presenter_capacity() -> usize {
    32
}
