//! Classifier Port - Interface to the image classification model.
//!
//! The engine never runs inference itself. Whatever model runtime the host
//! embeds sits behind this port and hands back a ranked list of condition
//! predictions for an image.

use async_trait::async_trait;

use crate::domain::classification::{CandidatePrediction, LesionImage};

/// Errors that can occur during classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Image rejected by classifier: {0}")]
    InvalidImage(String),
}

impl ClassifierError {
    /// Creates a model unavailable error.
    pub fn model_unavailable(message: impl Into<String>) -> Self {
        ClassifierError::ModelUnavailable(message.into())
    }

    /// Creates an inference failure error.
    pub fn inference_failed(message: impl Into<String>) -> Self {
        ClassifierError::InferenceFailed(message.into())
    }

    /// Creates an invalid image error.
    pub fn invalid_image(message: impl Into<String>) -> Self {
        ClassifierError::InvalidImage(message.into())
    }

    /// True when retrying the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClassifierError::ModelUnavailable(_))
    }
}

/// Port for image classification
///
/// Implementations return their full ranking in any order; the core ranks
/// by confidence (stable for equal scores) and keeps the top two. Labels
/// come from the classifier's closed vocabulary, which includes the
/// healthy sentinel. Fewer than two predictions violates the integration
/// contract and is rejected by the core, not silently padded.
#[async_trait]
pub trait LesionClassifier: Send + Sync {
    /// Classify an image into ranked condition predictions
    ///
    /// # Arguments
    /// * `image` - Opaque image payload, already sized for the model
    ///
    /// # Errors
    /// Returns `ClassifierError` if inference cannot produce a ranking
    async fn classify(
        &self,
        image: &LesionImage,
    ) -> Result<Vec<CandidatePrediction>, ClassifierError>;
}
