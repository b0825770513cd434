//! Session Presenter Port - Outbound interface to whatever faces the user.
//!
//! The core pushes questions and outcomes through this port; it never
//! renders anything itself. Answers do not flow back through the presenter,
//! they arrive as application calls, so implementations stay one-directional.

use async_trait::async_trait;

use crate::domain::foundation::{ConditionLabel, InterviewId};
use crate::domain::knowledge::ConditionRecord;

/// Errors that can occur while presenting to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresenterError {
    #[error("Presentation channel closed: {0}")]
    ChannelClosed(String),

    #[error("Presentation failed: {0}")]
    DeliveryFailed(String),
}

impl PresenterError {
    /// Creates a channel closed error.
    pub fn channel_closed(message: impl Into<String>) -> Self {
        PresenterError::ChannelClosed(message.into())
    }

    /// Creates a delivery failure error.
    pub fn delivery_failed(message: impl Into<String>) -> Self {
        PresenterError::DeliveryFailed(message.into())
    }
}

/// Port for pushing interview output to the user
#[async_trait]
pub trait SessionPresenter: Send + Sync {
    /// Show a yes/no question
    ///
    /// # Arguments
    /// * `interview` - Session the question belongs to
    /// * `text` - Question text, ready for display
    async fn show_question(
        &self,
        interview: InterviewId,
        text: &str,
    ) -> Result<(), PresenterError>;

    /// Show a final condition suggestion with its educational record
    ///
    /// # Arguments
    /// * `interview` - Session the outcome belongs to
    /// * `label` - The suggested condition
    /// * `record` - Content to display alongside the suggestion
    async fn show_result(
        &self,
        interview: InterviewId,
        label: &ConditionLabel,
        record: &ConditionRecord,
    ) -> Result<(), PresenterError>;

    /// Show the "no lesion detected" outcome
    ///
    /// Also used when a suggested condition has no knowledge-base record
    /// to display.
    async fn show_no_lesion_detected(
        &self,
        interview: InterviewId,
    ) -> Result<(), PresenterError>;
}
