//! Channel Presenter Adapter
//!
//! Forwards presenter calls as serializable [`PresenterEvent`]s over a
//! bounded tokio mpsc channel. The embedding host owns the receiver and
//! renders events however it likes; a dropped receiver surfaces as
//! `PresenterError::ChannelClosed` and ends the interview's output.

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::domain::foundation::{ConditionLabel, InterviewId};
use crate::domain::knowledge::ConditionRecord;
use crate::ports::{PresenterError, SessionPresenter};

/// One unit of interview output, ready for a UI or transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresenterEvent {
    /// A yes/no question to put in front of the user.
    Question { interview: InterviewId, text: String },

    /// A final condition suggestion with its rendered record.
    Result {
        interview: InterviewId,
        label: ConditionLabel,
        summary: String,
    },

    /// The no-lesion outcome.
    NoLesionDetected { interview: InterviewId },
}

/// Presenter that emits events into a bounded channel.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    tx: mpsc::Sender<PresenterEvent>,
}

impl ChannelPresenter {
    /// Creates a presenter and the receiver for its events.
    ///
    /// The channel is bounded; a slow consumer backpressures the
    /// interview instead of growing a queue.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<PresenterEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    async fn send(&self, event: PresenterEvent) -> Result<(), PresenterError> {
        self.tx
            .send(event)
            .await
            .map_err(|_| PresenterError::channel_closed("presenter receiver dropped"))
    }
}

#[async_trait]
impl SessionPresenter for ChannelPresenter {
    async fn show_question(
        &self,
        interview: InterviewId,
        text: &str,
    ) -> Result<(), PresenterError> {
        self.send(PresenterEvent::Question {
            interview,
            text: text.to_string(),
        })
        .await
    }

    async fn show_result(
        &self,
        interview: InterviewId,
        label: &ConditionLabel,
        record: &ConditionRecord,
    ) -> Result<(), PresenterError> {
        self.send(PresenterEvent::Result {
            interview,
            label: label.clone(),
            summary: record.summary(),
        })
        .await
    }

    async fn show_no_lesion_detected(
        &self,
        interview: InterviewId,
    ) -> Result<(), PresenterError> {
        self.send(PresenterEvent::NoLesionDetected { interview }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ConditionRecord {
        ConditionRecord::new(
            "A demo condition.",
            vec!["a cause".to_string()],
            vec!["a symptom".to_string()],
            vec!["a treatment".to_string()],
            std::array::from_fn(|i| format!("Question {}?", i + 1)),
        )
    }

    #[tokio::test]
    async fn forwards_questions() {
        let (presenter, mut rx) = ChannelPresenter::new(4);
        let id = InterviewId::new();

        presenter.show_question(id, "Does it itch?").await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(PresenterEvent::Question {
                interview: id,
                text: "Does it itch?".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn result_carries_the_rendered_summary() {
        let (presenter, mut rx) = ChannelPresenter::new(4);
        let id = InterviewId::new();
        let label = ConditionLabel::new("acne").unwrap();

        presenter.show_result(id, &label, &record()).await.unwrap();

        match rx.recv().await {
            Some(PresenterEvent::Result {
                interview,
                label,
                summary,
            }) => {
                assert_eq!(interview, id);
                assert_eq!(label.as_str(), "acne");
                assert!(summary.starts_with("A demo condition."));
                assert!(summary.contains(" - a cause"));
            }
            other => panic!("expected a result event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn closed_channel_surfaces_as_an_error() {
        let (presenter, rx) = ChannelPresenter::new(4);
        drop(rx);

        let result = presenter.show_no_lesion_detected(InterviewId::new()).await;

        assert!(matches!(result, Err(PresenterError::ChannelClosed(_))));
    }

    #[test]
    fn events_serialize_with_a_type_tag() {
        let id = InterviewId::new();
        let event = PresenterEvent::NoLesionDetected { interview: id };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "no_lesion_detected");
        assert_eq!(json["interview"], id.to_string());
    }
}
