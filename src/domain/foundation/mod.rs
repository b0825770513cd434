//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the lesion interview domain.

mod confidence;
mod errors;
mod ids;
mod label;
mod question;
mod state_machine;
mod timestamp;

pub use confidence::Confidence;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::InterviewId;
pub use label::{ConditionLabel, HEALTHY_LABEL};
pub use question::{QuestionNumber, QUESTION_BANK_SIZE};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
