//! Application layer - the service shell over the interview domain.
//!
//! Orchestrates domain operations and coordinates between ports. The
//! domain reducer stays pure; everything asynchronous happens here.

pub mod interview_service;

pub use interview_service::{
    AnswerOutcome, InterviewService, InterviewServiceError, StartedInterview,
};
