//! Interview module - The question-driven disambiguation state machine.
//!
//! [`InterviewSession`] holds all mutable state for one run;
//! [`InterviewEngine`] is the pure reducer that advances it. Everything
//! asynchronous lives outside, in whatever interprets the effects.

mod engine;
mod events;
mod phase;
mod session;
mod tally;

pub use engine::InterviewEngine;
pub use events::{Answer, InterviewEffect, InterviewEvent};
pub use phase::InterviewPhase;
pub use session::{InterviewCursor, InterviewSession};
pub use tally::VoteTally;
