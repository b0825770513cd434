//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `classification` - Classifier output types and the candidate pair
//! - `knowledge` - Condition content served by the knowledge base
//! - `interview` - The question-driven disambiguation state machine
//! - `diagnosis` - Pure resolution of vote tallies into outcomes

pub mod classification;
pub mod diagnosis;
pub mod foundation;
pub mod interview;
pub mod knowledge;
