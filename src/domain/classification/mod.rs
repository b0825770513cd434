//! Classification module - Classifier output as the domain sees it.
//!
//! The classifier itself lives behind a port; this module owns the shape
//! of its output (a ranked candidate pair) and the opaque image payload
//! handed to it.

mod candidate_set;
mod image;
mod prediction;

pub use candidate_set::{CandidateSet, CandidateSlot};
pub use image::LesionImage;
pub use prediction::CandidatePrediction;
