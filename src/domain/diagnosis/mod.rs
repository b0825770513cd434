//! Diagnosis module - Pure resolution of interview outcomes.

mod resolver;

pub use resolver::{Diagnosis, DiagnosisResolver};
