//! Classifier adapters.

mod scripted;

pub use scripted::ScriptedClassifier;
