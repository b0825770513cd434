//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Inference Ports
//!
//! - `LesionClassifier` - Port for the image classification model
//!
//! ## Content Ports
//!
//! - `KnowledgeBase` - Port for condition records and interview questions
//!
//! ## Presentation Ports
//!
//! - `SessionPresenter` - Port for surfacing questions and outcomes to a client

mod classifier;
mod knowledge_base;
mod presenter;

pub use classifier::{ClassifierError, LesionClassifier};
pub use knowledge_base::{KnowledgeBase, KnowledgeError};
pub use presenter::{PresenterError, SessionPresenter};
