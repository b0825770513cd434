//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Classification model stand-ins
//! - `knowledge` - Condition content stores (in-memory, file-backed)
//! - `presenter` - Output delivery to the embedding host

pub mod classifier;
pub mod knowledge;
pub mod presenter;

pub use classifier::ScriptedClassifier;
pub use knowledge::{FileKnowledgeBase, StaticKnowledgeBase};
pub use presenter::{ChannelPresenter, PresenterEvent};
