//! Knowledge base adapters.

mod builtin;
mod file_kb;
mod static_kb;

pub use file_kb::FileKnowledgeBase;
pub use static_kb::StaticKnowledgeBase;
