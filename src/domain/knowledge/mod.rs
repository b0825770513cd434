//! Knowledge module - Condition content served by the knowledge base.

mod record;

pub use record::ConditionRecord;
