//! Structured answer generation: section schema, five-section builder,
//! and the caller-side markup flattener.

pub mod flattener;
pub mod generator;
pub mod schema;

pub use flattener::flatten;
pub use generator::generate;
pub use schema::{ExplanationLevel, Section, StructuredResponse};

#[cfg(test)]
mod tests;
