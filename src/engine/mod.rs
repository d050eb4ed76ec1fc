//! Public façade for the decision pipeline.

pub mod orchestrator;

pub use orchestrator::{process, process_tag};

#[cfg(test)]
mod tests;
