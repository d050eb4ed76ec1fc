//! Locale template store: language tags, per-locale text packs, lookup with fallback.

pub mod catalog;
pub mod language;
pub mod store;

pub use language::Language;
pub use store::{pack, resolve, LocalePack, SectionTitles};

#[cfg(test)]
mod tests;
