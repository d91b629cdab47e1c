//! Filesystem store and submission pipeline for the preset catalog.
//!
//! `store` owns every read and write under the catalog root; `pipeline`
//! strings the stages together: validate the inbound export, allocate the
//! next identifier, stage the preset document and screenshot, then append
//! to the index and persist it. The index write always comes last so the
//! index never references a file that does not exist yet.

pub mod pipeline;
pub mod store;

pub use pipeline::{process_submission, Submission};
pub use store::Catalog;
