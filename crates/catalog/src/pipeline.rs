//! The linear submission pipeline.
//!
//! Stages run strictly in sequence: validate the export, allocate an
//! identifier, stage the preset files, then append to the index and
//! persist it. The first failure aborts the run; files already staged are
//! left in place (orphaned files are harmless, a dangling index entry is
//! not), and the index itself is only ever touched by the final stage.
//!
//! The whole read-index / compute / write-index cycle lives behind
//! [`process_submission`] so a future locking or journaling mechanism can
//! wrap this one function without touching callers.

use std::path::PathBuf;

use presetvault_core::error::CatalogError;
use presetvault_core::export::validate_export;
use presetvault_core::preset::PresetDocument;

use crate::store::Catalog;

/// One community submission: the metadata entered by the operator plus
/// the paths of the producer's export document and screenshot.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Display name for the preset.
    pub name: String,
    /// Submitter's username.
    pub author: String,
    /// Free-form description.
    pub description: String,
    /// Comma-separated tag string, parsed by the writer stage.
    pub tags: String,
    /// Path of the exported JSON produced by the character tool.
    pub export_path: PathBuf,
    /// Path of the screenshot to copy into the catalog.
    pub screenshot_path: PathBuf,
}

/// Run the full pipeline for one submission against `catalog`.
///
/// On success the catalog gained exactly one preset document, one
/// screenshot, and one index entry; the allocated identifier is returned.
/// On failure the index is untouched, though files staged before the
/// failure point may remain.
pub fn process_submission(
    catalog: &Catalog,
    submission: &Submission,
) -> Result<String, CatalogError> {
    tracing::info!(
        name = %submission.name,
        author = %submission.author,
        "Processing submission",
    );

    // Stage 1: validate the inbound export.
    let export = Catalog::load_export(&submission.export_path)?;
    let appearance = validate_export(&export)?.clone();
    tracing::info!("Export JSON valid");

    // Stage 2: allocate the next identifier from the current index.
    let mut index = catalog.load_index()?;
    let id = index.next_id();
    tracing::info!(%id, "Allocated identifier");

    // Stage 3: stage the preset document and screenshot. The index is
    // not mutated here.
    let document = PresetDocument::new(
        &id,
        &submission.name,
        &submission.author,
        &submission.description,
        &submission.tags,
        appearance,
    );
    let document_path = catalog.write_document(&document)?;
    tracing::info!(path = %document_path.display(), "Created preset document");

    let screenshot_path = catalog.copy_screenshot(&submission.screenshot_path, &id)?;
    tracing::info!(path = %screenshot_path.display(), "Copied screenshot");

    // Stage 4: append the summary entry and persist the index. Runs last
    // so the index never references files that do not exist.
    index.append(document.index_entry());
    catalog.save_index(&index)?;
    tracing::info!("Updated index.json");

    Ok(id)
}
