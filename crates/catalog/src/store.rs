//! Flat-file catalog store.
//!
//! All paths are resolved against a single catalog root: `index.json`
//! directly under it, documents and screenshots under `presets/`. The
//! store performs plain synchronous I/O; the pipeline decides ordering.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use presetvault_core::error::CatalogError;
use presetvault_core::preset::{PresetDocument, PresetIndex, INDEX_FILE, PRESETS_DIR};

/// Handle to a catalog rooted at one directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Open a catalog rooted at `root`. No I/O happens here; the index is
    /// checked on first load.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the aggregate index file.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Path of the per-preset document/screenshot directory.
    pub fn presets_dir(&self) -> PathBuf {
        self.root.join(PRESETS_DIR)
    }

    /// Read and parse an inbound export document.
    ///
    /// Both unreadable files and invalid JSON are input failures; the
    /// producer is expected to hand over a well-formed JSON export.
    pub fn load_export(path: &Path) -> Result<Value, CatalogError> {
        let text = fs::read_to_string(path)
            .map_err(|e| CatalogError::Input(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| CatalogError::Input(format!("{}: {e}", path.display())))
    }

    /// Load the aggregate index.
    ///
    /// The index must already exist; this pipeline never creates one from
    /// scratch. A present-but-unparseable index is an I/O failure.
    pub fn load_index(&self) -> Result<PresetIndex, CatalogError> {
        let path = self.index_path();
        if !path.exists() {
            return Err(CatalogError::MissingIndex(self.root.display().to_string()));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| CatalogError::Io(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| CatalogError::Io(format!("failed to parse {}: {e}", path.display())))
    }

    /// Persist the index by overwriting it in place.
    pub fn save_index(&self, index: &PresetIndex) -> Result<(), CatalogError> {
        let path = self.index_path();
        let text = serde_json::to_string_pretty(index)
            .map_err(|e| CatalogError::Io(format!("failed to serialize index: {e}")))?;
        fs::write(&path, text)
            .map_err(|e| CatalogError::Io(format!("failed to write {}: {e}", path.display())))
    }

    /// Write a preset document to `presets/<id>.json`, pretty-printed
    /// with 2-space indentation. Creates `presets/` if absent.
    pub fn write_document(&self, document: &PresetDocument) -> Result<PathBuf, CatalogError> {
        let dir = self.presets_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| CatalogError::Io(format!("failed to create {}: {e}", dir.display())))?;

        let path = dir.join(format!("{}.json", document.id));
        let text = serde_json::to_string_pretty(document)
            .map_err(|e| CatalogError::Io(format!("failed to serialize {}: {e}", document.id)))?;
        fs::write(&path, text)
            .map_err(|e| CatalogError::Io(format!("failed to write {}: {e}", path.display())))?;
        Ok(path)
    }

    /// Byte-copy the screenshot to `presets/<id>.png`. Creates `presets/`
    /// if absent, so staging order does not matter.
    ///
    /// The destination extension is fixed to `.png` to match the
    /// `screenshot_url` recorded in the documents.
    pub fn copy_screenshot(&self, source: &Path, id: &str) -> Result<PathBuf, CatalogError> {
        let dir = self.presets_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| CatalogError::Io(format!("failed to create {}: {e}", dir.display())))?;

        let dest = dir.join(format!("{id}.png"));
        fs::copy(source, &dest).map_err(|e| {
            CatalogError::Io(format!(
                "failed to copy {} to {}: {e}",
                source.display(),
                dest.display()
            ))
        })?;
        Ok(dest)
    }
}
