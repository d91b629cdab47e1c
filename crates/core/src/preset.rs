//! On-disk catalog document types.
//!
//! The catalog is a flat-file store: one aggregate `index.json` plus one
//! JSON document and one screenshot per preset under `presets/`. Struct
//! field declaration order here fixes the key order of everything this
//! pipeline writes, so existing consumers keep reading byte-compatible
//! documents.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ident;
use crate::tags;

// ---------------------------------------------------------------------------
// Catalog layout constants
// ---------------------------------------------------------------------------

/// Aggregate index file name, resolved against the catalog root.
pub const INDEX_FILE: &str = "index.json";

/// Directory holding per-preset documents and screenshots.
pub const PRESETS_DIR: &str = "presets";

/// Relative URL of a preset's JSON document.
pub fn data_url(id: &str) -> String {
    format!("{PRESETS_DIR}/{id}.json")
}

/// Relative URL of a preset's screenshot. Always `.png`, regardless of the
/// submitted file's extension.
pub fn screenshot_url(id: &str) -> String {
    format!("{PRESETS_DIR}/{id}.png")
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Today's calendar date in `YYYY-MM-DD` form (operator-local time).
pub fn current_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Full RFC 3339 timestamp for `last_updated` (operator-local time).
pub fn current_timestamp() -> String {
    chrono::Local::now().to_rfc3339()
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Full record for one catalog item, written to `presets/<id>.json`.
/// Created once and never updated by this pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct PresetDocument {
    /// Allocated identifier, `preset_NNN`.
    pub id: String,
    /// Display name of the preset.
    pub name: String,
    /// Submitter's username.
    pub author: String,
    /// Free-form description.
    pub description: String,
    /// Tags in submission order; empties from trailing commas are kept.
    pub tags: Vec<String>,
    /// Appearance payload copied verbatim from the inbound export.
    pub appearance: Value,
    /// Relative path of the screenshot, `presets/<id>.png`.
    pub screenshot_url: String,
    /// Download counter, always 0 at creation.
    pub downloads: u64,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
}

impl PresetDocument {
    /// Build the document for a freshly allocated identifier.
    ///
    /// `appearance` is the payload extracted from the validated export;
    /// it is stored as-is. `downloads` starts at 0 and `created` is
    /// stamped with today's date.
    pub fn new(
        id: &str,
        name: &str,
        author: &str,
        description: &str,
        raw_tags: &str,
        appearance: Value,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            tags: tags::parse_tags(raw_tags),
            appearance,
            screenshot_url: screenshot_url(id),
            downloads: 0,
            created: current_date(),
        }
    }

    /// Derive the summary entry that goes into the aggregate index.
    pub fn index_entry(&self) -> IndexEntry {
        IndexEntry {
            id: self.id.clone(),
            name: self.name.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            data_url: data_url(&self.id),
            screenshot_url: self.screenshot_url.clone(),
            downloads: self.downloads,
            created: self.created.clone(),
        }
    }
}

/// Summary record stored in `index.json`. Same metadata as the preset
/// document, minus the appearance payload, plus a pointer to the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub tags: Vec<String>,
    pub data_url: String,
    pub screenshot_url: String,
    pub downloads: u64,
    pub created: String,
}

impl IndexEntry {
    /// Convert to a raw JSON value for insertion into the index, keeping
    /// the declared key order.
    pub fn into_value(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "author": self.author,
            "description": self.description,
            "tags": self.tags,
            "data_url": self.data_url,
            "screenshot_url": self.screenshot_url,
            "downloads": self.downloads,
            "created": self.created,
        })
    }
}

/// The aggregate catalog index.
///
/// Entries are kept as raw JSON values rather than typed records:
/// malformed legacy entries must survive a load/append/save cycle
/// untouched, and must never block identifier allocation. Unknown
/// top-level keys in a hand-edited index are captured in `extra` and
/// written back on save.
#[derive(Debug, Serialize, Deserialize)]
pub struct PresetIndex {
    pub presets: Vec<Value>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PresetIndex {
    /// Identifiers of all entries that carry a string `id` field.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().filter_map(|p| p.get("id")?.as_str())
    }

    /// Allocate the next identifier from the entries currently present.
    /// Pure read; does not modify the index.
    pub fn next_id(&self) -> String {
        ident::next_id(self.ids())
    }

    /// Append a freshly built entry and bump `last_updated`.
    pub fn append(&mut self, entry: IndexEntry) {
        self.presets.push(entry.into_value());
        self.last_updated = current_timestamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> PresetDocument {
        PresetDocument::new(
            "preset_001",
            "Malenia Cosplay",
            "alice",
            "Accurate Malenia recreation",
            "cosplay,female",
            json!({"x": 1}),
        )
    }

    #[test]
    fn new_document_initializes_counter_and_urls() {
        let doc = sample_document();
        assert_eq!(doc.downloads, 0);
        assert_eq!(doc.screenshot_url, "presets/preset_001.png");
        assert_eq!(doc.tags, vec!["cosplay", "female"]);
        assert_eq!(doc.created, current_date());
    }

    #[test]
    fn document_serializes_with_fixed_key_order() {
        let doc = sample_document();
        let text = serde_json::to_string_pretty(&doc).expect("serialization should succeed");
        let keys: Vec<usize> = [
            "\"id\"",
            "\"name\"",
            "\"author\"",
            "\"description\"",
            "\"tags\"",
            "\"appearance\"",
            "\"screenshot_url\"",
            "\"downloads\"",
            "\"created\"",
        ]
        .iter()
        .map(|k| text.find(k).expect("key should be present"))
        .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted, "keys should appear in declaration order");
    }

    #[test]
    fn index_entry_swaps_appearance_for_data_url() {
        let entry = sample_document().index_entry();
        assert_eq!(entry.data_url, "presets/preset_001.json");
        let value = entry.into_value();
        assert!(value.get("appearance").is_none());
        assert_eq!(value["data_url"], "presets/preset_001.json");
    }

    #[test]
    fn ids_skips_entries_without_a_string_id() {
        let index = PresetIndex {
            presets: vec![
                json!({"id": "preset_007"}),
                json!({"name": "no id here"}),
                json!({"id": 12}),
            ],
            last_updated: String::new(),
            extra: serde_json::Map::new(),
        };
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["preset_007"]);
    }

    #[test]
    fn next_id_tolerates_malformed_legacy_entries() {
        let index = PresetIndex {
            presets: vec![json!({"id": "preset_007"}), json!({"id": "legacy"})],
            last_updated: String::new(),
            extra: serde_json::Map::new(),
        };
        assert_eq!(index.next_id(), "preset_008");
    }

    #[test]
    fn append_pushes_one_entry_and_stamps_last_updated() {
        let mut index = PresetIndex {
            presets: vec![],
            last_updated: "old".to_string(),
            extra: serde_json::Map::new(),
        };
        index.append(sample_document().index_entry());
        assert_eq!(index.presets.len(), 1);
        assert_eq!(index.presets[0]["id"], "preset_001");
        assert_ne!(index.last_updated, "old");
    }

    #[test]
    fn unknown_top_level_keys_round_trip() {
        let raw = json!({
            "presets": [],
            "last_updated": "2024-01-01T00:00:00",
            "schema_version": 2
        });
        let mut index: PresetIndex =
            serde_json::from_value(raw).expect("index should deserialize");
        assert_eq!(index.extra["schema_version"], 2);

        index.append(sample_document().index_entry());
        let out = serde_json::to_value(&index).expect("index should serialize");
        assert_eq!(out["schema_version"], 2);
        assert_eq!(out["presets"].as_array().expect("presets array").len(), 1);
    }
}
