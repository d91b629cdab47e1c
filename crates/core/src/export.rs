//! Inbound export validation.
//!
//! The export document is produced by an external tool and treated as
//! opaque apart from one requirement: it must carry an `appearance` field.
//! The payload under that field is copied verbatim into the preset
//! document and never interpreted here.

use serde_json::Value;

use crate::error::CatalogError;

/// Field the export document must carry.
pub const APPEARANCE_FIELD: &str = "appearance";

/// Check that the parsed export carries an `appearance` field and return
/// a reference to the payload.
///
/// Non-object documents (arrays, strings, ...) cannot carry the field and
/// fail the same way. The payload is returned untouched; deep validation
/// of its internal shape is the producer's job.
pub fn validate_export(export: &Value) -> Result<&Value, CatalogError> {
    export
        .get(APPEARANCE_FIELD)
        .ok_or(CatalogError::Schema(APPEARANCE_FIELD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn export_with_appearance_returns_the_payload() {
        let export = json!({"appearance": {"x": 1}});
        let payload = validate_export(&export).expect("appearance should be present");
        assert_eq!(payload, &json!({"x": 1}));
    }

    #[test]
    fn null_appearance_still_counts_as_present() {
        assert!(validate_export(&json!({"appearance": null})).is_ok());
    }

    #[test]
    fn export_without_appearance_fails_the_schema_gate() {
        let err = validate_export(&json!({"settings": {}})).unwrap_err();
        assert_matches!(err, CatalogError::Schema("appearance"));
    }

    #[test]
    fn non_object_export_fails_the_schema_gate() {
        assert_matches!(
            validate_export(&json!(["appearance"])).unwrap_err(),
            CatalogError::Schema(_)
        );
    }
}
