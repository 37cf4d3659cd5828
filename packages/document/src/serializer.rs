//! # Site File Format
//!
//! Export/import encoding of a document together with its theme:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "exportedAt": "2024-05-01T12:00:00.000Z",
//!   "components": [ ... ],
//!   "theme": { "name": "...", "colors": { ... }, "fonts": { ... } }
//! }
//! ```
//!
//! Loading checks the top-level shape only: the text must be a JSON object
//! with non-null `components` and `theme`. Everything below that is read
//! leniently so a file written by a different editor version still opens.

use crate::error::{FormatError, FormatResult};
use crate::model::Document;
use crate::theme::{Theme, DEFAULT_THEME_NAME};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FORMAT_VERSION: &str = "1.0";

/// On-disk representation of an exported site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFile {
    pub version: String,
    pub exported_at: String,
    pub components: Document,
    pub theme: Theme,
}

impl SiteFile {
    pub fn new(components: Document, theme: Theme, exported_at: DateTime<Utc>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            components,
            theme,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> FormatResult<String> {
        serde_json::to_string_pretty(self).map_err(FormatError::invalid_json)
    }
}

/// Encode a document and theme, stamped with the current time
pub fn serialize(doc: &Document, theme: &Theme) -> FormatResult<String> {
    serialize_at(doc, theme, Utc::now())
}

pub fn serialize_at(doc: &Document, theme: &Theme, exported_at: DateTime<Utc>) -> FormatResult<String> {
    SiteFile::new(doc.clone(), theme.clone(), exported_at).to_json()
}

/// Decode a site file into its document and theme
pub fn deserialize(text: &str) -> FormatResult<(Document, Theme)> {
    let file = deserialize_file(text)?;
    Ok((file.components, file.theme))
}

/// Decode the full site file, including version and export timestamp
pub fn deserialize_file(text: &str) -> FormatResult<SiteFile> {
    let value: Value = serde_json::from_str(text).map_err(FormatError::invalid_json)?;

    let Value::Object(mut fields) = value else {
        return Err(FormatError::NotAnObject);
    };

    let components = take_field(&mut fields, "components")?;
    let theme = take_field(&mut fields, "theme")?;

    let components = Document::deserialize(components).unwrap_or_default();
    let theme = Theme::deserialize(theme).unwrap_or_else(|err| {
        tracing::warn!("Unreadable theme, using {}: {}", DEFAULT_THEME_NAME, err);
        Theme::default()
    });

    let version = fields
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or(FORMAT_VERSION)
        .to_string();
    let exported_at = fields
        .get("exportedAt")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if version != FORMAT_VERSION {
        tracing::warn!("Reading site file version {} as {}", version, FORMAT_VERSION);
    }
    tracing::debug!("Decoded site file with {} root components", components.len());

    Ok(SiteFile {
        version,
        exported_at,
        components,
        theme,
    })
}

fn take_field(fields: &mut serde_json::Map<String, Value>, name: &'static str) -> FormatResult<Value> {
    match fields.remove(name) {
        Some(Value::Null) | None => Err(FormatError::MissingField(name)),
        Some(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentType, NodeData};
    use chrono::TimeZone;

    #[test]
    fn test_serialize_shape() {
        let doc = Document::from_nodes(vec![
            NodeData::from_library(ComponentType::Header).into_node("h".to_string())
        ]);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let text = serialize_at(&doc, &Theme::default(), at).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["exportedAt"], "2024-05-01T12:00:00.000Z");
        assert_eq!(value["components"][0]["id"], "h");
        assert_eq!(value["theme"]["name"], "Modern Blue");
    }

    #[test]
    fn test_round_trip() {
        let doc = Document::from_nodes(vec![
            NodeData::from_library(ComponentType::Grid).into_node("g".to_string())
        ]);
        let theme = Theme::creative_dark();

        let text = serialize(&doc, &theme).unwrap();
        let (loaded_doc, loaded_theme) = deserialize(&text).unwrap();

        assert_eq!(loaded_doc, doc);
        assert_eq!(loaded_theme, theme);
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert_eq!(
            deserialize(r#"{ "theme": null, "components": [] }"#),
            Err(FormatError::MissingField("theme"))
        );
        assert_eq!(
            deserialize(r#"{ "version": "1.0" }"#),
            Err(FormatError::MissingField("components"))
        );
        assert_eq!(deserialize("[1, 2]"), Err(FormatError::NotAnObject));
        assert!(matches!(deserialize("{ nope"), Err(FormatError::InvalidJson(_))));
    }

    #[test]
    fn test_tolerates_foreign_nodes() {
        let text = r#"{
            "components": [
                { "id": "x", "type": "carousel", "props": 3 },
                { "id": "a", "props": {} },
                { "id": "g", "type": "grid", "children": "oops" }
            ],
            "theme": { "name": "T" }
        }"#;

        let file = deserialize_file(text).unwrap();
        let roots = file.components.roots();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0].kind, ComponentType::Other("carousel".to_string()));
        assert!(roots[0].props.is_empty());
        assert_eq!(roots[1].kind, ComponentType::Other(String::new()));
        assert_eq!(roots[2].kind, ComponentType::Grid);
        assert_eq!(roots[2].children, None);

        assert_eq!(file.theme.name, "T");
        assert_eq!(file.theme.colors, Theme::default().colors);
        assert_eq!(file.version, FORMAT_VERSION);
    }

    #[test]
    fn test_odd_top_level_values_load() {
        let (doc, theme) = deserialize(r#"{ "components": {}, "theme": "dark" }"#).unwrap();
        assert!(doc.is_empty());
        assert_eq!(theme, Theme::default());
    }
}
