use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Record identifier as stored by the source table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Integer(u64),
    String(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Integer(id) => write!(f, "{}", id),
            RecordId::String(id) => f.write_str(id),
        }
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId::Integer(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::String(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::String(id)
    }
}

/// Fixed column set every component table is projected onto
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeProjection {
    pub size: Option<String>,
    pub item: Option<String>,
    pub pressure_rating: Option<String>,
    pub pressure_class: Option<String>,
    pub body_material: Option<String>,
    pub seat_material: Option<String>,
    pub connection_type: Option<String>,
    pub end_connection: Option<String>,
    pub body_style: Option<String>,
}

impl AttributeProjection {
    /// Document keys read by the projection, in column order
    pub const KEYS: [&'static str; 9] = [
        "size",
        "item",
        "pressure_rating",
        "pressure_class",
        "body_material",
        "seat_material",
        "connection_type",
        "end_connection",
        "body_style",
    ];

    /// Project an attribute document. Non-object documents yield an empty projection.
    pub fn from_document(doc: &Value) -> Self {
        let text = |key: &str| doc.get(key).and_then(json_text);
        Self {
            size: text("size"),
            item: text("item"),
            pressure_rating: text("pressure_rating"),
            pressure_class: text("pressure_class"),
            body_material: text("body_material"),
            seat_material: text("seat_material"),
            connection_type: text("connection_type"),
            end_connection: text("end_connection"),
            body_style: text("body_style"),
        }
    }

    /// Pressure text: the rating when present, otherwise the class
    pub fn pressure_text(&self) -> Option<&str> {
        self.pressure_rating
            .as_deref()
            .or(self.pressure_class.as_deref())
    }

    /// Connection columns that can satisfy a connection constraint
    pub fn connections(&self) -> impl Iterator<Item = &str> {
        [&self.connection_type, &self.end_connection, &self.body_style]
            .into_iter()
            .filter_map(|c| c.as_deref())
    }
}

/// Text form of a document value: strings as-is, scalars in JSON notation,
/// nested values as serialized JSON, null as absent
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A row of a component table: provenance plus a semi-structured attribute document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDocument {
    pub id: RecordId,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub tech_specs: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl ComponentDocument {
    pub fn new(id: impl Into<RecordId>, tech_specs: Value) -> Self {
        Self {
            id: id.into(),
            source_url: None,
            component_type: None,
            tech_specs: Some(tech_specs),
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_component_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Candidate view of this row; `None` when there is no attribute document
    pub fn project(&self, source: &str) -> Option<CandidateRecord> {
        let specs = self.tech_specs.as_ref().filter(|doc| !doc.is_null())?;
        Some(CandidateRecord {
            id: self.id.clone(),
            source: source.to_string(),
            source_url: self.source_url.clone(),
            component_type: self.component_type.clone(),
            attributes: AttributeProjection::from_document(specs),
            metadata: self.metadata.clone(),
        })
    }
}

/// Read-only candidate produced by a record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: RecordId,
    /// Name of the table the record was read from
    pub source: String,
    pub source_url: Option<String>,
    pub component_type: Option<String>,
    pub attributes: AttributeProjection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Row of the legacy single-table schema, every attribute a column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValveSpecRow {
    pub id: u64,
    pub source_url: Option<String>,
    pub spec_sheet_url: Option<String>,
    pub sku: Option<String>,
    pub valve_type: Option<String>,
    pub size_nominal: Option<String>,
    pub body_material: Option<String>,
    pub max_pressure: Option<f64>,
    pub pressure_unit: Option<String>,
    pub pressure_class: Option<String>,
    pub max_temperature: Option<f64>,
    pub temperature_unit: Option<String>,
    pub end_connection_inlet: Option<String>,
    pub end_connection_outlet: Option<String>,
    pub extracted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projection_text_semantics() {
        let doc = ComponentDocument::new(
            7,
            json!({
                "size": "2\"",
                "pressure_class": 300,
                "body_material": "Brass",
                "seat_material": null,
                "weight": {"lb": 3}
            }),
        )
        .with_component_type("Ball Valve");

        let record = doc.project("ball_valve_specs").unwrap();
        assert_eq!(record.id, RecordId::Integer(7));
        assert_eq!(record.source, "ball_valve_specs");
        assert_eq!(record.attributes.size.as_deref(), Some("2\""));
        assert_eq!(record.attributes.pressure_class.as_deref(), Some("300"));
        assert_eq!(record.attributes.seat_material, None);
        assert_eq!(record.attributes.pressure_text(), Some("300"));
    }

    #[test]
    fn test_rating_preferred_over_class() {
        let projection = AttributeProjection::from_document(&json!({
            "pressure_rating": "600 WOG",
            "pressure_class": "150"
        }));
        assert_eq!(projection.pressure_text(), Some("600 WOG"));
    }

    #[test]
    fn test_documentless_rows_are_skipped() {
        let mut doc = ComponentDocument::new("a-1", json!({}));
        doc.tech_specs = None;
        assert!(doc.project("gate_valve_specs").is_none());
        doc.tech_specs = Some(Value::Null);
        assert!(doc.project("gate_valve_specs").is_none());
    }

    #[test]
    fn test_record_id_untagged() {
        let ids: Vec<RecordId> = serde_json::from_value(json!([12, "sku-9"])).unwrap();
        assert_eq!(ids, vec![RecordId::Integer(12), RecordId::String("sku-9".into())]);
        assert_eq!(ids[1].to_string(), "sku-9");
    }

    #[test]
    fn test_valve_spec_row_defaults() {
        let row: ValveSpecRow = serde_json::from_value(json!({
            "id": 3,
            "valve_type": "Gate Valve",
            "extracted_at": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(row.valve_type.as_deref(), Some("Gate Valve"));
        assert!(row.extracted_at.is_some());
        assert_eq!(row.body_material, None);
    }
}
