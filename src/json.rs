//! `serde` view of a document, used for JSON export.
//!
//! Sections become maps, single-value bindings become scalars and
//! multi-value bindings become sequences. Repeated keys are emitted as
//! repeated map entries.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::types::{Document, NodeRef, Nodes, Value};

struct Entries<'a>(Nodes<'a>);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes = self.0.clone();
        let mut map = serializer.serialize_map(Some(nodes.len()))?;
        for node in nodes {
            map.serialize_entry(node.key(), &node)?;
        }
        map.end()
    }
}

impl Document {
    /// The document as an ordered JSON tree. A repeated key keeps the
    /// position of its first entry and the payload of its last one.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Entries(self.roots()).serialize(serializer)
    }
}

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_section() {
            return Entries(self.children()).serialize(serializer);
        }
        let values = self.values();
        if values.len() == 1 {
            if let Some(value) = self.first_value() {
                return value.serialize(serializer);
            }
        }
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
        }
    }
}
