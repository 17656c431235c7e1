//! Shared record types exchanged between the normalizer and the graph writer

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute map carried by node and edge records.
pub type Properties = HashMap<String, String>;

/// A normalized graph node.
///
/// `id` is the source-corpus identifier (unique after deduplication),
/// `label` is the node type tag consumed by the bulk importer
/// (e.g. "drug").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Category-local identifier, unique within the corpus
    pub id: String,

    /// Node type tag (bulk-import label)
    pub label: String,

    /// Attribute map (at least `name` for drugs)
    pub properties: Properties,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property to the record
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A normalized graph edge.
///
/// `id` is a content-derived fingerprint, not a natural key: two
/// structurally identical rows hash to the same value. `source` and
/// `target` reference node identifiers in the direction given by the
/// source file. Referential integrity is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Content-derived fingerprint of the full row
    pub id: String,

    /// Source node identifier
    pub source: String,

    /// Target node identifier
    pub target: String,

    /// Edge type tag (bulk-import relationship type)
    pub label: String,

    /// Attribute map (`level` and `class` for interactions)
    pub properties: Properties,
}

impl EdgeRecord {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property to the record
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_node_record_builder() {
        let node = NodeRecord::new("DDInter1", "drug").with_property("name", "Aspirin");

        assert_eq!(node.id, "DDInter1");
        assert_eq!(node.label, "drug");
        assert_eq!(node.properties.get("name").unwrap(), "Aspirin");
    }

    #[test]
    fn test_edge_record_builder() {
        let edge = EdgeRecord::new("abc123", "DDInter1", "DDInter2", "drug_drug_interaction")
            .with_property("level", "Major")
            .with_property("class", "Various");

        assert_eq!(edge.source, "DDInter1");
        assert_eq!(edge.target, "DDInter2");
        assert_eq!(edge.properties.len(), 2);
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let node = NodeRecord::new("DDInter42", "drug").with_property("name", "Warfarin");
        let json = serde_json::to_string(&node).unwrap();
        let back: NodeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
