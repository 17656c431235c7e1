//! Node/edge type and field registry
//!
//! Closed enumerations of everything the adapter can emit, plus
//! resolution of caller-supplied subsets. A non-empty request is taken as
//! given — members are not validated against the enumeration, and an
//! unknown selection simply yields no records at consumption time. An
//! empty request means "all known values".

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Node types the adapter can provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Drug,
}

impl NodeType {
    /// All known node types
    pub const ALL: [NodeType; 1] = [NodeType::Drug];

    /// Bulk-import label for this node type
    pub fn label(self) -> &'static str {
        match self {
            NodeType::Drug => "drug",
        }
    }
}

/// Fields the adapter can provide for drug nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugField {
    Id,
    Name,
}

impl DrugField {
    /// All known drug fields
    pub const ALL: [DrugField; 2] = [DrugField::Id, DrugField::Name];
}

/// Edge types the adapter can provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    DrugDrugInteraction,
}

impl EdgeType {
    /// All known edge types
    pub const ALL: [EdgeType; 1] = [EdgeType::DrugDrugInteraction];

    /// Bulk-import relationship type for this edge type
    pub fn label(self) -> &'static str {
        match self {
            EdgeType::DrugDrugInteraction => "drug_drug_interaction",
        }
    }
}

/// Fields the adapter can provide for interaction edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionField {
    /// Reserved; no source column feeds it yet
    InteractionType,
    Level,
    Class,
}

impl InteractionField {
    /// All known interaction fields
    pub const ALL: [InteractionField; 3] = [
        InteractionField::InteractionType,
        InteractionField::Level,
        InteractionField::Class,
    ];
}

/// Resolve a caller-supplied subset against the full enumeration.
///
/// A non-empty `requested` list is returned unchanged (the caller is
/// trusted to pass valid members); an empty list resolves to `all_known`.
pub fn resolve<T>(requested: &[T], all_known: &[T]) -> HashSet<T>
where
    T: Copy + Eq + Hash,
{
    if requested.is_empty() {
        all_known.iter().copied().collect()
    } else {
        requested.iter().copied().collect()
    }
}

/// Caller overrides for the active type/field selection.
///
/// Empty lists (the default) resolve to "all known values".
#[derive(Debug, Clone, Default)]
pub struct SelectionOverrides {
    pub node_types: Vec<NodeType>,
    pub node_fields: Vec<DrugField>,
    pub edge_types: Vec<EdgeType>,
    pub edge_fields: Vec<InteractionField>,
}

/// The active type/field selection, resolved once at adapter construction.
///
/// Membership checks during emission go through these sets rather than
/// re-deriving the selection per record.
#[derive(Debug, Clone)]
pub struct TypeFieldSelection {
    pub node_types: HashSet<NodeType>,
    pub node_fields: HashSet<DrugField>,
    pub edge_types: HashSet<EdgeType>,
    pub edge_fields: HashSet<InteractionField>,
}

impl TypeFieldSelection {
    /// Resolve overrides into the active selection
    pub fn resolve(overrides: &SelectionOverrides) -> Self {
        Self {
            node_types: resolve(&overrides.node_types, &NodeType::ALL),
            node_fields: resolve(&overrides.node_fields, &DrugField::ALL),
            edge_types: resolve(&overrides.edge_types, &EdgeType::ALL),
            edge_fields: resolve(&overrides.edge_fields, &InteractionField::ALL),
        }
    }
}

impl Default for TypeFieldSelection {
    fn default() -> Self {
        Self::resolve(&SelectionOverrides::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_resolves_to_all_known() {
        let resolved = resolve(&[], &InteractionField::ALL);
        assert_eq!(resolved.len(), 3);
        assert!(resolved.contains(&InteractionField::Level));
        assert!(resolved.contains(&InteractionField::Class));
    }

    #[test]
    fn test_non_empty_request_passes_through() {
        let resolved = resolve(&[DrugField::Name], &DrugField::ALL);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains(&DrugField::Name));
        assert!(!resolved.contains(&DrugField::Id));
    }

    #[test]
    fn test_default_selection_covers_everything() {
        let selection = TypeFieldSelection::default();
        assert!(selection.node_types.contains(&NodeType::Drug));
        assert_eq!(selection.node_fields.len(), 2);
        assert!(selection.edge_types.contains(&EdgeType::DrugDrugInteraction));
        assert_eq!(selection.edge_fields.len(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(NodeType::Drug.label(), "drug");
        assert_eq!(EdgeType::DrugDrugInteraction.label(), "drug_drug_interaction");
    }
}
