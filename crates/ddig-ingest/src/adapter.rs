//! DDInter adapter
//!
//! Turns the per-category interaction tables into normalized drug nodes
//! and interaction edges. Preprocessing is eager: construction reads every
//! file into two consolidated in-memory tables, and fails outright on the
//! first unreadable file, missing column, or unrecognized category code.
//! Emission is lazy: [`DdInterAdapter::nodes`] and
//! [`DdInterAdapter::edges`] return fresh iterators over the immutable
//! tables, so callers can consume either stream independently and more
//! than once.

use crate::categories;
use crate::error::{IngestError, Result};
use crate::registry::{NodeType, SelectionOverrides, TypeFieldSelection};
use ddig_common::{EdgeRecord, NodeRecord, Properties};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Required columns of every source table
const COLUMN_ID_A: &str = "DDInterID_A";
const COLUMN_DRUG_A: &str = "Drug_A";
const COLUMN_ID_B: &str = "DDInterID_B";
const COLUMN_DRUG_B: &str = "Drug_B";
const COLUMN_LEVEL: &str = "Level";

/// One row of the consolidated drug table
#[derive(Debug, Clone)]
struct DrugRow {
    id: String,
    name: String,
}

/// One row of the consolidated interaction table
#[derive(Debug, Clone)]
struct InteractionRow {
    source: String,
    target: String,
    level: String,
    class: &'static str,
}

impl InteractionRow {
    /// Content fingerprint over the full field set: canonical
    /// tab-separated serialization, md5, lowercase hex. Field order and
    /// separator are fixed, so structurally identical rows from different
    /// files collide deterministically.
    fn fingerprint(&self) -> String {
        let canonical = format!(
            "{}\t{}\t{}\t{}",
            self.source, self.target, self.level, self.class
        );
        format!("{:x}", md5::compute(canonical.as_bytes()))
    }
}

/// Adapter over a batch of DDInter category tables.
///
/// Holds the consolidated, deduplicated drug table and the consolidated
/// interaction table for its whole lifetime; both are immutable after
/// construction.
#[derive(Debug)]
pub struct DdInterAdapter {
    selection: TypeFieldSelection,
    drugs: Vec<DrugRow>,
    interactions: Vec<InteractionRow>,
}

impl DdInterAdapter {
    /// Build the adapter by preprocessing every file in `paths`.
    ///
    /// Any failure leaves no usable instance: there is no partial or
    /// retry state.
    pub fn from_paths<P: AsRef<Path>>(
        paths: &[P],
        overrides: SelectionOverrides,
    ) -> Result<Self> {
        let selection = TypeFieldSelection::resolve(&overrides);

        info!(files = paths.len(), "preprocessing interaction tables");

        let mut drugs: Vec<DrugRow> = Vec::new();
        let mut interactions: Vec<InteractionRow> = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let class = resolve_class(path)?;
            let before = interactions.len();

            read_table(path, class, &mut drugs, &mut interactions)?;

            debug!(
                file = %path.display(),
                class,
                rows = interactions.len() - before,
                "loaded interaction table"
            );
        }

        // Deduplicate drugs, first-seen-wins per identifier: exactly one
        // node row survives per distinct id, in file order. When the same
        // id carries differing names across files, the first name is kept
        // silently.
        let mut seen: HashSet<String> = HashSet::with_capacity(drugs.len());
        drugs.retain(|row| seen.insert(row.id.clone()));

        // Interactions are intentionally not deduplicated; identical rows
        // share a fingerprint instead.
        info!(
            drugs = drugs.len(),
            interactions = interactions.len(),
            "preprocessing complete"
        );

        Ok(Self {
            selection,
            drugs,
            interactions,
        })
    }

    /// Lazy, restartable stream of drug node records.
    ///
    /// Empty unless `Drug` is in the resolved node-type set. Apostrophes
    /// are stripped from names before emission. The resolved node-field
    /// selection is accepted but not applied: the attribute map always
    /// carries `name`.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRecord> + '_ {
        let rows: &[DrugRow] = if self.selection.node_types.contains(&NodeType::Drug) {
            &self.drugs
        } else {
            &[]
        };

        rows.iter().map(|row| {
            let mut properties = Properties::new();
            properties.insert("name".to_string(), row.name.replace('\'', ""));

            NodeRecord {
                id: row.id.clone(),
                label: NodeType::Drug.label().to_string(),
                properties,
            }
        })
    }

    /// Lazy, restartable stream of interaction edge records.
    ///
    /// No type/field filtering is applied to edges: every row is emitted
    /// with both `level` and `class`, regardless of the resolved edge
    /// selection.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        self.interactions.iter().map(|row| {
            let mut properties = Properties::new();
            properties.insert("level".to_string(), row.level.clone());
            properties.insert("class".to_string(), row.class.to_string());

            EdgeRecord {
                id: row.fingerprint(),
                source: row.source.clone(),
                target: row.target.clone(),
                label: "drug_drug_interaction".to_string(),
                properties,
            }
        })
    }

    /// Number of records [`Self::nodes`] would yield.
    ///
    /// Counts by materializing the node stream; O(n) per call, not cached.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// The resolved type/field selection
    pub fn selection(&self) -> &TypeFieldSelection {
        &self.selection
    }
}

/// Resolve the therapeutic class for a source file from its name suffix
fn resolve_class(path: &Path) -> Result<&'static str> {
    let code = categories::code_from_path(path).unwrap_or_default();
    categories::class_for_code(code)
        .ok_or_else(|| IngestError::unknown_category_code(path.display().to_string(), code))
}

/// Read one category table, appending both participant projections to the
/// drug table and the pairwise rows to the interaction table.
fn read_table(
    path: &Path,
    class: &'static str,
    drugs: &mut Vec<DrugRow>,
    interactions: &mut Vec<InteractionRow>,
) -> Result<()> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestError::missing_column(path.display().to_string(), name))
    };

    let id_a = column(COLUMN_ID_A)?;
    let drug_a = column(COLUMN_DRUG_A)?;
    let id_b = column(COLUMN_ID_B)?;
    let drug_b = column(COLUMN_DRUG_B)?;
    let level = column(COLUMN_LEVEL)?;

    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

        drugs.push(DrugRow {
            id: field(id_a),
            name: field(drug_a),
        });
        drugs.push(DrugRow {
            id: field(id_b),
            name: field(drug_b),
        });

        interactions.push(InteractionRow {
            source: field(id_a),
            target: field(id_b),
            level: field(level),
            class,
        });
    }

    Ok(())
}
