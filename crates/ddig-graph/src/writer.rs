//! Bulk CSV writer for graph import
//!
//! Writes one CSV per node label and per edge label in the header format
//! `neo4j-admin database import` expects, plus a shell script invoking the
//! import. Property columns are fixed by the first record seen for a
//! label, in sorted key order; later records emit in the same order, with
//! missing keys left empty.

use ddig_common::{EdgeRecord, NodeRecord, Properties};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Result type alias for writer operations
pub type Result<T> = std::result::Result<T, WriterError>;

/// Error type for writer operations
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("File operation failed: {0}. Check permissions and disk space.")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One open per-label output file
struct LabelFile {
    writer: csv::Writer<File>,
    file_name: String,
    columns: Vec<String>,
    count: usize,
}

impl LabelFile {
    fn create(
        output_dir: &Path,
        file_name: String,
        id_header: &[&str],
        tail_header: &str,
        properties: &Properties,
    ) -> Result<Self> {
        let mut columns: Vec<String> = properties.keys().cloned().collect();
        columns.sort();

        let mut writer = csv::Writer::from_path(output_dir.join(&file_name))?;

        let mut header: Vec<String> = id_header.iter().map(|h| h.to_string()).collect();
        header.extend(columns.iter().cloned());
        header.push(tail_header.to_string());
        writer.write_record(&header)?;

        Ok(Self {
            writer,
            file_name,
            columns,
            count: 0,
        })
    }

    fn write_row(&mut self, ids: &[&str], properties: &Properties, label: &str) -> Result<()> {
        let mut row: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        for column in &self.columns {
            row.push(properties.get(column).cloned().unwrap_or_default());
        }
        row.push(label.to_string());

        self.writer.write_record(&row)?;
        self.count += 1;
        Ok(())
    }
}

/// Writes node and edge record streams into bulk-import files.
///
/// Consumes the streams produced by the normalizer; it does not validate
/// that edge endpoints exist in the node set.
pub struct BatchWriter {
    output_dir: PathBuf,
    nodes: BTreeMap<String, LabelFile>,
    edges: BTreeMap<String, LabelFile>,
}

impl BatchWriter {
    /// Create a writer rooted at `output_dir` (created if missing)
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            output_dir,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        })
    }

    /// Drain a node record stream into per-label files.
    ///
    /// Returns the number of records written by this call.
    pub fn write_nodes(&mut self, records: impl Iterator<Item = NodeRecord>) -> Result<usize> {
        let mut written = 0;

        for record in records {
            let label_file = match self.nodes.entry(record.label.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let file_name = format!("nodes_{}.csv", record.label);
                    entry.insert(LabelFile::create(
                        &self.output_dir,
                        file_name,
                        &["id:ID"],
                        ":LABEL",
                        &record.properties,
                    )?)
                },
            };

            label_file.write_row(&[&record.id], &record.properties, &record.label)?;
            written += 1;
        }

        for label_file in self.nodes.values_mut() {
            label_file.writer.flush()?;
        }

        info!(written, "wrote node records");
        Ok(written)
    }

    /// Drain an edge record stream into per-label files.
    ///
    /// Returns the number of records written by this call.
    pub fn write_edges(&mut self, records: impl Iterator<Item = EdgeRecord>) -> Result<usize> {
        let mut written = 0;

        for record in records {
            let label_file = match self.edges.entry(record.label.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let file_name = format!("edges_{}.csv", record.label);
                    entry.insert(LabelFile::create(
                        &self.output_dir,
                        file_name,
                        &["id", ":START_ID", ":END_ID"],
                        ":TYPE",
                        &record.properties,
                    )?)
                },
            };

            label_file.write_row(
                &[&record.id, &record.source, &record.target],
                &record.properties,
                &record.label,
            )?;
            written += 1;
        }

        for label_file in self.edges.values_mut() {
            label_file.writer.flush()?;
        }

        info!(written, "wrote edge records");
        Ok(written)
    }

    /// Emit the `neo4j-admin` import invocation referencing every file
    /// written so far. Returns the script path.
    pub fn write_import_call(&self) -> Result<PathBuf> {
        let mut lines = vec![
            "#!/bin/bash".to_string(),
            "# Bulk import call generated by ddig. Run from this directory.".to_string(),
            "neo4j-admin database import full \\".to_string(),
            "    --delimiter=\",\" \\".to_string(),
            "    --array-delimiter=\";\" \\".to_string(),
        ];

        for (label, label_file) in &self.nodes {
            lines.push(format!("    --nodes={}=\"{}\" \\", label, label_file.file_name));
        }
        for (label, label_file) in &self.edges {
            lines.push(format!(
                "    --relationships={}=\"{}\" \\",
                label, label_file.file_name
            ));
        }
        lines.push("    neo4j".to_string());

        let path = self.output_dir.join("neo4j-admin-import.sh");
        std::fs::write(&path, lines.join("\n") + "\n")?;

        info!(script = %path.display(), "wrote import call");
        Ok(path)
    }

    /// Log a per-label summary of everything written
    pub fn summary(&self) {
        for (label, label_file) in &self.nodes {
            info!(label = %label, count = label_file.count, "node label written");
        }
        for (label, label_file) in &self.edges {
            info!(label = %label, count = label_file.count, "edge label written");
        }
        info!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            output = %self.output_dir.display(),
            "bulk import files complete"
        );
    }

    /// Total node records written
    pub fn node_count(&self) -> usize {
        self.nodes.values().map(|f| f.count).sum()
    }

    /// Total edge records written
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|f| f.count).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn drug(id: &str, name: &str) -> NodeRecord {
        NodeRecord::new(id, "drug").with_property("name", name)
    }

    fn interaction(id: &str, source: &str, target: &str, level: &str) -> EdgeRecord {
        EdgeRecord::new(id, source, target, "drug_drug_interaction")
            .with_property("level", level)
            .with_property("class", "Various")
    }

    #[test]
    fn test_node_file_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        let written = writer
            .write_nodes(vec![drug("DDInter1", "Aspirin"), drug("DDInter2", "Ibuprofen")].into_iter())
            .unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(dir.path().join("nodes_drug.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "id:ID,name,:LABEL");
        assert_eq!(lines.next().unwrap(), "DDInter1,Aspirin,drug");
        assert_eq!(lines.next().unwrap(), "DDInter2,Ibuprofen,drug");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_edge_file_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        writer
            .write_edges(vec![interaction("abc", "DDInter1", "DDInter2", "Major")].into_iter())
            .unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join("edges_drug_drug_interaction.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "id,:START_ID,:END_ID,class,level,:TYPE");
        assert_eq!(
            lines.next().unwrap(),
            "abc,DDInter1,DDInter2,Various,Major,drug_drug_interaction"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        writer
            .write_nodes(vec![drug("DDInter1", "Interferon alfa-2a, recombinant")].into_iter())
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("nodes_drug.csv")).unwrap();
        assert!(contents.contains("\"Interferon alfa-2a, recombinant\""));
    }

    #[test]
    fn test_missing_property_emits_empty_cell() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        let bare = NodeRecord::new("DDInter2", "drug");
        writer
            .write_nodes(vec![drug("DDInter1", "Aspirin"), bare].into_iter())
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("nodes_drug.csv")).unwrap();
        assert!(contents.lines().any(|l| l == "DDInter2,,drug"));
    }

    #[test]
    fn test_records_are_grouped_by_label() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        let other = NodeRecord::new("X1", "pathway").with_property("name", "Coagulation");
        writer
            .write_nodes(vec![drug("DDInter1", "Aspirin"), other].into_iter())
            .unwrap();

        assert!(dir.path().join("nodes_drug.csv").exists());
        assert!(dir.path().join("nodes_pathway.csv").exists());
        assert_eq!(writer.node_count(), 2);
    }

    #[test]
    fn test_import_call_references_written_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        writer.write_nodes(vec![drug("DDInter1", "Aspirin")].into_iter()).unwrap();
        writer
            .write_edges(vec![interaction("abc", "DDInter1", "DDInter2", "Major")].into_iter())
            .unwrap();

        let script = writer.write_import_call().unwrap();
        let contents = std::fs::read_to_string(&script).unwrap();

        assert!(contents.starts_with("#!/bin/bash"));
        assert!(contents.contains("--nodes=drug=\"nodes_drug.csv\""));
        assert!(contents.contains(
            "--relationships=drug_drug_interaction=\"edges_drug_drug_interaction.csv\""
        ));
        assert!(contents.trim_end().ends_with("neo4j"));
    }

    #[test]
    fn test_counts_accumulate_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = BatchWriter::new(dir.path()).unwrap();

        writer.write_nodes(vec![drug("DDInter1", "Aspirin")].into_iter()).unwrap();
        writer.write_nodes(vec![drug("DDInter2", "Ibuprofen")].into_iter()).unwrap();

        assert_eq!(writer.node_count(), 2);
        assert_eq!(writer.edge_count(), 0);
    }
}
