//! Glottolog classification read from the `languoid.csv` export
//!
//! Only the columns needed here are read; the export's other columns
//! (`bookkeeping`, `iso639P3code`, child counts, ...) are ignored.

use crate::error::{BuildError, Result};
use handfive_domain::{Classification, LanguoidLevel, Languoid, LineageEntry};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct LanguoidRecord {
    id: String,
    #[serde(default)]
    parent_id: Option<String>,
    name: String,
    level: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    country_ids: Option<String>,
}

#[derive(Debug)]
struct Node {
    languoid: Languoid,
    parent_id: Option<String>,
}

/// In-memory Glottolog tree
#[derive(Debug, Default)]
pub struct GlottologCsv {
    nodes: HashMap<String, Node>,
    order: Vec<String>,
}

impl GlottologCsv {
    /// Load the export from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|e| BuildError::csv(path, e))?;
        let tree = Self::from_csv(reader, path)?;
        info!(
            path = %path.display(),
            languoids = tree.order.len(),
            "Loaded Glottolog classification"
        );
        Ok(tree)
    }

    /// Load the export from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(csv::Reader::from_reader(reader), Path::new("<reader>"))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Self> {
        let mut tree = Self::default();
        for record in reader.deserialize() {
            let record: LanguoidRecord = record.map_err(|e| BuildError::csv(path, e))?;
            let level = LanguoidLevel::parse(&record.level).ok_or_else(|| {
                BuildError::Classification(format!(
                    "unknown level {:?} for languoid {}",
                    record.level, record.id
                ))
            })?;
            let countries = record
                .country_ids
                .as_deref()
                .unwrap_or("")
                .split_whitespace()
                .map(str::to_string)
                .collect();
            let node = Node {
                languoid: Languoid {
                    id: record.id.clone(),
                    name: record.name,
                    level,
                    latitude: record.latitude,
                    longitude: record.longitude,
                    countries,
                },
                parent_id: record.parent_id.filter(|p| !p.is_empty()),
            };
            if tree.nodes.insert(record.id.clone(), node).is_some() {
                return Err(BuildError::Classification(format!(
                    "duplicate languoid {}",
                    record.id
                )));
            }
            tree.order.push(record.id);
        }
        Ok(tree)
    }

    /// Number of languoids
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Classification for GlottologCsv {
    type Error = BuildError;

    fn languoids(&self) -> Result<Vec<Languoid>> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|n| n.languoid.clone())
            .collect())
    }

    fn lineage(&self, id: &str) -> Result<Vec<LineageEntry>> {
        let mut node = self
            .nodes
            .get(id)
            .ok_or_else(|| BuildError::Classification(format!("unknown languoid {}", id)))?;

        let mut lineage = Vec::new();
        while let Some(parent_id) = node.parent_id.as_deref() {
            if lineage.len() > self.nodes.len() {
                return Err(BuildError::Classification(format!("cycle in lineage of {}", id)));
            }
            node = self.nodes.get(parent_id).ok_or_else(|| {
                BuildError::Classification(format!(
                    "unknown parent {} in lineage of {}",
                    parent_id, id
                ))
            })?;
            lineage.push(LineageEntry {
                name: node.languoid.name.clone(),
                id: node.languoid.id.clone(),
                level: node.languoid.level,
            });
        }
        lineage.reverse();
        Ok(lineage)
    }
}
