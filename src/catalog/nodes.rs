//! Node catalog: one semantic `sensor` definition per unique signal name.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{datatype::Datatype, dedup::{DuplicateSignal, SignalNameSet}, qualified_name};
use crate::dbc::types::{database::DatabaseDBC, signal::SignalDBC};

/// One entry of the node catalog: `{"sensor": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeEntry {
    pub sensor: Sensor,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub data_type: Datatype,
    pub fully_qualified_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NodeEntry {
    /// Builds the entry for `sig`. Boolean signals never carry a range.
    pub fn from_signal(sig: &SignalDBC) -> Self {
        let data_type: Datatype = Datatype::infer(sig);
        let (min, max) = match data_type {
            Datatype::Boolean => (None, None),
            _ => (sig.min, sig.max),
        };
        NodeEntry {
            sensor: Sensor {
                data_type,
                fully_qualified_name: qualified_name(&[&sig.name]),
                description: sig.comment.clone(),
                unit: sig.unit.clone(),
                min,
                max,
            },
        }
    }
}

/// Accumulates node entries across one or more databases.
///
/// The first occurrence of a signal name wins; later ones are dropped with a
/// warning and reported by [`NodeCatalog::duplicates`].
#[derive(Clone, Debug, Default)]
pub struct NodeCatalog {
    names: SignalNameSet,
    entries: Vec<NodeEntry>,
}

impl NodeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the catalog of a single database.
    pub fn from_database(db: &DatabaseDBC) -> Self {
        let mut catalog: NodeCatalog = NodeCatalog::new();
        catalog.add_database(db);
        catalog
    }

    /// Adds every not-yet-seen signal of `db`, in file order. Returns how many were added.
    pub fn add_database(&mut self, db: &DatabaseDBC) -> usize {
        let before: usize = self.entries.len();
        for (msg, sig) in db.iter_signal_occurrences() {
            if self.names.insert(&msg.name, &sig.name) {
                self.entries.push(NodeEntry::from_signal(sig));
            }
        }
        let added: usize = self.entries.len() - before;
        debug!(added, total = self.entries.len(), "node catalog updated");
        added
    }

    pub fn entries(&self) -> &[NodeEntry] {
        &self.entries
    }

    pub fn duplicates(&self) -> &[DuplicateSignal] {
        self.names.duplicates()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
