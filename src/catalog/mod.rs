//! # catalog
//!
//! Turns a parsed [`DatabaseDBC`] into the two JSON signal catalogs:
//! - **nodes**: one `sensor` per unique signal name, with an inferred
//!   [`Datatype`](datatype::Datatype);
//! - **decoders**: one `CAN_SIGNAL` decoder per signal occurrence, bound to the
//!   CAN interface id from `network-interfaces.json`.

pub mod datatype;
pub mod decoders;
pub mod dedup;
pub mod errors;
pub mod interfaces;
pub mod nodes;
pub mod output;

use std::path::Path;

use tracing::info;

use crate::catalog::{
    decoders::{DecoderEntry, build_decoders},
    errors::CatalogError,
    nodes::NodeCatalog,
    output::{OutputTarget, write_json},
};
use crate::dbc::{self, types::database::DatabaseDBC};

/// Root segment of every fully-qualified name.
pub const VEHICLE_ROOT: &str = "Vehicle";

/// Joins `parts` under [`VEHICLE_ROOT`] with dots.
pub fn qualified_name(parts: &[&str]) -> String {
    let mut name: String = VEHICLE_ROOT.to_string();
    for part in parts {
        name.push('.');
        name.push_str(part);
    }
    name
}

/// Parses `dbc_path`, builds its node catalog and writes it to `target`.
pub fn generate_nodes(dbc_path: impl AsRef<Path>, target: &OutputTarget) -> Result<NodeCatalog, CatalogError> {
    let db: DatabaseDBC = dbc::from_file(dbc_path)?;
    let catalog: NodeCatalog = NodeCatalog::from_database(&db);
    write_json(catalog.entries(), target)?;
    info!(
        nodes = catalog.len(),
        duplicates = catalog.duplicates().len(),
        "node catalog written"
    );
    Ok(catalog)
}

/// Resolves the CAN interface id from `interfaces_path`, parses `dbc_path`, builds
/// its decoder catalog and writes it to `target`.
///
/// Nothing is written unless both inputs load and a CAN interface is found.
pub fn generate_decoders(
    dbc_path: impl AsRef<Path>,
    interfaces_path: impl AsRef<Path>,
    target: &OutputTarget,
) -> Result<Vec<DecoderEntry>, CatalogError> {
    let interface_id: String = interfaces::load_can_interface_id(interfaces_path)?;
    let db: DatabaseDBC = dbc::from_file(dbc_path)?;
    let decoders: Vec<DecoderEntry> = build_decoders(&db, &interface_id);
    write_json(&decoders, target)?;
    info!(decoders = decoders.len(), interface_id = %interface_id, "decoder catalog written");
    Ok(decoders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name(&["Speed"]), "Vehicle.Speed");
        assert_eq!(qualified_name(&["Front", "Speed"]), "Vehicle.Front.Speed");
    }
}
