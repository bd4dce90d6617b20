//! # signal_catalog
//!
//! Builds vehicle-signal catalogs from **automotive CAN** databases.
//!
//! ## Highlights
//! - **DBC parser**: load CAN databases from `.dbc` into a SlotMap-backed [`DatabaseDBC`],
//!   keeping messages and signals in file order.
//! - **Datatype inference**: every signal maps to exactly one [`Datatype`]
//!   (boolean, sized integer or double).
//! - **Node catalog**: one `sensor` entry per unique signal name; duplicates are
//!   dropped with a warning, first occurrence wins ([`NodeCatalog`]).
//! - **Decoder catalog**: one `CAN_SIGNAL` entry per signal occurrence, bound to
//!   the CAN interface id of `network-interfaces.json` ([`DecoderEntry`]).
//! - **Stable output**: sorted keys, 4-space indent, byte-identical across runs.
//!

pub mod catalog;
pub mod dbc;
pub mod logging;

// Top-level re-exports
#[doc(inline)]
pub use crate::catalog::{
    datatype::Datatype,
    decoders::{CanSignal, DecoderEntry, build_decoders},
    dedup::{DuplicateSignal, SignalNameSet},
    errors::{CatalogError, InterfaceError},
    generate_decoders, generate_nodes,
    interfaces::NetworkInterface,
    nodes::{NodeCatalog, NodeEntry},
    output::OutputTarget,
};
#[doc(inline)]
pub use crate::dbc::types::{
    database::{DatabaseDBC, MessageKey, SignalKey},
    errors::DbcParseError,
    message::MessageDBC,
    signal::SignalDBC,
};
