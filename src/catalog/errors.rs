use std::io;
use thiserror::Error;

use crate::dbc::types::errors::DbcParseError;

/// Errors produced while loading the network-interface configuration.
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("Failed to read '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse '{path}' as a list of network interfaces. \nError: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No CAN_INTERFACE entry in the network-interface configuration")]
    NoCanInterface,
    #[error("CAN_INTERFACE entry #{index} has no usable interfaceId")]
    MissingInterfaceId { index: usize },
}

/// Errors returned by the catalog builders and writers.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Dbc(#[from] DbcParseError),
    #[error(transparent)]
    Interface(#[from] InterfaceError),
    #[error("Failed to serialize catalog. \nError: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed while writing '{path}'. \nError: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
