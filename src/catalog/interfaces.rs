//! Network-interface configuration (`network-interfaces.json`).
//!
//! The file is a JSON array of objects with at least `type` and `interfaceId`.
//! Only objects whose `type` is `CAN_INTERFACE` are consulted; any extra keys are ignored.

use serde::Deserialize;
use std::path::Path;

use tracing::debug;

use crate::catalog::errors::InterfaceError;

/// Type tag of the only interface kind the decoder catalog understands.
pub const CAN_INTERFACE: &str = "CAN_INTERFACE";

/// Default location of the configuration, relative to the working directory.
pub const DEFAULT_INTERFACES_PATH: &str = "network-interfaces.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkInterface {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "interfaceId", default)]
    pub interface_id: Option<InterfaceId>,
}

/// Interface ids are usually strings, but plain integers are accepted too.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InterfaceId {
    Text(String),
    Number(i64),
}

impl InterfaceId {
    pub fn to_id_string(&self) -> String {
        match self {
            InterfaceId::Text(s) => s.clone(),
            InterfaceId::Number(n) => n.to_string(),
        }
    }
}

impl NetworkInterface {
    pub fn is_can(&self) -> bool {
        self.kind == CAN_INTERFACE
    }
}

/// Parses the configuration from JSON text. `origin` only labels errors.
pub fn from_json_str(text: &str, origin: &str) -> Result<Vec<NetworkInterface>, InterfaceError> {
    serde_json::from_str(text).map_err(|source| InterfaceError::Parse {
        path: origin.to_string(),
        source,
    })
}

/// Reads and parses the configuration file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<NetworkInterface>, InterfaceError> {
    let path: &Path = path.as_ref();
    let path_owned: String = path.display().to_string();
    let text: String = std::fs::read_to_string(path).map_err(|source| InterfaceError::Read {
        path: path_owned.clone(),
        source,
    })?;
    let interfaces: Vec<NetworkInterface> = from_json_str(&text, &path_owned)?;
    debug!(path = %path_owned, count = interfaces.len(), "loaded network interfaces");
    Ok(interfaces)
}

/// Resolves the CAN interface id to stamp on decoder entries.
///
/// When several `CAN_INTERFACE` entries exist, the last one in file order is used.
pub fn resolve_can_interface_id(interfaces: &[NetworkInterface]) -> Result<String, InterfaceError> {
    let (index, iface) = interfaces
        .iter()
        .enumerate()
        .rev()
        .find(|(_, iface)| iface.is_can())
        .ok_or(InterfaceError::NoCanInterface)?;

    let id: String = iface
        .interface_id
        .as_ref()
        .map(InterfaceId::to_id_string)
        .ok_or(InterfaceError::MissingInterfaceId { index })?;
    debug!(interface_id = %id, "resolved CAN interface");
    Ok(id)
}

/// Loads `path` and resolves its CAN interface id in one step.
pub fn load_can_interface_id(path: impl AsRef<Path>) -> Result<String, InterfaceError> {
    resolve_can_interface_id(&load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_last_can_interface_wins() {
        let interfaces = from_json_str(
            r#"[
                {"type": "CAN_INTERFACE", "interfaceId": "1", "canInterface": {"name": "vcan0"}},
                {"type": "OBD_INTERFACE", "interfaceId": "obd"},
                {"type": "CAN_INTERFACE", "interfaceId": "2"}
            ]"#,
            "inline",
        )
        .unwrap();
        assert_eq!(interfaces.len(), 3);
        assert_eq!(resolve_can_interface_id(&interfaces).unwrap(), "2");
    }

    #[test]
    fn test_numeric_interface_id() {
        let interfaces =
            from_json_str(r#"[{"type": "CAN_INTERFACE", "interfaceId": 7}]"#, "inline").unwrap();
        assert_eq!(resolve_can_interface_id(&interfaces).unwrap(), "7");
    }

    #[test]
    fn test_no_can_interface() {
        let interfaces =
            from_json_str(r#"[{"type": "OBD_INTERFACE", "interfaceId": "0"}]"#, "inline").unwrap();
        assert!(matches!(
            resolve_can_interface_id(&interfaces),
            Err(InterfaceError::NoCanInterface)
        ));
        assert!(matches!(
            resolve_can_interface_id(&[]),
            Err(InterfaceError::NoCanInterface)
        ));
    }

    #[test]
    fn test_can_interface_without_id() {
        let interfaces = from_json_str(r#"[{"type": "CAN_INTERFACE"}]"#, "inline").unwrap();
        assert!(matches!(
            resolve_can_interface_id(&interfaces),
            Err(InterfaceError::MissingInterfaceId { index: 0 })
        ));
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            load("no/such/network-interfaces.json"),
            Err(InterfaceError::Read { .. })
        ));
        assert!(matches!(
            from_json_str(r#"{"type": "CAN_INTERFACE"}"#, "inline"),
            Err(InterfaceError::Parse { .. })
        ));
    }
}
