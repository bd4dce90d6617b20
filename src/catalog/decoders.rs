//! Decoder catalog: raw CAN decode parameters for every signal occurrence.

use serde::Serialize;
use tracing::debug;

use crate::catalog::qualified_name;
use crate::dbc::types::{database::DatabaseDBC, message::MessageDBC, signal::SignalDBC};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DecoderType {
    #[serde(rename = "CAN_SIGNAL")]
    CanSignal,
}

/// One entry of the decoder catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoderEntry {
    #[serde(rename = "type")]
    pub kind: DecoderType,
    pub can_signal: CanSignal,
    pub fully_qualified_name: String,
    pub interface_id: String,
}

/// Raw bit-layout needed to extract a signal from a CAN frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanSignal {
    pub name: String,
    pub factor: f64,
    pub is_big_endian: bool,
    pub is_signed: bool,
    pub length: u16,
    pub offset: f64,
    pub start_bit: u16,
    pub message_id: u32,
}

impl DecoderEntry {
    pub fn from_signal(msg: &MessageDBC, sig: &SignalDBC, interface_id: &str) -> Self {
        DecoderEntry {
            kind: DecoderType::CanSignal,
            can_signal: CanSignal {
                name: sig.name.clone(),
                factor: sig.factor,
                is_big_endian: sig.is_big_endian(),
                is_signed: sig.is_signed(),
                length: sig.bit_length,
                offset: sig.offset,
                start_bit: sig.bit_start,
                message_id: msg.id,
            },
            fully_qualified_name: qualified_name(&[&msg.name, &sig.name]),
            interface_id: interface_id.to_string(),
        }
    }
}

/// Builds one decoder per `(message, signal)` occurrence, in file order.
///
/// Signal names are not de-duplicated here: the same name in two messages
/// yields two decoders with distinct fully-qualified names.
pub fn build_decoders(db: &DatabaseDBC, interface_id: &str) -> Vec<DecoderEntry> {
    let decoders: Vec<DecoderEntry> = db
        .iter_signal_occurrences()
        .map(|(msg, sig)| DecoderEntry::from_signal(msg, sig, interface_id))
        .collect();
    debug!(count = decoders.len(), interface_id, "decoder catalog built");
    decoders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TWO_SPEEDS: &str = r#"
BO_ 100 Front: 8 ECU
 SG_ Speed : 7|16@0- (0.01,-5) [0|0] "km/h" ECU
BO_ 2147484000 Rear: 8 ECU
 SG_ Speed : 3|9@1+ (1,0) [0|0] "" ECU
"#;

    #[test]
    fn test_one_decoder_per_occurrence() {
        let db = dbc::from_str(TWO_SPEEDS).unwrap();
        let decoders = build_decoders(&db, "can0");

        let names: Vec<&str> = decoders
            .iter()
            .map(|d| d.fully_qualified_name.as_str())
            .collect();
        assert_eq!(names, vec!["Vehicle.Front.Speed", "Vehicle.Rear.Speed"]);
        assert!(decoders.iter().all(|d| d.interface_id == "can0"));
    }

    #[test]
    fn test_raw_fields_preserved() {
        let db = dbc::from_str(TWO_SPEEDS).unwrap();
        let decoders = build_decoders(&db, "1");

        assert_eq!(
            decoders[0].can_signal,
            CanSignal {
                name: "Speed".to_string(),
                factor: 0.01,
                is_big_endian: true,
                is_signed: true,
                length: 16,
                offset: -5.0,
                start_bit: 7,
                message_id: 100,
            }
        );
        // extended-frame flag (bit 31) is not part of the message id
        assert_eq!(decoders[1].can_signal.message_id, 2147484000 - 0x8000_0000);
        assert!(!decoders[1].can_signal.is_big_endian);
        assert!(!decoders[1].can_signal.is_signed);
    }

    #[test]
    fn test_entry_json_shape() {
        let db = dbc::from_str(TWO_SPEEDS).unwrap();
        let value = serde_json::to_value(&build_decoders(&db, "1")[1]).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "CAN_SIGNAL",
                "canSignal": {
                    "name": "Speed",
                    "factor": 1.0,
                    "isBigEndian": false,
                    "isSigned": false,
                    "length": 9,
                    "offset": 0.0,
                    "startBit": 3,
                    "messageId": 352
                },
                "fullyQualifiedName": "Vehicle.Rear.Speed",
                "interfaceId": "1"
            })
        );
    }
}
