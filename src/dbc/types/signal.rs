use crate::dbc::types::{database::MessageKey, message::MuxRole};
use std::collections::BTreeMap;

/// Definition of a signal within a CAN message (DBC).
///
/// Describes position/bit-length, byte order, sign, scaling (factor/offset),
/// optional physical range and unit, comment and value choices.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct SignalDBC {
    /// Parent message key.
    pub message: MessageKey,
    /// Signal name.
    pub name: String,
    /// Start bit as written in the DBC (`SG_ ... : <start>|...`).
    pub bit_start: u16,
    /// Bit length.
    pub bit_length: u16,
    /// Byte order.
    pub endian: Endianness,
    /// Sign as declared on the `SG_` line.
    pub sign: Signess,
    /// Integer or IEEE float encoding (DBC `SIG_VALTYPE_` section).
    pub value_type: ValueType,
    /// Scaling factor.
    pub factor: f64,
    /// Scaling offset.
    pub offset: f64,
    /// Minimum physical value (`None` when the DBC declares `[0|0]`).
    pub min: Option<f64>,
    /// Maximum physical value (`None` when the DBC declares `[0|0]`).
    pub max: Option<f64>,
    /// Unit of measure (`None` when the DBC declares `""`).
    pub unit: Option<String>,
    /// Associated comment (DBC `CM_ SG_` section).
    pub comment: Option<String>,
    /// Value-to-label mapping (DBC `VAL_` section).
    pub choices: BTreeMap<i64, String>,
    /// Multiplexing role (`MuxRole::None` when unused).
    pub mux_role: MuxRole,
    /// For multiplexed signals, the selector value (`m<n>`).
    pub mux_value: Option<u32>,
}

impl SignalDBC {
    pub fn is_big_endian(&self) -> bool {
        matches!(self.endian, Endianness::Motorola)
    }

    pub fn is_signed(&self) -> bool {
        matches!(self.sign, Signess::Signed)
    }

    pub fn is_float(&self) -> bool {
        !matches!(self.value_type, ValueType::Integer)
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Endianness {
    #[default]
    Motorola, // 0
    Intel, // 1
}

impl Endianness {
    /// Maps the DBC byte-order digit (`@0` / `@1`).
    pub(crate) fn from_dbc(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Endianness::Motorola),
            '1' => Some(Endianness::Intel),
            _ => None,
        }
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signess {
    #[default]
    Unsigned, // +
    Signed, // -
}

impl Signess {
    /// Maps the DBC value-type character (`+` / `-`).
    pub(crate) fn from_dbc(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(Signess::Unsigned),
            '-' => Some(Signess::Signed),
            _ => None,
        }
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueType {
    #[default]
    Integer,
    IeeeFloat,  // SIG_VALTYPE_ = 1
    IeeeDouble, // SIG_VALTYPE_ = 2
}
