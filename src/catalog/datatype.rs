use serde::Serialize;

use crate::dbc::types::signal::SignalDBC;

/// Symbolic datatype of a catalog signal. Derived from [`SignalDBC`] metadata, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Datatype {
    Boolean,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Double,
}

impl Datatype {
    /// Infers the datatype of a signal. First matching rule wins:
    ///
    /// 1. `BOOLEAN` when the signal has one or two value choices and choice `0`
    ///    reads `false` or choice `1` reads `true` (case-insensitive).
    /// 2. `DOUBLE` when the signal is scaled (`factor != 1` or `offset != 0`),
    ///    longer than 64 bits, or IEEE-encoded.
    /// 3. The smallest signed/unsigned integer holding `bit_length` bits.
    pub fn infer(sig: &SignalDBC) -> Datatype {
        if is_boolean(sig) {
            return Datatype::Boolean;
        }
        if sig.factor != 1.0 || sig.offset != 0.0 || sig.bit_length > 64 || sig.is_float() {
            return Datatype::Double;
        }
        Datatype::integer(sig.bit_length, sig.is_signed())
    }

    fn integer(bit_length: u16, signed: bool) -> Datatype {
        match (bit_length, signed) {
            (0..=8, true) => Datatype::Int8,
            (0..=8, false) => Datatype::Uint8,
            (9..=16, true) => Datatype::Int16,
            (9..=16, false) => Datatype::Uint16,
            (17..=32, true) => Datatype::Int32,
            (17..=32, false) => Datatype::Uint32,
            (_, true) => Datatype::Int64,
            (_, false) => Datatype::Uint64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Datatype::Boolean => "BOOLEAN",
            Datatype::Int8 => "INT8",
            Datatype::Uint8 => "UINT8",
            Datatype::Int16 => "INT16",
            Datatype::Uint16 => "UINT16",
            Datatype::Int32 => "INT32",
            Datatype::Uint32 => "UINT32",
            Datatype::Int64 => "INT64",
            Datatype::Uint64 => "UINT64",
            Datatype::Double => "DOUBLE",
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_boolean(sig: &SignalDBC) -> bool {
    if sig.choices.is_empty() || sig.choices.len() > 2 {
        return false;
    }
    let labelled = |code: i64, label: &str| {
        sig.choices
            .get(&code)
            .is_some_and(|l| l.eq_ignore_ascii_case(label))
    };
    labelled(0, "false") || labelled(1, "true")
}
