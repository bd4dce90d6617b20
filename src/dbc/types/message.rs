use crate::dbc::types::{
    database::{DatabaseDBC, SignalKey},
    signal::SignalDBC,
};

/// Flag carried by bit 31 of a `BO_` identifier for extended (29-bit) frames.
pub(crate) const EXTENDED_ID_FLAG: u32 = 0x8000_0000;

/// CAN message defined in the database.
///
/// Keeps the frame id (extended-frame flag stripped), the `name`, the payload
/// length and the ordered list of its signals.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct MessageDBC {
    /// ID Format (Standard or Extended)
    pub id_format: IdFormat,
    /// Numeric CAN ID, without the DBC extended-frame flag.
    pub id: u32,
    /// Message name.
    pub name: String,
    /// Payload length in bytes.
    pub byte_length: u16,
    /// Transmitting node name as written on the `BO_` line.
    pub sender: String,
    /// Signals that belong to this message, in file order.
    pub signals: Vec<SignalKey>,
    /// Associated comment (DBC `CM_ BO_` section).
    pub comment: Option<String>,
}

impl MessageDBC {
    /// Convenience iterator over the `SignalDBC`s belonging to this message.
    pub fn signals<'a>(&'a self, db: &'a DatabaseDBC) -> impl Iterator<Item = &'a SignalDBC> + 'a {
        self.signals
            .iter()
            .filter_map(move |&key| db.get_sig_by_key(key))
    }
}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub enum IdFormat {
    #[default]
    Standard,
    Extended,
}

impl IdFormat {
    /// Splits a raw `BO_` identifier into format and frame id.
    pub(crate) fn split_raw_id(raw: u32) -> (IdFormat, u32) {
        if raw & EXTENDED_ID_FLAG != 0 {
            (IdFormat::Extended, raw & !EXTENDED_ID_FLAG)
        } else {
            (IdFormat::Standard, raw)
        }
    }
}

/// What role (if any) a signal plays in multiplexing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MuxRole {
    /// Not multiplexed (always present).
    #[default]
    None,
    /// This signal is the multiplexer switch (marked as `M` in DBC).
    Multiplexor,
    /// This signal is gated by a multiplexer value (marked as `mX`).
    Multiplexed,
}
