//! DatabaseDBC model (SlotMap-backed).
//!
//! This module defines the in-memory **CAN database** filled by the DBC parser.
//! Storage uses **SlotMap** arenas with **stable keys**: [`MessageKey`], [`SignalKey`].
//! Iteration follows file order: `iter_messages()` walks `messages_order`, and each
//! [`MessageDBC`] keeps its signals in the order they were declared.
//!
//! Signal names are **not** unique across the database: two messages may carry a
//! signal with the same name, so signal lookups are always scoped to a message.
//!

use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::dbc::types::{
    message::{IdFormat, MessageDBC},
    signal::SignalDBC,
};

// --- Stable keys (SlotMap) ---
new_key_type! { pub struct MessageKey; }
new_key_type! { pub struct SignalKey; }

/// In-memory representation of a CAN database (DBC).
#[derive(Default, Clone, Debug)]
pub struct DatabaseDBC {
    // --- General information ---
    /// DatabaseDBC version string.
    pub version: String,

    // --- Main storage (stable-key maps) ---
    pub messages: SlotMap<MessageKey, MessageDBC>,
    pub signals: SlotMap<SignalKey, SignalDBC>,

    // --- Order "views"  ---
    pub messages_order: Vec<MessageKey>,

    // --- Lookups ---
    // raw BO_ id (extended flag included) → MessageKey, as referenced by CM_/VAL_/SIG_VALTYPE_
    pub(crate) msg_key_by_raw_id: HashMap<u32, MessageKey>,

    // Parsing state: last message seen (used by SG_ decoder)
    pub(crate) current_msg: Option<MessageKey>,
}

impl DatabaseDBC {
    // ------------- Messages ------------
    /// Adds a message and indexes its raw id. Also sets `current_msg` for subsequent SG_ lines.
    ///
    /// A later `BO_` reusing the same raw id takes over the id lookup.
    pub(crate) fn add_message(
        &mut self,
        name: &str,
        raw_id: u32,
        byte_length: u16,
        sender: &str,
    ) -> MessageKey {
        let (id_format, id) = IdFormat::split_raw_id(raw_id);

        let msg_key: MessageKey = self.messages.insert(MessageDBC {
            id_format,
            id,
            name: name.to_string(),
            byte_length,
            sender: sender.to_string(),
            signals: Vec::new(),
            comment: None,
        });

        self.messages_order.push(msg_key);
        self.msg_key_by_raw_id.insert(raw_id, msg_key);
        self.current_msg = Some(msg_key);
        msg_key
    }

    pub fn get_msg_key_by_raw_id(&self, raw_id: u32) -> Option<MessageKey> {
        self.msg_key_by_raw_id.get(&raw_id).copied()
    }

    pub fn get_message_by_key(&self, key: MessageKey) -> Option<&MessageDBC> {
        self.messages.get(key)
    }

    pub fn get_message_by_key_mut(&mut self, key: MessageKey) -> Option<&mut MessageDBC> {
        self.messages.get_mut(key)
    }

    /// Returns a `&MessageDBC` given the identifier as written on its `BO_` line.
    pub fn get_message_by_raw_id(&self, raw_id: u32) -> Option<&MessageDBC> {
        let key: MessageKey = self.get_msg_key_by_raw_id(raw_id)?;
        self.get_message_by_key(key)
    }

    /// Returns a `&mut MessageDBC` given the identifier as written on its `BO_` line.
    pub fn get_message_by_raw_id_mut(&mut self, raw_id: u32) -> Option<&mut MessageDBC> {
        let key: MessageKey = self.get_msg_key_by_raw_id(raw_id)?;
        self.get_message_by_key_mut(key)
    }

    // -------------- Signals ------------
    /// Appends a signal to the current message (the last parsed `BO_`).
    ///
    /// Returns `None` when no message has been declared yet.
    pub(crate) fn add_signal_to_current(&mut self, mut sig: SignalDBC) -> Option<SignalKey> {
        let msg_key: MessageKey = self.current_msg?;
        sig.message = msg_key;

        let sig_key: SignalKey = self.signals.insert(sig);
        if let Some(m) = self.messages.get_mut(msg_key) {
            m.signals.push(sig_key);
        }
        Some(sig_key)
    }

    /// Resolves a signal by name inside the message with the given raw id.
    pub fn get_sig_key_in_message(&self, raw_id: u32, name: &str) -> Option<SignalKey> {
        let msg: &MessageDBC = self.get_message_by_raw_id(raw_id)?;
        msg.signals.iter().copied().find(|&sk| {
            self.get_sig_by_key(sk)
                .is_some_and(|s| s.name == name)
        })
    }

    pub fn get_sig_by_key(&self, key: SignalKey) -> Option<&SignalDBC> {
        self.signals.get(key)
    }

    pub fn get_sig_by_key_mut(&mut self, key: SignalKey) -> Option<&mut SignalDBC> {
        self.signals.get_mut(key)
    }

    /// Iterate messages following `messages_order` (file order).
    pub fn iter_messages(&self) -> impl Iterator<Item = &MessageDBC> + '_ {
        self.messages_order
            .iter()
            .filter_map(|&k| self.messages.get(k))
    }

    /// Iterate every `(message, signal)` occurrence in file order.
    pub fn iter_signal_occurrences(&self) -> impl Iterator<Item = (&MessageDBC, &SignalDBC)> + '_ {
        self.iter_messages()
            .flat_map(move |msg| msg.signals(self).map(move |sig| (msg, sig)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(name: &str) -> SignalDBC {
        SignalDBC {
            name: name.to_string(),
            bit_length: 8,
            factor: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_signal_without_message_is_rejected() {
        let mut db = DatabaseDBC::default();
        assert!(db.add_signal_to_current(signal("Orphan")).is_none());
        assert!(db.signals.is_empty());
    }

    #[test]
    fn test_same_signal_name_in_two_messages() {
        let mut db = DatabaseDBC::default();
        db.add_message("Front", 100, 8, "ECU");
        db.add_signal_to_current(signal("Speed")).unwrap();
        db.add_message("Rear", 200, 8, "ECU");
        db.add_signal_to_current(signal("Speed")).unwrap();

        let occurrences: Vec<(String, String)> = db
            .iter_signal_occurrences()
            .map(|(m, s)| (m.name.clone(), s.name.clone()))
            .collect();
        assert_eq!(
            occurrences,
            vec![
                ("Front".to_string(), "Speed".to_string()),
                ("Rear".to_string(), "Speed".to_string())
            ]
        );

        let front = db.get_sig_key_in_message(100, "Speed").unwrap();
        let rear = db.get_sig_key_in_message(200, "Speed").unwrap();
        assert_ne!(front, rear);
    }
}
