use crate::dbc::types::{
    database::{DatabaseDBC, SignalKey},
    signal::ValueType,
};

use tracing::debug;

/// Decodes a `SIG_VALTYPE_` line assigning floating-point encodings to a signal.
///
/// Shape: `SIG_VALTYPE_ <MsgID> <SignalName> : <Value>;`
/// where `<Value>` is `1` (IEEE float, 32-bit) or `2` (IEEE double, 64-bit).
/// The declared bit length is left untouched.
pub(crate) fn decode(db: &mut DatabaseDBC, line: &str) {
    let mut parts = line
        .trim_end_matches(';')
        .split(|c: char| c.is_ascii_whitespace() || c == ':')
        .filter(|t| !t.is_empty());

    // 1) "SIG_VALTYPE_"
    match parts.next() {
        Some("SIG_VALTYPE_") => {}
        _ => return,
    }

    // 2) Message ID
    let Some(Ok(raw_id)) = parts.next().map(|t| t.parse::<u32>()) else {
        return;
    };

    // 3) <SignalName>
    let Some(signal_name) = parts.next() else {
        return;
    };

    // 4) <Value>
    let value_type: ValueType = match parts.next() {
        Some("1") => ValueType::IeeeFloat,
        Some("2") => ValueType::IeeeDouble,
        _ => return,
    };

    let sig_key_opt: Option<SignalKey> = db.get_sig_key_in_message(raw_id, signal_name);
    match sig_key_opt.and_then(|sk| db.get_sig_by_key_mut(sk)) {
        Some(sig) => sig.value_type = value_type,
        None => debug!(raw_id, signal = signal_name, "SIG_VALTYPE_ for unknown signal ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc::types::signal::{SignalDBC, Signess};

    #[test]
    fn test_decode_marks_float() {
        let mut db = DatabaseDBC::default();
        db.add_message("Imu", 300, 8, "ECU");
        db.add_signal_to_current(SignalDBC {
            name: "Yaw".to_string(),
            bit_length: 32,
            sign: Signess::Signed,
            factor: 1.0,
            ..Default::default()
        });

        decode(&mut db, "SIG_VALTYPE_ 300 Yaw : 1;");
        let sig = db.signals.values().next().unwrap();
        assert_eq!(sig.value_type, ValueType::IeeeFloat);
        assert_eq!(sig.sign, Signess::Signed);
        assert_eq!(sig.bit_length, 32);
        assert!(sig.is_float());

        decode(&mut db, "SIG_VALTYPE_ 300 Yaw: 2;");
        assert_eq!(
            db.signals.values().next().unwrap().value_type,
            ValueType::IeeeDouble
        );
    }
}
