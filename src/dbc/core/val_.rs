use crate::dbc::core::strings;
use crate::dbc::types::database::{DatabaseDBC, SignalKey};
use std::collections::BTreeMap;

use tracing::debug;

/// Parse a VAL_ line that defines the value choices of a specific signal:
/// `VAL_ <MessageID> <SignalName> <value> "<desc>" ... ;`
///
/// Environment-variable tables (`VAL_ <EnvVar> ...`) and references to unknown
/// signals are skipped.
pub(crate) fn decode(db: &mut DatabaseDBC, line: &str) {
    let body: &str = line.trim().trim_start_matches("VAL_").trim_start();

    let Some((id_tok, rest)) = body.split_once(char::is_whitespace) else {
        return;
    };
    let Ok(raw_id) = id_tok.parse::<u32>() else {
        return;
    };
    let rest: &str = rest.trim_start();
    let Some((signal_name, mut rest)) = rest.split_once(char::is_whitespace) else {
        return;
    };

    // Collect pairs: numeric value followed by quoted description
    let mut table: BTreeMap<i64, String> = BTreeMap::new();
    loop {
        let trimmed: &str = rest.trim_start();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            break;
        }
        let (val_tok, after_val) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let Some(val) = parse_code(val_tok) else {
            debug!(signal = signal_name, token = val_tok, "unexpected VAL_ token; table truncated");
            break;
        };
        let Some((desc, after_desc)) = strings::take_quoted(after_val) else {
            break;
        };
        table.insert(val, desc);
        rest = after_desc;
    }

    let Some(sig_key): Option<SignalKey> = db.get_sig_key_in_message(raw_id, signal_name) else {
        debug!(raw_id, signal = signal_name, "VAL_ for unknown signal ignored");
        return;
    };
    if let Some(s) = db.get_sig_by_key_mut(sig_key) {
        s.choices = table;
    }
}

/// Codes are integers, though some tools write them as `1.0`.
fn parse_code(tok: &str) -> Option<i64> {
    tok.parse::<i64>().ok().or_else(|| {
        tok.parse::<f64>()
            .ok()
            .filter(|v| v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc::types::signal::SignalDBC;

    fn db_with_signal(name: &str) -> DatabaseDBC {
        let mut db = DatabaseDBC::default();
        db.add_message("Motor_01", 2527679645, 8, "Motor");
        db.add_signal_to_current(SignalDBC {
            name: name.to_string(),
            bit_length: 1,
            factor: 1.0,
            ..Default::default()
        });
        db
    }

    #[test]
    fn test_decode_value_table() {
        let mut db = db_with_signal("Failure");
        decode(
            &mut db,
            r#"VAL_ 2527679645 Failure 1 "Generic Failure" 0 "No Failures" ;"#,
        );

        let sig = db.signals.values().next().unwrap();
        assert_eq!(sig.choices.len(), 2);
        assert_eq!(sig.choices[&0], "No Failures");
        assert_eq!(sig.choices[&1], "Generic Failure");
    }

    #[test]
    fn test_labels_with_semicolons_and_negative_codes() {
        let mut db = db_with_signal("Gear");
        decode(&mut db, r#"VAL_ 2527679645 Gear -1 "R; reverse" 0 "N" 1.0 "D";"#);

        let sig = db.signals.values().next().unwrap();
        assert_eq!(sig.choices[&-1], "R; reverse");
        assert_eq!(sig.choices[&0], "N");
        assert_eq!(sig.choices[&1], "D");
    }

    #[test]
    fn test_unknown_targets_are_ignored() {
        let mut db = db_with_signal("Failure");
        decode(&mut db, r#"VAL_ 42 Failure 1 "On" ;"#);
        decode(&mut db, r#"VAL_ EnvVar 1 "On" ;"#);
        assert!(db.signals.values().next().unwrap().choices.is_empty());
    }
}
