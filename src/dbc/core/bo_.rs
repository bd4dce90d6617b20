use crate::dbc::types::{database::DatabaseDBC, errors::DbcParseError};

/// Decode a `BO_` line robustly using `:` as separator between name and length.
/// Accepts both: `BO_ 123 NAME: 8 Node` and `BO_ 123 NAME : 8 Node`.
pub(crate) fn decode(db: &mut DatabaseDBC, line: &str, line_no: usize) -> Result<(), DbcParseError> {
    let line: &str = line.trim();

    // Strip leading "BO_"
    let after: &str = line.trim_start_matches("BO_").trim();

    // 1) ID (first token)
    let mut split_once = after.splitn(2, char::is_whitespace);
    let id_str: &str = split_once.next().unwrap_or("");
    let rest: &str = split_once.next().unwrap_or("").trim();
    let raw_id: u32 = id_str
        .parse::<u32>()
        .map_err(|_| DbcParseError::syntax(line_no, format!("invalid message id '{id_str}'")))?;

    // 2) NAME (everything up to the first ':')
    let Some(colon_pos) = rest.find(':') else {
        return Err(DbcParseError::syntax(line_no, "missing ':' after message name"));
    };
    let name: &str = rest[..colon_pos].trim();
    if name.is_empty() {
        return Err(DbcParseError::syntax(line_no, "empty message name"));
    }

    // 3) After ':' → <len> <sender?>
    let mut it = rest[colon_pos + 1..].split_ascii_whitespace();
    let len_str: &str = it.next().unwrap_or("");
    let byte_length: u16 = len_str.parse::<u16>().map_err(|_| {
        DbcParseError::syntax(line_no, format!("invalid length '{len_str}' for message '{name}'"))
    })?;
    let sender: &str = it.next().unwrap_or("").trim_end_matches(';');

    db.add_message(name, raw_id, byte_length, sender);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc::types::message::IdFormat;

    #[test]
    fn test_decode_both_colon_styles() {
        let mut db = DatabaseDBC::default();
        decode(&mut db, "BO_ 708 ZV_04: 8 Gateway", 1).unwrap();
        decode(&mut db, "BO_ 2527679645 Motor_01 : 64 Motor", 2).unwrap();

        let names: Vec<&str> = db.iter_messages().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ZV_04", "Motor_01"]);

        let motor = db.get_message_by_raw_id(2527679645).unwrap();
        assert_eq!(motor.id, 0x16A9549D);
        assert_eq!(motor.id_format, IdFormat::Extended);
        assert_eq!(motor.byte_length, 64);
        assert_eq!(motor.sender, "Motor");
    }

    #[test]
    fn test_decode_rejects_bad_id() {
        let mut db = DatabaseDBC::default();
        let err = decode(&mut db, "BO_ x12 Broken: 8 ECU", 7).unwrap_err();
        assert!(matches!(err, DbcParseError::Syntax { line: 7, .. }));
        assert!(db.messages.is_empty());
    }
}
