use crate::dbc::core::strings;
use crate::dbc::types::database::{DatabaseDBC, SignalKey};

/// Decode a complete (possibly multi-line) comment statement.
///
/// Expected formats:
/// - `CM_ SG_ <MessageID> <SignalName> "Comment...";` → signal comment
/// - `CM_ BO_ <MessageID> "Comment...";` → message comment
///
/// Network (`CM_ "..."`), node (`CM_ BU_`) and environment (`CM_ EV_`) comments
/// carry nothing the catalog uses and are skipped.
pub(crate) fn decode(db: &mut DatabaseDBC, text: &str) {
    let body: &str = text.trim_start().trim_start_matches("CM_").trim_start();

    if let Some(rest) = body.strip_prefix("SG_") {
        decode_signal_comment(db, rest);
    } else if let Some(rest) = body.strip_prefix("BO_") {
        decode_message_comment(db, rest);
    }
}

fn decode_signal_comment(db: &mut DatabaseDBC, rest: &str) {
    let Some((id_tok, rest)) = rest.trim_start().split_once(char::is_whitespace) else {
        return;
    };
    let Ok(raw_id) = id_tok.parse::<u32>() else {
        return;
    };
    let Some((signal_name, rest)) = rest.trim_start().split_once(char::is_whitespace) else {
        return;
    };
    let Some((comment, _)) = strings::take_quoted(rest) else {
        return;
    };

    // Resolve the SignalKey by name within the message,
    // then take a mutable borrow of `db` to update the comment.
    let sig_key_opt: Option<SignalKey> = db.get_sig_key_in_message(raw_id, signal_name);
    if let Some(sig_key) = sig_key_opt
        && let Some(s) = db.get_sig_by_key_mut(sig_key)
    {
        s.comment = Some(comment);
    }
}

fn decode_message_comment(db: &mut DatabaseDBC, rest: &str) {
    let Some((id_tok, rest)) = rest.trim_start().split_once(char::is_whitespace) else {
        return;
    };
    let Ok(raw_id) = id_tok.parse::<u32>() else {
        return;
    };
    let Some((comment, _)) = strings::take_quoted(rest) else {
        return;
    };
    if let Some(msg) = db.get_message_by_raw_id_mut(raw_id) {
        msg.comment = Some(comment);
    }
}
