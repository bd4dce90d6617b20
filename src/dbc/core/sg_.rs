use crate::dbc::core::strings;
use crate::dbc::types::{
    database::DatabaseDBC,
    errors::DbcParseError,
    message::MuxRole,
    signal::{Endianness, SignalDBC, Signess},
};

/// Decode a `SG_` line belonging to the **current message** (the last parsed BO_).
/// Format (typical):
/// SG_ <name> [M|mX]: <bit_start>|<bit_length>@<endian><sign> (<factor>,<offset>) [<min>|<max>] "<unit>" <receivers...>
pub(crate) fn decode(db: &mut DatabaseDBC, line: &str, line_no: usize) -> Result<(), DbcParseError> {
    let line: &str = line.trim().trim_end_matches(';');
    let Some((left, right)) = line.split_once(':') else {
        return Err(DbcParseError::syntax(line_no, "missing ':' after signal name"));
    };

    // Left part analysis SG_ NAME [M|mX]
    let mut left_it = left.split_ascii_whitespace();
    let _sg: &str = left_it.next().unwrap_or(""); // "SG_"
    let name: &str = left_it.next().unwrap_or("");
    let mux_tag: &str = left_it.next().unwrap_or(""); // can be "", "M", "m0", "m0M"
    if name.is_empty() {
        return Err(DbcParseError::syntax(line_no, "empty signal name"));
    }
    let (mux_role, mux_value) = decode_mux_tag(mux_tag);

    // right part analysis <bit_start>|<bit_length>@<endian><sign> (<factor>,<offset>) ...
    let right: &str = right.trim();
    // the space before "(factor,offset)" is optional
    let split_at: usize = right
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(right.len());
    let (bit_info, rest) = right.split_at(split_at);

    // 1) bit info: "63|1@1+"
    let layout_err = || DbcParseError::syntax(line_no, format!("invalid bit layout '{bit_info}' for signal '{name}'"));
    let (pos_len, es) = bit_info.split_once('@').ok_or_else(layout_err)?;
    let (start_str, len_str) = pos_len.split_once('|').ok_or_else(layout_err)?;
    let bit_start: u16 = start_str.trim().parse().map_err(|_| layout_err())?;
    let bit_length: u16 = len_str.trim().parse().map_err(|_| layout_err())?;
    let mut es_chars = es.chars();
    let endian: Endianness = es_chars
        .next()
        .and_then(Endianness::from_dbc)
        .ok_or_else(layout_err)?;
    let sign: Signess = es_chars
        .next()
        .and_then(Signess::from_dbc)
        .ok_or_else(layout_err)?;

    // 2) "(factor,offset)"
    let Some((scaling, rest)) = enclosed(rest, '(', ')') else {
        return Err(DbcParseError::syntax(
            line_no,
            format!("missing (factor,offset) for signal '{name}'"),
        ));
    };
    let (factor_str, offset_str) = scaling.split_once(',').unwrap_or((scaling, "0"));
    let factor: f64 = parse_number(factor_str).ok_or_else(|| {
        DbcParseError::syntax(line_no, format!("invalid factor '{factor_str}' for signal '{name}'"))
    })?;
    let offset: f64 = parse_number(offset_str).ok_or_else(|| {
        DbcParseError::syntax(line_no, format!("invalid offset '{offset_str}' for signal '{name}'"))
    })?;

    // 3) "[min|max]", `[0|0]` means "no range"
    let (min, max, rest) = match enclosed(rest, '[', ']') {
        Some((bounds, rest)) => {
            let (min_str, max_str) = bounds.split_once('|').unwrap_or((bounds, "0"));
            let min: Option<f64> = parse_number(min_str);
            let max: Option<f64> = parse_number(max_str);
            match (min, max) {
                (Some(lo), Some(hi)) if lo == 0.0 && hi == 0.0 => (None, None, rest),
                (lo, hi) => (lo, hi, rest),
            }
        }
        None => (None, None, rest),
    };

    // 4) "unit", empty means no unit
    let (unit, rest) = match strings::take_quoted(rest) {
        Some((unit, rest)) => (Some(unit).filter(|u| !u.is_empty()), rest),
        None => (None, rest),
    };

    // 5) receivers are not needed for the catalog; anything left over is ignored
    let _receivers: &str = rest.trim();

    let sig: SignalDBC = SignalDBC {
        name: name.to_string(),
        bit_start,
        bit_length,
        endian,
        sign,
        factor,
        offset,
        min,
        max,
        unit,
        mux_role,
        mux_value,
        ..Default::default()
    };

    db.add_signal_to_current(sig)
        .map(|_| ())
        .ok_or_else(|| DbcParseError::syntax(line_no, format!("signal '{name}' declared before any BO_")))
}

/// `M` → multiplexor, `m3` → multiplexed by value 3, `m3M` → both (extended multiplexing,
/// treated as multiplexed).
fn decode_mux_tag(tag: &str) -> (MuxRole, Option<u32>) {
    if tag == "M" {
        return (MuxRole::Multiplexor, None);
    }
    if let Some(rest) = tag.strip_prefix('m')
        && let Ok(v) = rest.trim_end_matches('M').parse::<u32>()
    {
        return (MuxRole::Multiplexed, Some(v));
    }
    (MuxRole::None, None)
}

/// Returns the text between `open` and the next `close`, plus what follows.
fn enclosed(s: &str, open: char, close: char) -> Option<(&str, &str)> {
    let s: &str = s.trim_start();
    let body: &str = s.strip_prefix(open)?;
    let end: usize = body.find(close)?;
    Some((body[..end].trim(), &body[end + close.len_utf8()..]))
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}
