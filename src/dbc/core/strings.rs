//! Utilities for parsing quoted strings in DBC files.
//!
//! These helpers support escaped quotes (`\"`) and multi-line quoted strings,
//! which are common in `CM_` comments and `VAL_` labels.

/// Counts unescaped double quotes in a string.
///
/// A quote is considered escaped if immediately preceded by an **odd** number
/// of backslashes. This matches how DBC escapes quoted content.
pub(crate) fn count_unescaped_quotes(s: &str) -> usize {
    let mut count = 0usize;
    let mut backslashes = 0usize;
    for ch in s.chars() {
        if ch == '\\' {
            backslashes += 1;
            continue;
        }
        if ch == '"' && backslashes.is_multiple_of(2) {
            count += 1;
        }
        backslashes = 0;
    }
    count
}

/// Returns `true` if the string contains at least two unescaped quotes.
pub(crate) fn has_complete_quoted_segment(s: &str) -> bool {
    count_unescaped_quotes(s) >= 2
}

/// Reads one quoted segment at the start of `s` (leading whitespace allowed).
///
/// Returns the unescaped content and the remainder after the closing quote,
/// or `None` if `s` does not start with a closed quoted segment.
pub(crate) fn take_quoted(s: &str) -> Option<(String, &str)> {
    let s: &str = s.trim_start();
    let body: &str = s.strip_prefix('"')?;

    let mut out: String = String::with_capacity(body.len());
    let mut escaped: bool = false;
    for (idx, ch) in body.char_indices() {
        if escaped {
            out.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Some((out, &body[idx + 1..])),
            _ => out.push(ch),
        }
    }
    None // unclosed quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_counting() {
        assert_eq!(count_unescaped_quotes(r#"CM_ SG_ 1 A "say \"hi\"";"#), 2);
        assert!(!has_complete_quoted_segment(r#"CM_ SG_ 1 A "first line"#));
        assert!(has_complete_quoted_segment("CM_ SG_ 1 A \"first\nsecond\";"));
    }

    #[test]
    fn test_take_quoted() {
        let (text, rest) = take_quoted(r#"  "Off" 1 "On" ;"#).unwrap();
        assert_eq!(text, "Off");
        assert_eq!(rest, r#" 1 "On" ;"#);

        let (text, rest) = take_quoted(r#""a \"quoted\" word";"#).unwrap();
        assert_eq!(text, r#"a "quoted" word"#);
        assert_eq!(rest, ";");

        assert!(take_quoted("no quotes").is_none());
        assert!(take_quoted(r#""unclosed"#).is_none());
    }
}
