use crate::dbc::core;
use crate::dbc::types::database::DatabaseDBC;
use crate::dbc::types::errors::DbcParseError;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use tracing::debug;

/// Parses a DBC file and returns a populated [`DatabaseDBC`] instance.
///
/// This function reads a DBC file from disk and hands its text to [`from_str`],
/// which fills the [`DatabaseDBC`] structure with:
/// - **Version** (from `VERSION` line)
/// - **Messages** (from `BO_` lines), in file order
/// - **Signals** (from `SG_` lines), in file order within their message
/// - **Comments** for messages and signals (from `CM_` lines)
/// - **Value choices** (from `VAL_` lines)
/// - **Float encodings** (from `SIG_VALTYPE_` lines)
///
/// Files are read as UTF-8 when valid, otherwise decoded as Windows-1252, the
/// encoding most DBC editors write.
///
/// # Errors
/// Returns an `Err(DbcParseError)` if:
/// - The path does not end in `.dbc` (case-insensitive).
/// - The file cannot be opened.
/// - There are I/O errors while reading.
/// - A `BO_` or `SG_` line is malformed (see [`from_str`]).
///
pub fn from_file(path: impl AsRef<Path>) -> Result<DatabaseDBC, DbcParseError> {
    let path: &Path = path.as_ref();
    let path_owned: String = path.display().to_string();

    // check if provided file has .dbc format
    let is_dbc: bool = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dbc"));
    if !is_dbc {
        return Err(DbcParseError::InvalidExtension { path: path_owned });
    }

    let file: File = File::open(path).map_err(|source| DbcParseError::OpenFile {
        path: path_owned.clone(),
        source,
    })?;
    let mut reader: BufReader<File> = BufReader::new(file);

    // read raw bytes
    let mut bytes: Vec<u8> = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DbcParseError::Read {
            path: path_owned.clone(),
            source,
        })?;

    let text: String = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path_owned, "input is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(err.as_bytes());
            decoded.into_owned()
        }
    };

    let db: DatabaseDBC = from_str(&text)?;
    debug!(
        path = %path_owned,
        messages = db.messages.len(),
        signals = db.signals.len(),
        "parsed DBC file"
    );
    Ok(db)
}

/// Parses DBC text already held in memory.
///
/// `BO_` and `SG_` lines must be well formed: their mandatory fields
/// (ids, bit layout, scaling) are required, and an `SG_` line must follow a `BO_`.
/// Any other malformed or unsupported line is skipped.
///
/// # Errors
/// Returns [`DbcParseError::Syntax`] with the 1-based line number of the first
/// malformed `BO_` / `SG_` line.
pub fn from_str(text: &str) -> Result<DatabaseDBC, DbcParseError> {
    // editors on Windows often prepend a UTF-8 BOM
    let text: &str = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();

    // Initialize database and row counter
    let mut db: DatabaseDBC = DatabaseDBC::default();
    let mut i: usize = 0;

    while i < lines.len() {
        let line_no: usize = i + 1;
        // Work on a trimmed-start slice to preserve inner spaces elsewhere
        let line: &str = lines[i].trim_start();

        // skip comments and empty lines
        if line.is_empty() || line.starts_with("//") {
            i += 1;
            continue;
        }

        let first: &str = line
            .split(|c: char| c.is_ascii_whitespace() || c == ':')
            .next()
            .unwrap_or("");

        match first {
            "VERSION" => core::version::decode(&mut db, line),
            "BO_" => core::bo_::decode(&mut db, line, line_no)?,
            "SG_" => core::sg_::decode(&mut db, line, line_no)?,
            // bare keyword inside the NS_ block
            "CM_" if core::strings::count_unescaped_quotes(line) == 0 => {}
            "CM_" => {
                // Accumulate multiline until the comment has two unescaped quotes
                let mut full_comment: String = line.to_string();
                while !core::strings::has_complete_quoted_segment(&full_comment)
                    && i + 1 < lines.len()
                {
                    i += 1;
                    full_comment.push('\n');
                    full_comment.push_str(lines[i].trim_start());
                }
                core::cm_::decode(&mut db, &full_comment);
            }
            "VAL_" => core::val_::decode(&mut db, line),
            "SIG_VALTYPE_" => core::sig_valtype_::decode(&mut db, line),
            _ => {}
        }

        i += 1;
    }

    // parsing state is only meaningful while reading
    db.current_msg = None;
    Ok(db)
}
