//! Deterministic JSON rendering shared by both catalogs.
//!
//! Objects are written with their keys in alphabetical order and a 4-space
//! indent, followed by a newline. Identical input always yields identical bytes.

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::catalog::errors::CatalogError;

/// Where a catalog is written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    /// Created if missing, truncated otherwise.
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

impl OutputTarget {
    fn label(&self) -> String {
        match self {
            OutputTarget::Stdout => "<stdout>".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        }
    }
}

/// Renders `value` as sorted-key, 4-space-indented JSON.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CatalogError> {
    let value: Value = sort_keys(serde_json::to_value(value)?);

    let mut buf: Vec<u8> = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Renders `value` and writes it to `target`.
///
/// Rendering happens first, so nothing is written if serialization fails.
pub fn write_json<T: Serialize + ?Sized>(value: &T, target: &OutputTarget) -> Result<(), CatalogError> {
    let bytes: Vec<u8> = to_json_bytes(value)?;
    let write_err = |source: io::Error| CatalogError::Write {
        path: target.label(),
        source,
    };

    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(&bytes).map_err(write_err)?;
            lock.flush().map_err(write_err)
        }
        OutputTarget::File(path) => {
            let file: File = File::create(path).map_err(write_err)?;
            let mut writer: BufWriter<File> = BufWriter::new(file);
            writer.write_all(&bytes).map_err(write_err)?;
            writer.flush().map_err(write_err)
        }
    }
}

/// Rebuilds every object with its keys inserted in sorted order, so the result
/// is sorted whichever map backend `serde_json` was built with.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        zeta: u8,
        alpha_beta: Vec<Inner>,
    }

    #[derive(Serialize)]
    struct Inner {
        y: f64,
        b: bool,
    }

    #[test]
    fn test_keys_sorted_and_indented() {
        let sample = Sample {
            zeta: 1,
            alpha_beta: vec![Inner { y: 1.0, b: true }],
        };
        let text = String::from_utf8(to_json_bytes(&sample).unwrap()).unwrap();
        let expected = "{\n    \"alphaBeta\": [\n        {\n            \"b\": true,\n            \"y\": 1.0\n        }\n    ],\n    \"zeta\": 1\n}\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_array() {
        let empty: Vec<Value> = Vec::new();
        assert_eq!(to_json_bytes(&empty).unwrap(), b"[]\n".to_vec());
    }

    #[test]
    fn test_write_to_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        let target = OutputTarget::from(Some(path.clone()));
        write_json(&json!({"b": 2, "a": 1}), &target).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n    \"a\": 1,\n    \"b\": 2\n}\n"
        );
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let target = OutputTarget::File(PathBuf::from("no/such/dir/out.json"));
        assert!(matches!(
            write_json(&json!([]), &target),
            Err(CatalogError::Write { .. })
        ));
    }
}
