use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use super::ExportError;
use crate::pipeline::analysis::{ResultSet, RuleResult};

/// Write the result set as an ordered JSON object, rule name → result.
///
/// Key order is the result set's order (which is catalog order). Output is
/// pretty-printed UTF-8 with non-ASCII characters kept as-is, flushed before
/// returning.
pub fn write_structured(results: &ResultSet, path: &Path) -> Result<(), ExportError> {
    let mut map = Map::new();
    for (name, result) in results.iter() {
        let value = serde_json::to_value(result).map_err(|source| ExportError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        map.insert(name.clone(), value);
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &Value::Object(map)).map_err(|source| {
        ExportError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rules = results.len(), "wrote structured results");
    Ok(())
}

/// Read a structured export back into memory, preserving the file's key
/// order. The tabular export derives from this, never from in-memory state.
pub fn read_structured(path: &Path) -> Result<ResultSet, ExportError> {
    if !path.is_file() {
        return Err(ExportError::MissingStructured(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value =
        serde_json::from_str(&raw).map_err(|e| ExportError::MalformedStructured {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let entries = match value {
        Value::Object(map) => map,
        _ => {
            return Err(ExportError::MalformedStructured {
                path: path.to_path_buf(),
                message: "expected a JSON object at the top level".to_string(),
            })
        }
    };

    let mut results = ResultSet::default();
    for (name, entry) in entries {
        let result: RuleResult =
            serde_json::from_value(entry).map_err(|e| ExportError::MalformedStructured {
                path: path.to_path_buf(),
                message: format!("rule '{name}': {e}"),
            })?;
        results.push(name, result);
    }

    Ok(results)
}
