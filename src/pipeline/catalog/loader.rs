use std::path::Path;

use serde_json::Value;

use super::types::{RuleCatalog, RuleTemplate};
use super::CatalogError;

/// Load a rule catalog from a JSON object file.
///
/// The top level must be an object mapping rule name → template text. Key
/// order in the file becomes the catalog's iteration order.
pub fn load_catalog(path: &Path) -> Result<RuleCatalog, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = match value {
        Value::Object(map) => map,
        _ => return Err(CatalogError::NotAnObject(path.to_path_buf())),
    };

    let mut templates = Vec::with_capacity(entries.len());
    for (name, body) in entries {
        match body {
            Value::String(body) => templates.push(RuleTemplate { name, body }),
            _ => return Err(CatalogError::InvalidTemplate { name }),
        }
    }

    if templates.is_empty() {
        tracing::warn!(path = %path.display(), "rule catalog is empty");
    } else {
        tracing::info!(
            path = %path.display(),
            rules = templates.len(),
            "loaded rule catalog"
        );
    }

    Ok(RuleCatalog::new(templates))
}
