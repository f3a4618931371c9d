use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::StringsTable;

/// Read a flat `{"key": "translation"}` strings file. A missing file is empty.
pub fn read_strings(path: &Path) -> Result<StringsTable> {
    if !path.exists() {
        return Ok(StringsTable::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    let Value::Object(map) = json else {
        bail!(
            "Malformed strings file: {}: root must be an object",
            path.display()
        );
    };

    let mut table = StringsTable::new();
    for (key, value) in map {
        match value {
            Value::String(s) => {
                table.insert(key, s);
            }
            _ => bail!(
                "Malformed strings file: {}: value of \"{}\" must be a string",
                path.display(),
                key
            ),
        }
    }
    Ok(table)
}
