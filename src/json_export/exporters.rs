use anyhow::{Context, Result};
use serde::Serialize;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extractor::ProcessResult;

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

fn write_json_to_file<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;

    let json_string = serialize_to_json(data)?;

    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    Ok(())
}

// Export a processing result as a JSON file
pub fn export_json(result: &ProcessResult, path: &Path) -> Result<()> {
    write_json_to_file(result, path)
}
