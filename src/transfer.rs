use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::quotes::{Quote, Repository};

pub const DEFAULT_EXPORT_NAME: &str = "quotes.json";

/// Write the full ordered quote list as pretty-printed JSON. The payload
/// goes through a named temp file in the target directory and is persisted
/// into place, so the scratch file is released on every path, including
/// failure to write.
pub fn export_all(repo: &Repository, path: &Path) -> Result<()> {
    let payload = serde_json::to_string_pretty(repo.quotes())?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .context("Failed to create scratch file for export")?;
    tmp.write_all(payload.as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Parse `contents` as a JSON array of quote-shaped objects and append
/// every element to the repository. Elements are taken verbatim: fields
/// that are missing or not strings become empty strings, with no
/// re-validation and no duplicate checking. Returns the count appended;
/// on a parse failure nothing is appended.
pub fn import_all(repo: &mut Repository, contents: &str) -> Result<usize> {
    let parsed: serde_json::Value =
        serde_json::from_str(contents).context("Error reading JSON file.")?;
    let Some(items) = parsed.as_array() else {
        anyhow::bail!("Invalid JSON format: expected an array of quotes.");
    };

    for item in items {
        let text = item
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let category = item
            .get("category")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        repo.append_raw(Quote { text, category });
    }
    Ok(items.len())
}
