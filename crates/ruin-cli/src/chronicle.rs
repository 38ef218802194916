//! Writing the expedition journal to disk.

use std::path::Path;

use ruin_engine::Journal;

/// Export the journal in the format implied by the file extension.
pub fn write(journal: &Journal, path: &Path) -> Result<(), String> {
    let body = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => journal.export_json().map_err(|e| e.to_string())?,
        Some("txt") => journal.export_text(),
        _ => journal.export_markdown(),
    };
    std::fs::write(path, body)
        .map_err(|e| format!("cannot write chronicle {}: {e}", path.display()))
}
