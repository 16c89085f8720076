//! File system utilities.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Save data to a JSON file with pretty printing.
///
/// The file is written to a temporary sibling first and then renamed into place.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Ensure a directory exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
