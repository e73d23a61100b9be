//! Directory traversal and aggregation.

use super::error::ItemError;
use super::item::ItemCollection;
use super::reader::read_item;
use super::section::section_key;
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively gather every regular file under `root` into an
/// [`ItemCollection`], grouped by section key.
///
/// Entries are visited in file-name order within each directory, so bucket
/// contents are stable across runs. One file yields exactly one item; the
/// first failed read aborts the whole walk.
pub fn load_items(root: &Path) -> Result<ItemCollection> {
    let mut items = ItemCollection::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            ItemError::Io(path, err.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy();
        let section = section_key(&filename).to_owned();
        let item = read_item(entry.path(), &section)?;

        items.push(section, item);
    }

    Ok(items)
}

// ============================================================================
// Tests
// ============================================================================
