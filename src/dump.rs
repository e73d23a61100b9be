//! JSON dump of a scanned tree.

use crate::content::load_items;
use anyhow::Result;
use std::path::Path;

/// Scan `root` and write the collection as pretty JSON to stdout.
///
/// Sections map to arrays of flat item records, ready for an external
/// renderer to consume.
pub fn dump_tree(root: &Path) -> Result<()> {
    let items = load_items(root)?;
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
