//! Per-section summary of a scanned tree.

use crate::content::{Item, ItemType, load_items};
use crate::log;
use anyhow::Result;
use std::path::Path;

/// Scan `root` and log one line per section plus a total.
pub fn scan_tree(root: &Path) -> Result<()> {
    let items = load_items(root)?;

    if items.is_empty() {
        log!("scan"; "no items under {}", root.display());
        return Ok(());
    }

    for (section, bucket) in items.iter() {
        let content = count_of(bucket, ItemType::Content);
        let pages = count_of(bucket, ItemType::Page);
        let assets = count_of(bucket, ItemType::Static);

        log!(
            "scan";
            "{section}: {} items ({content} content, {pages} pages, {assets} static)",
            bucket.len()
        );
    }

    log!(
        "scan";
        "{} items in {} sections under {}",
        items.len(),
        items.section_count(),
        root.display()
    );

    Ok(())
}

fn count_of(bucket: &[Item], itemtype: ItemType) -> usize {
    bucket
        .iter()
        .filter(|item| item.itemtype() == itemtype)
        .count()
}
