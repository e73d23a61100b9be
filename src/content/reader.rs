//! Reading strategies for discovered files.
//!
//! [`classify`] picks the strategy, [`read_item`] dispatches to it:
//!
//! | Priority | Condition                              | Strategy          |
//! |----------|----------------------------------------|-------------------|
//! | 1        | section key is `html`/`xml` (any case) | [`read_page`]     |
//! | 2        | file starts with a header marker       | [`split_content`] |
//! | 3        | everything else                        | [`read_static`]   |
//!
//! The order is a strict priority chain: page templates may legitimately
//! open with `---`-like markup, so the section check runs before the
//! sniffer ever looks at the file.

use super::error::ItemError;
use super::item::{Item, ItemType};
use super::sniff::has_header;
use anyhow::{Result, bail};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Sections whose files are always read as raw pages, never header-parsed.
const PAGE_SECTIONS: &[&str] = &["html", "xml"];

/// Delimiter line: three or more hyphens, optional trailing blanks.
///
/// Anchored to line starts; the final newline belongs to the delimiter, so
/// a blank line after the closing marker survives as the body's leading
/// newline.
fn header_delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r"(?m)^-{3,}[ \t]*\r?\n").expect("valid pattern"))
}

/// Decide how a file will be read.
pub fn classify(path: &Path, section_key: &str) -> Result<ItemType> {
    if PAGE_SECTIONS
        .iter()
        .any(|page| section_key.eq_ignore_ascii_case(page))
    {
        return Ok(ItemType::Page);
    }

    if has_header(path)? {
        Ok(ItemType::Content)
    } else {
        Ok(ItemType::Static)
    }
}

/// Read a content item: split off the header block, parse it, and merge it
/// with the body and source path into one item.
///
/// The file must split into exactly three segments (leading text, header,
/// body) on the first two delimiter lines; anything else is an invalid
/// header. The body is kept verbatim, leading newline included.
pub fn split_content(path: &Path) -> Result<Item> {
    let text = fs::read_to_string(path).map_err(|err| ItemError::Io(path.to_path_buf(), err))?;

    // The sniffer accepts a BOM before the opening marker; drop it here so
    // the first delimiter still sits at a line start.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let segments: Vec<&str> = header_delimiter().splitn(text, 3).collect();
    if segments.len() != 3 {
        bail!(ItemError::InvalidHeader(path.to_path_buf()));
    }

    let metadata = parse_header(segments[1], path)?;

    Ok(Item::Content {
        src: path.to_path_buf(),
        raw: segments[2].to_owned(),
        metadata,
    })
}

/// Parse a header block, defaulting to an empty mapping when the document
/// is empty. A header that parses to anything but a mapping is an error,
/// never a value smuggled into the merge.
fn parse_header(header: &str, path: &Path) -> Result<Mapping> {
    let value: Value =
        serde_yaml::from_str(header).map_err(|err| ItemError::Header(path.to_path_buf(), err))?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => bail!(ItemError::HeaderNotAMapping(path.to_path_buf())),
    }
}

/// Read a page item: the whole file as text, no splitting.
pub fn read_page(path: &Path) -> Result<Item> {
    let raw = fs::read_to_string(path).map_err(|err| ItemError::Io(path.to_path_buf(), err))?;

    Ok(Item::Page {
        src: path.to_path_buf(),
        raw,
    })
}

/// Record a static item. Deliberately no read: assets may be arbitrarily
/// large or non-text.
pub fn read_static(path: &Path) -> Item {
    Item::Static {
        src: path.to_path_buf(),
    }
}

/// Read one file with the strategy picked by [`classify`].
pub fn read_item(path: &Path, section_key: &str) -> Result<Item> {
    match classify(path, section_key)? {
        ItemType::Page => read_page(path),
        ItemType::Content => split_content(path),
        ItemType::Static => Ok(read_static(path)),
    }
}

// ============================================================================
// Tests
// ============================================================================
