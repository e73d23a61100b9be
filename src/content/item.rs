//! Item data model.
//!
//! `Item` is the unit of content handed to the rendering stage. The three
//! kinds differ in what was read from disk:
//!
//! | Kind      | `raw` body | `metadata` header | Content read   |
//! |-----------|------------|-------------------|----------------|
//! | `Content` | yes        | yes               | full UTF-8     |
//! | `Page`    | yes        | no                | full UTF-8     |
//! | `Static`  | no         | no                | none           |
//!
//! The enum makes the shape invariant unrepresentable to violate: a static
//! item cannot carry a body, a page cannot carry metadata.
//!
//! When an item is serialized it flattens into a single record: the header
//! keys first, then the computed `src`, `raw` and `itemtype` fields. The
//! computed fields always win; a header key named like one of them stays
//! visible in [`Item::metadata`] but is shadowed in the flat record.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_yaml::Mapping;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Field names the pipeline computes itself. Header keys with these names
/// never overwrite the computed values.
pub const RESERVED_KEYS: &[&str] = &["src", "raw", "itemtype"];

// ============================================================================
// Item Type
// ============================================================================

/// Classification verdict for a discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// Carries a metadata header and a text body.
    Content,
    /// Read verbatim as text, never header-parsed (HTML/XML).
    Page,
    /// Opaque asset; content is never read during discovery.
    Static,
}

impl ItemType {
    /// Wire name of the variant, as it appears in serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Page => "page",
            Self::Static => "static",
        }
    }
}

// ============================================================================
// Item
// ============================================================================

/// One discovered file, classified and optionally parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Structured content: parsed header merged with a text body.
    Content {
        src: PathBuf,
        raw: String,
        metadata: Mapping,
    },
    /// Raw page, body only.
    Page { src: PathBuf, raw: String },
    /// Opaque asset, path only.
    Static { src: PathBuf },
}

impl Item {
    /// Source path the item was discovered at.
    pub fn src(&self) -> &Path {
        match self {
            Self::Content { src, .. } | Self::Page { src, .. } | Self::Static { src } => src,
        }
    }

    pub const fn itemtype(&self) -> ItemType {
        match self {
            Self::Content { .. } => ItemType::Content,
            Self::Page { .. } => ItemType::Page,
            Self::Static { .. } => ItemType::Static,
        }
    }

    /// Textual body; `None` for static items.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Content { raw, .. } | Self::Page { raw, .. } => Some(raw),
            Self::Static { .. } => None,
        }
    }

    /// Parsed header mapping; `None` for anything but content items.
    pub fn metadata(&self) -> Option<&Mapping> {
        match self {
            Self::Content { metadata, .. } => Some(metadata),
            _ => None,
        }
    }
}

impl Serialize for Item {
    /// Flatten into the merged record: header keys first, computed fields
    /// last so they shadow reserved-name collisions.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_map(None)?;

        if let Some(metadata) = self.metadata() {
            for (key, value) in metadata {
                if key.as_str().is_some_and(|name| RESERVED_KEYS.contains(&name)) {
                    continue;
                }
                record.serialize_entry(key, value)?;
            }
        }

        record.serialize_entry("src", self.src())?;
        if let Some(raw) = self.raw() {
            record.serialize_entry("raw", raw)?;
        }
        record.serialize_entry("itemtype", self.itemtype().as_str())?;

        record.end()
    }
}

// ============================================================================
// Item Collection
// ============================================================================

/// All discovered items, grouped by section key.
///
/// Within a section, items keep traversal order. Sections themselves carry
/// no ordering contract; the map is sorted by key only so that summaries
/// and dumps are stable across runs.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ItemCollection {
    sections: BTreeMap<String, Vec<Item>>,
}

impl ItemCollection {
    /// Append an item to the bucket for `section`, creating the bucket on
    /// first use.
    pub fn push(&mut self, section: impl Into<String>, item: Item) {
        self.sections.entry(section.into()).or_default().push(item);
    }

    /// Items discovered under `section`, in traversal order.
    #[allow(dead_code)]
    pub fn section(&self, key: &str) -> Option<&[Item]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    /// Iterate over `(section, items)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.sections
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of items across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn content_item(metadata: Mapping) -> Item {
        Item::Content {
            src: PathBuf::from("posts/hello.md"),
            raw: "Hello\n".to_string(),
            metadata,
        }
    }

    #[test]
    fn test_itemtype_as_str() {
        assert_eq!(ItemType::Content.as_str(), "content");
        assert_eq!(ItemType::Page.as_str(), "page");
        assert_eq!(ItemType::Static.as_str(), "static");
    }

    #[test]
    fn test_item_accessors_content() {
        let mut metadata = Mapping::new();
        metadata.insert(Value::from("title"), Value::from("A"));
        let item = content_item(metadata);

        assert_eq!(item.src(), Path::new("posts/hello.md"));
        assert_eq!(item.itemtype(), ItemType::Content);
        assert_eq!(item.raw(), Some("Hello\n"));
        assert!(item.metadata().is_some());
    }

    #[test]
    fn test_item_accessors_page() {
        let item = Item::Page {
            src: PathBuf::from("index.html"),
            raw: "<html></html>".to_string(),
        };

        assert_eq!(item.itemtype(), ItemType::Page);
        assert_eq!(item.raw(), Some("<html></html>"));
        assert!(item.metadata().is_none());
    }

    #[test]
    fn test_item_accessors_static() {
        let item = Item::Static {
            src: PathBuf::from("logo.png"),
        };

        assert_eq!(item.itemtype(), ItemType::Static);
        assert_eq!(item.raw(), None);
        assert!(item.metadata().is_none());
    }

    #[test]
    fn test_serialize_content_flattens_header() {
        let mut metadata = Mapping::new();
        metadata.insert(Value::from("title"), Value::from("A"));
        let item = content_item(metadata);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "A");
        assert_eq!(json["src"], "posts/hello.md");
        assert_eq!(json["raw"], "Hello\n");
        assert_eq!(json["itemtype"], "content");
    }

    #[test]
    fn test_serialize_reserved_keys_shadowed() {
        // A header that tries to define `src` and `itemtype` itself: the
        // computed fields must win in the flat record.
        let mut metadata = Mapping::new();
        metadata.insert(Value::from("src"), Value::from("spoofed"));
        metadata.insert(Value::from("itemtype"), Value::from("page"));
        metadata.insert(Value::from("title"), Value::from("A"));
        let item = content_item(metadata);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["src"], "posts/hello.md");
        assert_eq!(json["itemtype"], "content");
        assert_eq!(json["title"], "A");

        // But the header value is still visible through the metadata view.
        let spoofed = item.metadata().unwrap().get("src").unwrap();
        assert_eq!(spoofed.as_str(), Some("spoofed"));
    }

    #[test]
    fn test_serialize_static_has_no_raw() {
        let item = Item::Static {
            src: PathBuf::from("logo.png"),
        };

        let json = serde_json::to_value(&item).unwrap();
        let record = json.as_object().unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(json["src"], "logo.png");
        assert_eq!(json["itemtype"], "static");
    }

    #[test]
    fn test_collection_push_preserves_order() {
        let mut items = ItemCollection::default();
        items.push("md", Item::Static { src: PathBuf::from("a.md") });
        items.push("md", Item::Static { src: PathBuf::from("b.md") });
        items.push("html", Item::Static { src: PathBuf::from("c.html") });

        let md = items.section("md").unwrap();
        assert_eq!(md.len(), 2);
        assert_eq!(md[0].src(), Path::new("a.md"));
        assert_eq!(md[1].src(), Path::new("b.md"));

        assert_eq!(items.section_count(), 2);
        assert_eq!(items.len(), 3);
        assert!(!items.is_empty());
    }

    #[test]
    fn test_collection_missing_section() {
        let items = ItemCollection::default();
        assert!(items.section("md").is_none());
        assert!(items.is_empty());
        assert_eq!(items.len(), 0);
    }
}
