//! Item discovery, classification and extraction.
//!
//! This is the single source of truth for how a directory tree becomes a
//! collection of items. The pipeline, leaves first:
//!
//! ```text
//! load_items(root)
//!     │
//!     ├── section_key()  ──► grouping key from the filename
//!     │
//!     ├── read_item() ──► classify()
//!     │                       │
//!     │                       ├── page?    ──► read_page()
//!     │                       ├── header?  ──► split_content()   (has_header)
//!     │                       └── neither  ──► read_static()
//!     │
//!     └── ItemCollection ──► one bucket per section key
//! ```
//!
//! Every operation returns a `Result`; nothing in this tree terminates the
//! process. The binary driver is the only place where a failure becomes an
//! exit.

mod error;
mod item;
mod reader;
mod section;
mod sniff;
mod walk;

pub use error::ItemError;
pub use item::{Item, ItemCollection, ItemType, RESERVED_KEYS};
pub use reader::{classify, read_item, read_page, read_static, split_content};
pub use section::section_key;
pub use sniff::has_header;
pub use walk::load_items;
