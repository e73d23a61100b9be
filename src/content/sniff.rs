//! Cheap header detection.

use super::error::ItemError;
use anyhow::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// UTF-8 byte-order mark.
const BOM_UTF8: &[u8] = b"\xEF\xBB\xBF";

/// Header delimiter prefix.
const MARKER: &[u8] = b"---";

/// Check whether a file may carry a metadata header.
///
/// Opens the file in binary mode and reads at most 6 bytes: true when the
/// file starts with `---`, or with a UTF-8 BOM immediately followed by
/// `---`. This prefix test is what keeps discovery from parsing every file
/// as structured content; an unreadable file is an error, never a silent
/// "no header".
pub fn has_header(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|err| ItemError::Io(path.to_path_buf(), err))?;

    let mut prefix = Vec::with_capacity(6);
    file.take(6)
        .read_to_end(&mut prefix)
        .map_err(|err| ItemError::Io(path.to_path_buf(), err))?;

    Ok(prefix.starts_with(MARKER)
        || (prefix.starts_with(BOM_UTF8) && prefix[BOM_UTF8.len()..].starts_with(MARKER)))
}
