//! Resource addressing for gallery images.
//!
//! Every name is percent-encoded as a single path segment; the `/` separators
//! between segments are left alone. Grid cells, the full image and deep-link
//! fragments all use the same encoding.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const GALLERY_PREFIX: &str = "/gallery/";

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// `/gallery/<gallery>/<image>` with both names encoded.
pub fn resource_url(gallery: &str, image: &str) -> String {
    format!(
        "{}{}/{}",
        GALLERY_PREFIX,
        encode_segment(gallery),
        encode_segment(image)
    )
}

/// Maps a resource URL back to a file below `root`.
///
/// Returns `None` for anything that would escape `root` or is not a
/// `/gallery/<gallery>/<image>` address.
pub fn resolve(root: &Path, url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix(GALLERY_PREFIX)?;
    let mut path = root.join("gallery");
    let mut count = 0;
    for raw in rest.split('/') {
        let segment = decode_segment(raw);
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains(['/', '\\']) {
            return None;
        }
        path.push(segment);
        count += 1;
    }
    (count == 2).then_some(path)
}

/// URI understood by the egui file loader.
pub fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
