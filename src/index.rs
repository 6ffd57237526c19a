//! Grouping of a flat path list into named galleries.
//!
//! Paths of the shape `gallery/<name>/<file>` (one optional leading `/`) are
//! grouped by `<name>`. Everything else is reported as skipped.

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

const GALLERY_SEGMENT: &str = "gallery";

/// A named gallery and its images, in sorted path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub name: String,
    pub images: Vec<String>,
}

/// Galleries in creation order, built once at startup.
#[derive(Debug, Default)]
pub struct GalleryIndex {
    galleries: Vec<Gallery>,
    lookup: HashMap<String, usize>,
    skipped: Vec<String>,
}

impl GalleryIndex {
    /// Builds the index from raw paths.
    ///
    /// The input is sorted byte-wise first, so the result does not depend on
    /// the order of `paths`. An image listed more than once counts once.
    pub fn build<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = paths.into_iter().map(|p| p.as_ref().to_string()).collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut index = Self::default();
        // `gallery/a/x` and `/gallery/a/x` survive dedup but name the same image
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for path in &sorted {
            let Some((gallery, image)) = split_gallery_path(path) else {
                info!("Not using file: {}", path);
                index.skipped.push(path.clone());
                continue;
            };
            if !seen.insert((gallery, image)) {
                debug!("Duplicate image {}/{} ignored", gallery, image);
                continue;
            }
            index.insert(gallery, image);
        }

        debug!(
            "Built gallery index: {} galleries, {} skipped paths",
            index.galleries.len(),
            index.skipped.len()
        );
        index
    }

    fn insert(&mut self, gallery: &str, image: &str) {
        let slot = match self.lookup.get(gallery) {
            Some(&slot) => slot,
            None => {
                self.galleries.push(Gallery {
                    name: gallery.to_string(),
                    images: Vec::new(),
                });
                let slot = self.galleries.len() - 1;
                self.lookup.insert(gallery.to_string(), slot);
                slot
            }
        };
        self.galleries[slot].images.push(image.to_string());
    }

    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    pub fn gallery(&self, name: &str) -> Option<&Gallery> {
        self.lookup.get(name).map(|&slot| &self.galleries[slot])
    }

    /// Ordered image names of a gallery.
    pub fn images(&self, gallery: &str) -> Option<&[String]> {
        self.gallery(gallery).map(|g| g.images.as_slice())
    }

    /// Position of `image` within `gallery`.
    pub fn position(&self, gallery: &str, image: &str) -> Option<usize> {
        self.images(gallery)?.iter().position(|name| name == image)
    }

    pub fn contains_gallery(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Input paths that did not match `gallery/<name>/<file>`.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }
}

/// Splits `[/]gallery/<name>/<file>` into `(name, file)`.
fn split_gallery_path(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let parts: Vec<&str> = trimmed.split('/').collect();
    match parts.as_slice() {
        [GALLERY_SEGMENT, name, file] if !name.is_empty() && !file.is_empty() => Some((*name, *file)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_and_sorts_paths() {
        let index = GalleryIndex::build(["/gallery/trip/b.jpg", "/gallery/trip/a.jpg", "/ignored/x.txt"]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.images("trip").unwrap(), ["a.jpg", "b.jpg"]);
        assert_eq!(index.skipped(), ["/ignored/x.txt"]);
    }

    #[test]
    fn test_leading_separator_is_optional() {
        let index = GalleryIndex::build(["gallery/a/1.png", "/gallery/a/2.png"]);
        // '/' (0x2F) sorts before 'g', so the prefixed path comes first.
        assert_eq!(index.images("a").unwrap(), ["2.png", "1.png"]);
        assert!(index.skipped().is_empty());
    }

    #[test]
    fn test_only_one_leading_separator_is_stripped() {
        let index = GalleryIndex::build(["//gallery/a/1.png"]);
        assert!(index.is_empty());
        assert_eq!(index.skipped().len(), 1);
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        let index = GalleryIndex::build([
            "/gallery/a/nested/1.png",
            "/gallery/a",
            "/photos/a/1.png",
            "/gallery//1.png",
            "/gallery/a/",
            "",
        ]);
        assert!(index.is_empty());
        assert_eq!(index.skipped().len(), 6);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = ["/gallery/b/2.jpg", "/gallery/a/1.jpg", "/gallery/b/1.jpg", "/x"];
        let mut reversed = forward;
        reversed.reverse();

        let a = GalleryIndex::build(forward);
        let b = GalleryIndex::build(reversed);
        assert_eq!(a.galleries(), b.galleries());
        assert_eq!(a.skipped(), b.skipped());
    }

    #[test]
    fn test_gallery_creation_order_follows_sorted_paths() {
        let index = GalleryIndex::build(["/gallery/zoo/1.jpg", "/gallery/Zebra/1.jpg", "/gallery/apple/1.jpg"]);
        let names: Vec<&str> = index.galleries().iter().map(|g| g.name.as_str()).collect();
        // Byte order puts uppercase before lowercase.
        assert_eq!(names, ["Zebra", "apple", "zoo"]);
    }

    #[test]
    fn test_sorting_is_case_sensitive_and_bytewise() {
        let index = GalleryIndex::build(["/gallery/g/b.jpg", "/gallery/g/B.jpg", "/gallery/g/a.jpg", "/gallery/g/10.jpg", "/gallery/g/9.jpg"]);
        assert_eq!(index.images("g").unwrap(), ["10.jpg", "9.jpg", "B.jpg", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_duplicates_appear_once() {
        // The unprefixed form sorts apart but names the same file.
        let index = GalleryIndex::build(["/gallery/g/a.jpg", "/gallery/g/b.jpg", "/gallery/g/a.jpg", "gallery/g/a.jpg"]);
        assert_eq!(index.images("g").unwrap(), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_large_gallery_with_mixed_prefixes() {
        let mut paths: Vec<String> = (0..2000).map(|n| format!("/gallery/big/{:05}.jpg", n)).collect();
        paths.extend((0..2000).map(|n| format!("gallery/big/{:05}.jpg", n)));
        let index = GalleryIndex::build(&paths);
        let images = index.images("big").unwrap();
        assert_eq!(images.len(), 2000);
        assert_eq!(images[0], "00000.jpg");
        assert_eq!(images[1999], "01999.jpg");
        assert!(index.skipped().is_empty());
    }

    #[test]
    fn test_position_lookup() {
        let index = GalleryIndex::build(["/gallery/g/a.jpg", "/gallery/g/b.jpg", "/gallery/g/c.jpg"]);
        assert_eq!(index.position("g", "c.jpg"), Some(2));
        assert_eq!(index.position("g", "missing.jpg"), None);
        assert_eq!(index.position("missing", "a.jpg"), None);
        assert!(index.contains_gallery("g"));
        assert!(!index.contains_gallery("G"));
    }
}
