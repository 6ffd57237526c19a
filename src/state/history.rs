// History state - back/forward stack and deep-link fragments
use crate::resource::{decode_segment, encode_segment};
use tracing::debug;

const FRAGMENT_PREFIX: &str = "#/gallery/";

/// State object stored with every pushed history record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub gallery_name: String,
    pub image_name: Option<String>,
}

impl HistoryEntry {
    pub fn gallery(gallery_name: impl Into<String>) -> Self {
        Self {
            gallery_name: gallery_name.into(),
            image_name: None,
        }
    }

    pub fn image(gallery_name: impl Into<String>, image_name: impl Into<String>) -> Self {
        Self {
            gallery_name: gallery_name.into(),
            image_name: Some(image_name.into()),
        }
    }

    /// Display title: `gallery` or `gallery - image`.
    pub fn title(&self) -> String {
        match &self.image_name {
            Some(image) => format!("{} - {}", self.gallery_name, image),
            None => self.gallery_name.clone(),
        }
    }

    /// Location fragment that deep-links back to this entry.
    pub fn fragment(&self) -> String {
        let mut fragment = format!("{}{}", FRAGMENT_PREFIX, encode_segment(&self.gallery_name));
        if let Some(image) = &self.image_name {
            fragment.push('/');
            fragment.push_str(&encode_segment(image));
        }
        fragment
    }

    pub fn url(&self) -> String {
        format!("/{}", self.fragment())
    }
}

/// A parsed location fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    Gallery(String),
    Image { gallery: String, image: String },
}

/// Parses `#/gallery/<name>` or `#/gallery/<name>/<image>`.
///
/// Any other shape, including empty names, yields `None`.
pub fn parse_fragment(fragment: &str) -> Option<DeepLink> {
    let rest = fragment.strip_prefix(FRAGMENT_PREFIX)?;
    let parts: Vec<String> = rest.split('/').map(decode_segment).collect();
    if parts.iter().any(String::is_empty) {
        return None;
    }
    match parts.as_slice() {
        [gallery] => Some(DeepLink::Gallery(gallery.clone())),
        [gallery, image] => Some(DeepLink::Image {
            gallery: gallery.clone(),
            image: image.clone(),
        }),
        _ => None,
    }
}

/// Delivered on back/forward. `state` is whatever was stored with the
/// restored record, which is nothing for the initial record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopEvent {
    pub state: Option<HistoryEntry>,
}

/// The navigable history of the host.
///
/// A host whose back/forward notifications arrive asynchronously returns
/// `None` from `back`/`forward` and delivers the pop to the controller later.
pub trait History {
    fn push_state(&mut self, entry: HistoryEntry, title: &str, url: &str);
    /// Attaches `entry` to the current record instead of adding a new one.
    fn replace_state(&mut self, entry: HistoryEntry, title: &str, url: &str);
    fn back(&mut self) -> Option<PopEvent>;
    fn forward(&mut self) -> Option<PopEvent>;
}

#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub state: Option<HistoryEntry>,
    pub title: String,
    pub url: String,
}

/// In-process history stack with browser semantics.
#[derive(Debug)]
pub struct SessionHistory {
    records: Vec<HistoryRecord>,
    index: usize,
}

impl SessionHistory {
    /// Seeds the stack with a stateless record for the startup location.
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            records: vec![HistoryRecord {
                state: None,
                title: String::new(),
                url: initial_url.into(),
            }],
            index: 0,
        }
    }

    pub fn current(&self) -> &HistoryRecord {
        &self.records[self.index]
    }

    pub fn current_url(&self) -> &str {
        &self.current().url
    }

    pub fn current_title(&self) -> &str {
        &self.current().title
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for SessionHistory {
    fn push_state(&mut self, entry: HistoryEntry, title: &str, url: &str) {
        // Remove any forward history when navigating somewhere new
        self.records.truncate(self.index + 1);
        self.records.push(HistoryRecord {
            state: Some(entry),
            title: title.to_string(),
            url: url.to_string(),
        });
        self.index = self.records.len() - 1;
        debug!("History push {} ({} records)", url, self.records.len());
    }

    fn replace_state(&mut self, entry: HistoryEntry, title: &str, url: &str) {
        let record = &mut self.records[self.index];
        record.state = Some(entry);
        record.title = title.to_string();
        record.url = url.to_string();
        debug!("History replace {}", url);
    }

    fn back(&mut self) -> Option<PopEvent> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(PopEvent {
            state: self.current().state.clone(),
        })
    }

    fn forward(&mut self) -> Option<PopEvent> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(PopEvent {
            state: self.current().state.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gallery_fragment() {
        assert_eq!(
            parse_fragment("#/gallery/vacation"),
            Some(DeepLink::Gallery("vacation".into()))
        );
    }

    #[test]
    fn test_parse_image_fragment() {
        assert_eq!(
            parse_fragment("#/gallery/vacation/beach.jpg"),
            Some(DeepLink::Image {
                gallery: "vacation".into(),
                image: "beach.jpg".into()
            })
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment("#/gallery/"), None);
        assert_eq!(parse_fragment("#/gallery/a/b/c"), None);
        assert_eq!(parse_fragment("#/gallery/a/"), None);
        assert_eq!(parse_fragment("#/photos/a"), None);
        assert_eq!(parse_fragment("/gallery/a"), None);
    }

    #[test]
    fn test_fragment_round_trips_special_names() {
        let entry = HistoryEntry::image("summer 2020", "beach #1.jpg");
        assert_eq!(entry.fragment(), "#/gallery/summer%202020/beach%20%231.jpg");
        assert_eq!(
            parse_fragment(&entry.fragment()),
            Some(DeepLink::Image {
                gallery: "summer 2020".into(),
                image: "beach #1.jpg".into()
            })
        );
    }

    #[test]
    fn test_titles_and_urls() {
        let grid = HistoryEntry::gallery("trip");
        assert_eq!(grid.title(), "trip");
        assert_eq!(grid.url(), "/#/gallery/trip");

        let image = HistoryEntry::image("trip", "a.jpg");
        assert_eq!(image.title(), "trip - a.jpg");
        assert_eq!(image.url(), "/#/gallery/trip/a.jpg");
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = SessionHistory::new("/");
        assert!(history.back().is_none());

        let first = HistoryEntry::gallery("trip");
        let second = HistoryEntry::image("trip", "a.jpg");
        history.push_state(first.clone(), &first.title(), &first.url());
        history.push_state(second.clone(), &second.title(), &second.url());
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_url(), "/#/gallery/trip/a.jpg");

        assert_eq!(history.back(), Some(PopEvent { state: Some(first) }));
        // The initial record carries no state.
        assert_eq!(history.back(), Some(PopEvent { state: None }));
        assert!(history.back().is_none());

        history.forward();
        assert_eq!(history.forward(), Some(PopEvent { state: Some(second) }));
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_push_discards_forward_records() {
        let mut history = SessionHistory::default();
        for name in ["a", "b", "c"] {
            let entry = HistoryEntry::gallery(name);
            history.push_state(entry.clone(), &entry.title(), &entry.url());
        }
        history.back();
        history.back();
        assert!(history.can_go_forward());

        let entry = HistoryEntry::gallery("d");
        history.push_state(entry.clone(), &entry.title(), &entry.url());
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_title(), "d");
    }

    #[test]
    fn test_replace_keeps_record_count() {
        let mut history = SessionHistory::new("/#/gallery/trip");
        let entry = HistoryEntry::gallery("trip");
        history.replace_state(entry.clone(), &entry.title(), &entry.url());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_title(), "trip");

        let next = HistoryEntry::image("trip", "a.jpg");
        history.push_state(next.clone(), &next.title(), &next.url());
        assert_eq!(history.back(), Some(PopEvent { state: Some(entry) }));
    }
}
