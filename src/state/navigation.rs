// Navigation state - which gallery and image are open
use crate::index::GalleryIndex;
use tracing::debug;

/// Direction for stepping through a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Nothing open yet
    #[default]
    Idle,
    /// Thumbnail grid of a gallery
    Grid { gallery: String },
    /// Single image with pagination
    Image { gallery: String, image: String },
}

/// Current position. Callers validate names against the index before
/// switching, so an open image is always a member of its gallery.
#[derive(Debug, Default)]
pub struct NavigationState {
    view: View,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn current_gallery(&self) -> Option<&str> {
        match &self.view {
            View::Idle => None,
            View::Grid { gallery } | View::Image { gallery, .. } => Some(gallery.as_str()),
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        match &self.view {
            View::Image { image, .. } => Some(image.as_str()),
            _ => None,
        }
    }

    pub fn show_grid(&mut self, gallery: String) {
        self.view = View::Grid { gallery };
    }

    pub fn show_image(&mut self, gallery: String, image: String) {
        self.view = View::Image { gallery, image };
    }

    /// Index of the open image within its gallery.
    pub fn current_position(&self, index: &GalleryIndex) -> Option<usize> {
        match &self.view {
            View::Image { gallery, image } => index.position(gallery, image),
            _ => None,
        }
    }

    /// Name of the neighbouring image, if the open image has one.
    pub fn neighbor<'a>(&self, index: &'a GalleryIndex, direction: Direction) -> Option<&'a str> {
        let View::Image { gallery, .. } = &self.view else {
            debug!("No image open, ignoring {:?}", direction);
            return None;
        };
        let images = index.images(gallery)?;
        let current = self.current_position(index)?;

        let target = match direction {
            Direction::Next => {
                if current + 1 < images.len() {
                    current + 1
                } else {
                    debug!("Already at the last image of {}", gallery);
                    return None;
                }
            }
            Direction::Previous => {
                if current > 0 {
                    current - 1
                } else {
                    debug!("Already at the first image of {}", gallery);
                    return None;
                }
            }
        };
        images.get(target).map(String::as_str)
    }
}
