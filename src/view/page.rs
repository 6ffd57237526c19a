// Page model - what the main content area shows for a navigation state
use crate::index::GalleryIndex;
use crate::resource::resource_url;
use crate::state::{NavigationState, View};
use tracing::error;

/// One menu link per gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub gallery: String,
}

pub fn menu(index: &GalleryIndex) -> Vec<MenuEntry> {
    index
        .galleries()
        .iter()
        .map(|g| MenuEntry {
            gallery: g.name.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Empty,
    Grid(GridPage),
    Image(ImagePage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPage {
    pub gallery: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub image: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    pub gallery: String,
    pub image: String,
    pub url: String,
    pub pagination: Pagination,
}

/// Prev, one control per position, next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current: usize,
    pub pages: Vec<PageControl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub position: usize,
    /// 1-based ordinal
    pub label: String,
    pub active: bool,
}

impl Pagination {
    pub fn new(current: usize, len: usize) -> Self {
        let pages = (0..len)
            .map(|position| PageControl {
                position,
                label: (position + 1).to_string(),
                active: position == current,
            })
            .collect();
        Self { current, pages }
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

/// Builds the page for `navigation`. The result replaces the previous page
/// wholesale.
pub fn render(navigation: &NavigationState, index: &GalleryIndex) -> Page {
    match navigation.view() {
        View::Idle => Page::Empty,
        View::Grid { gallery } => {
            let Some(images) = index.images(gallery) else {
                error!("Navigation points at unknown gallery {}", gallery);
                return Page::Empty;
            };
            Page::Grid(GridPage {
                gallery: gallery.clone(),
                cells: images
                    .iter()
                    .map(|image| GridCell {
                        image: image.clone(),
                        url: resource_url(gallery, image),
                    })
                    .collect(),
            })
        }
        View::Image { gallery, image } => {
            let (Some(images), Some(current)) =
                (index.images(gallery), index.position(gallery, image))
            else {
                error!("Navigation points at unknown image {}/{}", gallery, image);
                return Page::Empty;
            };
            Page::Image(ImagePage {
                gallery: gallery.clone(),
                image: image.clone(),
                url: resource_url(gallery, image),
                pagination: Pagination::new(current, images.len()),
            })
        }
    }
}
