//! The gallery state machine.
//!
//! `GalleryController` owns the index, the navigation state and the history
//! handle. Every transition re-renders the page; user navigations also push a
//! history record unless `suppress_push` is set (deep links, history pops).

use crate::error::{GalleryError, Result};
use crate::index::GalleryIndex;
use crate::state::{parse_fragment, DeepLink, Direction, History, HistoryEntry, NavigationState};
use crate::view::page::{self, MenuEntry, Page};
use tracing::{debug, info, warn};

pub struct GalleryController<H: History> {
    index: GalleryIndex,
    navigation: NavigationState,
    history: H,
    menu: Vec<MenuEntry>,
    page: Page,
}

impl<H: History> GalleryController<H> {
    pub fn new<I, S>(paths: I, history: H) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = GalleryIndex::build(paths);
        info!(
            "Loaded {} galleries ({} paths skipped)",
            index.len(),
            index.skipped().len()
        );
        let menu = page::menu(&index);
        Self {
            index,
            navigation: NavigationState::new(),
            history,
            menu,
            page: Page::Empty,
        }
    }

    pub fn index(&self) -> &GalleryIndex {
        &self.index
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// The page for the current state.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Menu entries, built once with the index.
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// Opens the thumbnail grid of `gallery`.
    pub fn navigate_to_gallery(&mut self, gallery: &str, suppress_push: bool) -> Result<()> {
        if !self.index.contains_gallery(gallery) {
            return Err(GalleryError::UnknownGallery(gallery.to_string()));
        }

        if !suppress_push {
            self.push(HistoryEntry::gallery(gallery));
        }
        self.navigation.show_grid(gallery.to_string());
        self.rerender();
        debug!("Showing gallery {}", gallery);
        Ok(())
    }

    /// Opens a single image.
    pub fn navigate_to_image(&mut self, gallery: &str, image: &str, suppress_push: bool) -> Result<()> {
        if !self.index.contains_gallery(gallery) {
            return Err(GalleryError::UnknownGallery(gallery.to_string()));
        }
        if self.index.position(gallery, image).is_none() {
            return Err(GalleryError::UnknownImage {
                gallery: gallery.to_string(),
                image: image.to_string(),
            });
        }

        if !suppress_push {
            self.push(HistoryEntry::image(gallery, image));
        }
        self.navigation.show_image(gallery.to_string(), image.to_string());
        self.rerender();
        debug!("Showing image {}/{}", gallery, image);
        Ok(())
    }

    /// Jumps to the image at `position` in the open gallery.
    ///
    /// Does nothing while no gallery is open.
    pub fn navigate_to_position(&mut self, position: usize) -> Result<()> {
        let Some(gallery) = self.navigation.current_gallery().map(str::to_string) else {
            return Ok(());
        };
        let image = self
            .index
            .images(&gallery)
            .and_then(|images| images.get(position))
            .cloned()
            .ok_or_else(|| GalleryError::PositionOutOfRange {
                gallery: gallery.clone(),
                position,
            })?;
        self.navigate_to_image(&gallery, &image, false)
    }

    /// Advances to the next image. Returns `false` when there is none.
    pub fn show_next(&mut self) -> Result<bool> {
        self.step(Direction::Next)
    }

    /// Goes back to the previous image. Returns `false` when there is none.
    pub fn show_prev(&mut self) -> Result<bool> {
        self.step(Direction::Previous)
    }

    fn step(&mut self, direction: Direction) -> Result<bool> {
        let (Some(gallery), Some(target)) = (
            self.navigation.current_gallery(),
            self.navigation.neighbor(&self.index, direction),
        ) else {
            return Ok(false);
        };
        let (gallery, target) = (gallery.to_string(), target.to_string());
        self.navigate_to_image(&gallery, &target, false)?;
        Ok(true)
    }

    /// Leaves the image view for the grid of the same gallery.
    pub fn close_image(&mut self) -> Result<()> {
        if self.navigation.current_image().is_none() {
            return Ok(());
        }
        let Some(gallery) = self.navigation.current_gallery().map(str::to_string) else {
            return Ok(());
        };
        self.navigate_to_gallery(&gallery, false)
    }

    /// Restores the state carried by a back/forward event. Never pushes.
    pub fn history_popped(&mut self, state: Option<&HistoryEntry>) {
        let Some(entry) = state else {
            debug!("History pop without gallery state, ignoring");
            return;
        };
        let result = match &entry.image_name {
            Some(image) => self.navigate_to_image(&entry.gallery_name, image, true),
            None => self.navigate_to_gallery(&entry.gallery_name, true),
        };
        if let Err(e) = result {
            warn!("Ignoring history state: {}", e);
        }
    }

    /// Applies a startup location fragment. Returns whether it was used.
    ///
    /// The current history record takes the linked state, so stepping back
    /// to it later restores the linked view.
    pub fn apply_deep_link(&mut self, fragment: &str) -> bool {
        let (entry, result) = match parse_fragment(fragment) {
            Some(DeepLink::Gallery(gallery)) => {
                let result = self.navigate_to_gallery(&gallery, true);
                (HistoryEntry::gallery(gallery), result)
            }
            Some(DeepLink::Image { gallery, image }) => {
                let result = self.navigate_to_image(&gallery, &image, true);
                (HistoryEntry::image(gallery, image), result)
            }
            None => {
                debug!("Fragment {:?} is not a gallery link", fragment);
                return false;
            }
        };
        match result {
            Ok(()) => {
                let (title, url) = (entry.title(), entry.url());
                self.history.replace_state(entry, &title, &url);
                true
            }
            Err(e) => {
                warn!("Ignoring deep link {}: {}", fragment, e);
                false
            }
        }
    }

    /// Steps back through the host history and restores what it pops.
    pub fn go_back(&mut self) {
        if let Some(event) = self.history.back() {
            self.history_popped(event.state.as_ref());
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(event) = self.history.forward() {
            self.history_popped(event.state.as_ref());
        }
    }

    fn push(&mut self, entry: HistoryEntry) {
        let title = entry.title();
        let url = entry.url();
        self.history.push_state(entry, &title, &url);
    }

    fn rerender(&mut self) {
        self.page = page::render(&self.navigation, &self.index);
    }
}
