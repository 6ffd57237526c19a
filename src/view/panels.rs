// Panel rendering for Galleria
// Menu, thumbnail grid, full image and pagination

use crate::app::GalleryApp;
use crate::style;
use crate::view::{GridPage, ImagePage, Page, Pagination};
use eframe::egui;
use std::cell::RefCell;

/// A user interaction collected while painting, applied after the frame.
/// Per-item controls carry their item as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenGallery(String),
    OpenImage { gallery: String, image: String },
    OpenPosition(usize),
    Next,
    Prev,
    Back,
    Forward,
}

impl GalleryApp {
    pub(crate) fn render_history_buttons(&self, ui: &mut egui::Ui, intent: &RefCell<Option<Intent>>) {
        let history = self.controller.history();
        if ui
            .add_enabled(history.can_go_back(), egui::Button::new("◀"))
            .on_hover_text("Back (Alt+Left)")
            .clicked()
        {
            *intent.borrow_mut() = Some(Intent::Back);
        }
        if ui
            .add_enabled(history.can_go_forward(), egui::Button::new("▶"))
            .on_hover_text("Forward (Alt+Right)")
            .clicked()
        {
            *intent.borrow_mut() = Some(Intent::Forward);
        }
    }

    pub(crate) fn render_menu(&self, ui: &mut egui::Ui, intent: &RefCell<Option<Intent>>) {
        let current = self.controller.navigation().current_gallery();
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = style::MENU_SPACING;
            for entry in self.controller.menu() {
                let active = current == Some(entry.gallery.as_str());
                if ui.selectable_label(active, &entry.gallery).clicked() {
                    *intent.borrow_mut() = Some(Intent::OpenGallery(entry.gallery.clone()));
                }
            }
        });
    }

    pub(crate) fn render_page(&self, ui: &mut egui::Ui, intent: &RefCell<Option<Intent>>) {
        match self.controller.page() {
            Page::Empty => {
                ui.centered_and_justified(|ui| {
                    if self.controller.index().is_empty() {
                        ui.label("No galleries found");
                    } else {
                        ui.label("Pick a gallery from the menu");
                    }
                });
            }
            Page::Grid(grid) => self.render_grid(ui, grid, intent),
            Page::Image(page) => self.render_image(ui, page, intent),
        }
    }

    fn render_grid(&self, ui: &mut egui::Ui, grid: &GridPage, intent: &RefCell<Option<Intent>>) {
        let size = egui::vec2(self.grid.thumbnail_size, self.grid.thumbnail_size);

        egui::ScrollArea::vertical()
            .id_salt("grid_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(self.grid.spacing, self.grid.spacing);
                    for cell in &grid.cells {
                        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                        ui.painter().rect_filled(
                            rect,
                            style::CELL_ROUNDING,
                            ui.visuals().extreme_bg_color,
                        );

                        match self.image_uri(&cell.url) {
                            Some(uri) => {
                                ui.put(
                                    rect,
                                    egui::Image::new(uri)
                                        .maintain_aspect_ratio(true)
                                        .fit_to_exact_size(size),
                                );
                            }
                            None => {
                                ui.put(rect, egui::Label::new(&cell.image).truncate());
                            }
                        }

                        let response = response
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .on_hover_text(&cell.image);
                        if response.clicked() {
                            *intent.borrow_mut() = Some(Intent::OpenImage {
                                gallery: grid.gallery.clone(),
                                image: cell.image.clone(),
                            });
                        }
                    }
                });
            });
    }

    fn render_image(&self, ui: &mut egui::Ui, page: &ImagePage, intent: &RefCell<Option<Intent>>) {
        let available = ui.available_size();
        let max_size = egui::vec2(
            available.x,
            (available.y - style::PAGINATION_HEIGHT).max(0.0),
        );

        ui.vertical_centered(|ui| {
            let response = match self.image_uri(&page.url) {
                Some(uri) => ui.add(
                    egui::Image::new(uri)
                        .max_size(max_size)
                        .maintain_aspect_ratio(true)
                        .sense(egui::Sense::click()),
                ),
                None => ui.label(format!("Cannot resolve {}", page.url)),
            };
            if response.clicked() {
                *intent.borrow_mut() = Some(Intent::Next);
            }

            ui.add_space(style::PAGINATION_SPACING * 2.0);
            self.render_pagination(ui, &page.pagination, intent);
        });
    }

    fn render_pagination(&self, ui: &mut egui::Ui, pagination: &Pagination, intent: &RefCell<Option<Intent>>) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = style::PAGINATION_SPACING;

            if ui
                .add_enabled(pagination.has_prev(), egui::Button::new("<<"))
                .clicked()
            {
                *intent.borrow_mut() = Some(Intent::Prev);
            }

            for page in &pagination.pages {
                let text = if page.active {
                    egui::RichText::new(&page.label).color(style::ACCENT).strong()
                } else {
                    egui::RichText::new(&page.label)
                };
                if ui.selectable_label(page.active, text).clicked() {
                    *intent.borrow_mut() = Some(Intent::OpenPosition(page.position));
                }
            }

            if ui
                .add_enabled(pagination.has_next(), egui::Button::new(">>"))
                .clicked()
            {
                *intent.borrow_mut() = Some(Intent::Next);
            }
        });
    }

    pub(crate) fn render_status(&self, ui: &mut egui::Ui) {
        let index = self.controller.index();
        ui.horizontal(|ui| {
            style::truncated_label(ui, self.controller.history().current_url());
            if let Page::Image(page) = self.controller.page() {
                ui.separator();
                ui.label(format!(
                    "{} / {}",
                    page.pagination.current + 1,
                    page.pagination.len()
                ));
            }
            ui.separator();
            ui.label(format!("{} galleries", index.len()));
            if !index.skipped().is_empty() {
                ui.label(format!("| {} skipped", index.skipped().len()))
                    .on_hover_text(index.skipped().join("\n"));
            }
            if let Some((err, _)) = &self.error_message {
                ui.colored_label(egui::Color32::RED, format!(" | {}", err));
            }
        });
    }
}
