// Help overlay listing the key bindings

use crate::app::GalleryApp;
use crate::style;
use eframe::egui;

impl GalleryApp {
    pub(crate) fn render_help_modal(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let rows = [
            (
                format!("{} / {}", self.keys.advance.name(), self.keys.advance_alt.name()),
                "Next Image",
            ),
            (self.keys.retreat.name().to_string(), "Previous Image"),
            ("Click Image".to_string(), "Next Image"),
            ("Escape".to_string(), "Back to Grid"),
            ("Alt + Left / Right".to_string(), "History Back / Forward"),
            ("?".to_string(), "Toggle Help"),
        ];

        let mut open = true;
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.heading("Key Bindings");
                ui.separator();
                egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                    for (keys, action) in &rows {
                        ui.label(keys);
                        ui.label(*action);
                        ui.end_row();
                    }
                });
            });

        if !open {
            self.show_help = false;
        }
    }
}
