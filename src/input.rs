// Input handling for Galleria
// Keyboard processing for the gallery views

use crate::app::GalleryApp;
use eframe::egui;
use tracing::warn;

/// Logical actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    HistoryBack,
    HistoryForward,
    CloseImage,
    ToggleHelp,
}

/// Resolved key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub advance: egui::Key,
    pub advance_alt: egui::Key,
    pub retreat: egui::Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            advance: egui::Key::ArrowRight,
            advance_alt: egui::Key::Space,
            retreat: egui::Key::ArrowLeft,
        }
    }
}

impl KeyBindings {
    /// Resolves egui key names; unknown names keep the default binding.
    pub fn from_names(advance: &str, advance_alt: &str, retreat: &str) -> Self {
        let defaults = Self::default();
        Self {
            advance: key_or(advance, defaults.advance),
            advance_alt: key_or(advance_alt, defaults.advance_alt),
            retreat: key_or(retreat, defaults.retreat),
        }
    }

    /// Maps a pressed key to an action. Alt+arrows are reserved for history.
    pub fn action_for(&self, key: egui::Key, modifiers: egui::Modifiers) -> Option<Action> {
        if modifiers.alt {
            return match key {
                egui::Key::ArrowLeft => Some(Action::HistoryBack),
                egui::Key::ArrowRight => Some(Action::HistoryForward),
                _ => None,
            };
        }
        if modifiers.ctrl || modifiers.command {
            return None;
        }
        if key == self.advance || key == self.advance_alt {
            Some(Action::Advance)
        } else if key == self.retreat {
            Some(Action::Retreat)
        } else if key == egui::Key::Escape {
            Some(Action::CloseImage)
        } else if key == egui::Key::Questionmark {
            Some(Action::ToggleHelp)
        } else {
            None
        }
    }
}

/// Keys egui turns into a click on the widget that has keyboard focus.
fn activates_focused_widget(key: egui::Key) -> bool {
    matches!(key, egui::Key::Space | egui::Key::Enter)
}

fn key_or(name: &str, fallback: egui::Key) -> egui::Key {
    egui::Key::from_name(name).unwrap_or_else(|| {
        warn!("Unknown key name '{}', using {}", name, fallback.name());
        fallback
    })
}

impl GalleryApp {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        let pressed: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });

        let widget_focused = ctx.memory(|m| m.focused().is_some());

        for (key, modifiers) in pressed {
            // The focused widget already handles this press as a click
            if widget_focused && activates_focused_widget(key) {
                continue;
            }
            if let Some(action) = self.keys.action_for(key, modifiers) {
                self.perform(action);
            }
        }
    }

    pub(crate) fn perform(&mut self, action: Action) {
        match action {
            Action::Advance => {
                let result = self.controller.show_next().map(|_| ());
                self.report(result);
            }
            Action::Retreat => {
                let result = self.controller.show_prev().map(|_| ());
                self.report(result);
            }
            Action::HistoryBack => self.controller.go_back(),
            Action::HistoryForward => self.controller.go_forward(),
            Action::CloseImage => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    let result = self.controller.close_image();
                    self.report(result);
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
    }
}
