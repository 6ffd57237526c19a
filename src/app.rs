use crate::config::{Config, GridConfig};
use crate::controller::GalleryController;
use crate::error::Result;
use crate::input::{Action, KeyBindings};
use crate::io;
use crate::resource;
use crate::startup::StartupOptions;
use crate::state::SessionHistory;
use crate::style::{self, Theme};
use crate::view::Intent;
use eframe::egui;
use std::cell::RefCell;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

const APP_TITLE: &str = "Galleria";

pub struct GalleryApp {
    pub(crate) controller: GalleryController<SessionHistory>,
    pub(crate) root: PathBuf,
    pub(crate) keys: KeyBindings,
    pub(crate) grid: GridConfig,
    pub(crate) show_help: bool,
    pub(crate) error_message: Option<(String, Instant)>,
    window_title: String,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, options: StartupOptions) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx
            .set_visuals(Theme::from_mode(&config.theme.mode).visuals());

        let root = options
            .root
            .clone()
            .or_else(|| config.library.root.clone())
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        Self::load(root, &config, &options)
    }

    /// Scans `root`, builds the controller and applies the startup deep link.
    pub fn load(root: PathBuf, config: &Config, options: &StartupOptions) -> Self {
        info!("Opening library at {}", root.display());

        let mut error_message = None;
        let paths = match io::collect_paths(&root) {
            Ok(paths) => paths,
            Err(e) => {
                error!("Failed to scan {}: {}", root.display(), e);
                error_message = Some((e.to_string(), Instant::now()));
                Vec::new()
            }
        };

        let history = SessionHistory::new(options.initial_url());
        let mut controller = GalleryController::new(paths, history);
        if let Some(fragment) = &options.fragment {
            controller.apply_deep_link(fragment);
        }

        Self {
            controller,
            root,
            keys: config.key_bindings(),
            grid: config.grid.clone(),
            show_help: false,
            error_message,
            window_title: APP_TITLE.to_string(),
        }
    }

    /// `file://` URI for a resource URL, if it resolves below the root.
    pub(crate) fn image_uri(&self, url: &str) -> Option<String> {
        resource::resolve(&self.root, url).map(|path| resource::file_uri(&path))
    }

    pub(crate) fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            error!("{}", e);
            self.error_message = Some((e.to_string(), Instant::now()));
        }
    }

    pub(crate) fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::OpenGallery(gallery) => {
                let result = self.controller.navigate_to_gallery(&gallery, false);
                self.report(result);
            }
            Intent::OpenImage { gallery, image } => {
                let result = self.controller.navigate_to_image(&gallery, &image, false);
                self.report(result);
            }
            Intent::OpenPosition(position) => {
                let result = self.controller.navigate_to_position(position);
                self.report(result);
            }
            Intent::Next => self.perform(Action::Advance),
            Intent::Prev => self.perform(Action::Retreat),
            Intent::Back => self.perform(Action::HistoryBack),
            Intent::Forward => self.perform(Action::HistoryForward),
        }
    }

    fn clear_expired_messages(&mut self) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= style::MESSAGE_TIMEOUT_SECS {
                self.error_message = None;
            }
        }
    }

    /// Title of the current history record, prefixed with the app name.
    fn current_window_title(&self) -> String {
        match self.controller.history().current_title() {
            "" => APP_TITLE.to_string(),
            title => format!("{} - {}", APP_TITLE, title),
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.current_window_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.clear_expired_messages();

        // Deferred actions
        let intent = RefCell::new(None);

        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                self.render_history_buttons(ui, &intent);
                ui.separator();
                self.render_menu(ui, &intent);
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.render_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui, &intent);
        });

        self.render_help_modal(ctx);

        if let Some(intent) = intent.into_inner() {
            self.apply_intent(intent);
            ctx.request_repaint();
        }
        self.sync_window_title(ctx);

        if self.error_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
