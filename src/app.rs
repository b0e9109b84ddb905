use std::path::{Path, PathBuf};

use crate::config::SessionConfig;
use crate::display_list::DisplayList;
use crate::error::SessionResult;
use crate::input::InputHandler;
use crate::panels::{canvas_panel, controls_panel};
use crate::session::DrawingSession;
use crate::shape::ShapeKind;

/// Extension given to saved files that were named without one
pub const DEFAULT_EXTENSION: &str = "json";

/// The form values and options we persist between runs.
/// The drawing itself is only kept through explicit save/load.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    pub kind: ShapeKind,
    pub color: String,
    pub size: String,
    pub file_path: String,
    pub session: SessionConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            color: "black".to_owned(),
            size: "50".to_owned(),
            file_path: "shapes.json".to_owned(),
            session: SessionConfig::default(),
        }
    }
}

/// Outcome of the last command, shown under the controls
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct ShapeDrawerApp {
    settings: AppSettings,
    session: DrawingSession<DisplayList>,
    input: InputHandler,
    status: Option<Status>,
}

impl Default for ShapeDrawerApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl ShapeDrawerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous form values (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let session = DrawingSession::with_config(settings.session);
        let canvas = egui::Rect::from_min_size(egui::Pos2::ZERO, settings.session.canvas_size);

        Self {
            settings,
            session,
            input: InputHandler::new(canvas),
            status: None,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    pub fn session(&self) -> &DrawingSession<DisplayList> {
        &self.session
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Push the option checkboxes through to the live session
    pub fn sync_session_config(&mut self) {
        let config = self.session.config_mut();
        config.keep_hidden_shapes = self.settings.session.keep_hidden_shapes;
        config.commit_drag_size = self.settings.session.commit_drag_size;
    }

    pub fn draw(&mut self) {
        let result = self.session.draw_shape(
            self.settings.kind.name(),
            &self.settings.color,
            &self.settings.size,
        );
        let kind = self.settings.kind;
        let result = result.map(|id| format!("Drew {} {}", kind, id));
        self.report(result);
    }

    pub fn delete(&mut self) {
        self.status = Some(match self.session.delete_shape() {
            Some(shape) => Status::Info(format!("Deleted {} {}", shape.kind(), shape.id())),
            None => Status::Info("Nothing selected".to_owned()),
        });
    }

    pub fn save(&mut self) {
        let path = self.save_path();
        let result = self.session.save_shapes(path.as_deref());
        let count = self.session.store().len();
        let result = result.map(|()| match &path {
            Some(path) => format!("Saved {} shapes to {}", count, path.display()),
            None => "Save cancelled".to_owned(),
        });
        self.report(result);
    }

    pub fn load(&mut self) {
        let path = non_empty_path(&self.settings.file_path);
        let result = self.session.load_shapes(path.as_deref());
        let count = self.session.store().len();
        let result = result.map(|()| match &path {
            Some(path) => format!("Loaded {} shapes from {}", count, path.display()),
            None => "Load cancelled".to_owned(),
        });
        self.report(result);
    }

    /// Feed this frame's pointer input on `canvas_rect` into the session
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.session.handle_event(event);
        }
    }

    fn save_path(&self) -> Option<PathBuf> {
        non_empty_path(&self.settings.file_path).map(|path| with_default_extension(&path))
    }

    fn report(&mut self, result: SessionResult<String>) {
        self.status = Some(match result {
            Ok(message) => Status::Info(message),
            Err(err) => {
                log::warn!("Command failed: {}", err);
                Status::Error(err.to_string())
            }
        });
    }
}

/// An empty path field means the user cancelled
fn non_empty_path(text: &str) -> Option<PathBuf> {
    let text = text.trim();
    (!text.is_empty()).then(|| PathBuf::from(text))
}

fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

impl eframe::App for ShapeDrawerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        controls_panel(self, ctx);
        canvas_panel(self, ctx);
    }
}
