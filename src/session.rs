use egui::{Color32, Pos2};
use std::path::Path;

use crate::color::parse_color;
use crate::config::SessionConfig;
use crate::display_list::DisplayList;
use crate::error::{SessionError, SessionResult};
use crate::fs::{FileSystem, OsFileSystem};
use crate::input::PointerEvent;
use crate::shape::{Geometry, Shape, ShapeId, ShapeRecord};
use crate::store::ShapeStore;
use crate::surface::{RenderSurface, ShapeStyle};

/// Where the current pointer gesture stands
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        start: Pos2,
        /// The shape that was under the pointer at press time
        active: Option<ShapeId>,
        /// Geometry of the most recent redraw, if the pointer moved
        last_geometry: Option<Geometry>,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::Dragging { .. } => "Dragging",
        }
    }

    pub fn active_shape(&self) -> Option<ShapeId> {
        match self {
            GestureState::Dragging { active, .. } => *active,
            GestureState::Idle => None,
        }
    }
}

/// Interprets gestures and commands, keeping the store and the canvas in step.
///
/// The session is the only thing that issues drawing calls to its surface.
/// Every command either completes or returns an error without having
/// touched the store or the canvas.
#[derive(Debug)]
pub struct DrawingSession<R: RenderSurface, F: FileSystem = OsFileSystem> {
    store: ShapeStore,
    surface: R,
    fs: F,
    config: SessionConfig,
    gesture: GestureState,
    selected: Option<ShapeId>,
}

impl DrawingSession<DisplayList, OsFileSystem> {
    /// An empty drawing backed by an in-memory display list and the real file system
    pub fn with_config(config: SessionConfig) -> Self {
        Self::new(
            ShapeStore::new(),
            DisplayList::with_hit_tolerance(config.hit_tolerance),
            OsFileSystem,
            config,
        )
    }
}

impl<R: RenderSurface, F: FileSystem> DrawingSession<R, F> {
    pub fn new(store: ShapeStore, surface: R, fs: F, config: SessionConfig) -> Self {
        Self {
            store,
            surface,
            fs,
            config,
            gesture: GestureState::Idle,
            selected: None,
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// The shape picked by the most recent press, if any
    pub fn selected(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(pos) => self.on_press(pos),
            PointerEvent::Drag(pos) => self.on_drag(pos),
            PointerEvent::Release => self.on_release(),
        }
    }

    /// Start a gesture, picking the shape under the pointer as the active one
    pub fn on_press(&mut self, pos: Pos2) {
        let active = self
            .surface
            .shape_under_point(pos)
            .and_then(|handle| self.store.find_by_handle(handle))
            .map(Shape::id);

        log::debug!("Gesture started at {:?}, active shape: {:?}", pos, active);

        self.selected = active;
        self.gesture = GestureState::Dragging {
            start: pos,
            active,
            last_geometry: None,
        };
    }

    /// Redraw the active shape spanning from the press point to `pos`
    pub fn on_drag(&mut self, pos: Pos2) {
        let (start, id) = match self.gesture {
            GestureState::Dragging {
                start,
                active: Some(id),
                ..
            } => (start, id),
            _ => return,
        };

        let Some(shape) = self.store.get_mut(id) else {
            log::warn!("Active shape {} vanished during drag", id);
            return;
        };

        let geometry = Geometry::dragged(shape.kind(), start, pos);
        let style = ShapeStyle::outline(shape_color(shape.color()));

        if let Some(old) = shape.handle() {
            self.surface.erase(old);
        }
        let handle = self.surface.draw_geometry(geometry, style);
        shape.set_handle(Some(handle));

        if let GestureState::Dragging { last_geometry, .. } = &mut self.gesture {
            *last_geometry = Some(geometry);
        }
    }

    /// End the gesture, committing the dragged size if configured to
    pub fn on_release(&mut self) {
        if let GestureState::Dragging {
            active: Some(id),
            last_geometry: Some(geometry),
            ..
        } = self.gesture
        {
            if self.config.commit_drag_size {
                if let Some(shape) = self.store.get_mut(id) {
                    let size = geometry.derived_size();
                    log::debug!("Shape {} resized from {} to {}", id, shape.size(), size);
                    shape.set_size(size);
                }
            }
        }

        self.gesture = GestureState::Idle;
    }

    /// Wipe the canvas and draw one new shape at the reference point.
    ///
    /// Inputs are the raw form values; nothing changes if they are invalid.
    pub fn draw_shape(&mut self, kind: &str, color: &str, size: &str) -> SessionResult<ShapeId> {
        let record = ShapeRecord::parse(kind, color, size)?;

        self.surface.clear_all();
        if self.config.keep_hidden_shapes {
            self.store.clear_handles();
        } else {
            self.store.clear();
        }
        self.reset_gesture();

        let id = self.store.add_record(record);
        self.render_placed(id);

        log::info!("Drew shape {} ({} in store)", id, self.store.len());
        Ok(id)
    }

    /// Remove the selected shape from the canvas and the store.
    ///
    /// Returns the removed shape, or `None` when nothing was selected.
    pub fn delete_shape(&mut self) -> Option<Shape> {
        let id = self.selected.take()?;

        if self.gesture.active_shape() == Some(id) {
            self.gesture = GestureState::Idle;
        }

        match self.store.remove(id) {
            Ok(shape) => {
                if let Some(handle) = shape.handle() {
                    self.surface.erase(handle);
                }
                log::info!("Deleted shape {}", id);
                Some(shape)
            }
            Err(err) => {
                log::warn!("Delete failed: {}", err);
                None
            }
        }
    }

    /// Write every shape to `path`. `None` means the user cancelled.
    pub fn save_shapes(&self, path: Option<&Path>) -> SessionResult<()> {
        let Some(path) = path else {
            log::debug!("Save cancelled");
            return Ok(());
        };

        let bytes = self.store.serialize()?;
        self.fs
            .write_file(path, &bytes)
            .map_err(|source| io_error(path, source))?;

        log::info!("Saved {} shapes to {}", self.store.len(), path.display());
        Ok(())
    }

    /// Replace the drawing with the shapes stored in `path`.
    ///
    /// The file is read and parsed before anything is cleared, so a failed
    /// load leaves the current drawing as it was. Colors are not checked
    /// here; names we cannot resolve are drawn in black.
    pub fn load_shapes(&mut self, path: Option<&Path>) -> SessionResult<()> {
        let Some(path) = path else {
            log::debug!("Load cancelled");
            return Ok(());
        };

        let bytes = self
            .fs
            .read_file(path)
            .map_err(|source| io_error(path, source))?;
        let records = ShapeStore::deserialize(&bytes)?;

        self.surface.clear_all();
        self.reset_gesture();
        for id in self.store.replace_all(records) {
            self.render_placed(id);
        }

        log::info!("Loaded {} shapes from {}", self.store.len(), path.display());
        Ok(())
    }

    fn reset_gesture(&mut self) {
        self.gesture = GestureState::Idle;
        self.selected = None;
    }

    /// Draw a stored shape at the reference point and record its handle
    fn render_placed(&mut self, id: ShapeId) {
        let reference = self.config.reference_point;
        let Some(shape) = self.store.get_mut(id) else {
            return;
        };

        let geometry = Geometry::placed(shape.kind(), shape.size(), reference);
        let handle = self
            .surface
            .draw_geometry(geometry, ShapeStyle::solid(shape_color(shape.color())));
        shape.set_handle(Some(handle));
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SessionError {
    log::warn!("File access failed for {}: {}", path.display(), source);
    SessionError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// Loaded files may name colors outside our table.
fn shape_color(name: &str) -> Color32 {
    parse_color(name).unwrap_or_else(|err| {
        log::warn!("{}, drawing in black", err);
        Color32::BLACK
    })
}
