#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod display_list;
pub mod error;
pub mod fs;
pub mod input;
pub mod panels;
pub mod session;
pub mod shape;
pub mod store;
pub mod surface;

pub use app::{AppSettings, ShapeDrawerApp};
pub use config::SessionConfig;
pub use display_list::{DisplayList, Primitive, RenderStats};
pub use error::{SessionError, SessionResult, StoreError, ValueError};
pub use fs::{FileSystem, OsFileSystem};
pub use input::{InputHandler, PointerEvent};
pub use session::{DrawingSession, GestureState};
pub use shape::{Geometry, Shape, ShapeId, ShapeKind, ShapeRecord};
pub use store::ShapeStore;
pub use surface::{Handle, RenderSurface, ShapeStyle};
