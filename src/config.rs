use egui::{Pos2, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::display_list::DEFAULT_HIT_TOLERANCE;

/// Tunables for a drawing session. Persisted with the rest of the app state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SessionConfig {
    /// Where the draw and load commands center every shape
    pub reference_point: Pos2,
    pub canvas_size: Vec2,
    /// How far from a line a press still selects it
    pub hit_tolerance: f32,
    /// Keep the records of shapes wiped off the canvas by a new draw.
    /// They stay invisible but are still saved.
    pub keep_hidden_shapes: bool,
    /// Write the size implied by a drag back into the store on release
    pub commit_drag_size: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reference_point: pos2(200.0, 150.0),
            canvas_size: vec2(400.0, 300.0),
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            keep_hidden_shapes: false,
            commit_drag_size: true,
        }
    }
}
