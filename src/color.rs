use egui::Color32;

use crate::error::ValueError;

// Subset of the Tk color database that people actually type.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("white", Color32::WHITE),
    ("black", Color32::BLACK),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 255, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
    ("gray", Color32::from_rgb(190, 190, 190)),
    ("grey", Color32::from_rgb(190, 190, 190)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(160, 32, 240)),
    ("brown", Color32::from_rgb(165, 42, 42)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("navy", Color32::from_rgb(0, 0, 128)),
    ("gold", Color32::from_rgb(255, 215, 0)),
    ("violet", Color32::from_rgb(238, 130, 238)),
    ("darkgreen", Color32::from_rgb(0, 100, 0)),
    ("darkblue", Color32::from_rgb(0, 0, 139)),
    ("darkred", Color32::from_rgb(139, 0, 0)),
    ("lightblue", Color32::from_rgb(173, 216, 230)),
    ("skyblue", Color32::from_rgb(135, 206, 235)),
    ("lightgreen", Color32::from_rgb(144, 238, 144)),
    ("lightgray", Color32::from_rgb(211, 211, 211)),
    ("lightgrey", Color32::from_rgb(211, 211, 211)),
    ("darkgray", Color32::from_rgb(169, 169, 169)),
    ("darkgrey", Color32::from_rgb(169, 169, 169)),
    ("darkorange", Color32::from_rgb(255, 140, 0)),
    ("lightyellow", Color32::from_rgb(255, 255, 224)),
    ("maroon", Color32::from_rgb(176, 48, 96)),
    ("turquoise", Color32::from_rgb(64, 224, 208)),
    ("salmon", Color32::from_rgb(250, 128, 114)),
    ("tomato", Color32::from_rgb(255, 99, 71)),
    ("coral", Color32::from_rgb(255, 127, 80)),
    ("khaki", Color32::from_rgb(240, 230, 140)),
    ("beige", Color32::from_rgb(245, 245, 220)),
    ("ivory", Color32::from_rgb(255, 255, 240)),
    ("olivedrab", Color32::from_rgb(107, 142, 35)),
    ("forestgreen", Color32::from_rgb(34, 139, 34)),
    ("royalblue", Color32::from_rgb(65, 105, 225)),
    ("steelblue", Color32::from_rgb(70, 130, 180)),
    ("indigo", Color32::from_rgb(75, 0, 130)),
];

/// Resolve a user supplied color name or `#rgb`/`#rrggbb` code.
///
/// Names match Tk's: case and spaces are ignored, so `Sky Blue` is `skyblue`.
pub fn parse_color(name: &str) -> Result<Color32, ValueError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValueError::EmptyColor);
    }

    if name.starts_with('#') {
        return match name.len() {
            4 | 7 => Color32::from_hex(name).map_err(|_| ValueError::UnknownColor(name.to_owned())),
            _ => Err(ValueError::UnknownColor(name.to_owned())),
        };
    }

    let key: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(&key))
        .map(|(_, color)| *color)
        .ok_or_else(|| ValueError::UnknownColor(name.to_owned()))
}
