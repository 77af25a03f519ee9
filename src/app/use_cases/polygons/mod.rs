//! Use-Case-Funktionen für die Polygon-Liste.
//!
//! Aufgeteilt nach Operation:
//! - `add`: Eingabemaske prüfen und Polygon anlegen
//! - `search`: Polygon per ID suchen
//! - `sort`: Liste nach ID sortieren
//! - `display`: Beschreibungen aller Polygone ins Log

mod add;
mod display;
mod search;
mod sort;

pub use add::add_polygon;
pub use display::display_polygons;
pub use search::{close_search_dialog, open_search_dialog, search_polygon};
pub use sort::sort_polygons;

use crate::app::AppState;

/// Leert Seiten-, Winkel- und Radius-Feld der Eingabemaske.
pub fn clear_shape_fields(state: &mut AppState) {
    state.ui.form.clear_shape_fields();
}

/// Leert das ID-Feld der Eingabemaske.
pub fn clear_id_field(state: &mut AppState) {
    state.ui.form.clear_id();
}
