//! Handler für Polygon-Liste und Eingabemaske.

use crate::app::use_cases;
use crate::app::AppState;

/// Legt ein Polygon aus der Eingabemaske an.
pub fn add(state: &mut AppState) {
    use_cases::polygons::add_polygon(state);
}

/// Öffnet den Such-Dialog.
pub fn open_search(state: &mut AppState) {
    use_cases::polygons::open_search_dialog(state);
}

/// Schließt den Such-Dialog.
pub fn close_search(state: &mut AppState) {
    use_cases::polygons::close_search_dialog(state);
}

/// Sucht ein Polygon per ID.
pub fn search(state: &mut AppState, text: &str) {
    use_cases::polygons::search_polygon(state, text);
}

/// Sortiert die Polygon-Liste.
pub fn sort(state: &mut AppState) {
    use_cases::polygons::sort_polygons(state);
}

/// Schreibt alle Polygone ins Log.
pub fn display(state: &mut AppState) {
    use_cases::polygons::display_polygons(state);
}

/// Leert Seiten-, Winkel- und Radius-Feld.
pub fn clear_shape_fields(state: &mut AppState) {
    use_cases::polygons::clear_shape_fields(state);
}

/// Leert das ID-Feld.
pub fn clear_id_field(state: &mut AppState) {
    use_cases::polygons::clear_id_field(state);
}
