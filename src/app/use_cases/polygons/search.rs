//! Use-Case: Polygon per ID suchen.

use crate::app::state::MessageDialog;
use crate::app::use_cases::messages::report_input_error;
use crate::app::validation;
use crate::app::AppState;

/// Öffnet den Such-Dialog. Bei leerer Liste gibt es stattdessen einen Hinweis.
pub fn open_search_dialog(state: &mut AppState) {
    if state.polygons.is_empty() {
        log::info!("Polygon-Liste ist leer, Suche nicht möglich");
        state.show_message(MessageDialog::info(
            "No Polygons",
            "No polygons have been added\nAdd polygons first to enable search functionality",
        ));
        return;
    }

    state.ui.search_dialog.text.clear();
    state.ui.search_dialog.visible = true;
}

/// Schließt den Such-Dialog.
pub fn close_search_dialog(state: &mut AppState) {
    state.ui.search_dialog.visible = false;
}

/// Sucht ein Polygon und macht es zum aktuellen Polygon.
///
/// Bei ungültiger oder unbekannter ID bleibt die Zeichenfläche leer.
pub fn search_polygon(state: &mut AppState, text: &str) {
    let id = match validation::validate_search_id(text) {
        Ok(id) => id,
        Err(e) => {
            state.current_polygon = None;
            report_input_error(state, &e);
            log::info!("Aktuelles Polygon: keines");
            return;
        }
    };

    if let Some(polygon) = state.polygons.find_by_id(id) {
        let formatted = polygon.formatted_id();
        state.current_polygon = Some(id);
        log::info!("Polygon {} gefunden", formatted);
        log::info!("Aktuelles Polygon: {}", formatted);
    } else {
        let formatted = crate::core::format_id(id);
        state.current_polygon = None;
        log::warn!("ID {} nicht in der Polygon-Liste", formatted);
        state.show_message(MessageDialog::error(
            "ID Not Found",
            format!("No polygon found with ID: {}", formatted),
        ));
        log::info!("Aktuelles Polygon: keines");
    }
}
