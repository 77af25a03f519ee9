//! Use-Case: Beschreibung aller Polygone ins Log schreiben.

use crate::app::state::MessageDialog;
use crate::app::AppState;

/// Schreibt die Beschreibung jedes Polygons ins Log (in aktueller Reihenfolge).
///
/// Die Eckpunkte in der Beschreibung stammen vom letzten Zeichnen; nie
/// gezeichnete Polygone zeigen Nullen.
pub fn display_polygons(state: &mut AppState) {
    let count = state.polygons.len();

    if count == 0 {
        log::info!("Polygon-Liste ist leer, nichts anzuzeigen");
        state.show_message(MessageDialog::info("Display", "No polygons to display"));
        return;
    }

    log::info!("Zeige {} Polygon(e):", count);

    let separator = state.options.log_separator();
    for (index, polygon) in state.polygons.iter().enumerate() {
        log::info!("\n{}", polygon.describe());
        if index + 1 < count {
            log::info!("{}", separator);
        }
    }

    let text = if count == 1 {
        "1 polygon printed to command line".to_string()
    } else {
        format!("{} polygons printed to command line", count)
    };
    state.show_message(MessageDialog::info("Display", text));
}
