//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Rgb;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Schließt die aktuelle Meldung.
pub fn dismiss_message(state: &mut AppState) {
    use_cases::messages::dismiss(state);
}

/// Öffnet den Farbwähler.
pub fn open_colour_selector(state: &mut AppState) {
    use_cases::colour::open_selector(state);
}

/// Schließt den Farbwähler.
pub fn close_colour_selector(state: &mut AppState) {
    use_cases::colour::close_selector(state);
}

/// Übernimmt die gewählte Farbe für neue Polygone.
pub fn set_polygon_color(state: &mut AppState, color: Rgb) {
    use_cases::colour::set_polygon_color(state, color);
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options, &EditorOptions::config_path())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset_options(state, &EditorOptions::config_path())
}
