//! Use-Cases für den RGB-Farbwähler.

use crate::app::AppState;
use crate::core::Rgb;

/// Öffnet den Farbwähler; die Regler starten bei der zuletzt gewählten Farbe.
pub fn open_selector(state: &mut AppState) {
    let current = state.ui.form.selected_color.unwrap_or(Rgb::BLACK);
    state.ui.colour_selector.channels = current.to_array();
    state.ui.colour_selector.visible = true;
}

/// Schließt den Farbwähler ohne die Farbe zu ändern.
pub fn close_selector(state: &mut AppState) {
    state.ui.colour_selector.visible = false;
}

/// Übernimmt eine Farbe für alle folgenden Polygone.
pub fn set_polygon_color(state: &mut AppState, color: Rgb) {
    state.ui.form.selected_color = Some(color);
    log::info!("Farbe für neue Polygone: {}", color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_selector_starts_from_selected_color() {
        let mut state = AppState::new();
        open_selector(&mut state);
        assert!(state.ui.colour_selector.visible);
        assert_eq!(state.ui.colour_selector.channels, [0, 0, 0]);

        close_selector(&mut state);
        set_polygon_color(&mut state, Rgb::new(9, 8, 7));
        open_selector(&mut state);
        assert_eq!(state.ui.colour_selector.preview(), Rgb::new(9, 8, 7));
    }
}
