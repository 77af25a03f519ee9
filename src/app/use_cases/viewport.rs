//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Größe der Zeichenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    log::debug!("Zeichenfläche: {}x{}", size[0], size[1]);
    state.view.viewport_size = size;
}
