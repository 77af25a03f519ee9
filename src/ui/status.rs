//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Polygons: {}", state.polygons.len()));

            ui.separator();

            match state.current() {
                Some(polygon) => ui.label(format!(
                    "Current: {} ({} sides, radius {}, {})",
                    polygon.formatted_id(),
                    polygon.sides(),
                    polygon.radius(),
                    polygon.color()
                )),
                None => ui.label("Current: none"),
            };

            ui.separator();

            let colour = state.ui.form.selected_color.unwrap_or_default();
            ui.label(format!("Colour: {}", colour));

            ui.separator();

            let [w, h] = state.view.viewport_size;
            ui.label(format!("Canvas: {}x{}", w as u32, h as u32));
        });
    });
}
