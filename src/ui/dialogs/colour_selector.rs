use crate::app::{AppIntent, UiState};
use crate::ui::canvas::to_color32;

/// Zeigt den RGB-Farbwähler mit drei Schiebereglern und Vorschau.
pub fn show_colour_selector(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.colour_selector.visible {
        return events;
    }

    egui::Window::new("Select Colour")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            let channels = &mut ui_state.colour_selector.channels;
            ui.add(egui::Slider::new(&mut channels[0], 0..=255).text("Red"));
            ui.add(egui::Slider::new(&mut channels[1], 0..=255).text("Green"));
            ui.add(egui::Slider::new(&mut channels[2], 0..=255).text("Blue"));

            ui.add_space(6.0);

            let preview = ui_state.colour_selector.preview();
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(48.0, 24.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, to_color32(preview));
                ui.label(preview.to_string());
            });

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("Select Colour").clicked() {
                    events.push(AppIntent::ColourSelected { color: preview });
                }
                if ui.button("Cancel").clicked() {
                    events.push(AppIntent::ColourSelectorClosed);
                }
            });
        });

    events
}
