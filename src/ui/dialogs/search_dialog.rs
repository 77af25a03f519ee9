use crate::app::{AppIntent, UiState};
use crate::shared::ID_DIGITS;

/// Zeigt den Such-Dialog für eine Polygon-ID.
pub fn show_search_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Meldungen haben Vorrang, der Dialog wartet dahinter
    if !ui_state.search_dialog.visible || ui_state.message.is_some() {
        return events;
    }

    egui::Window::new("Search Polygon")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.label("Enter the 6 digit ID of the polygon to draw:");
            ui.add_space(4.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut ui_state.search_dialog.text)
                    .char_limit(ID_DIGITS)
                    .hint_text("e.g. 126658"),
            );
            response.request_focus();
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    events.push(AppIntent::SearchSubmitted {
                        text: ui_state.search_dialog.text.clone(),
                    });
                }
                if ui.button("Cancel").clicked() {
                    events.push(AppIntent::SearchCancelled);
                }
            });
        });

    events
}
