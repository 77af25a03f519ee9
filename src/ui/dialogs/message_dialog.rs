use crate::app::{AppIntent, MessageKind, UiState};

/// Zeigt die aktuelle Meldung als modales Fenster.
pub fn show_message_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = &ui_state.message else {
        return events;
    };

    let (symbol, colour) = match message.kind {
        MessageKind::Info => ("ℹ", egui::Color32::LIGHT_BLUE),
        MessageKind::Warning => ("⚠", egui::Color32::YELLOW),
        MessageKind::Error => ("⛔", egui::Color32::LIGHT_RED),
    };

    egui::Window::new(message.title.as_str())
        .id(egui::Id::new("message_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(symbol).size(22.0).color(colour));
                ui.label(message.text.as_str());
            });
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    events.push(AppIntent::MessageDismissed);
                }
            });
        });

    events
}
