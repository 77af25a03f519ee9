//! Top-Menü (File, Polygon, Edit).

use crate::app::AppIntent;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Polygon", |ui| {
                if ui.button("Add Polygon").clicked() {
                    events.push(AppIntent::AddPolygonRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Search...").clicked() {
                    events.push(AppIntent::SearchRequested);
                    ui.close();
                }
                // Auch bei leerer Liste aktiv, der Hinweis kommt als Meldung
                if ui.button("Sort").clicked() {
                    events.push(AppIntent::SortRequested);
                    ui.close();
                }
                if ui.button("Display").clicked() {
                    events.push(AppIntent::DisplayRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Colour...").clicked() {
                    events.push(AppIntent::ColourSelectorRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
