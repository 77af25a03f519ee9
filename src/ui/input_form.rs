//! Eingabemaske für neue Polygone (linkes Seitenpanel).

use super::canvas::to_color32;
use crate::app::{AppIntent, AppState};
use crate::shared::ID_DIGITS;

/// Rendert die Eingabemaske und die Aktions-Buttons.
///
/// Die Textfelder werden direkt im State bearbeitet; geprüft wird erst beim
/// Klick auf "Add Polygon".
pub fn render_input_form(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("polygon_form")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Polygon");
            ui.add_space(6.0);

            let form = &mut state.ui.form;

            egui::Grid::new("polygon_form_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("ID:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.id_text)
                            .char_limit(ID_DIGITS)
                            .hint_text("e.g. 126658"),
                    );
                    ui.end_row();

                    ui.label("Sides:");
                    ui.text_edit_singleline(&mut form.sides_text);
                    ui.end_row();

                    ui.label("Angle:");
                    ui.add(egui::TextEdit::singleline(&mut form.angle_text).hint_text("radians"));
                    ui.end_row();

                    ui.label("Radius:");
                    ui.text_edit_singleline(&mut form.radius_text);
                    ui.end_row();

                    ui.label("Colour:");
                    ui.horizontal(|ui| {
                        let colour = form.selected_color.unwrap_or_default();
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(18.0, 18.0),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(rect, 2.0, to_color32(colour));
                        if ui.button("Choose...").clicked() {
                            events.push(AppIntent::ColourSelectorRequested);
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(10.0);

            if ui.button("Add Polygon").clicked() {
                events.push(AppIntent::AddPolygonRequested);
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Search").clicked() {
                    events.push(AppIntent::SearchRequested);
                }
                if ui.button("Sort").clicked() {
                    events.push(AppIntent::SortRequested);
                }
                if ui.button("Display").clicked() {
                    events.push(AppIntent::DisplayRequested);
                }
            });
        });

    events
}
