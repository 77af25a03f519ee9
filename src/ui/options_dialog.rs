//! Optionen-Dialog für Startwinkel-Modus, Linienstärke und Hintergrund.

use crate::app::{AppIntent, AppState};
use crate::core::{AngleMode, Rgb};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Drawing ─────────────────────────────────────
            ui.collapsing("Drawing", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Starting angle:");
                    egui::ComboBox::from_id_salt("angle_mode")
                        .selected_text(angle_mode_label(opts.angle_mode))
                        .show_ui(ui, |ui| {
                            for mode in [AngleMode::Fixed, AngleMode::Drift] {
                                changed |= ui
                                    .selectable_value(
                                        &mut opts.angle_mode,
                                        mode,
                                        angle_mode_label(mode),
                                    )
                                    .changed();
                            }
                        });
                });
                ui.horizontal(|ui| {
                    ui.label("Line width (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.line_width)
                                .range(0.5..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Background:", &mut opts.canvas_background);
            });

            // ── Log ─────────────────────────────────────────
            ui.collapsing("Log output", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Separator width (chars):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.log_separator_width)
                                .range(0..=300)
                                .speed(1.0),
                        )
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn angle_mode_label(mode: AngleMode) -> &'static str {
    match mode {
        AngleMode::Fixed => "Fixed",
        AngleMode::Drift => "Drift (angle advances per draw)",
    }
}

/// Hilfsfunktion: Farb-Editor für [`Rgb`] ohne Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Rgb) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut channels = color.to_array();
        if ui.color_edit_button_srgb(&mut channels).changed() {
            *color = Rgb::from(channels);
            changed = true;
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_mode_labels_are_english() {
        assert_eq!(angle_mode_label(AngleMode::Fixed), "Fixed");
        assert!(angle_mode_label(AngleMode::Drift).starts_with("Drift"));
    }
}
