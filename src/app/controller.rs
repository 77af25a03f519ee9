//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Polygone ===
            AppCommand::AddPolygon => handlers::polygons::add(state),
            AppCommand::OpenSearchDialog => handlers::polygons::open_search(state),
            AppCommand::CloseSearchDialog => handlers::polygons::close_search(state),
            AppCommand::SearchPolygon { text } => handlers::polygons::search(state, &text),
            AppCommand::SortPolygons => handlers::polygons::sort(state),
            AppCommand::DisplayPolygons => handlers::polygons::display(state),
            AppCommand::ClearShapeFields => handlers::polygons::clear_shape_fields(state),
            AppCommand::ClearIdField => handlers::polygons::clear_id_field(state),

            // === Farbwähler ===
            AppCommand::OpenColourSelector => handlers::dialog::open_colour_selector(state),
            AppCommand::CloseColourSelector => handlers::dialog::close_colour_selector(state),
            AppCommand::SetPolygonColor { color } => {
                handlers::dialog::set_polygon_color(state, color)
            }

            // === Zeichenfläche ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissMessage => handlers::dialog::dismiss_message(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    ///
    /// Zeichnet das aktuelle Polygon neu; im Drift-Modus dreht sich dabei
    /// dessen Startwinkel weiter.
    pub fn build_render_scene(
        &self,
        state: &mut AppState,
        viewport_size: [f32; 2],
    ) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
