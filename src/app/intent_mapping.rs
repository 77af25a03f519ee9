//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddPolygonRequested => vec![AppCommand::AddPolygon],
        AppIntent::SearchRequested => vec![AppCommand::OpenSearchDialog],
        AppIntent::SearchSubmitted { text } => vec![
            AppCommand::CloseSearchDialog,
            AppCommand::SearchPolygon { text },
            AppCommand::ClearShapeFields,
        ],
        AppIntent::SearchCancelled => vec![
            AppCommand::CloseSearchDialog,
            AppCommand::ClearShapeFields,
        ],
        AppIntent::SortRequested => vec![
            AppCommand::SortPolygons,
            AppCommand::ClearShapeFields,
            AppCommand::ClearIdField,
        ],
        AppIntent::DisplayRequested => vec![
            AppCommand::DisplayPolygons,
            AppCommand::ClearShapeFields,
            AppCommand::ClearIdField,
        ],
        AppIntent::ColourSelectorRequested => vec![AppCommand::OpenColourSelector],
        AppIntent::ColourSelected { color } => vec![
            AppCommand::SetPolygonColor { color },
            AppCommand::CloseColourSelector,
        ],
        AppIntent::ColourSelectorClosed => vec![AppCommand::CloseColourSelector],
        AppIntent::MessageDismissed => vec![AppCommand::DismissMessage],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
