//! Meldungen an den Benutzer (Dialog + Log).

use crate::app::state::MessageDialog;
use crate::app::validation::{InputError, InputField};
use crate::app::AppState;

/// Meldet eine abgelehnte Eingabe, leert das betroffene Feld und zeigt den Dialog.
pub fn report_input_error(state: &mut AppState, error: &InputError) {
    log::warn!("Eingabe abgelehnt: {}", error);

    let form = &mut state.ui.form;
    match error.field() {
        InputField::Id | InputField::SearchId => form.id_text.clear(),
        InputField::Sides => form.sides_text.clear(),
        InputField::Angle => form.angle_text.clear(),
        InputField::Radius => form.radius_text.clear(),
    }

    state.show_message(MessageDialog::new(
        error.kind(),
        error.title(),
        error.to_string(),
    ));
}

/// Schließt die aktuelle Meldung.
pub fn dismiss(state: &mut AppState) {
    state.ui.message = None;
}
