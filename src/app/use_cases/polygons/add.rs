//! Use-Case: Polygon aus der Eingabemaske anlegen.

use crate::app::use_cases::messages::report_input_error;
use crate::app::validation::{self, InputError};
use crate::app::AppState;
use crate::core::{format_id, PolygonRecord};

/// Prüft die Eingabemaske und legt bei Erfolg ein neues Polygon an.
///
/// Geprüft wird in der Reihenfolge ID (inkl. Duplikat), Seiten, Winkel,
/// Radius; der erste Fehler bricht ab. Das neue Polygon wird sofort das
/// aktuelle Polygon, alle vier Felder werden geleert. Die gewählte Farbe
/// bleibt für das nächste Polygon erhalten.
pub fn add_polygon(state: &mut AppState) {
    let polygon = match validated_polygon(state) {
        Ok(polygon) => polygon,
        Err(e) => {
            report_input_error(state, &e);
            return;
        }
    };

    let separator = state.options.log_separator();
    let id = polygon.formatted_id();

    log::info!("{}", separator);
    log::info!("Prüfung bestanden für Polygon {}", id);
    match state.ui.form.selected_color {
        Some(color) => log::info!("Farbe für Polygon {}: {}", id, color),
        None => log::info!("Standardfarbe für Polygon {} (schwarz)", id),
    }

    state.current_polygon = Some(polygon.id());
    state.polygons.append(polygon);

    log::info!("Polygon {} zur Liste hinzugefügt", id);
    log::info!("{}", separator);
    log::info!("Aktuelles Polygon: {}", id);

    state.ui.form.clear_shape_fields();
    state.ui.form.clear_id();
}

fn validated_polygon(state: &AppState) -> Result<PolygonRecord, InputError> {
    let form = &state.ui.form;

    let id = validation::validate_id(&form.id_text)?;
    if state.polygons.contains_id(id) {
        return Err(InputError::DuplicateId { id: format_id(id) });
    }

    let sides = validation::validate_sides(&form.sides_text)?;
    let angle = validation::validate_angle(&form.angle_text)?;
    let radius = validation::validate_radius(&form.radius_text)?;

    Ok(PolygonRecord::new(
        id,
        sides,
        angle,
        radius,
        form.selected_color,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::MessageKind;
    use crate::core::Rgb;

    fn fill_form(state: &mut AppState, id: &str, sides: &str, angle: &str, radius: &str) {
        let form = &mut state.ui.form;
        form.id_text = id.to_string();
        form.sides_text = sides.to_string();
        form.angle_text = angle.to_string();
        form.radius_text = radius.to_string();
    }

    #[test]
    fn valid_form_appends_selects_and_clears() {
        let mut state = AppState::new();
        fill_form(&mut state, "126658", "5", "0.5", "40");

        add_polygon(&mut state);

        assert_eq!(state.polygons.len(), 1);
        assert_eq!(state.current_polygon, Some(126658));
        let polygon = state.current().expect("aktuelles Polygon");
        assert_eq!(polygon.sides(), 5);
        assert_eq!(polygon.starting_angle(), 0.5);
        assert_eq!(polygon.radius(), 40.0);
        assert_eq!(polygon.color(), Rgb::BLACK);

        let form = &state.ui.form;
        assert!(form.id_text.is_empty());
        assert!(form.sides_text.is_empty());
        assert!(form.angle_text.is_empty());
        assert!(form.radius_text.is_empty());
        assert!(state.ui.message.is_none());
    }

    #[test]
    fn selected_color_is_used_and_kept() {
        let mut state = AppState::new();
        state.ui.form.selected_color = Some(Rgb::new(200, 10, 10));
        fill_form(&mut state, "100001", "3", "0", "10");

        add_polygon(&mut state);

        assert_eq!(
            state.current().map(|p| p.color()),
            Some(Rgb::new(200, 10, 10))
        );
        assert_eq!(state.ui.form.selected_color, Some(Rgb::new(200, 10, 10)));
    }

    #[test]
    fn duplicate_id_is_rejected_and_id_field_cleared() {
        let mut state = AppState::new();
        fill_form(&mut state, "111111", "4", "0", "10");
        add_polygon(&mut state);

        fill_form(&mut state, "111111", "6", "0", "20");
        add_polygon(&mut state);

        assert_eq!(state.polygons.len(), 1);
        assert!(state.ui.form.id_text.is_empty());
        assert_eq!(state.ui.form.sides_text, "6");
        let message = state.ui.message.clone().expect("Meldung gesetzt");
        assert_eq!(message.title, "Duplicate ID");
        assert_eq!(message.kind, MessageKind::Error);
    }

    #[test]
    fn first_invalid_field_stops_validation() {
        let mut state = AppState::new();
        fill_form(&mut state, "222222", "2", "abc", "-1");

        add_polygon(&mut state);

        assert!(state.polygons.is_empty());
        assert!(state.current_polygon.is_none());
        assert!(state.ui.form.sides_text.is_empty());
        assert_eq!(state.ui.form.angle_text, "abc");
        assert_eq!(state.ui.form.radius_text, "-1");
        assert_eq!(
            state.ui.message.as_ref().map(|m| m.title.as_str()),
            Some("Invalid Sides")
        );
    }

    #[test]
    fn missing_value_is_a_warning() {
        let mut state = AppState::new();
        fill_form(&mut state, "", "4", "0", "10");

        add_polygon(&mut state);

        let message = state.ui.message.clone().expect("Meldung gesetzt");
        assert_eq!(message.title, "Missing Value");
        assert_eq!(message.kind, MessageKind::Warning);
    }

    #[test]
    fn minus_one_is_a_valid_angle() {
        let mut state = AppState::new();
        fill_form(&mut state, "333333", "3", "-1", "10");

        add_polygon(&mut state);

        assert_eq!(state.current().map(|p| p.starting_angle()), Some(-1.0));
    }
}
