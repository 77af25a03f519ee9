//! Use-Case: Polygon-Liste nach ID sortieren.

use crate::app::state::MessageDialog;
use crate::app::AppState;

/// Sortiert die Liste aufsteigend nach ID und meldet das Ergebnis.
///
/// Leere Listen und einzelne Polygone bleiben unangetastet.
pub fn sort_polygons(state: &mut AppState) {
    let count = state.polygons.len();

    let message = match count {
        0 => {
            log::info!("Keine Polygone zum Sortieren (leere Liste)");
            MessageDialog::info("No Polygons", "There are no polygons to sort")
        }
        1 => {
            log::info!("Nur 1 Polygon in der Liste, Sortieren nicht nötig");
            MessageDialog::info(
                "1 Polygon Sorted",
                "There is 1 polygon present, so there is no need for sorting",
            )
        }
        n => {
            state.polygons.sort_in_place();
            log::info!("{} Polygone sortiert", n);
            MessageDialog::info("Polygons Sorted", format!("{} polygons sorted", n))
        }
    };

    state.show_message(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PolygonRecord;

    fn state_with(ids: &[u32]) -> AppState {
        let mut state = AppState::new();
        for &id in ids {
            state
                .polygons
                .append(PolygonRecord::new(id, 3, 0.0, 10.0, None));
        }
        state
    }

    #[test]
    fn sorts_and_reports_count() {
        let mut state = state_with(&[300500, 100200, 999999]);

        sort_polygons(&mut state);

        assert_eq!(state.polygons.ids(), vec![100200, 300500, 999999]);
        assert_eq!(
            state.ui.message.as_ref().map(|m| m.text.as_str()),
            Some("3 polygons sorted")
        );
    }

    #[test]
    fn empty_and_single_lists_report_without_sorting() {
        let mut empty = AppState::new();
        sort_polygons(&mut empty);
        assert_eq!(
            empty.ui.message.as_ref().map(|m| m.title.as_str()),
            Some("No Polygons")
        );

        let mut single = state_with(&[424242]);
        sort_polygons(&mut single);
        assert_eq!(
            single.ui.message.as_ref().map(|m| m.title.as_str()),
            Some("1 Polygon Sorted")
        );
        assert_eq!(single.polygons.ids(), vec![424242]);
    }

    #[test]
    fn current_polygon_survives_sorting() {
        let mut state = state_with(&[500000, 100000]);
        state.current_polygon = Some(500000);

        sort_polygons(&mut state);

        assert_eq!(state.current().map(|p| p.id()), Some(500000));
    }
}
