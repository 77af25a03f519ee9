//! Use-Cases für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Übernimmt neue Optionen und speichert sie unter `path`.
pub fn apply_options(
    state: &mut AppState,
    options: EditorOptions,
    path: &Path,
) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(path)
}

/// Setzt Optionen auf Standardwerte zurück und speichert sie unter `path`.
pub fn reset_options(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    log::info!("Optionen auf Standardwerte zurückgesetzt");
    state.options = EditorOptions::default();
    state.options.save_to_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AngleMode, Rgb};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "regpoly_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn apply_sets_state_and_persists() {
        let path = temp_path("apply");
        let mut state = AppState::new();
        let options = EditorOptions {
            angle_mode: AngleMode::Drift,
            line_width: 2.0,
            canvas_background: Rgb::new(1, 2, 3),
            ..EditorOptions::default()
        };

        apply_options(&mut state, options.clone(), &path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(state.options, options);
        assert_eq!(loaded, options);
    }

    #[test]
    fn reset_restores_defaults_and_persists() {
        let path = temp_path("reset");
        let mut state = AppState::new();
        state.options.line_width = 7.0;
        state.options.angle_mode = AngleMode::Drift;

        reset_options(&mut state, &path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(state.options, EditorOptions::default());
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn apply_to_unwritable_path_reports_error_but_keeps_options() {
        let path = std::env::temp_dir()
            .join("regpoly_editor_missing_dir")
            .join("nested")
            .join("options.toml");
        let mut state = AppState::new();
        let options = EditorOptions {
            line_width: 5.0,
            ..EditorOptions::default()
        };

        let result = apply_options(&mut state, options, &path);

        assert!(result.is_err());
        assert_eq!(state.options.line_width, 5.0);
    }
}
