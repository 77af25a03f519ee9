//! Zentrale Konfiguration für den RegPoly Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{AngleMode, Rgb};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [900.0, 640.0];

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Linienstärke der Polygon-Umrandung in Pixeln.
pub const LINE_WIDTH: f32 = 1.0;
/// Hintergrundfarbe der Zeichenfläche.
pub const CANVAS_BACKGROUND: Rgb = Rgb::WHITE;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Exakte Länge einer Polygon-ID in Ziffern.
pub const ID_DIGITS: usize = 6;
/// Minimale Seitenzahl eines gültigen Polygons.
pub const MIN_SIDES: u32 = 3;

// ── Log-Ausgabe ─────────────────────────────────────────────────────

/// Breite der Trennlinie zwischen Log-Blöcken.
pub const LOG_SEPARATOR_WIDTH: usize = 150;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `regpoly_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Startwinkel fest halten oder beim Zeichnen mitlaufen lassen
    #[serde(default)]
    pub angle_mode: AngleMode,
    /// Linienstärke der Umrandung in Pixeln
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Breite der Trennlinie in der Log-Ausgabe
    #[serde(default = "default_log_separator_width")]
    pub log_separator_width: usize,
    /// Fenstergröße beim Start
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Hintergrundfarbe der Zeichenfläche (als TOML-Tabelle zuletzt)
    #[serde(default = "default_canvas_background")]
    pub canvas_background: Rgb,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::default(),
            line_width: LINE_WIDTH,
            log_separator_width: LOG_SEPARATOR_WIDTH,
            window_size: WINDOW_SIZE,
            canvas_background: CANVAS_BACKGROUND,
        }
    }
}

/// Serde-Default für `line_width` (Abwärtskompatibilität).
fn default_line_width() -> f32 {
    LINE_WIDTH
}

/// Serde-Default für `canvas_background` (Abwärtskompatibilität).
fn default_canvas_background() -> Rgb {
    CANVAS_BACKGROUND
}

/// Serde-Default für `log_separator_width` (Abwärtskompatibilität).
fn default_log_separator_width() -> usize {
    LOG_SEPARATOR_WIDTH
}

/// Serde-Default für `window_size` (Abwärtskompatibilität).
fn default_window_size() -> [f32; 2] {
    WINDOW_SIZE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("regpoly_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("regpoly_editor.toml")
    }

    /// Trennlinie für die Log-Ausgabe.
    pub fn log_separator(&self) -> String {
        "-".repeat(self.log_separator_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_preserves_values() {
        let opts = EditorOptions {
            angle_mode: AngleMode::Drift,
            line_width: 2.5,
            canvas_background: Rgb::new(10, 20, 30),
            log_separator_width: 40,
            window_size: [800.0, 600.0],
        };
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = "line_width = 3.0\n\n[canvas_background]\nr = 0\ng = 0\nb = 0\n";
        let parsed: EditorOptions = toml::from_str(text).expect("parsebar");
        assert_eq!(parsed.angle_mode, AngleMode::Fixed);
        assert_eq!(parsed.log_separator_width, LOG_SEPARATOR_WIDTH);
        assert_eq!(parsed.window_size, WINDOW_SIZE);
        assert_eq!(parsed.canvas_background, Rgb::BLACK);
    }

    #[test]
    fn partial_file_keeps_the_fields_it_has() {
        let parsed: EditorOptions = toml::from_str("angle_mode = \"Drift\"\n").expect("parsebar");
        assert_eq!(parsed.angle_mode, AngleMode::Drift);
        assert_eq!(parsed.line_width, LINE_WIDTH);
        assert_eq!(parsed.canvas_background, CANVAS_BACKGROUND);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("regpoly_editor_does_not_exist.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "regpoly_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            line_width: 4.0,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn log_separator_uses_configured_width() {
        let opts = EditorOptions {
            log_separator_width: 5,
            ..EditorOptions::default()
        };
        assert_eq!(opts.log_separator(), "-----");
    }
}
