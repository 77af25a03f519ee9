//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{PolygonList, PolygonRecord, Rgb};
use crate::shared::EditorOptions;

/// Texteingaben der Polygon-Maske (so wie getippt, noch ungeprüft)
#[derive(Debug, Clone, Default)]
pub struct PolygonForm {
    /// 6-stellige ID
    pub id_text: String,
    /// Seitenzahl
    pub sides_text: String,
    /// Startwinkel in Radiant
    pub angle_text: String,
    /// Umkreisradius
    pub radius_text: String,
    /// Über den Farbwähler gesetzte Farbe (None = Schwarz)
    pub selected_color: Option<Rgb>,
}

impl PolygonForm {
    /// Leert Seiten-, Winkel- und Radius-Feld.
    pub fn clear_shape_fields(&mut self) {
        self.sides_text.clear();
        self.angle_text.clear();
        self.radius_text.clear();
    }

    /// Leert das ID-Feld.
    pub fn clear_id(&mut self) {
        self.id_text.clear();
    }
}

/// Zustand des RGB-Farbwählers
#[derive(Debug, Clone, Default)]
pub struct ColourSelectorState {
    /// Ob das Fenster sichtbar ist
    pub visible: bool,
    /// Schiebereglerwerte Rot, Grün, Blau
    pub channels: [u8; 3],
}

impl ColourSelectorState {
    /// Aktuell eingestellte Vorschaufarbe
    pub fn preview(&self) -> Rgb {
        Rgb::from(self.channels)
    }
}

/// Zustand des Such-Dialogs
#[derive(Debug, Clone, Default)]
pub struct SearchDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Eingegebene Such-ID
    pub text: String,
}

/// Art einer Meldung (bestimmt Symbol und Farbe)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Information (z.B. Sortier-Ergebnis)
    Info,
    /// Fehlender Wert
    Warning,
    /// Ungültige Eingabe oder nicht gefunden
    Error,
}

/// Modale Meldung mit Titel und Text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    /// Fenstertitel
    pub title: String,
    /// Meldungstext (darf Zeilenumbrüche enthalten)
    pub text: String,
    /// Art der Meldung
    pub kind: MessageKind,
}

impl MessageDialog {
    /// Erstellt eine Info-Meldung.
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, title, text)
    }

    /// Erstellt eine Fehlermeldung.
    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, title, text)
    }

    /// Erstellt eine Meldung beliebiger Art.
    pub fn new(kind: MessageKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            kind,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Eingabemaske
    pub form: PolygonForm,
    /// RGB-Farbwähler
    pub colour_selector: ColourSelectorState,
    /// Such-Dialog
    pub search_dialog: SearchDialogState,
    /// Aktuell angezeigte Meldung
    pub message: Option<MessageDialog>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Größe der Zeichenfläche in Pixel
    pub viewport_size: [f32; 2],
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Polygone der Sitzung
    pub polygons: PolygonList,
    /// ID des gezeichneten Polygons (None = leere Zeichenfläche)
    pub current_polygon: Option<u32>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            polygons: PolygonList::new(),
            current_polygon: None,
            view: ViewState::default(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Das aktuell gezeichnete Polygon (erster Treffer zur gespeicherten ID).
    pub fn current(&self) -> Option<&PolygonRecord> {
        self.current_polygon
            .and_then(|id| self.polygons.find_by_id(id))
    }

    /// Setzt eine Meldung, die im nächsten Frame angezeigt wird.
    pub fn show_message(&mut self, message: MessageDialog) {
        self.ui.message = Some(message);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
