use crate::core::Rgb;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// "Add Polygon" geklickt (Werte stehen in der Eingabemaske)
    AddPolygonRequested,
    /// "Search" geklickt
    SearchRequested,
    /// Such-Dialog mit OK bestätigt
    SearchSubmitted { text: String },
    /// Such-Dialog abgebrochen
    SearchCancelled,
    /// "Sort" geklickt
    SortRequested,
    /// "Display" geklickt (alle Polygone ins Log)
    DisplayRequested,
    /// Farbwähler öffnen
    ColourSelectorRequested,
    /// Farbe im Farbwähler übernommen
    ColourSelected { color: Rgb },
    /// Farbwähler ohne Auswahl geschlossen
    ColourSelectorClosed,
    /// Meldung mit OK geschlossen
    MessageDismissed,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Größe der Zeichenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}
