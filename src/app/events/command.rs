use crate::core::Rgb;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Eingabemaske prüfen und Polygon anlegen
    AddPolygon,
    /// Such-Dialog öffnen (oder Hinweis bei leerer Liste)
    OpenSearchDialog,
    /// Such-Dialog schließen
    CloseSearchDialog,
    /// Polygon per ID suchen und als aktuelles Polygon setzen
    SearchPolygon { text: String },
    /// Polygon-Liste nach ID sortieren
    SortPolygons,
    /// Beschreibung aller Polygone ins Log schreiben
    DisplayPolygons,
    /// Seiten-, Winkel- und Radius-Feld leeren
    ClearShapeFields,
    /// ID-Feld leeren
    ClearIdField,
    /// Farbwähler öffnen
    OpenColourSelector,
    /// Farbwähler schließen
    CloseColourSelector,
    /// Farbe für neue Polygone setzen
    SetPolygonColor { color: Rgb },
    /// Aktuelle Meldung schließen
    DismissMessage,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Größe der Zeichenfläche setzen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}
