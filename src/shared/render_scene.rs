//! Render-Vertrag zwischen App-Layer und Zeichenfläche.

use crate::core::{Rgb, Viewport};

/// Umriss des aktuellen Polygons in ganzzahligen Canvas-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOutline {
    /// Eckpunkte, Richtung 0 abgeschnitten (relativ zur linken oberen Canvas-Ecke)
    pub points: Vec<[i32; 2]>,
    /// Linienfarbe
    pub color: Rgb,
    /// Linienstärke in Pixeln
    pub line_width: f32,
}

/// Alles, was die Zeichenfläche für einen Frame braucht.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Größe der Zeichenfläche
    pub viewport: Viewport,
    /// Hintergrundfarbe
    pub background: Rgb,
    /// Umriss des aktuellen Polygons (None = kein Polygon ausgewählt)
    pub outline: Option<PolygonOutline>,
}

impl RenderScene {
    /// Prüft ob ein zeichenbarer Umriss vorhanden ist (mindestens 2 Punkte).
    pub fn has_drawable_outline(&self) -> bool {
        self.outline
            .as_ref()
            .is_some_and(|outline| outline.points.len() >= 2)
    }
}
