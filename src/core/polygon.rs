//! Datensatz eines regelmäßigen Polygons mit Ordnung nach ID.

use super::geometry::{compute_vertices, trace_vertices, Viewport};
use super::Rgb;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Umgang mit dem Startwinkel beim Berechnen der Eckpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleMode {
    /// Startwinkel bleibt bei jedem Zeichnen gleich
    #[default]
    Fixed,
    /// Weitergedrehter Winkel wird gespeichert; Rundungsfehler wandern mit jedem Zeichnen
    Drift,
}

/// Ein regelmäßiges Polygon aus der Eingabemaske.
///
/// Seitenzahl, Radius, ID und Farbe sind nach dem Erstellen unveränderlich.
/// Der Startwinkel ändert sich nur beim Zeichnen im Modus [`AngleMode::Drift`].
#[derive(Debug, Clone)]
pub struct PolygonRecord {
    id: u32,
    sides: u32,
    starting_angle: f64,
    radius: f64,
    color: Rgb,
    /// Zuletzt berechnete Eckpunkte (vor dem ersten Zeichnen alle 0)
    traced: Vec<DVec2>,
}

impl PolygonRecord {
    /// Erstellt ein Polygon. Ohne Farbe wird Schwarz verwendet.
    ///
    /// Es findet keine Prüfung statt; ungültige Seitenzahlen oder Radien
    /// ergeben ein entartetes, aber definiertes Polygon.
    pub fn new(id: u32, sides: u32, starting_angle: f64, radius: f64, color: Option<Rgb>) -> Self {
        Self {
            id,
            sides,
            starting_angle,
            radius,
            color: color.unwrap_or(Rgb::BLACK),
            traced: vec![DVec2::ZERO; sides as usize],
        }
    }

    /// ID des Polygons
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Anzahl der Seiten
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Aktuell gespeicherter Startwinkel in Radiant
    pub fn starting_angle(&self) -> f64 {
        self.starting_angle
    }

    /// Umkreisradius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Linienfarbe
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// ID als 6-stelliger String mit führenden Nullen (`42` → `"000042"`).
    pub fn formatted_id(&self) -> String {
        format_id(self.id)
    }

    /// Eckpunkte für einen Viewport, ohne den Datensatz zu verändern.
    pub fn vertices(&self, viewport: Viewport) -> Vec<DVec2> {
        compute_vertices(self.sides, self.starting_angle, self.radius, viewport)
    }

    /// Berechnet die Eckpunkte zum Zeichnen und merkt sie sich für [`Self::describe`].
    ///
    /// Bei [`AngleMode::Drift`] wird der weitergedrehte Winkel übernommen.
    pub fn trace(&mut self, viewport: Viewport, mode: AngleMode) -> &[DVec2] {
        self.traced = match mode {
            AngleMode::Fixed => self.vertices(viewport),
            AngleMode::Drift => trace_vertices(
                self.sides,
                &mut self.starting_angle,
                self.radius,
                viewport,
            ),
        };
        &self.traced
    }

    /// Zuletzt berechnete Eckpunkte
    pub fn traced_vertices(&self) -> &[DVec2] {
        &self.traced
    }

    /// Mehrzeilige Beschreibung für Log-Ausgabe und Info-Panel.
    pub fn describe(&self) -> String {
        let xs: Vec<f64> = self.traced.iter().map(|v| v.x).collect();
        let ys: Vec<f64> = self.traced.iter().map(|v| v.y).collect();
        format!(
            "Polygon ID: {}\nPolygon Sides: {}\nPolygon Radius: {:?}\nStarting Angle: {:?}\nPoints X: {:?}\nPoints Y: {:?}\nPolygon Color: {}",
            self.formatted_id(),
            self.sides,
            self.radius,
            self.starting_angle,
            xs,
            ys,
            self.color
        )
    }
}

/// Formatiert eine ID mit führenden Nullen auf mindestens 6 Stellen.
pub fn format_id(id: u32) -> String {
    format!("{:06}", id)
}

/// Vergleicht zwei Polygone nach ihrer ID.
pub fn compare(a: &PolygonRecord, b: &PolygonRecord) -> Ordering {
    a.id.cmp(&b.id)
}

impl PartialEq for PolygonRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PolygonRecord {}

impl PartialOrd for PolygonRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PolygonRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl std::fmt::Display for PolygonRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
