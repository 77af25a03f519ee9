//! Liste aller Polygone der Sitzung.

use super::PolygonRecord;

/// Polygone in Einfügereihenfolge, bis explizit sortiert wird.
///
/// Eindeutige IDs sind Vorbedingung von [`PolygonList::append`]; die Liste
/// selbst prüft das nicht. Bei doppelten IDs gewinnt der zuerst eingefügte
/// Eintrag.
#[derive(Debug, Clone, Default)]
pub struct PolygonList {
    polygons: Vec<PolygonRecord>,
}

impl PolygonList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Hängt ein Polygon ans Ende an (ohne Duplikat-Prüfung).
    pub fn append(&mut self, polygon: PolygonRecord) {
        self.polygons.push(polygon);
    }

    /// Lineare Suche, liefert den ersten Treffer.
    pub fn find_by_id(&self, id: u32) -> Option<&PolygonRecord> {
        self.polygons.iter().find(|p| p.id() == id)
    }

    /// Wie [`Self::find_by_id`], aber veränderbar (für das Zeichnen).
    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut PolygonRecord> {
        self.polygons.iter_mut().find(|p| p.id() == id)
    }

    /// Prüft ob bereits ein Polygon mit dieser ID existiert.
    pub fn contains_id(&self, id: u32) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Sortiert aufsteigend nach ID. Stabil: gleiche IDs behalten ihre Reihenfolge.
    pub fn sort_in_place(&mut self) {
        self.polygons.sort_by(super::polygon::compare);
    }

    /// Anzahl der Polygone
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Gibt `true` zurück, wenn keine Polygone vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Iteriert in aktueller Reihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, PolygonRecord> {
        self.polygons.iter()
    }

    /// IDs in aktueller Reihenfolge.
    pub fn ids(&self) -> Vec<u32> {
        self.polygons.iter().map(PolygonRecord::id).collect()
    }
}

impl<'a> IntoIterator for &'a PolygonList {
    type Item = &'a PolygonRecord;
    type IntoIter = std::slice::Iter<'a, PolygonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
