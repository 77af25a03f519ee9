//! Core-Domänentypen: Polygon-Geometrie, Polygon-Datensatz, Farbe, Polygon-Liste.

pub mod collection;
pub mod color;
/// Eckpunkt-Berechnung (reine Funktion und Variante mit mitlaufendem Winkel)
pub mod geometry;
pub mod polygon;

pub use collection::PolygonList;
pub use color::Rgb;
pub use geometry::{angle_increment, compute_vertices, trace_vertices, Viewport};
pub use polygon::{compare, format_id, AngleMode, PolygonRecord};
