//! Eckpunkt-Berechnung für regelmäßige Polygone.
//!
//! Das Polygon wird immer in der Mitte des Viewports platziert. Die Mitte wird
//! mit Ganzzahl-Division bestimmt (wie das Pixel-Raster des Hosts), die
//! Eckpunkte bleiben dagegen fraktional, damit sie vor dem Runden prüfbar sind.

use glam::DVec2;
use std::f64::consts::TAU;

/// Größe der Zeichenfläche in ganzen Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Breite in Pixeln
    pub width: u32,
    /// Höhe in Pixeln
    pub height: u32,
}

impl Viewport {
    /// Erstellt einen Viewport aus Breite und Höhe.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Erstellt einen Viewport aus einer egui-Größe (abgeschnitten, negativ → 0).
    pub fn from_size(size: [f32; 2]) -> Self {
        Self {
            width: size[0].max(0.0) as u32,
            height: size[1].max(0.0) as u32,
        }
    }

    /// Mittelpunkt mit abschneidender Ganzzahl-Division.
    pub fn center(&self) -> DVec2 {
        DVec2::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

/// Winkelschritt zwischen zwei Eckpunkten, `None` bei 0 Seiten.
pub fn angle_increment(sides: u32) -> Option<f64> {
    (sides > 0).then(|| TAU / sides as f64)
}

/// Berechnet die Eckpunkte ohne Seiteneffekt.
///
/// Der Winkel-Akkumulator ist lokal; `starting_angle` des Aufrufers bleibt
/// unverändert. Wiederholte Aufrufe liefern bitgleiche Ergebnisse.
pub fn compute_vertices(
    sides: u32,
    starting_angle: f64,
    radius: f64,
    viewport: Viewport,
) -> Vec<DVec2> {
    let mut angle = starting_angle;
    trace_vertices(sides, &mut angle, radius, viewport)
}

/// Berechnet die Eckpunkte und schreibt den weitergedrehten Winkel zurück.
///
/// Nach dem Aufruf steht `angle` um `sides · 2π/sides` weiter, also bis auf
/// Rundungsfehler wieder beim Ausgangswert. Wer den Winkel zwischen zwei
/// Aufrufen nicht zurücksetzt, sieht diese Rundungsfehler wandern.
pub fn trace_vertices(
    sides: u32,
    angle: &mut f64,
    radius: f64,
    viewport: Viewport,
) -> Vec<DVec2> {
    let Some(increment) = angle_increment(sides) else {
        return Vec::new();
    };

    let center = viewport.center();
    let mut vertices = Vec::with_capacity(sides as usize);

    for _ in 0..sides {
        vertices.push(DVec2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
        *angle += increment;
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::FRAC_PI_2;

    fn angle_of(vertex: DVec2, center: DVec2) -> f64 {
        let d = vertex - center;
        d.y.atan2(d.x)
    }

    #[test]
    fn returns_one_vertex_per_side() {
        for sides in 3..=12 {
            let vertices = compute_vertices(sides, 0.3, 40.0, Viewport::new(400, 300));
            assert_eq!(vertices.len(), sides as usize);
        }
    }

    #[test]
    fn zero_sides_yield_empty_sequence() {
        let vertices = compute_vertices(0, 1.0, 40.0, Viewport::new(400, 300));
        assert!(vertices.is_empty());
        assert_eq!(angle_increment(0), None);
    }

    #[test]
    fn one_and_two_sides_are_degenerate_but_defined() {
        let single = compute_vertices(1, 0.0, 10.0, Viewport::new(100, 100));
        assert_eq!(single.len(), 1);
        assert_relative_eq!(single[0].x, 60.0);

        let line = compute_vertices(2, 0.0, 10.0, Viewport::new(100, 100));
        assert_eq!(line.len(), 2);
        assert_abs_diff_eq!(line[0].x, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line[1].x, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn center_uses_truncating_division() {
        let viewport = Viewport::new(101, 51);
        assert_eq!(viewport.center(), DVec2::new(50.0, 25.0));

        let vertices = compute_vertices(4, 0.0, 10.0, viewport);
        assert_abs_diff_eq!(vertices[0].x, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(vertices[0].y, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn every_vertex_lies_on_the_circumcircle() {
        let viewport = Viewport::new(640, 480);
        let center = viewport.center();
        let vertices = compute_vertices(7, 1.234, 87.5, viewport);

        for v in vertices {
            assert_relative_eq!((v - center).length(), 87.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn consecutive_vertices_differ_by_constant_angle() {
        let viewport = Viewport::new(500, 500);
        let center = viewport.center();
        let sides = 9;
        let expected = TAU / sides as f64;
        let vertices = compute_vertices(sides, -0.7, 120.0, viewport);

        for pair in vertices.windows(2) {
            let step = (angle_of(pair[1], center) - angle_of(pair[0], center)).rem_euclid(TAU);
            assert_abs_diff_eq!(step, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn first_vertex_sits_at_starting_angle() {
        let viewport = Viewport::new(200, 200);
        let vertices = compute_vertices(3, FRAC_PI_2, 50.0, viewport);
        assert_abs_diff_eq!(vertices[0].x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(vertices[0].y, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_radius_mirrors_through_center() {
        let vertices = compute_vertices(4, 0.0, -10.0, Viewport::new(100, 100));
        assert_abs_diff_eq!(vertices[0].x, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn compute_vertices_is_repeatable() {
        let viewport = Viewport::new(333, 777);
        let first = compute_vertices(11, 0.1, 99.9, viewport);
        let second = compute_vertices(11, 0.1, 99.9, viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn trace_advances_angle_by_full_turn() {
        let mut angle = 0.5;
        let vertices = trace_vertices(6, &mut angle, 30.0, Viewport::new(100, 100));
        assert_eq!(vertices.len(), 6);
        assert_abs_diff_eq!(angle, 0.5 + TAU, epsilon = 1e-12);
    }

    #[test]
    fn trace_with_shared_accumulator_drifts() {
        // Mittelpunkt (0, 0) und Radius 1: die Eckpunkte sind direkt cos/sin.
        let viewport = Viewport::new(0, 0);
        let mut angle = 0.1;
        let first = trace_vertices(7, &mut angle, 1.0, viewport);
        assert_ne!(angle, 0.1);

        let mut last = Vec::new();
        for _ in 0..50 {
            last = trace_vertices(7, &mut angle, 1.0, viewport);
        }
        assert_abs_diff_eq!(angle, 0.1 + 51.0 * TAU, epsilon = 1e-9);

        // Bitweise weggelaufen, geometrisch dasselbe Polygon.
        assert_ne!(first, last);
        for (a, b) in first.iter().zip(&last) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn viewport_from_size_truncates() {
        assert_eq!(Viewport::from_size([640.9, 480.2]), Viewport::new(640, 480));
        assert_eq!(Viewport::from_size([-3.0, 10.0]), Viewport::new(0, 10));
    }
}
