//! Zeichnen einer RenderScene mit dem egui-Painter.

use crate::core::Rgb;
use crate::shared::RenderScene;

/// Wandelt eine Polygonfarbe in eine egui-Farbe um.
pub fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Malt Hintergrund und Polygon-Umriss in das gegebene Rechteck.
///
/// Szenenkoordinaten sind relativ zur linken oberen Ecke von `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.background));

    if !scene.has_drawable_outline() {
        return;
    }
    let Some(outline) = &scene.outline else {
        return;
    };

    let points: Vec<egui::Pos2> = outline
        .points
        .iter()
        .map(|[x, y]| rect.min + egui::vec2(*x as f32, *y as f32))
        .collect();

    painter.add(egui::Shape::closed_line(
        points,
        egui::Stroke::new(outline.line_width, to_color32(outline.color)),
    ));
}
