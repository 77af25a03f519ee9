//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::Viewport;
use crate::shared::{PolygonOutline, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Eckpunkte des aktuellen Polygons werden dabei neu berechnet und
/// am Datensatz gespeichert, damit `Display` die gezeichneten Werte zeigt.
pub fn build(state: &mut AppState, viewport_size: [f32; 2]) -> RenderScene {
    let viewport = Viewport::from_size(viewport_size);
    let mode = state.options.angle_mode;
    let line_width = state.options.line_width;

    let outline = state
        .current_polygon
        .and_then(|id| state.polygons.find_by_id_mut(id))
        .map(|polygon| {
            let points = polygon
                .trace(viewport, mode)
                .iter()
                .map(|v| [v.x as i32, v.y as i32])
                .collect();
            PolygonOutline {
                points,
                color: polygon.color(),
                line_width,
            }
        });

    RenderScene {
        viewport,
        background: state.options.canvas_background,
        outline,
    }
}
