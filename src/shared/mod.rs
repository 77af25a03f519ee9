//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use crate::core::AngleMode;
pub use options::EditorOptions;
pub use options::{ID_DIGITS, MIN_SIDES};
pub use render_scene::{PolygonOutline, RenderScene};
