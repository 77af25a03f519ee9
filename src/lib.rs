//! RegPoly Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InputError, MessageDialog, MessageKind,
    UiState, ViewState,
};
pub use core::{compute_vertices, trace_vertices, AngleMode, PolygonList, PolygonRecord, Rgb};
pub use core::Viewport;
pub use shared::{EditorOptions, PolygonOutline, RenderScene};
