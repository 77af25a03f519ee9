//! Use-Cases der Application-Layer-Orchestrierung.

pub mod colour;
pub mod messages;
pub mod options;
pub mod polygons;
pub mod viewport;
