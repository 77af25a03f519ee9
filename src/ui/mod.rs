//! UI-Komponenten: Menü, Eingabemaske, Zeichenfläche, Status-Bar, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input_form;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Jede Funktion liest den AppState und gibt erzeugte Intents zurück.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use canvas::{paint_scene, to_color32};
pub use dialogs::{show_colour_selector, show_message_dialog, show_search_dialog};
pub use input_form::render_input_form;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
