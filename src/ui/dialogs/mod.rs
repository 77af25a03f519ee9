//! Modale Fenster: Meldungen, Suche und Farbwähler.

mod colour_selector;
mod message_dialog;
mod search_dialog;

pub use colour_selector::show_colour_selector;
pub use message_dialog::show_message_dialog;
pub use search_dialog::show_search_dialog;
