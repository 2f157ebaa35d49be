/// Encounter Tracker - TUI initiative, health and condition tracker
///
/// Core library providing the encounter state store, the comma-separated
/// command interpreter and the terminal renderer.

pub mod config;
pub mod core;
pub mod tui;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
