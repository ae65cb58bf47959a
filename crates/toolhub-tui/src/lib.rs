// Terminal UI for the ToolHub catalog
pub mod app;
pub mod catalog_ui;
pub mod detail_ui;
pub mod help_ui;
pub mod runner;
pub mod ui;

pub use app::{App, CatalogScreen, DetailScreen, InputMode, PendingLookup, Screen};
pub use runner::run_tui;
