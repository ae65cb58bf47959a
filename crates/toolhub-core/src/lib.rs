// Core logic lives here - the catalog, its filters and the mock lookup
pub mod catalog;
pub mod catalog_state;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod launch;
pub mod lookup;
pub mod models;
pub mod pages;
pub mod platform;
pub mod theme;

pub use catalog::Catalog;
pub use catalog_state::{CatalogEvent, CatalogState, CatalogTransition};
pub use config::Config;
pub use error::Error;
pub use export::{ExportFormat, Exporter};
pub use filter::{
    category_descriptors, compute_category_counts, featured_section_visible, featured_tools,
    filter_tools, CatalogView,
};
pub use launch::{LaunchAction, LaunchTable, Notice, Route};
pub use lookup::{
    Delay, LookupEvent, LookupOutcome, LookupPhase, LookupSimulator, LookupState, NoDelay,
    TokioDelay, Transition, UrlRule, INVALID_URL_MESSAGE,
};
pub use models::{
    Category, CategoryDescriptor, DownloadOption, FilterState, ToolDescriptor, VideoMetadata,
    DOWNLOAD_OPTIONS,
};
pub use pages::ToolPage;
pub use theme::Theme;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
