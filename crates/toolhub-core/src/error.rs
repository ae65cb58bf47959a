use thiserror::Error;

/// All the ways things can go wrong in ToolHub
///
/// The catalog filter itself is total, so most of these come from
/// building a catalog out of user-supplied data or from config/export I/O.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Tool not found: {0}")]
    UnknownTool(u32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Tool {id} cannot be tagged with the aggregate category")]
    InvalidCategory { id: u32 },

    #[error("Duplicate tool id in catalog: {0}")]
    DuplicateToolId(u32),

    #[error("No page registered for route: {0}")]
    UnknownRoute(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
