// Launch dispatch: which card opens a real page and which one just says "soon"
use crate::{Catalog, Error, Result};
use std::collections::HashMap;

pub const YOUTUBE_DOWNLOADER_ID: u32 = 1;
pub const YOUTUBE_DOWNLOADER_PATH: &str = "/tools/youtube-downloader";

/// Where the app can be
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Catalog,
    Tool(String),
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Route::Catalog => "/",
            Route::Tool(path) => path,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Result of pressing "Launch Tool" on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    Navigate(Route),
    NotifyUnavailable(String),
}

/// Informational messages shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ComingSoon(String),
    DownloadStarted,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::ComingSoon(name) => write!(f, "{} is coming soon!", name),
            Notice::DownloadStarted => write!(f, "Download started! (This is a demo)"),
        }
    }
}

impl LaunchAction {
    /// The notice to show, if this action doesn't navigate anywhere
    pub fn notice(&self) -> Option<Notice> {
        match self {
            LaunchAction::Navigate(_) => None,
            LaunchAction::NotifyUnavailable(name) => Some(Notice::ComingSoon(name.clone())),
        }
    }
}

/// Tool id -> route for the tools that actually have a page
///
/// Shipping a new tool page means one `register` call; nothing else in the
/// app branches on tool identity.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    routes: HashMap<u32, Route>,
}

impl LaunchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register(
            YOUTUBE_DOWNLOADER_ID,
            Route::Tool(YOUTUBE_DOWNLOADER_PATH.to_string()),
        );
        table
    }

    pub fn register(&mut self, tool_id: u32, route: Route) {
        self.routes.insert(tool_id, route);
    }

    pub fn route_for(&self, tool_id: u32) -> Option<&Route> {
        self.routes.get(&tool_id)
    }

    pub fn launch(&self, catalog: &Catalog, tool_id: u32) -> Result<LaunchAction> {
        let tool = catalog.find(tool_id).ok_or(Error::UnknownTool(tool_id))?;

        let action = match self.routes.get(&tool_id) {
            Some(route) => LaunchAction::Navigate(route.clone()),
            None => LaunchAction::NotifyUnavailable(tool.name.clone()),
        };
        tracing::info!("Launch {} -> {:?}", tool.name, action);
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_navigates() {
        let catalog = Catalog::builtin();
        let action = LaunchTable::builtin().launch(&catalog, 1).unwrap();
        assert_eq!(
            action,
            LaunchAction::Navigate(Route::Tool("/tools/youtube-downloader".to_string()))
        );
        assert!(action.notice().is_none());
    }

    #[test]
    fn test_everything_else_is_coming_soon() {
        let catalog = Catalog::builtin();
        let table = LaunchTable::builtin();
        for tool in catalog.tools().iter().filter(|t| t.id != 1) {
            let action = table.launch(&catalog, tool.id).unwrap();
            assert_eq!(action, LaunchAction::NotifyUnavailable(tool.name.clone()));
        }
    }

    #[test]
    fn test_unknown_tool_is_an_error() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            LaunchTable::builtin().launch(&catalog, 99),
            Err(Error::UnknownTool(99))
        ));
    }

    #[test]
    fn test_register_adds_a_page() {
        let catalog = Catalog::builtin();
        let mut table = LaunchTable::builtin();
        table.register(3, Route::Tool("/tools/tiktok-downloader".to_string()));
        assert!(matches!(
            table.launch(&catalog, 3).unwrap(),
            LaunchAction::Navigate(_)
        ));
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::ComingSoon("Audio Converter".to_string()).to_string(),
            "Audio Converter is coming soon!"
        );
        assert_eq!(
            Notice::DownloadStarted.to_string(),
            "Download started! (This is a demo)"
        );
        assert_eq!(Route::Catalog.to_string(), "/");
    }
}
