// Catalog screen state machine, independent of whatever draws it
use crate::filter::CatalogView;
use crate::launch::{LaunchAction, LaunchTable, Notice, Route};
use crate::models::{Category, FilterState};
use crate::{Catalog, Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    EditQuery(String),
    SelectCategory(Category),
    ToggleMenu,
    Launch(u32),
}

/// What the caller should do after an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct CatalogTransition {
    pub navigate: Option<Route>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub filter: FilterState,
    pub menu_open: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view<'a>(&self, catalog: &'a Catalog) -> CatalogView<'a> {
        CatalogView::build(catalog.tools(), &self.filter)
    }

    /// Launch never touches the filter; it only produces a route or a notice
    pub fn apply(
        &mut self,
        event: CatalogEvent,
        catalog: &Catalog,
        launches: &LaunchTable,
    ) -> Result<CatalogTransition> {
        let mut transition = CatalogTransition::default();

        match event {
            CatalogEvent::EditQuery(query) => {
                self.filter.search_query = query;
            }
            CatalogEvent::SelectCategory(category) => {
                debug!("Category selected: {}", category);
                self.filter.selected_category = category;
            }
            CatalogEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            CatalogEvent::Launch(tool_id) => match launches.launch(catalog, tool_id)? {
                LaunchAction::Navigate(route) => transition.navigate = Some(route),
                LaunchAction::NotifyUnavailable(name) => {
                    transition.notice = Some(Notice::ComingSoon(name))
                }
            },
        }

        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Catalog, LaunchTable) {
        (Catalog::builtin(), LaunchTable::builtin())
    }

    #[test]
    fn test_edit_and_select_update_filter() {
        let (catalog, table) = fixtures();
        let mut state = CatalogState::new();
        let _ = state
            .apply(CatalogEvent::EditQuery("douyin".to_string()), &catalog, &table)
            .unwrap();
        let _ = state
            .apply(CatalogEvent::SelectCategory(Category::VideoDownloaders), &catalog, &table)
            .unwrap();
        let view = state.view(&catalog);
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.heading, "Video Downloaders - \"douyin\"");
    }

    #[test]
    fn test_menu_toggles() {
        let (catalog, table) = fixtures();
        let mut state = CatalogState::new();
        let _ = state.apply(CatalogEvent::ToggleMenu, &catalog, &table).unwrap();
        assert!(state.menu_open);
        let _ = state.apply(CatalogEvent::ToggleMenu, &catalog, &table).unwrap();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_launch_unavailable_keeps_state() {
        let (catalog, table) = fixtures();
        let mut state = CatalogState::new();
        state.filter = FilterState::new("image", Category::ImageTools);
        let before = state.clone();

        let transition = state.apply(CatalogEvent::Launch(7), &catalog, &table).unwrap();
        assert_eq!(state, before);
        assert!(transition.navigate.is_none());
        assert_eq!(
            transition.notice,
            Some(Notice::ComingSoon("Image Compressor".to_string()))
        );
    }

    #[test]
    fn test_launch_youtube_navigates() {
        let (catalog, table) = fixtures();
        let mut state = CatalogState::new();
        let transition = state.apply(CatalogEvent::Launch(1), &catalog, &table).unwrap();
        assert_eq!(
            transition.navigate,
            Some(Route::Tool("/tools/youtube-downloader".to_string()))
        );
        assert!(transition.notice.is_none());
    }
}
