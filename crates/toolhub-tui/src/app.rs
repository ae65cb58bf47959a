// TUI application state and event handling
use ratatui::widgets::ListState;
use toolhub_core::{
    Catalog, CatalogEvent, CatalogState, Category, LaunchTable, LookupEvent, LookupSimulator,
    LookupState, Notice, Route, Theme, ToolDescriptor, ToolPage,
};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Moving through the tool list
    Searching, // Typing in the search box
}

/// Catalog screen: filter state plus list selection
#[derive(Debug, Clone)]
pub struct CatalogScreen {
    pub state: CatalogState,
    pub input_mode: InputMode,
    pub selected_index: usize,
    pub list_state: ListState,
}

impl CatalogScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            state: CatalogState::new(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            list_state,
        }
    }
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Tool detail screen for one implemented tool
#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub page: ToolPage,
    pub lookup: LookupState,
}

impl DetailScreen {
    pub fn new(page: ToolPage) -> Self {
        Self {
            page,
            lookup: LookupState::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Screen {
    Catalog(CatalogScreen),
    Detail(DetailScreen),
}

/// A lookup the runner should start; `generation` ties the result back to
/// the detail screen that asked for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub generation: u64,
    pub url: String,
}

pub struct App {
    pub should_quit: bool,
    pub catalog: Catalog,
    pub launches: LaunchTable,
    pub simulator: LookupSimulator,
    pub screen: Screen,
    pub theme: Theme,
    pub notice: Option<String>,
    pub show_help: bool,
    /// Bumped on every navigation so stale lookup results get dropped
    pub generation: u64,
    pub tick: u64,
}

impl App {
    pub fn new(catalog: Catalog, launches: LaunchTable, simulator: LookupSimulator) -> Self {
        Self {
            should_quit: false,
            catalog,
            launches,
            simulator,
            screen: Screen::Catalog(CatalogScreen::new()),
            theme: Theme::default(),
            notice: None,
            show_help: false,
            generation: 0,
            tick: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn set_notice(&mut self, notice: Notice) {
        info!("Notice: {}", notice);
        self.notice = Some(notice.to_string());
    }

    pub fn current_route(&self) -> Route {
        match &self.screen {
            Screen::Catalog(_) => Route::Catalog,
            Screen::Detail(detail) => detail.page.route.clone(),
        }
    }

    /// Full transition: the screen we land on always starts from scratch
    pub fn navigate(&mut self, route: Route) {
        let screen = match &route {
            Route::Catalog => Screen::Catalog(CatalogScreen::new()),
            Route::Tool(_) => match ToolPage::for_route(&route) {
                Ok(page) => Screen::Detail(DetailScreen::new(page)),
                Err(e) => {
                    warn!("Navigation failed: {}", e);
                    self.notice = Some(e.to_string());
                    return;
                }
            },
        };

        self.screen = screen;
        self.generation += 1;
        self.notice = None;
        info!("Navigated to {}", route);
    }

    // ---- catalog screen ----

    pub fn catalog_screen(&self) -> Option<&CatalogScreen> {
        match &self.screen {
            Screen::Catalog(screen) => Some(screen),
            Screen::Detail(_) => None,
        }
    }

    pub fn catalog_screen_mut(&mut self) -> Option<&mut CatalogScreen> {
        match &mut self.screen {
            Screen::Catalog(screen) => Some(screen),
            Screen::Detail(_) => None,
        }
    }

    /// Tools currently listed on the catalog screen
    pub fn visible_tools(&self) -> Vec<&ToolDescriptor> {
        match self.catalog_screen() {
            Some(screen) => toolhub_core::filter_tools(self.catalog.tools(), &screen.state.filter),
            None => Vec::new(),
        }
    }

    pub fn selected_tool(&self) -> Option<&ToolDescriptor> {
        let index = self.catalog_screen()?.selected_index;
        self.visible_tools().get(index).copied()
    }

    pub fn dispatch_catalog(&mut self, event: CatalogEvent) {
        let Screen::Catalog(screen) = &mut self.screen else {
            return;
        };

        match screen.state.apply(event, &self.catalog, &self.launches) {
            Ok(transition) => {
                if let Some(notice) = transition.notice {
                    self.set_notice(notice);
                }
                if let Some(route) = transition.navigate {
                    self.navigate(route);
                    return;
                }
            }
            Err(e) => {
                warn!("Catalog event failed: {}", e);
                self.notice = Some(e.to_string());
            }
        }
        self.clamp_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        if let Some(screen) = self.catalog_screen() {
            let mut query = screen.state.filter.search_query.clone();
            query.push(c);
            self.dispatch_catalog(CatalogEvent::EditQuery(query));
        }
    }

    pub fn pop_search_char(&mut self) {
        if let Some(screen) = self.catalog_screen() {
            let mut query = screen.state.filter.search_query.clone();
            query.pop();
            self.dispatch_catalog(CatalogEvent::EditQuery(query));
        }
    }

    pub fn select_category(&mut self, category: Category) {
        self.dispatch_catalog(CatalogEvent::SelectCategory(category));
    }

    pub fn next_category(&mut self) {
        if let Some(screen) = self.catalog_screen() {
            let next = screen.state.filter.selected_category.next();
            self.select_category(next);
        }
    }

    pub fn previous_category(&mut self) {
        if let Some(screen) = self.catalog_screen() {
            let previous = screen.state.filter.selected_category.previous();
            self.select_category(previous);
        }
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch_catalog(CatalogEvent::ToggleMenu);
    }

    pub fn input_mode(&self) -> InputMode {
        self.catalog_screen()
            .map(|screen| screen.input_mode)
            .unwrap_or(InputMode::Normal)
    }

    pub fn enter_search_mode(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.input_mode = InputMode::Searching;
        }
    }

    pub fn enter_normal_mode(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.input_mode = InputMode::Normal;
        }
    }

    pub fn launch_selected(&mut self) {
        if let Some(id) = self.selected_tool().map(|t| t.id) {
            self.dispatch_catalog(CatalogEvent::Launch(id));
        }
    }

    pub fn next_tool(&mut self) {
        let len = self.visible_tools().len();
        if let Some(screen) = self.catalog_screen_mut() {
            if len > 0 {
                screen.selected_index = (screen.selected_index + 1).min(len - 1);
                screen.list_state.select(Some(screen.selected_index));
            }
        }
    }

    pub fn previous_tool(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.selected_index = screen.selected_index.saturating_sub(1);
            screen.list_state.select(Some(screen.selected_index));
        }
    }

    /// Keep the selection inside the (possibly shrunk) filtered list
    fn clamp_selection(&mut self) {
        let len = self.visible_tools().len();
        if let Some(screen) = self.catalog_screen_mut() {
            screen.selected_index = screen.selected_index.min(len.saturating_sub(1));
            screen
                .list_state
                .select(if len == 0 { None } else { Some(screen.selected_index) });
        }
    }

    // ---- detail screen ----

    pub fn detail_screen(&self) -> Option<&DetailScreen> {
        match &self.screen {
            Screen::Detail(screen) => Some(screen),
            Screen::Catalog(_) => None,
        }
    }

    /// Apply a lookup event; returns the lookup the runner has to start
    pub fn dispatch_lookup(&mut self, event: LookupEvent) -> Option<PendingLookup> {
        let Screen::Detail(screen) = &mut self.screen else {
            return None;
        };

        let transition = screen.lookup.apply(event);
        if let Some(notice) = transition.notice {
            self.set_notice(notice);
        }
        transition.start_lookup.map(|url| PendingLookup {
            generation: self.generation,
            url,
        })
    }

    pub fn push_url_char(&mut self, c: char) {
        if let Some(screen) = self.detail_screen() {
            let mut url = screen.lookup.url.clone();
            url.push(c);
            let _ = self.dispatch_lookup(LookupEvent::EditUrl(url));
        }
    }

    pub fn pop_url_char(&mut self) {
        if let Some(screen) = self.detail_screen() {
            let mut url = screen.lookup.url.clone();
            url.pop();
            let _ = self.dispatch_lookup(LookupEvent::EditUrl(url));
        }
    }

    /// Deliver a finished lookup, unless the screen that asked is gone
    pub fn finish_lookup(&mut self, generation: u64, outcome: toolhub_core::LookupOutcome) {
        if generation != self.generation {
            info!("Dropping lookup result from a screen we already left");
            return;
        }
        let _ = self.dispatch_lookup(LookupEvent::Resolved(outcome));
    }
}
