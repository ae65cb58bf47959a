use std::sync::Arc;
use std::time::Duration;
use toolhub_core::{
    category_descriptors, compute_category_counts, featured_section_visible, featured_tools,
    filter_tools, Catalog, CatalogEvent, CatalogState, Category, FilterState, LaunchTable,
    LookupEvent, LookupPhase, LookupSimulator, LookupState, NoDelay, Notice, Route, ToolPage,
    VideoMetadata, INVALID_URL_MESSAGE,
};

const QUERIES: &[&str] = &[
    "", "a", "tik", "TikTok", "download", "VIDEO", "universal", "photos", "4k", "zzz", " ",
];

fn all_states() -> Vec<FilterState> {
    let mut states = Vec::new();
    for category in Category::ALL {
        for query in QUERIES {
            states.push(FilterState::new(*query, category));
        }
    }
    states
}

fn matches(tool: &toolhub_core::ToolDescriptor, query: &str) -> bool {
    let q = query.to_lowercase();
    tool.name.to_lowercase().contains(&q)
        || tool.description.to_lowercase().contains(&q)
        || tool.platform.to_lowercase().contains(&q)
}

fn simulator() -> LookupSimulator {
    LookupSimulator::new(
        ToolPage::youtube().url_rule,
        Arc::new(NoDelay),
        Duration::from_millis(2000),
    )
}

async fn submit_and_resolve(state: &mut LookupState, url: &str) {
    let _ = state.apply(LookupEvent::EditUrl(url.to_string()));
    let transition = state.apply(LookupEvent::Submit);
    assert!(state.is_loading());

    let pending = transition.start_lookup.expect("submit should start a lookup");
    let outcome = simulator().lookup(&pending).await;
    let _ = state.apply(LookupEvent::Resolved(outcome));
}

#[test]
fn unfiltered_state_returns_full_list_in_order() {
    let catalog = Catalog::builtin();
    let result = filter_tools(catalog.tools(), &FilterState::default());
    let expected: Vec<_> = catalog.tools().iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn query_results_are_exactly_the_matching_tools() {
    let catalog = Catalog::builtin();
    for query in QUERIES.iter().filter(|q| !q.is_empty()) {
        let state = FilterState::new(*query, Category::All);
        let result = filter_tools(catalog.tools(), &state);

        for tool in catalog.tools() {
            let included = result.iter().any(|t| t.id == tool.id);
            assert_eq!(included, matches(tool, query), "query {:?}, tool {}", query, tool.name);
        }
    }
}

#[test]
fn category_results_only_hold_that_category() {
    let catalog = Catalog::builtin();
    for state in all_states() {
        if state.selected_category.is_aggregate() {
            continue;
        }
        for tool in filter_tools(catalog.tools(), &state) {
            assert_eq!(tool.category, state.selected_category);
        }
    }
}

#[test]
fn results_preserve_catalog_order() {
    let catalog = Catalog::builtin();
    for state in all_states() {
        let ids: Vec<u32> = filter_tools(catalog.tools(), &state).iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}

#[test]
fn counts_sum_to_total() {
    let catalog = Catalog::builtin();
    let counts = compute_category_counts(catalog.tools());
    let concrete: usize = Category::ALL
        .iter()
        .filter(|c| !c.is_aggregate())
        .map(|c| counts[c])
        .sum();
    assert_eq!(concrete, catalog.len());
    assert_eq!(counts[&Category::All], catalog.len());

    let rows = category_descriptors(catalog.tools());
    assert_eq!(rows[0].count, catalog.len());
}

#[test]
fn featured_visibility_matches_rule() {
    let catalog = Catalog::builtin();
    let has_featured = !featured_tools(catalog.tools()).is_empty();
    for state in all_states() {
        let expected = has_featured
            && state.selected_category == Category::All
            && state.search_query.is_empty();
        assert_eq!(featured_section_visible(catalog.tools(), &state), expected);
    }
}

#[test]
fn tiktok_query_finds_only_tiktok() {
    let catalog = Catalog::builtin();
    let result = filter_tools(catalog.tools(), &FilterState::new("tiktok", Category::All));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "TikTok Downloader");
}

#[test]
fn image_tools_category_finds_only_image_tools() {
    let catalog = Catalog::builtin();
    let result = filter_tools(catalog.tools(), &FilterState::new("", Category::ImageTools));
    let expected: Vec<_> = catalog
        .tools()
        .iter()
        .filter(|t| t.category == Category::ImageTools)
        .collect();
    assert_eq!(result, expected);
    assert_eq!(result[0].name, "Image Compressor");
}

#[test]
fn injected_catalog_drives_every_view() {
    let json = r#"[
        {"id": 1, "name": "Alpha", "description": "first", "platform": "P", "category": "Audio Tools", "icon": "a", "color": "red"},
        {"id": 2, "name": "Beta", "description": "second", "platform": "Q", "category": "Social Media Tools", "icon": "b", "featured": true, "color": "sky"}
    ]"#;
    let catalog = Catalog::from_json_str(json).unwrap();
    let mut state = CatalogState::new();
    let table = LaunchTable::builtin();

    let view = state.view(&catalog);
    assert_eq!(view.visible.len(), 2);
    assert!(view.show_featured);
    assert_eq!(compute_category_counts(catalog.tools())[&Category::SocialMediaTools], 1);

    let transition = state.apply(CatalogEvent::Launch(2), &catalog, &table).unwrap();
    assert_eq!(transition.notice, Some(Notice::ComingSoon("Beta".to_string())));
}

#[tokio::test]
async fn foreign_url_ends_in_error_without_metadata() {
    let mut state = LookupState::new();
    submit_and_resolve(&mut state, "https://example.com/video").await;

    assert_eq!(state.phase, LookupPhase::Error(INVALID_URL_MESSAGE.to_string()));
    assert!(state.metadata().is_none());
}

#[tokio::test]
async fn youtube_url_loads_then_resets() {
    let mut state = LookupState::new();
    submit_and_resolve(&mut state, "https://www.youtube.com/watch?v=dQw4w9WgXcQ").await;

    assert_eq!(state.metadata(), Some(&VideoMetadata::mock()));
    assert!(state.error().is_none());

    let _ = state.apply(LookupEvent::Reset);
    assert_eq!(state.phase, LookupPhase::Idle);
    assert!(state.url.is_empty());
    assert!(state.metadata().is_none());
    assert!(state.error().is_none());
}

#[test]
fn launch_routes_only_the_implemented_tool() {
    let catalog = Catalog::builtin();
    let table = LaunchTable::builtin();

    let mut state = CatalogState::new();
    let transition = state.apply(CatalogEvent::Launch(1), &catalog, &table).unwrap();
    assert_eq!(transition.navigate, Some(ToolPage::youtube().route));
    assert_ne!(transition.navigate, Some(Route::Catalog));

    for tool in catalog.tools().iter().skip(1) {
        let before = state.clone();
        let transition = state.apply(CatalogEvent::Launch(tool.id), &catalog, &table).unwrap();
        assert_eq!(state, before);
        assert!(transition.navigate.is_none());
        assert_eq!(transition.notice, Some(Notice::ComingSoon(tool.name.clone())));
    }
}
