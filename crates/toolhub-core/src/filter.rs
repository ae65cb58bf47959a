// Catalog filter engine - the only place the catalog screen makes decisions
use crate::models::{Category, CategoryDescriptor, FilterState, ToolDescriptor};
use std::collections::HashMap;

/// Tools matching both the category and the search query, in list order
pub fn filter_tools<'a>(tools: &'a [ToolDescriptor], state: &FilterState) -> Vec<&'a ToolDescriptor> {
    let needle = state.search_query.to_lowercase();

    tools
        .iter()
        .filter(|tool| matches_category(tool, state.selected_category))
        .filter(|tool| matches_query(tool, &needle))
        .collect()
}

fn matches_category(tool: &ToolDescriptor, selected: Category) -> bool {
    selected.is_aggregate() || tool.category == selected
}

/// `needle` must already be lowercased
fn matches_query(tool: &ToolDescriptor, needle: &str) -> bool {
    needle.is_empty()
        || tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
        || tool.platform.to_lowercase().contains(needle)
}

/// Tool count per category, always over the full list
///
/// Every category gets an entry (possibly zero), and the aggregate maps to
/// the total.
pub fn compute_category_counts(tools: &[ToolDescriptor]) -> HashMap<Category, usize> {
    let mut counts: HashMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();

    for tool in tools {
        *counts.entry(tool.category).or_insert(0) += 1;
    }
    counts.insert(Category::All, tools.len());

    counts
}

/// Sidebar rows in display order
pub fn category_descriptors(tools: &[ToolDescriptor]) -> Vec<CategoryDescriptor> {
    let counts = compute_category_counts(tools);
    Category::ALL
        .iter()
        .map(|category| CategoryDescriptor {
            category: *category,
            count: counts.get(category).copied().unwrap_or(0),
        })
        .collect()
}

pub fn featured_tools(tools: &[ToolDescriptor]) -> Vec<&ToolDescriptor> {
    tools.iter().filter(|t| t.featured).collect()
}

/// Featured strip shows only on the untouched landing view
///
/// Any active query hides it, even one that matches nothing but featured
/// tools.
pub fn featured_section_visible(tools: &[ToolDescriptor], state: &FilterState) -> bool {
    tools.iter().any(|t| t.featured) && state.is_unfiltered()
}

/// Everything the catalog screen needs for one frame
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    pub visible: Vec<&'a ToolDescriptor>,
    pub featured: Vec<&'a ToolDescriptor>,
    pub show_featured: bool,
    pub categories: Vec<CategoryDescriptor>,
    pub heading: String,
    pub summary: String,
}

impl<'a> CatalogView<'a> {
    pub fn build(tools: &'a [ToolDescriptor], state: &FilterState) -> Self {
        let visible = filter_tools(tools, state);
        let summary = results_summary(visible.len());

        Self {
            visible,
            featured: featured_tools(tools),
            show_featured: featured_section_visible(tools, state),
            categories: category_descriptors(tools),
            heading: results_heading(state),
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// `Video Downloaders - "tik"` style heading over the results
pub fn results_heading(state: &FilterState) -> String {
    if state.search_query.is_empty() {
        state.selected_category.label().to_string()
    } else {
        format!(
            "{} - \"{}\"",
            state.selected_category.label(),
            state.search_query
        )
    }
}

pub fn results_summary(count: usize) -> String {
    if count == 1 {
        "1 tool found".to_string()
    } else {
        format!("{} tools found", count)
    }
}
