// Catalog screen: header, search, featured strip, sidebar and tool list
use crate::ui::{render_status_bar, rgb};
use crate::{App, InputMode, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use toolhub_core::{CatalogView, Theme, ToolDescriptor};

const NAV_LINKS: [&str; 4] = ["Home", "Categories", "About", "Contact"];

pub fn render_catalog(frame: &mut Frame, app: &mut App) {
    let Some(screen) = app.catalog_screen() else {
        return;
    };
    let filter = screen.state.filter.clone();
    let menu_open = screen.state.menu_open;
    let input_mode = screen.input_mode;

    let view = CatalogView::build(app.catalog.tools(), &filter);

    let mut constraints = vec![Constraint::Length(3)];
    if menu_open {
        constraints.push(Constraint::Length(NAV_LINKS.len() as u16 + 2));
    }
    constraints.push(Constraint::Length(3));
    if view.show_featured {
        constraints.push(Constraint::Length(6));
    }
    constraints.push(Constraint::Min(6));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut next = 0;
    let mut take = || {
        let area = chunks[next];
        next += 1;
        area
    };

    render_header(frame, app, take());
    if menu_open {
        render_nav_menu(frame, app, take());
    }
    render_search_input(frame, app, &filter.search_query, input_mode, take());
    if view.show_featured {
        render_featured(frame, app, &view.featured, take());
    }
    let content_area = take();
    let status_area = take();

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(content_area);

    render_sidebar(frame, app, &view, filter.selected_category, content[0]);

    let hints = match input_mode {
        InputMode::Searching => "SEARCH | type to filter | ENTER/ESC: done",
        InputMode::Normal => {
            "j/k: move | /: search | TAB/1-5: category | ENTER: launch | m: menu | t: theme | ?: help | q: quit"
        }
    };
    render_status_bar(frame, app, status_area, hints);

    // The list is stateful, so it needs the selection mutably
    let theme = &app.theme;
    if let Screen::Catalog(screen) = &mut app.screen {
        render_tool_list(frame, theme, &view, content[1], &mut screen.list_state);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(rgb(colors.border)));

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(block.inner(area));
    frame.render_widget(block, area);

    let logo = Line::from(vec![
        Span::styled(
            " ⬇ ",
            Style::default()
                .fg(rgb(colors.background))
                .bg(rgb(colors.primary))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ToolHub",
            Style::default()
                .fg(rgb(colors.foreground))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Multi-Platform Tool Hub",
            Style::default().fg(rgb(colors.subtitle)),
        ),
    ]);
    frame.render_widget(Paragraph::new(logo), halves[0]);

    // Narrow terminals get the menu toggle instead of inline links
    let nav = if area.width < 90 {
        Line::from(Span::styled("☰ m ", Style::default().fg(rgb(colors.muted))))
    } else {
        let mut spans = Vec::new();
        for (i, link) in NAV_LINKS.iter().enumerate() {
            let style = if i == 0 {
                Style::default()
                    .fg(rgb(colors.foreground))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(rgb(colors.subtitle))
            };
            spans.push(Span::styled(*link, style));
            spans.push(Span::raw("   "));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(nav).alignment(Alignment::Right), halves[1]);
}

fn render_nav_menu(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lines: Vec<Line> = NAV_LINKS
        .iter()
        .map(|link| Line::from(Span::styled(*link, Style::default().fg(rgb(colors.foreground)))))
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .border_style(Style::default().fg(rgb(colors.border_focused))),
    );
    frame.render_widget(menu, area);
}

fn render_search_input(
    frame: &mut Frame,
    app: &App,
    query: &str,
    input_mode: InputMode,
    area: Rect,
) {
    let colors = &app.theme.colors;
    let (border, text) = match input_mode {
        InputMode::Searching => (
            rgb(colors.border_focused),
            Line::from(vec![
                Span::styled(query.to_string(), Style::default().fg(rgb(colors.foreground))),
                Span::styled("█", Style::default().fg(rgb(colors.accent))),
            ]),
        ),
        InputMode::Normal if query.is_empty() => (
            rgb(colors.border),
            Line::from(Span::styled(
                "Search for tools by name or platform...",
                Style::default().fg(rgb(colors.muted)),
            )),
        ),
        InputMode::Normal => (
            rgb(colors.border),
            Line::from(Span::styled(
                query.to_string(),
                Style::default().fg(rgb(colors.foreground)),
            )),
        ),
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🔍 Search (/) ")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}

fn render_featured(frame: &mut Frame, app: &App, featured: &[&ToolDescriptor], area: Rect) {
    let colors = &app.theme.colors;
    let outer = Block::default()
        .borders(Borders::NONE)
        .title(Span::styled(
            "★ Featured Tools",
            Style::default()
                .fg(rgb(colors.featured))
                .add_modifier(Modifier::BOLD),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if featured.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, featured.len() as u32);
            featured.len()
        ])
        .split(inner);

    for (tool, column) in featured.iter().zip(columns.iter()) {
        let accent = rgb(app.theme.accent(&tool.color));
        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", tool.icon), Style::default().fg(accent)),
                Span::styled(
                    tool.name.clone(),
                    Style::default()
                        .fg(rgb(colors.foreground))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                tool.description.clone(),
                Style::default().fg(rgb(colors.subtitle)),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_top(Line::from(" Featured ").alignment(Alignment::Right))
                .border_style(Style::default().fg(rgb(colors.featured))),
        );
        frame.render_widget(card, *column);
    }
}

fn render_sidebar(
    frame: &mut Frame,
    app: &App,
    view: &CatalogView,
    selected: toolhub_core::Category,
    area: Rect,
) {
    let colors = &app.theme.colors;
    let items: Vec<ListItem> = view
        .categories
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = row.category == selected;
            let style = if is_selected {
                Style::default()
                    .fg(rgb(colors.selected))
                    .bg(rgb(colors.selected_bg))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(rgb(colors.foreground))
            };
            let label = format!("{} {} {}", i + 1, row.category.icon(), row.category.label());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<22}", label), style),
                Span::styled(
                    format!("{:>3}", row.count),
                    Style::default().fg(rgb(colors.muted)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories ")
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(list, area);
}

fn render_tool_list(
    frame: &mut Frame,
    theme: &Theme,
    view: &CatalogView,
    area: Rect,
    list_state: &mut ListState,
) {
    let colors = &theme.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", view.heading),
            Style::default()
                .fg(rgb(colors.title))
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(format!(" {} ", view.summary)).alignment(Alignment::Right))
        .border_style(Style::default().fg(rgb(colors.border)));

    if view.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "🔍 No tools found",
                Style::default()
                    .fg(rgb(colors.foreground))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or category filter",
                Style::default().fg(rgb(colors.muted)),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .visible
        .iter()
        .map(|tool| {
            let accent = rgb(theme.accent(&tool.color));
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", tool.icon), Style::default().fg(accent)),
                    Span::styled(
                        tool.name.clone(),
                        Style::default()
                            .fg(rgb(colors.foreground))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}", tool.description),
                    Style::default().fg(rgb(colors.subtitle)),
                )),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        format!("[{}]", tool.platform),
                        Style::default().fg(accent),
                    ),
                    Span::styled(
                        format!("  {}", tool.category),
                        Style::default().fg(rgb(colors.muted)),
                    ),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(rgb(colors.selected_bg)))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, list_state);
}
