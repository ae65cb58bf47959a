// Tool detail screen: URL form, inline error, preview and instructions
use crate::ui::{render_status_bar, rgb, spinner};
use crate::{App, DetailScreen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use toolhub_core::{Theme, VideoMetadata, DOWNLOAD_OPTIONS};

pub fn render_detail(frame: &mut Frame, app: &App) {
    let Some(screen) = app.detail_screen() else {
        return;
    };
    let error = screen.lookup.error();
    let metadata = screen.lookup.metadata();
    let instructions_height = screen.page.instructions.len() as u16 + 5;

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(5)];
    if error.is_some() {
        constraints.push(Constraint::Length(3));
    }
    if metadata.is_some() {
        constraints.push(Constraint::Min(16));
        constraints.push(Constraint::Length(instructions_height));
    } else {
        constraints.push(Constraint::Min(instructions_height));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    render_header(frame, &app.theme, screen, chunks[idx]);
    idx += 1;
    render_url_form(frame, &app.theme, screen, app.tick, chunks[idx]);
    idx += 1;
    if let Some(message) = error {
        render_error(frame, &app.theme, message, chunks[idx]);
        idx += 1;
    }
    if let Some(metadata) = metadata {
        render_preview(frame, &app.theme, metadata, chunks[idx]);
        idx += 1;
    }
    render_instructions(frame, &app.theme, screen, chunks[idx]);
    idx += 1;

    let hints = if screen.lookup.is_loading() {
        "Fetching video info... | ESC: back to tools"
    } else if metadata.is_some() {
        "Ctrl+D: download | Ctrl+R: start over | ESC: back to tools | F1: help"
    } else {
        "type/paste URL | ENTER: get video | Ctrl+R: clear | ESC: back to tools | F1: help"
    };
    render_status_bar(frame, app, chunks[idx], hints);
}

fn render_header(frame: &mut Frame, theme: &Theme, screen: &DetailScreen, area: Rect) {
    let colors = &theme.colors;
    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled("← ESC Back to Tools", Style::default().fg(rgb(colors.muted))),
        Span::raw("    "),
        Span::styled(
            format!(" {} ", screen.page.icon),
            Style::default().bg(rgb(theme.accent("red"))),
        ),
        Span::raw(" "),
        Span::styled(
            screen.page.title,
            Style::default()
                .fg(rgb(colors.foreground))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", screen.page.subtitle),
            Style::default().fg(rgb(colors.subtitle)),
        ),
    ])])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(header, area);
}

fn render_url_form(frame: &mut Frame, theme: &Theme, screen: &DetailScreen, tick: u64, area: Rect) {
    let colors = &theme.colors;
    let lookup = &screen.lookup;

    let url_line = if lookup.url.is_empty() {
        Line::from(Span::styled(
            screen.page.url_placeholder,
            Style::default().fg(rgb(colors.muted)),
        ))
    } else {
        let style = if lookup.is_loading() {
            Style::default().fg(rgb(colors.muted))
        } else {
            Style::default().fg(rgb(colors.foreground))
        };
        let mut spans = vec![Span::styled(lookup.url.clone(), style)];
        if !lookup.is_loading() {
            spans.push(Span::styled("█", Style::default().fg(rgb(colors.accent))));
        }
        Line::from(spans)
    };

    let button = if lookup.is_loading() {
        Span::styled(
            format!("[ {} Loading... ]", spinner(tick)),
            Style::default().fg(rgb(colors.warning)),
        )
    } else if lookup.can_submit() {
        Span::styled(
            "[ ▶ Get Video ]",
            Style::default()
                .fg(rgb(colors.primary))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ ▶ Get Video ]", Style::default().fg(rgb(colors.muted)))
    };

    let form = Paragraph::new(vec![
        Line::from(Span::styled(
            "Paste the video URL you want to download",
            Style::default().fg(rgb(colors.subtitle)),
        )),
        url_line,
        Line::from(vec![button, Span::raw("  "), Span::styled("[ ⟳ ]", Style::default().fg(rgb(colors.muted)))]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" 🔗 {} ", screen.page.input_label))
            .border_style(Style::default().fg(rgb(colors.border_focused))),
    );
    frame.render_widget(form, area);
}

fn render_error(frame: &mut Frame, theme: &Theme, message: &str, area: Rect) {
    let colors = &theme.colors;
    let alert = Paragraph::new(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(rgb(colors.error))),
        Span::styled(message.to_string(), Style::default().fg(rgb(colors.error))),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(rgb(colors.error))),
    );
    frame.render_widget(alert, area);
}

fn render_preview(frame: &mut Frame, theme: &Theme, metadata: &VideoMetadata, area: Rect) {
    let colors = &theme.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Video Preview ")
        .title_bottom(Line::from(" Review the video details before downloading ").alignment(Alignment::Left))
        .border_style(Style::default().fg(rgb(colors.border)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    // Left column: thumbnail stand-in and the download button
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(columns[0]);

    let thumbnail = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("▶", Style::default().fg(rgb(colors.muted)))),
        Line::from(Span::styled(
            metadata.thumbnail_ref.clone(),
            Style::default().fg(rgb(colors.muted)),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(format!(" {} ", metadata.duration)).alignment(Alignment::Right))
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(thumbnail, left[0]);

    let download = Paragraph::new(Line::from(Span::styled(
        "⬇ Download Video (Ctrl+D)",
        Style::default()
            .fg(rgb(colors.background))
            .bg(rgb(theme.accent("red")))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(download, left[1]);

    // Right column: details and the fixed option rows
    let mut lines = vec![
        Line::from(Span::styled(
            metadata.title.clone(),
            Style::default()
                .fg(rgb(colors.foreground))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "👁 {}   👍 {}   🕒 {}",
                metadata.view_count, metadata.like_count, metadata.upload_date
            ),
            Style::default().fg(rgb(colors.subtitle)),
        )),
        Line::from(Span::styled(
            format!(" {} ", metadata.channel_name),
            Style::default()
                .fg(rgb(colors.foreground))
                .bg(rgb(colors.selected_bg)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Description",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            metadata.description.clone(),
            Style::default().fg(rgb(colors.subtitle)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Download Options",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for option in DOWNLOAD_OPTIONS {
        let mut spans = vec![
            Span::styled(
                format!("  {:<18}", option.label),
                Style::default().fg(rgb(colors.foreground)),
            ),
            Span::styled(option.detail, Style::default().fg(rgb(colors.muted))),
        ];
        if option.recommended {
            spans.push(Span::styled(
                "  Recommended",
                Style::default()
                    .fg(rgb(colors.success))
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(details, columns[1]);
}

fn render_instructions(frame: &mut Frame, theme: &Theme, screen: &DetailScreen, area: Rect) {
    let colors = &theme.colors;
    let mut lines: Vec<Line> = screen
        .page
        .instructions
        .iter()
        .enumerate()
        .map(|(i, step)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(rgb(colors.accent))),
                Span::styled(*step, Style::default().fg(rgb(colors.foreground))),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("ⓘ {}", screen.page.disclaimer),
        Style::default()
            .fg(rgb(colors.muted))
            .add_modifier(Modifier::ITALIC),
    )));

    let help = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" How to Use ")
            .border_style(Style::default().fg(rgb(colors.border))),
    );
    frame.render_widget(help, area);
}
