// Keybindings help popup
use crate::ui::{centered_rect, rgb};
use crate::{App, Screen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render keybindings help popup
pub fn render_keybindings_help(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup_area);

    let colors = &app.theme.colors;
    let bg_color = rgb(colors.background);
    let fg_color = rgb(colors.foreground);
    let primary_color = rgb(colors.primary);
    let accent_color = rgb(colors.accent);
    let muted_color = rgb(colors.muted);

    let on_detail = matches!(app.screen, Screen::Detail(_));
    let mut lines =
        get_keybindings_content(on_detail, primary_color, accent_color, fg_color, muted_color);

    lines.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(muted_color)),
        Span::styled("? ", Style::default().fg(accent_color).add_modifier(Modifier::BOLD)),
        Span::styled("or ", Style::default().fg(muted_color)),
        Span::styled("ESC ", Style::default().fg(accent_color).add_modifier(Modifier::BOLD)),
        Span::styled("to close", Style::default().fg(muted_color)),
    ]));

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keybindings Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(primary_color))
                .style(Style::default().bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color));

    frame.render_widget(help_text, popup_area);
}

/// Keybindings for the screen we're on, current screen first
fn get_keybindings_content(
    on_detail: bool,
    primary: Color,
    accent: Color,
    fg: Color,
    muted: Color,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let section = |title: &str| -> Line<'static> {
        Line::from(vec![Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Black)
                .bg(primary)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let key = |k: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", k),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(fg)),
        ])
    };

    lines.push(section("Global"));
    lines.push(Line::from(""));
    lines.push(key("F1", "Toggle this help (? works on the catalog too)"));
    lines.push(key("Ctrl+C", "Quit from anywhere"));
    lines.push(key("any key", "Dismiss the current notice"));
    lines.push(Line::from(""));

    if on_detail {
        lines.push(section("Tool Page"));
        lines.push(Line::from(""));
        lines.push(key("type", "Edit the video URL"));
        lines.push(key("Backspace", "Delete character"));
        lines.push(key("ENTER", "Get video info"));
        lines.push(key("Ctrl+D", "Download the previewed video"));
        lines.push(key("Ctrl+R", "Start over with a new URL"));
        lines.push(key("ESC", "Back to the tool catalog"));
    } else {
        lines.push(section("Tool Catalog"));
        lines.push(Line::from(""));
        lines.push(key("q", "Quit application"));
        lines.push(key("/", "Enter search mode"));
        lines.push(key("j / Down", "Next tool"));
        lines.push(key("k / Up", "Previous tool"));
        lines.push(key("TAB", "Next category"));
        lines.push(key("Shift+TAB", "Previous category"));
        lines.push(key("1-5", "Jump to a category"));
        lines.push(key("ENTER", "Open the selected tool"));
        lines.push(key("m", "Toggle navigation menu"));
        lines.push(key("t", "Toggle light/dark theme"));
        lines.push(Line::from(""));

        lines.push(section("Search Mode"));
        lines.push(Line::from(""));
        lines.push(key("type", "Filter by name, description or platform"));
        lines.push(key("Backspace", "Delete character"));
        lines.push(key("ENTER / ESC", "Back to the list (query is kept)"));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![Span::styled(
        "  Tip: the status bar always shows the keys for what you're doing",
        Style::default().fg(muted).add_modifier(Modifier::ITALIC),
    )]));
    lines.push(Line::from(""));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_catalog_help_lists_catalog_keys() {
        let lines = get_keybindings_content(false, Color::Red, Color::Blue, Color::White, Color::Gray);
        let text = text_of(&lines);
        assert!(text.contains("Tool Catalog"));
        assert!(text.contains("Open the selected tool"));
        assert!(!text.contains("Download the previewed video"));
    }

    #[test]
    fn test_detail_help_lists_lookup_keys() {
        let lines = get_keybindings_content(true, Color::Red, Color::Blue, Color::White, Color::Gray);
        let text = text_of(&lines);
        assert!(text.contains("Tool Page"));
        assert!(text.contains("Ctrl+D"));
        assert!(!text.contains("Search Mode"));
    }
}
