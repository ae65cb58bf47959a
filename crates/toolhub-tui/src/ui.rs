// UI rendering entry point and the bits both screens share
use crate::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    // Paint the theme background first so Light actually looks light
    let bg = Paragraph::new("").style(Style::default().bg(rgb(app.theme.colors.background)));
    frame.render_widget(bg, frame.area());

    match app.screen {
        Screen::Catalog(_) => crate::catalog_ui::render_catalog(frame, app),
        Screen::Detail(_) => crate::detail_ui::render_detail(frame, app),
    }

    if app.show_help {
        crate::help_ui::render_keybindings_help(frame, app, frame.area());
    }
}

/// Core theme colour -> ratatui colour
pub fn rgb(color: toolhub_core::theme::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// One-line bar: a pending notice wins over the key hints
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect, hints: &str) {
    let colors = &app.theme.colors;
    let line = match &app.notice {
        Some(notice) => Line::from(vec![
            Span::styled(
                " ℹ ",
                Style::default()
                    .fg(rgb(colors.background))
                    .bg(rgb(colors.info))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(notice.as_str(), Style::default().fg(rgb(colors.info))),
            Span::styled("  (any key to dismiss)", Style::default().fg(rgb(colors.muted))),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(rgb(colors.muted)))),
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Spinner frame for the current tick
pub fn spinner(tick: u64) -> &'static str {
    const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), spinner(8));
        assert_ne!(spinner(0), spinner(1));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert!(inner.x >= 20 && inner.y >= 12);
    }
}
