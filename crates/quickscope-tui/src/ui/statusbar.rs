//! Status bar rendering.
//!
//! The bar occupies a single row at the top of the terminal: the app icon
//! and title on the left (the menu anchor), the tooltip or an optional
//! status message next to it, and key hints on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use quickscope_core::config::theme::{parse_color, Theme};

use crate::icons::APP_ICON;

pub const APP_TITLE: &str = "QuickScope";
pub const TOOLTIP: &str = "QuickScope - Folder Preview Extension";
const HINTS: &str = "m: menu  q: quit ";

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub status_message: Option<&'a str>,
    pub show_icons: bool,
    /// Title is highlighted while the menu hangs from it.
    pub menu_open: bool,
}

/// Renders the status bar with the app title, tooltip and key hints.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let hint_style = Style::default().fg(parse_color(&theme.statusbar.hint_fg)).bg(bg);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(HINTS.len() as u16)])
        .split(area);

    let bar = Paragraph::new(title_line(props, theme)).style(Style::default().bg(bg));
    f.render_widget(bar, chunks[0]);

    let hints = Paragraph::new(HINTS)
        .alignment(Alignment::Right)
        .style(hint_style);
    f.render_widget(hints, chunks[1]);
}

/// Icon, title, then the status message or the tooltip.
fn title_line(props: &StatusBarProps<'_>, theme: &Theme) -> Line<'static> {
    let bg = parse_color(&theme.statusbar.bg);
    let mut title_style = Style::default()
        .fg(parse_color(&theme.statusbar.title_fg))
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    if props.menu_open {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }

    let icon = if props.show_icons {
        format!(" {APP_ICON} ")
    } else {
        " ".to_string()
    };

    let trailer = match props.status_message {
        Some(msg) => Span::styled(
            format!("  {msg}"),
            Style::default()
                .fg(parse_color(&theme.statusbar.message_fg))
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ),
        None => Span::styled(
            format!("  {TOOLTIP}"),
            Style::default().fg(parse_color(&theme.statusbar.hint_fg)).bg(bg),
        ),
    };

    Line::from(vec![
        Span::styled(format!("{icon}{APP_TITLE} "), title_style),
        trailer,
    ])
}
