//! Folder preview panel.
//!
//! Draws a [`PreviewView`]: the header, then the rows as a scrollable
//! `List` with the summary under it, or a centred placeholder message.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use quickscope_core::config::settings::UiConfig;
use quickscope_core::config::theme::{parse_color, Theme};
use quickscope_core::{Header, Placeholder, PlaceholderKind, PreviewSession, PreviewView, Row, Stripe};

use crate::icons::{fallback_for, glyph_for};

/// Width taken by the list highlight symbol.
const HIGHLIGHT_WIDTH: u16 = 2;

/// Data needed to render the preview panel.
pub struct PreviewProps<'a> {
    pub session: &'a PreviewSession,
    pub cursor: usize,
    pub theme: &'a Theme,
    pub ui: &'a UiConfig,
}

/// Renders the preview panel for the current session state.
pub fn render_preview(f: &mut Frame, area: Rect, props: &PreviewProps<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match props.session.view() {
        Some(view) => render_view(f, inner, view, props),
        None => {
            let header = props.session.path().map(Header::for_folder);
            let chunks = split_header(inner);
            if let Some(header) = header {
                let lines = header_lines(&header, props.theme, props.ui.show_icons);
                f.render_widget(Paragraph::new(lines), chunks[0]);
            }
            let loading = Paragraph::new("Loading…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(parse_color(&props.theme.placeholder.empty_fg)));
            f.render_widget(loading, centered_line(chunks[1]));
        }
    }
}

fn render_view(f: &mut Frame, area: Rect, view: &PreviewView, props: &PreviewProps<'_>) {
    let chunks = split_header(area);
    let lines = header_lines(&view.header, props.theme, props.ui.show_icons);
    f.render_widget(Paragraph::new(lines), chunks[0]);

    if let Some(placeholder) = view.placeholder() {
        render_placeholder(f, chunks[1], placeholder, props.theme);
        return;
    }

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(chunks[1]);

    let width = body[0].width.saturating_sub(HIGHLIGHT_WIDTH);
    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|row| {
            let line = row_line(row, width, props.theme, props.ui.show_icons);
            ListItem::new(line).style(stripe_style(row.stripe, props.theme, props.ui.stripe_rows))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(parse_color(&props.theme.rows.selected_fg)),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !view.rows().is_empty() {
        state.select(Some(props.cursor.min(view.rows().len() - 1)));
    }
    f.render_stateful_widget(list, body[0], &mut state);

    if let Some(summary) = view.summary() {
        let summary = Paragraph::new(summary.text())
            .alignment(Alignment::Center)
            .style(Style::default().fg(parse_color(&props.theme.rows.summary_fg)));
        f.render_widget(summary, body[1]);
    }
}

/// Header on top (name, path, blank spacer), body below.
fn split_header(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area)
}

/// One-row rect in the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    let offset = area.height.saturating_sub(1) / 2;
    Rect {
        y: area.y + offset,
        height: area.height.min(1),
        ..area
    }
}

/// Folder name (bold, with icon) above its full path.
pub fn header_lines(header: &Header, theme: &Theme, show_icons: bool) -> Vec<Line<'static>> {
    let icon = if show_icons {
        glyph_for(header.icon)
    } else {
        fallback_for(header.icon)
    };
    vec![
        Line::from(vec![
            Span::styled(
                icon.to_string(),
                Style::default().fg(parse_color(&theme.header.icon_fg)),
            ),
            Span::styled(
                header.name.clone(),
                Style::default()
                    .fg(parse_color(&theme.header.name_fg))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            header.path.display().to_string(),
            Style::default().fg(parse_color(&theme.header.path_fg)),
        )),
    ]
}

/// Icon and name on the left, info right-aligned to `width`.
pub fn row_line(row: &Row, width: u16, theme: &Theme, show_icons: bool) -> Line<'static> {
    let icon = if show_icons {
        glyph_for(row.icon)
    } else {
        fallback_for(row.icon)
    };
    let name_style = if row.is_dir {
        Style::default()
            .fg(parse_color(&theme.rows.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(parse_color(&theme.rows.file_fg))
    };

    let icon_span = Span::styled(icon.to_string(), name_style);
    let name_span = Span::styled(row.name.clone(), name_style);
    let info_span = Span::styled(
        row.info.clone(),
        Style::default().fg(parse_color(&theme.rows.info_fg)),
    );

    let used = icon_span.width() + name_span.width() + info_span.width();
    let gap = (width as usize).saturating_sub(used).max(1);

    Line::from(vec![icon_span, name_span, Span::raw(" ".repeat(gap)), info_span])
}

fn stripe_style(stripe: Stripe, theme: &Theme, enabled: bool) -> Style {
    if !enabled {
        return Style::default();
    }
    let bg = match stripe {
        Stripe::Even => &theme.rows.even_bg,
        Stripe::Odd => &theme.rows.odd_bg,
    };
    Style::default().bg(parse_color(bg))
}

fn render_placeholder(f: &mut Frame, area: Rect, placeholder: &Placeholder, theme: &Theme) {
    let fg = match placeholder.kind {
        PlaceholderKind::Empty => &theme.placeholder.empty_fg,
        PlaceholderKind::PermissionDenied | PlaceholderKind::EnumerationFailed => {
            &theme.placeholder.error_fg
        }
    };
    let paragraph = Paragraph::new(placeholder.message.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(parse_color(fg)));
    f.render_widget(paragraph, centered_line(area));
}
