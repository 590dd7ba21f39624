//! Dropdown menu hanging from the status-bar title.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};
use quickscope_core::config::theme::{parse_color, Theme};

use crate::menu::{MenuEntry, MENU};

const MENU_WIDTH: u16 = 26;

/// Renders the menu below the top-left corner of `area`.
pub fn render_menu(f: &mut Frame, area: Rect, selected: usize, theme: &Theme) {
    let rect = menu_rect(area);
    f.render_widget(Clear, rect);

    let inner_width = rect.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = MENU
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, inner_width, theme)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(parse_color(&theme.menu.border_fg))),
        )
        .highlight_style(
            Style::default()
                .fg(parse_color(&theme.menu.selected_fg))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    state.select(Some(selected.min(MENU.len() - 1)));
    f.render_stateful_widget(list, rect, &mut state);
}

/// Box under the status bar, clamped to `area`.
pub fn menu_rect(area: Rect) -> Rect {
    let y = area.y + 1;
    Rect {
        x: area.x,
        y,
        width: MENU_WIDTH.min(area.width),
        height: (MENU.len() as u16 + 2).min(area.height.saturating_sub(1)),
    }
}

fn entry_line(entry: &MenuEntry, width: usize, theme: &Theme) -> Line<'static> {
    match entry {
        MenuEntry::Separator => Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(parse_color(&theme.menu.separator_fg)),
        )),
        MenuEntry::Item(_) => {
            let label = format!(" {}", entry.label());
            let hint = entry.key_hint().map(|h| format!("{h} ")).unwrap_or_default();
            let gap = width.saturating_sub(label.len() + hint.len());
            Line::from(Span::styled(
                format!("{label}{}{hint}", " ".repeat(gap)),
                Style::default().fg(parse_color(&theme.menu.item_fg)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn menu_rect_hangs_under_status_bar() {
        let rect = menu_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(0, 1, MENU_WIDTH, 5));
    }

    #[test]
    fn menu_rect_clamped_to_small_area() {
        let rect = menu_rect(Rect::new(0, 0, 10, 3));
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 2);
    }

    #[test]
    fn quit_line_carries_key_hint() {
        let line = entry_line(&MENU[2], 24, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with(" Quit QuickScope"));
        assert!(text.ends_with("q "));
        assert_eq!(text.len(), 24);
    }

    #[test]
    fn renders_all_entries() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| render_menu(f, f.area(), 0, &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("About QuickScope"));
        assert!(text.contains("Quit QuickScope"));
        assert!(text.contains("────"));
    }
}
