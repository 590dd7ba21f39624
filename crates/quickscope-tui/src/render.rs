use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppMode};
use crate::ui::menu::render_menu;
use crate::ui::popup::{about_lines, render_popup};
use crate::ui::preview::{render_preview, PreviewProps};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let ui = &app.config().ui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(f.area());

    let statusbar = StatusBarProps {
        status_message: app.status_message(),
        show_icons: ui.show_icons,
        menu_open: matches!(app.mode(), AppMode::Menu { .. }),
    };
    render_statusbar(f, chunks[0], &statusbar, theme);

    let preview = PreviewProps {
        session: app.session(),
        cursor: app.cursor(),
        theme,
        ui,
    };
    render_preview(f, chunks[1], &preview);

    // Overlays
    match app.mode() {
        AppMode::Normal => {}
        AppMode::Menu { selected } => render_menu(f, f.area(), *selected, theme),
        AppMode::About => render_popup(f, "QuickScope", &about_lines(), theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickscope_core::{prepare_preview, Config, Responder, Theme};
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn loaded_app(tmp: &TempDir) -> App {
        let app = App::new(Config::default(), Theme::default());
        let (app, request) = app.with_request(tmp.path());
        let (tx, mut rx) = mpsc::unbounded_channel();
        prepare_preview(Responder::new(request, tx), &app.config().preview);
        app.with_response(rx.try_recv().unwrap())
    }

    #[test]
    fn normal_mode_shows_status_bar_and_preview() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("readme.md"), "hello").unwrap();

        let text = screen(&loaded_app(&tmp));
        assert!(text.contains("QuickScope - Folder Preview Extension"));
        assert!(text.contains("readme.md"));
        assert!(text.contains("1 item"));
    }

    #[test]
    fn menu_overlay_is_drawn() {
        let tmp = TempDir::new().unwrap();
        let app = loaded_app(&tmp).with_mode(AppMode::Menu { selected: 0 });
        let text = screen(&app);
        assert!(text.contains("About QuickScope"));
        assert!(text.contains("Quit QuickScope"));
    }

    #[test]
    fn about_overlay_is_drawn() {
        let tmp = TempDir::new().unwrap();
        let app = loaded_app(&tmp).with_mode(AppMode::About);
        let text = screen(&app);
        assert!(text.contains(&format!("QuickScope {}", env!("CARGO_PKG_VERSION"))));
    }
}
