use std::path::{Path, PathBuf};

use quickscope_core::config::settings::Config;
use quickscope_core::config::theme::Theme;
use quickscope_core::{PreviewRequest, PreviewResponse, PreviewSession, RequestId, Row};

use crate::menu::{next_selectable, prev_selectable, MenuCommand, MENU};

/// Application mode: determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Status-bar menu is open; `selected` indexes [`MENU`].
    Menu {
        selected: usize,
    },
    /// About dialog is shown.
    About,
}

/// Host state: the current preview session plus view concerns.
///
/// Every preview request opens a fresh [`PreviewSession`]; responses for
/// older requests are dropped when they arrive.
#[derive(Debug)]
pub struct App {
    mode: AppMode,
    should_quit: bool,
    status_message: Option<String>,
    session: PreviewSession,
    /// Cursor index within the current rows.
    cursor: usize,
    next_id: RequestId,
    config: Config,
    theme: Theme,
}

fn home_config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("quickscope")
}

/// Returns the directory holding the theme file.
pub fn config_dir() -> PathBuf {
    let local = PathBuf::from("config");
    if local.exists() {
        return local;
    }
    home_config_dir()
}

/// Config files in lookup order; the first that loads wins.
pub fn config_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("config").join("default.toml"),
        home_config_dir().join("config.toml"),
    ]
}

/// Loads config and theme, falling back to defaults.
pub fn load_settings() -> (Config, Theme) {
    let config = Config::load_first(&config_candidates());
    let theme = Theme::load(&config_dir().join("theme.toml")).unwrap_or_default();
    (config, theme)
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            mode: AppMode::Normal,
            should_quit: false,
            status_message: None,
            session: PreviewSession::new(0),
            cursor: 0,
            next_id: 1,
            config,
            theme,
        }
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn session(&self) -> &PreviewSession {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Rows of the current preview (empty while loading or on failure).
    pub fn rows(&self) -> &[Row] {
        self.session.view().map(|v| v.rows()).unwrap_or(&[])
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows().get(self.cursor)
    }

    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_quit(self) -> Self {
        tracing::info!("quit requested");
        Self {
            should_quit: true,
            ..self
        }
    }

    pub fn with_status(self, message: String) -> Self {
        Self {
            status_message: Some(message),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    /// Opens a new session for `path` and returns the request to dispatch.
    pub fn with_request(self, path: &Path) -> (Self, PreviewRequest) {
        let id = self.next_id;
        let app = Self {
            session: PreviewSession::loading(id, path.to_path_buf()),
            cursor: 0,
            next_id: id + 1,
            ..self
        };
        (app, PreviewRequest::new(id, path))
    }

    /// Feeds a finished request into the current session.
    pub fn with_response(mut self, response: PreviewResponse) -> Self {
        if response.id != self.session.id() {
            tracing::debug!(
                id = response.id,
                current = self.session.id(),
                "dropping stale preview response"
            );
            return self;
        }

        match self.session.complete(response.result) {
            Ok(()) => Self { cursor: 0, ..self },
            Err(e) => {
                tracing::warn!("unexpected preview response: {e}");
                self
            }
        }
    }

    /// Path for re-requesting the current folder.
    pub fn current_path(&self) -> Option<&Path> {
        self.session.path()
    }

    /// Folder to preview when the selected row is activated.
    pub fn selected_folder(&self) -> Option<PathBuf> {
        self.selected_row()
            .filter(|row| row.is_dir)
            .map(|row| row.path.clone())
    }

    /// Parent of the current folder, if any.
    pub fn parent_folder(&self) -> Option<PathBuf> {
        self.current_path()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    }

    pub fn with_cursor_down(self) -> Self {
        let last = self.rows().len().saturating_sub(1);
        let cursor = (self.cursor + 1).min(last);
        Self { cursor, ..self }
    }

    pub fn with_cursor_up(self) -> Self {
        let cursor = self.cursor.saturating_sub(1);
        Self { cursor, ..self }
    }

    pub fn with_cursor_top(self) -> Self {
        Self { cursor: 0, ..self }
    }

    pub fn with_cursor_bottom(self) -> Self {
        let cursor = self.rows().len().saturating_sub(1);
        Self { cursor, ..self }
    }

    pub fn with_menu_down(self) -> Self {
        match self.mode {
            AppMode::Menu { selected } => self.with_mode(AppMode::Menu {
                selected: next_selectable(selected),
            }),
            _ => self,
        }
    }

    pub fn with_menu_up(self) -> Self {
        match self.mode {
            AppMode::Menu { selected } => self.with_mode(AppMode::Menu {
                selected: prev_selectable(selected),
            }),
            _ => self,
        }
    }

    /// Runs the highlighted menu command.
    pub fn with_menu_activate(self) -> Self {
        let AppMode::Menu { selected } = self.mode else {
            return self;
        };
        match MENU.get(selected).and_then(|entry| entry.command()) {
            Some(command) => self.with_menu_command(command),
            None => self,
        }
    }

    pub fn with_menu_command(self, command: MenuCommand) -> Self {
        match command {
            MenuCommand::About => {
                tracing::info!("showing about dialog");
                self.with_mode(AppMode::About)
            }
            MenuCommand::Quit => self.with_mode(AppMode::Normal).with_quit(),
        }
    }
}
