//! QuickScope: a folder preview host for the terminal.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic. With `--print` it renders
//! one preview as plain text to stdout instead.

mod app;
mod background;
mod icons;
mod input;
mod menu;
mod plain;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use quickscope_core::{PreviewResponse, PreviewView};

use crate::app::{load_settings, App, AppMode};
use crate::background::spawn_preview;
use crate::input::{handle_key, InputAction, InputState};
use crate::plain::render_plain;
use crate::render::render;

const USAGE: &str = "\
Usage: quickscope [OPTIONS] [PATH]

Preview the contents of a folder.

Options:
  -p, --print    Print the preview as plain text and exit
  -h, --help     Show this help
  -V, --version  Show version";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Interactive(PathBuf),
    Print(PathBuf),
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Command> {
    let mut print = false;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-p" | "--print" => print = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                anyhow::bail!("unknown option: {flag}")
            }
            _ if path.is_some() => anyhow::bail!("unexpected argument: {arg}"),
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    let path = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let path = std::fs::canonicalize(&path).unwrap_or(path);

    Ok(if print {
        Command::Print(path)
    } else {
        Command::Interactive(path)
    })
}

/// Sends tracing output to `quickscope.log` in the temp dir.
///
/// Logging stays off if the file cannot be opened.
fn init_tracing() {
    let log_path = std::env::temp_dir().join("quickscope.log");
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Version => println!("quickscope {}", env!("CARGO_PKG_VERSION")),
        Command::Print(path) => {
            if !print_preview(&path).await {
                std::process::exit(1);
            }
        }
        Command::Interactive(path) => {
            install_panic_hook();
            let mut terminal = setup_terminal()?;

            let result = run_app(&mut terminal, &path).await;

            restore_terminal(&mut terminal)?;

            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Prints one preview of `path`; returns false if the folder could not be read.
async fn print_preview(path: &Path) -> bool {
    let (config, _theme) = load_settings();
    let (app, request) = App::new(config, Default::default()).with_request(path);
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_preview(request, app.config().preview.clone(), tx);

    let Some(response) = rx.recv().await else {
        eprintln!("Error: preview worker stopped without answering");
        return false;
    };

    match response.result {
        Ok(view) => {
            print!("{}", render_plain(&view));
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "preview failed: {e}");
            print!("{}", render_plain(&PreviewView::failed(path, &e)));
            false
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    start_dir: &Path,
) -> anyhow::Result<()> {
    let (preview_tx, mut preview_rx) = mpsc::unbounded_channel::<PreviewResponse>();

    let (config, theme) = load_settings();
    let mut app = request_preview(App::new(config, theme), start_dir, &preview_tx);
    let mut input_state = InputState::new();

    loop {
        // 1. Drain finished previews
        while let Ok(response) = preview_rx.try_recv() {
            app = app.with_response(response);
        }

        // 2. Render
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        // 3. Poll for crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let (action, new_input_state) = handle_key(key, app.mode(), &input_state);
                input_state = new_input_state;
                app = apply_action(app, action, &preview_tx);
            }
        }
    }

    Ok(())
}

fn apply_action(app: App, action: InputAction, tx: &UnboundedSender<PreviewResponse>) -> App {
    match action {
        InputAction::CursorDown => app.with_cursor_down(),
        InputAction::CursorUp => app.with_cursor_up(),
        InputAction::CursorTop => app.with_cursor_top(),
        InputAction::CursorBottom => app.with_cursor_bottom(),
        InputAction::OpenSelected => match app.selected_folder() {
            Some(path) => request_preview(app, &path, tx),
            None => app,
        },
        InputAction::GoParent => match app.parent_folder() {
            Some(path) => request_preview(app, &path, tx),
            None => app.with_status("Already at the top folder".to_string()),
        },
        InputAction::Refresh => match app.current_path().map(Path::to_path_buf) {
            Some(path) => request_preview(app, &path, tx),
            None => app,
        },
        InputAction::OpenMenu => app.with_mode(AppMode::Menu { selected: 0 }),
        InputAction::MenuDown => app.with_menu_down(),
        InputAction::MenuUp => app.with_menu_up(),
        InputAction::MenuActivate => app.with_menu_activate(),
        InputAction::Close => app.with_mode(AppMode::Normal),
        InputAction::Quit => app.with_quit(),
        InputAction::None => app,
    }
}

/// Opens a new session for `path` and hands the request to a worker.
fn request_preview(app: App, path: &Path, tx: &UnboundedSender<PreviewResponse>) -> App {
    let (app, request) = app.with_clear_status().with_request(path);
    spawn_preview(request, app.config().preview.clone(), tx.clone());
    app
}
