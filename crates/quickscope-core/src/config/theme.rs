//! Theme configuration for QuickScope.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub header: HeaderTheme,
    #[serde(default)]
    pub rows: RowTheme,
    #[serde(default)]
    pub placeholder: PlaceholderTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub menu: MenuTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Folder header colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderTheme {
    pub icon_fg: String,
    pub name_fg: String,
    pub path_fg: String,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            icon_fg: "blue".to_string(),
            name_fg: "white".to_string(),
            path_fg: "dark_gray".to_string(),
        }
    }
}

/// Entry row colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowTheme {
    pub dir_fg: String,
    pub file_fg: String,
    pub info_fg: String,
    pub even_bg: String,
    pub odd_bg: String,
    pub selected_fg: String,
    pub summary_fg: String,
}

impl Default for RowTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            file_fg: "reset".to_string(),
            info_fg: "dark_gray".to_string(),
            even_bg: "reset".to_string(),
            odd_bg: "#1c1c1c".to_string(),
            selected_fg: "yellow".to_string(),
            summary_fg: "dark_gray".to_string(),
        }
    }
}

/// Empty and error message colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderTheme {
    pub empty_fg: String,
    pub error_fg: String,
}

impl Default for PlaceholderTheme {
    fn default() -> Self {
        Self {
            empty_fg: "dark_gray".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub title_fg: String,
    pub hint_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            title_fg: "black".to_string(),
            hint_fg: "dark_gray".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Status-bar menu colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTheme {
    pub border_fg: String,
    pub item_fg: String,
    pub selected_fg: String,
    pub separator_fg: String,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            border_fg: "gray".to_string(),
            item_fg: "white".to_string(),
            selected_fg: "yellow".to_string(),
            separator_fg: "dark_gray".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.len() == 7
            && hex.starts_with('#')
            && hex[1..].chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_theme_rows() {
        let theme = Theme::default();
        assert_eq!(theme.rows.dir_fg, "blue");
        assert_eq!(theme.rows.info_fg, "dark_gray");
        assert_eq!(theme.rows.odd_bg, "#1c1c1c");
    }

    #[test]
    fn default_theme_placeholder() {
        let theme = Theme::default();
        assert_eq!(theme.placeholder.empty_fg, "dark_gray");
        assert_eq!(theme.placeholder.error_fg, "red");
    }

    #[test]
    fn default_theme_menu_and_popup() {
        let theme = Theme::default();
        assert_eq!(theme.menu.selected_fg, "yellow");
        assert_eq!(theme.popup.border_fg, "yellow");
    }

    #[test]
    fn parse_color_named() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("dark_gray"), Color::DarkGray);
        assert_eq!(parse_color("white"), Color::White);
        assert_eq!(parse_color("reset"), Color::Reset);
    }

    #[test]
    fn parse_color_case_insensitive() {
        assert_eq!(parse_color("Blue"), Color::Blue);
        assert_eq!(parse_color("DarkGray"), Color::DarkGray);
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(parse_color("#ff5500"), Color::Rgb(255, 85, 0));
        assert_eq!(parse_color("#1c1c1c"), Color::Rgb(28, 28, 28));
    }

    #[test]
    fn parse_color_unknown_returns_reset() {
        assert_eq!(parse_color("nonexistent"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
    }

    #[test]
    fn load_partial_theme_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(
            &path,
            r##"
[rows]
dir_fg = "#00ff00"
file_fg = "white"
info_fg = "gray"
even_bg = "reset"
odd_bg = "black"
selected_fg = "cyan"
summary_fg = "gray"
"##,
        )
        .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.rows.dir_fg, "#00ff00");
        assert_eq!(theme.statusbar.bg, "white");
    }

    #[test]
    fn parse_color_malformed_hex_returns_reset() {
        // 7 bytes, but not 7 hex digits
        assert_eq!(parse_color("#aé12x"), Color::Reset);
        assert_eq!(parse_color("#12345g"), Color::Reset);
        assert_eq!(parse_color("#12345"), Color::Reset);
    }

    #[test]
    fn non_ascii_hex_in_theme_file_loads_and_parses() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(&path, "[popup]\nborder_fg = \"#aé12x\"\n").unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(parse_color(&theme.popup.border_fg), Color::Reset);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Theme::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }
}
