//! Nerd Font glyphs for preview icons.

use quickscope_core::Icon;

/// Glyph shown in the status bar next to the app name.
pub const APP_ICON: &str = "\u{f07b}";

/// Returns the Nerd Font glyph (with trailing space) for an icon kind.
pub fn glyph_for(icon: Icon) -> &'static str {
    match icon {
        Icon::Folder => "\u{f07b} ",
        Icon::Code => "\u{f121} ",
        Icon::Text => "\u{f15c} ",
        Icon::Document => "\u{f1c2} ",
        Icon::Pdf => "\u{f1c1} ",
        Icon::Spreadsheet => "\u{f1c3} ",
        Icon::Presentation => "\u{f1c4} ",
        Icon::Image => "\u{f1c5} ",
        Icon::Audio => "\u{f001} ",
        Icon::Video => "\u{f03d} ",
        Icon::Archive => "\u{f410} ",
        Icon::Config => "\u{e615} ",
        Icon::Generic => "\u{f15b} ",
    }
}

/// Plain-text stand-in used when icons are disabled.
pub fn fallback_for(icon: Icon) -> &'static str {
    match icon {
        Icon::Folder => "/ ",
        _ => "  ",
    }
}
