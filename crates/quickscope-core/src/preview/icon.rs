//! Icon kinds attached to preview rows.
//!
//! The core only decides *which* icon an entry gets; front ends map each
//! [`Icon`] to a glyph or image.

use std::path::Path;

use crate::fs::entry::FileEntry;

/// The default icon category for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Folder,
    Code,
    Text,
    Document,
    Pdf,
    Spreadsheet,
    Presentation,
    Image,
    Audio,
    Video,
    Archive,
    Config,
    Generic,
}

impl Icon {
    /// Returns the icon for a listed entry.
    pub fn for_entry(entry: &FileEntry) -> Self {
        if entry.is_dir() {
            Icon::Folder
        } else {
            Self::for_file(entry.path())
        }
    }

    /// Returns the icon for a file path, resolved from its extension.
    pub fn for_file(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "rs" | "py" | "pyw" | "js" | "mjs" | "ts" | "tsx" | "jsx" | "go" | "java" | "c"
            | "cpp" | "cc" | "h" | "hpp" | "rb" | "lua" | "swift" | "kt" | "php" | "sql"
            | "zig" | "sh" | "bash" | "zsh" | "fish" | "html" | "htm" | "css" | "scss" => {
                Icon::Code
            }
            "txt" | "text" | "md" | "markdown" | "log" | "rtf" => Icon::Text,
            "doc" | "docx" | "pages" | "odt" => Icon::Document,
            "pdf" => Icon::Pdf,
            "csv" | "xls" | "xlsx" | "numbers" | "ods" => Icon::Spreadsheet,
            "ppt" | "pptx" | "key" | "odp" => Icon::Presentation,
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "ico" | "tiff" | "tif" | "heic"
            | "svg" => Icon::Image,
            "mp3" | "wav" | "flac" | "ogg" | "aac" | "m4a" | "aiff" => Icon::Audio,
            "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "webm" | "m4v" => Icon::Video,
            "zip" | "tar" | "gz" | "bz2" | "xz" | "7z" | "rar" | "dmg" => Icon::Archive,
            "toml" | "yaml" | "yml" | "json" | "ini" | "cfg" | "conf" | "plist" | "xml" => {
                Icon::Config
            }
            _ => Icon::Generic,
        }
    }
}
