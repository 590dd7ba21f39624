//! QuickScope core library: UI-agnostic folder previews.
//!
//! `quickscope-core` lists a folder, orders its entries, and lays them out
//! as a plain view tree that any front end can draw. The terminal host
//! (`quickscope-tui`) is one such front end.
//!
//! # Modules
//!
//! - [`fs`]: [`FileEntry`], folder enumeration and display ordering.
//! - [`preview`]: view tree, formatting, request dispatch and the preview session.
//! - [`config`]: TOML settings and theme.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod preview;

pub use error::{CoreError, CoreResult};
pub use fs::entry::FileEntry;
pub use fs::listing::{list_directory, Listing};
pub use fs::sort::sort_entries;
pub use preview::builder::generate_preview;
pub use preview::icon::Icon;
pub use preview::request::{prepare_preview, PreviewRequest, PreviewResponse, RequestId, Responder};
pub use preview::session::{PreviewSession, SessionState};
pub use preview::view::{Body, Header, Placeholder, PlaceholderKind, PreviewView, Row, Stripe, Summary};

pub use config::settings::{Config, PreviewConfig, SizeUnits, UiConfig};
pub use config::theme::{parse_color, Theme};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed); display and comparison use
/// the composed form.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
