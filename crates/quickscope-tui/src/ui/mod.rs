//! UI widget modules for the terminal host.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod menu;
pub mod popup;
pub mod preview;
pub mod statusbar;
