//! Folder preview generation.
//!
//! A host opens a [`session::PreviewSession`], dispatches a
//! [`request::PreviewRequest`], and feeds the [`request::PreviewResponse`]
//! back into the session. [`builder::generate_preview`] does the actual
//! work of turning a folder into a [`view::PreviewView`].

pub mod builder;
pub mod format;
pub mod icon;
pub mod request;
pub mod session;
pub mod view;
