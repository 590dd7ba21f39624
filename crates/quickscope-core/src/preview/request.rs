//! Preview requests and their single-shot completion.
//!
//! The host creates a [`PreviewRequest`], hands a [`Responder`] to whatever
//! thread does the work, and receives exactly one [`PreviewResponse`] on
//! the channel its UI loop drains.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedSender;

use crate::config::settings::PreviewConfig;
use crate::error::CoreResult;
use crate::preview::builder::generate_preview;
use crate::preview::view::PreviewView;

/// Identifies one preview request within a host.
pub type RequestId = u64;

/// A request to preview the folder at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub id: RequestId,
    pub path: PathBuf,
}

impl PreviewRequest {
    pub fn new(id: RequestId, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }
}

/// The outcome of a request: a view, or the error that ended it.
#[derive(Debug)]
pub struct PreviewResponse {
    pub id: RequestId,
    pub path: PathBuf,
    pub result: CoreResult<PreviewView>,
}

/// Completion handle for one request.
///
/// [`Responder::respond`] takes `self`, so a request is answered at most
/// once; dropping an unanswered responder leaves the host to time out or
/// move on.
#[derive(Debug)]
pub struct Responder {
    request: PreviewRequest,
    tx: UnboundedSender<PreviewResponse>,
}

impl Responder {
    pub fn new(request: PreviewRequest, tx: UnboundedSender<PreviewResponse>) -> Self {
        Self { request, tx }
    }

    pub fn request(&self) -> &PreviewRequest {
        &self.request
    }

    /// Delivers the result. Returns `false` if the host has gone away.
    pub fn respond(self, result: CoreResult<PreviewView>) -> bool {
        let PreviewRequest { id, path } = self.request;
        self.tx.send(PreviewResponse { id, path, result }).is_ok()
    }
}

/// Generates the preview for the responder's request and answers it.
///
/// Runs synchronously; callers that must keep a UI responsive run it on a
/// blocking worker.
pub fn prepare_preview(responder: Responder, config: &PreviewConfig) {
    let path: &Path = &responder.request().path;
    let result = generate_preview(path, config);
    let id = responder.request().id;
    if !responder.respond(result) {
        tracing::debug!(id, "preview host dropped before completion");
    }
}
