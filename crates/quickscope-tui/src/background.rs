//! Off-loop preview generation.
//!
//! [`spawn_preview`] runs a request on a blocking worker; the response comes
//! back through an unbounded mpsc channel that only the main event loop
//! drains, so the session and the terminal are touched from one place.

use quickscope_core::{prepare_preview, PreviewConfig, PreviewRequest, PreviewResponse, Responder};
use tokio::sync::mpsc::UnboundedSender;

/// Spawns a blocking task that answers `request` on `tx`.
pub fn spawn_preview(
    request: PreviewRequest,
    config: PreviewConfig,
    tx: UnboundedSender<PreviewResponse>,
) {
    tracing::debug!(id = request.id, path = %request.path.display(), "dispatching preview");
    tokio::task::spawn_blocking(move || {
        prepare_preview(Responder::new(request, tx), &config);
    });
}
