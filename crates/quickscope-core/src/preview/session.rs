//! Lifecycle of a single preview request.
//!
//! ```text
//! Idle --begin--> Loading --complete(Ok)--> Rendered
//!                         \--complete(Err)-> Failed
//! ```
//!
//! `Rendered` and `Failed` are terminal: a new request needs a new session.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::preview::request::RequestId;
use crate::preview::view::PreviewView;

/// Where a [`PreviewSession`] is in its lifecycle.
#[derive(Debug)]
pub enum SessionState {
    Idle,
    Loading {
        path: PathBuf,
    },
    Rendered(PreviewView),
    /// The request failed; `view` is the placeholder shown instead.
    Failed {
        error: CoreError,
        view: PreviewView,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Loading { .. } => "loading",
            SessionState::Rendered(_) => "rendered",
            SessionState::Failed { .. } => "failed",
        }
    }
}

/// Owns the view tree of one preview request.
#[derive(Debug)]
pub struct PreviewSession {
    id: RequestId,
    state: SessionState,
}

impl PreviewSession {
    pub fn new(id: RequestId) -> Self {
        Self {
            id,
            state: SessionState::Idle,
        }
    }

    /// A session already past `begin`, waiting for `path` to be answered.
    pub fn loading(id: RequestId, path: PathBuf) -> Self {
        tracing::debug!(id, path = %path.display(), "preview loading");
        Self {
            id,
            state: SessionState::Loading { path },
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Moves `Idle → Loading`.
    pub fn begin(&mut self, path: PathBuf) -> CoreResult<()> {
        if !matches!(self.state, SessionState::Idle) {
            return Err(CoreError::InvalidTransition {
                from: self.state.name(),
                to: "loading",
            });
        }
        tracing::debug!(id = self.id, path = %path.display(), "preview loading");
        self.state = SessionState::Loading { path };
        Ok(())
    }

    /// Moves `Loading → Rendered` or `Loading → Failed` depending on `result`.
    pub fn complete(&mut self, result: CoreResult<PreviewView>) -> CoreResult<()> {
        let path = match &self.state {
            SessionState::Loading { path } => path.clone(),
            other => {
                return Err(CoreError::InvalidTransition {
                    from: other.name(),
                    to: if result.is_ok() { "rendered" } else { "failed" },
                })
            }
        };

        self.state = match result {
            Ok(view) => {
                tracing::debug!(id = self.id, rows = view.rows().len(), "preview rendered");
                SessionState::Rendered(view)
            }
            Err(error) => {
                tracing::warn!(id = self.id, path = %path.display(), %error, "preview failed");
                let view = PreviewView::failed(&path, &error);
                SessionState::Failed { error, view }
            }
        };
        Ok(())
    }

    /// The folder this session was started for.
    pub fn path(&self) -> Option<&Path> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Loading { path } => Some(path),
            SessionState::Rendered(view) | SessionState::Failed { view, .. } => {
                Some(&view.header.path)
            }
        }
    }

    /// The view to display: the rendered preview or the failure placeholder.
    pub fn view(&self) -> Option<&PreviewView> {
        match &self.state {
            SessionState::Rendered(view) | SessionState::Failed { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CoreError> {
        match &self.state {
            SessionState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            SessionState::Rendered(_) | SessionState::Failed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::view::{Body, Header, Placeholder, PlaceholderKind};

    fn empty_view(path: &str) -> PreviewView {
        PreviewView {
            header: Header::for_folder(Path::new(path)),
            body: Body::Placeholder(Placeholder::empty()),
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = PreviewSession::new(7);
        assert_eq!(session.id(), 7);
        assert_eq!(session.state().name(), "idle");
        assert!(session.view().is_none());
        assert!(session.path().is_none());
    }

    #[test]
    fn begin_then_render() {
        let mut session = PreviewSession::new(1);
        session.begin(PathBuf::from("/tmp/a")).unwrap();
        assert!(session.is_loading());
        assert_eq!(session.path(), Some(Path::new("/tmp/a")));

        session.complete(Ok(empty_view("/tmp/a"))).unwrap();
        assert!(session.is_finished());
        assert_eq!(session.state().name(), "rendered");
        assert!(session.view().is_some());
        assert!(session.error().is_none());
    }

    #[test]
    fn begin_then_fail_shows_placeholder() {
        let mut session = PreviewSession::new(2);
        session.begin(PathBuf::from("/secret")).unwrap();
        session
            .complete(Err(CoreError::PermissionDenied(PathBuf::from("/secret"))))
            .unwrap();

        assert_eq!(session.state().name(), "failed");
        assert!(matches!(session.error(), Some(CoreError::PermissionDenied(_))));
        let view = session.view().unwrap();
        assert!(view.rows().is_empty());
        assert_eq!(
            view.placeholder().unwrap().kind,
            PlaceholderKind::PermissionDenied
        );
        assert_eq!(
            view.placeholder().unwrap().message,
            "Cannot read folder contents - permission denied"
        );
        assert!(view.summary().is_none());
        assert_eq!(session.path(), Some(Path::new("/secret")));
    }

    #[test]
    fn loading_constructor_skips_idle() {
        let mut session = PreviewSession::loading(4, PathBuf::from("/tmp/b"));
        assert!(session.is_loading());
        assert_eq!(session.path(), Some(Path::new("/tmp/b")));
        assert!(session.begin(PathBuf::from("/tmp/c")).is_err());
        session.complete(Ok(empty_view("/tmp/b"))).unwrap();
        assert!(session.is_finished());
    }

    #[test]
    fn complete_without_begin_is_rejected() {
        let mut session = PreviewSession::new(3);
        let err = session.complete(Ok(empty_view("/x"))).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: "idle",
                to: "rendered"
            }
        ));
        assert_eq!(session.state().name(), "idle");
    }

    #[test]
    fn terminal_states_reject_restart() {
        let mut session = PreviewSession::new(4);
        session.begin(PathBuf::from("/x")).unwrap();
        session.complete(Ok(empty_view("/x"))).unwrap();

        assert!(session.begin(PathBuf::from("/y")).is_err());
        assert!(session.complete(Ok(empty_view("/y"))).is_err());
        assert_eq!(session.path(), Some(Path::new("/x")));
    }

    #[test]
    fn double_begin_is_rejected() {
        let mut session = PreviewSession::new(5);
        session.begin(PathBuf::from("/x")).unwrap();
        let err = session.begin(PathBuf::from("/x")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: "loading",
                to: "loading"
            }
        ));
    }
}
