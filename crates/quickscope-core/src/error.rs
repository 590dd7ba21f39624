//! Error types for `quickscope-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// The two listing failures ([`CoreError::PermissionDenied`] and
/// [`CoreError::EnumerationFailed`]) are terminal for a preview request and
/// are shown to the user as a placeholder message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The process lacks permission to read the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Reading a directory failed for any reason other than permissions.
    #[error("enumeration failed: {0}")]
    EnumerationFailed(String),

    /// A configuration or theme file does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A preview session was asked to make a transition it does not allow.
    #[error("invalid preview transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Returns the message shown in place of a listing when this error
    /// ends a preview request.
    pub fn placeholder_message(&self) -> String {
        match self {
            CoreError::PermissionDenied(_) => {
                "Cannot read folder contents - permission denied".to_string()
            }
            CoreError::EnumerationFailed(msg) => format!("Error reading folder: {msg}"),
            other => format!("Error reading folder: {other}"),
        }
    }
}

/// Convenience alias used throughout `quickscope-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_displays_path() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }

    #[test]
    fn enumeration_failed_displays_message() {
        let err = CoreError::EnumerationFailed("disk on fire".to_string());
        assert_eq!(err.to_string(), "enumeration failed: disk on fire");
    }

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/config.toml"));
        assert_eq!(err.to_string(), "path not found: /missing/config.toml");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn invalid_transition_names_both_states() {
        let err = CoreError::InvalidTransition {
            from: "rendered",
            to: "loading",
        };
        assert_eq!(err.to_string(), "invalid preview transition: rendered -> loading");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn placeholder_for_permission_denied() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(
            err.placeholder_message(),
            "Cannot read folder contents - permission denied"
        );
    }

    #[test]
    fn placeholder_for_enumeration_failure_carries_message() {
        let err = CoreError::EnumerationFailed("No such file or directory".to_string());
        assert_eq!(
            err.placeholder_message(),
            "Error reading folder: No such file or directory"
        );
    }
}
