#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard capability not available")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Host-provided clipboard capability.
///
/// Implementations are expected to be cheap to call and synchronous; a host
/// without any clipboard access should hand out [`NoClipboard`] rather than
/// no port at all, so callers always get a typed failure instead of a
/// silently dropped action.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The always-unavailable clipboard, for hosts without the capability.
pub struct NoClipboard;

impl ClipboardPort for NoClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
