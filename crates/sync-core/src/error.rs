use cue_clipboard_interface::ClipboardError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no transcript attached")]
    NotTracking,
    #[error("unknown transcript item {id:?}")]
    UnknownItem { id: String },
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
