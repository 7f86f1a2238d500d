use std::sync::Arc;

use cue_clipboard_interface::ClipboardPort;
use itertools::Itertools;

use crate::engine::SyncEngine;
use crate::error::Error;

/// User-intent side of the synchronization loop: transcript selection jumps
/// playback, and the visible text can be exported through the host's
/// clipboard capability.
pub struct SeekBridge {
    clipboard: Arc<dyn ClipboardPort>,
}

impl SeekBridge {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Selection on a transcript item: jump playback to its start.
    pub fn select_item(&self, engine: &mut SyncEngine, item_id: &str) -> Result<(), Error> {
        engine.seek_requested(item_id)
    }

    /// Join a region's currently rendered lines and write them to the
    /// clipboard, returning the joined text for reuse host-side.
    ///
    /// A missing or failing clipboard capability surfaces as
    /// [`Error::Clipboard`] so the caller can show the failure instead of
    /// silently dropping the copy.
    pub fn export_visible_text(&self, region_id: &str, lines: &[&str]) -> Result<String, Error> {
        let text = lines.iter().join("\n");
        self.clipboard.write_text(&text)?;
        tracing::info!(region = region_id, chars = text.len(), "visible_text_exported");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use cue_clipboard_interface::{ClipboardError, NoClipboard};
    use cue_playback_interface::PlaybackSource;
    use cue_transcript::{RawTranscriptItem, TranscriptIndex};

    use super::*;
    use crate::events::*;
    use crate::runtime::SyncRuntime;

    struct NullRuntime;

    impl SyncRuntime for NullRuntime {
        fn emit_highlight(&self, _event: ActiveItemChanged) {}
        fn emit_scroll_state(&self, _event: RegionScrollStateChanged) {}
        fn emit_scroll(&self, _event: ScrollIntoViewRequest) {}
        fn emit_error(&self, _event: SyncErrorEvent) {}
    }

    #[derive(Default)]
    struct StubPlayback {
        seeks: Mutex<Vec<f64>>,
    }

    impl PlaybackSource for StubPlayback {
        fn current_time_ms(&self) -> f64 {
            0.0
        }
        fn duration_ms(&self) -> Option<f64> {
            None
        }
        fn is_playing(&self) -> bool {
            false
        }
        fn play(&self) {}
        fn pause(&self) {}
        fn seek_to(&self, time_ms: f64) {
            self.seeks.lock().unwrap().push(time_ms);
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        writes: Mutex<Vec<String>>,
    }

    impl ClipboardPort for MemoryClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn tracking_engine() -> (SyncEngine, Arc<StubPlayback>) {
        let raw = vec![RawTranscriptItem {
            id: Some("w1".to_string()),
            text: " hello".to_string(),
            start_ms: Some(750),
            end_ms: Some(1200),
            ..Default::default()
        }];
        let index = Arc::new(TranscriptIndex::build(raw).unwrap());
        let playback = Arc::new(StubPlayback::default());
        let mut engine = SyncEngine::new(Arc::new(NullRuntime));
        engine.attach(index, playback.clone());
        (engine, playback)
    }

    #[test]
    fn select_item_forwards_to_the_engine() {
        let (mut engine, playback) = tracking_engine();
        let bridge = SeekBridge::new(Arc::new(NoClipboard));

        bridge.select_item(&mut engine, "w1").unwrap();
        assert_eq!(*playback.seeks.lock().unwrap(), vec![750.0]);

        let err = bridge.select_item(&mut engine, "nope").unwrap_err();
        assert!(matches!(err, Error::UnknownItem { id } if id == "nope"));
    }

    #[test]
    fn export_joins_lines_and_writes_them() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let bridge = SeekBridge::new(clipboard.clone());

        let text = bridge
            .export_visible_text("main", &["first line", "second line"])
            .unwrap();

        assert_eq!(text, "first line\nsecond line");
        assert_eq!(*clipboard.writes.lock().unwrap(), vec![text]);
    }

    #[test]
    fn export_without_a_clipboard_is_a_typed_failure() {
        let bridge = SeekBridge::new(Arc::new(NoClipboard));
        let err = bridge.export_visible_text("main", &["line"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Clipboard(ClipboardError::Unavailable)
        ));
    }
}
