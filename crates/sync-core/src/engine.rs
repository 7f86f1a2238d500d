//! # Highlight tracking
//!
//! [`SyncEngine`] maps a continuously advancing playback clock onto a
//! transcript's time index and reports each transition exactly once.
//!
//! The engine is host-driven: it owns no thread and no timer. The host
//! forwards playback time reports into [`SyncEngine::on_time_update`] and
//! selection jumps into [`SyncEngine::seek_requested`]; everything outward
//! goes through the [`SyncRuntime`] it was constructed over.

use std::sync::Arc;

use cue_playback_interface::PlaybackSource;
use cue_transcript::TranscriptIndex;

use crate::error::Error;
use crate::events::{ActiveItemChanged, SyncErrorEvent};
use crate::runtime::SyncRuntime;

/// How long after a seek the landing transition still counts as user
/// initiated, in playback milliseconds. Sources report the seeked position
/// with some slack (a paused player may snap to the nearest decodable
/// frame), so the window is generous but bounded.
pub const SUPPRESSION_GRACE_MS: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Idle,
    Tracking,
}

/// Armed by [`SyncEngine::seek_requested`], taken by the first emission that
/// follows. Gates only the `user_initiated` tag, never which item is active.
#[derive(Debug)]
struct SuppressionWindow {
    target_id: String,
    expires_at_ms: i64,
}

impl SuppressionWindow {
    fn claims(&self, new_id: Option<&str>, time_ms: i64) -> bool {
        time_ms <= self.expires_at_ms && new_id == Some(self.target_id.as_str())
    }
}

struct Attachment {
    index: Arc<TranscriptIndex>,
    playback: Arc<dyn PlaybackSource>,
    active: Option<String>,
    suppression: Option<SuppressionWindow>,
}

/// Tracks which transcript item playback is currently inside and emits one
/// [`ActiveItemChanged`] per transition.
///
/// Emission frequency is bounded by actual transitions, not by the host's
/// time-report rate, which is unbounded.
pub struct SyncEngine {
    runtime: Arc<dyn SyncRuntime>,
    attachment: Option<Attachment>,
}

impl SyncEngine {
    pub fn new(runtime: Arc<dyn SyncRuntime>) -> Self {
        Self {
            runtime,
            attachment: None,
        }
    }

    pub fn state(&self) -> State {
        if self.attachment.is_some() {
            State::Tracking
        } else {
            State::Idle
        }
    }

    /// Attach a transcript and its playback source, replacing any current
    /// attachment in the same call.
    ///
    /// The swap is silent: nothing is emitted, the old active item is
    /// discarded, and the first transition afterwards reports
    /// `old_id: None`. Hosts swapping in a filtered rebuild of the same
    /// transcript rely on this being atomic from their side.
    pub fn attach(&mut self, index: Arc<TranscriptIndex>, playback: Arc<dyn PlaybackSource>) {
        let items = index.len();
        self.attachment = Some(Attachment {
            index,
            playback,
            active: None,
            suppression: None,
        });
        tracing::info!(items, "transcript_attached");
    }

    /// Drop the attachment. Safe at any time; afterwards no notification of
    /// any kind fires from this engine until the next [`attach`](Self::attach).
    pub fn detach(&mut self) {
        if self.attachment.take().is_some() {
            tracing::info!("transcript_detached");
        }
    }

    /// Playback tick. Call with every time report from the playback source.
    ///
    /// Non-finite or negative times are swallowed here rather than returned:
    /// the host's subscription must outlive a misbehaving clock, so the
    /// fault is logged and reported through [`SyncRuntime::emit_error`]
    /// while tracking continues from the last good state.
    pub fn on_time_update(&mut self, time_ms: f64) {
        let Some(attachment) = self.attachment.as_mut() else {
            return;
        };
        if !time_ms.is_finite() || time_ms < 0.0 {
            tracing::warn!(time_ms, "invalid_time_update");
            self.runtime.emit_error(SyncErrorEvent::invalid_time(time_ms));
            return;
        }

        let time_ms = time_ms as i64;
        let new_id = attachment.index.find_active(time_ms).map(str::to_string);
        if new_id == attachment.active {
            return;
        }

        let old_id = attachment.active.take();
        attachment.active = new_id.clone();
        let user_initiated = attachment
            .suppression
            .take()
            .is_some_and(|window| window.claims(new_id.as_deref(), time_ms));

        self.runtime.emit_highlight(ActiveItemChanged {
            old_id,
            new_id,
            time_ms,
            user_initiated,
        });
        tracing::debug!(time_ms, user_initiated, "active_item_changed");
    }

    /// Jump playback to the start of a transcript item.
    ///
    /// The suppression window is armed before `seek_to` is issued, so a
    /// source that reports the new position from inside the seek call
    /// already observes it. Unknown ids fail without touching playback or
    /// highlight state.
    pub fn seek_requested(&mut self, item_id: &str) -> Result<(), Error> {
        let Some(attachment) = self.attachment.as_mut() else {
            return Err(Error::NotTracking);
        };
        let Some((start_ms, _)) = attachment.index.item_range(item_id) else {
            return Err(Error::UnknownItem {
                id: item_id.to_string(),
            });
        };

        attachment.suppression = Some(SuppressionWindow {
            target_id: item_id.to_string(),
            expires_at_ms: start_ms + SUPPRESSION_GRACE_MS,
        });
        attachment.playback.seek_to(start_ms as f64);
        tracing::info!(item_id, start_ms, "seek_requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use cue_transcript::RawTranscriptItem;

    use super::*;
    use crate::events::{RegionScrollStateChanged, ScrollIntoViewRequest};

    #[derive(Default)]
    struct RecordingRuntime {
        highlights: Mutex<Vec<ActiveItemChanged>>,
        errors: Mutex<Vec<SyncErrorEvent>>,
    }

    impl RecordingRuntime {
        fn highlights(&self) -> Vec<ActiveItemChanged> {
            self.highlights.lock().unwrap().clone()
        }

        fn error_codes(&self) -> Vec<String> {
            self.errors
                .lock()
                .unwrap()
                .iter()
                .map(|event| event.code.clone())
                .collect()
        }
    }

    impl SyncRuntime for RecordingRuntime {
        fn emit_highlight(&self, event: ActiveItemChanged) {
            self.highlights.lock().unwrap().push(event);
        }
        fn emit_scroll_state(&self, _event: RegionScrollStateChanged) {}
        fn emit_scroll(&self, _event: ScrollIntoViewRequest) {}
        fn emit_error(&self, event: SyncErrorEvent) {
            self.errors.lock().unwrap().push(event);
        }
    }

    #[derive(Default)]
    struct StubPlayback {
        seeks: Mutex<Vec<f64>>,
    }

    impl StubPlayback {
        fn seeks(&self) -> Vec<f64> {
            self.seeks.lock().unwrap().clone()
        }
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

    fn indexed(items: &[(&str, i64, i64)]) -> Arc<TranscriptIndex> {
        let raw = items
            .iter()
            .map(|&(id, start_ms, end_ms)| RawTranscriptItem {
                id: Some(id.to_string()),
                text: format!(" {id}"),
                start_ms: Some(start_ms),
                end_ms: Some(end_ms),
                ..Default::default()
            })
            .collect();
        Arc::new(TranscriptIndex::build(raw).unwrap())
    }

    fn tracking_engine(
        items: &[(&str, i64, i64)],
    ) -> (SyncEngine, Arc<RecordingRuntime>, Arc<StubPlayback>) {
        let runtime = Arc::new(RecordingRuntime::default());
        let playback = Arc::new(StubPlayback::default());
        let mut engine = SyncEngine::new(runtime.clone());
        engine.attach(indexed(items), playback.clone());
        (engine, runtime, playback)
    }

    const TWO_ITEMS: &[(&str, i64, i64)] = &[("a", 0, 1000), ("b", 1000, 2000)];

    #[test]
    fn emits_once_per_transition() {
        let (mut engine, runtime, _) = tracking_engine(TWO_ITEMS);

        engine.on_time_update(500.0);
        engine.on_time_update(900.0);
        engine.on_time_update(1000.0);
        engine.on_time_update(5000.0);

        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].old_id, None);
        assert_eq!(highlights[0].new_id.as_deref(), Some("a"));
        assert_eq!(highlights[1].old_id.as_deref(), Some("a"));
        assert_eq!(highlights[1].new_id.as_deref(), Some("b"));
        assert!(!highlights[1].user_initiated);
    }

    #[test]
    fn fractional_times_floor_to_milliseconds() {
        let (mut engine, runtime, _) = tracking_engine(TWO_ITEMS);

        engine.on_time_update(999.9);

        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].new_id.as_deref(), Some("a"));
        assert_eq!(highlights[0].time_ms, 999);
    }

    #[test]
    fn idle_engine_ignores_time_updates() {
        let runtime = Arc::new(RecordingRuntime::default());
        let mut engine = SyncEngine::new(runtime.clone());

        assert_eq!(engine.state(), State::Idle);
        engine.on_time_update(500.0);
        engine.on_time_update(f64::NAN);

        assert!(runtime.highlights().is_empty());
        assert!(runtime.error_codes().is_empty());
    }

    #[test]
    fn invalid_times_are_reported_and_survived() {
        let (mut engine, runtime, _) = tracking_engine(TWO_ITEMS);

        engine.on_time_update(f64::NAN);
        engine.on_time_update(-5.0);
        engine.on_time_update(500.0);

        assert_eq!(runtime.error_codes(), vec!["invalid_time", "invalid_time"]);
        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].new_id.as_deref(), Some("a"));
    }

    #[test]
    fn seek_lands_as_user_initiated() {
        let (mut engine, runtime, playback) = tracking_engine(TWO_ITEMS);

        engine.seek_requested("b").unwrap();
        assert_eq!(playback.seeks(), vec![1000.0]);

        engine.on_time_update(1000.0);
        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].new_id.as_deref(), Some("b"));
        assert!(highlights[0].user_initiated);
    }

    #[test]
    fn seek_to_already_active_item_emits_nothing() {
        let (mut engine, runtime, playback) = tracking_engine(TWO_ITEMS);

        engine.on_time_update(500.0);
        engine.seek_requested("a").unwrap();
        engine.on_time_update(0.0);

        assert_eq!(playback.seeks(), vec![0.0]);
        assert_eq!(runtime.highlights().len(), 1);
    }

    #[test]
    fn seek_unknown_item_is_an_error() {
        let (mut engine, runtime, playback) = tracking_engine(TWO_ITEMS);

        let err = engine.seek_requested("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownItem { id } if id == "nope"));
        assert!(playback.seeks().is_empty());

        engine.on_time_update(500.0);
        assert_eq!(runtime.highlights().len(), 1);
    }

    #[test]
    fn seek_while_idle_is_an_error() {
        let runtime = Arc::new(RecordingRuntime::default());
        let mut engine = SyncEngine::new(runtime);
        assert!(matches!(engine.seek_requested("a"), Err(Error::NotTracking)));
    }

    #[test]
    fn suppression_is_consumed_by_the_first_emission() {
        let items = &[("a", 0, 1000), ("b", 1000, 2000), ("c", 2000, 3000)];
        let (mut engine, runtime, _) = tracking_engine(items);

        engine.seek_requested("c").unwrap();
        // lands short of the target first
        engine.on_time_update(1000.0);
        engine.on_time_update(2000.0);

        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].new_id.as_deref(), Some("b"));
        assert!(!highlights[0].user_initiated);
        assert_eq!(highlights[1].new_id.as_deref(), Some("c"));
        assert!(!highlights[1].user_initiated);
    }

    #[test]
    fn suppression_expires_with_playback_time() {
        let items = &[("a", 0, 1000), ("b", 1000, 2000), ("c", 2000, 3000)];
        let (mut engine, runtime, _) = tracking_engine(items);

        engine.seek_requested("c").unwrap();
        engine.on_time_update((2000 + SUPPRESSION_GRACE_MS + 1) as f64);

        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].new_id.as_deref(), Some("c"));
        assert!(!highlights[0].user_initiated);
    }

    #[test]
    fn reattach_restarts_highlight_state() {
        let (mut engine, runtime, playback) = tracking_engine(TWO_ITEMS);

        engine.on_time_update(500.0);
        engine.attach(indexed(TWO_ITEMS), playback);
        assert_eq!(runtime.highlights().len(), 1);

        engine.on_time_update(500.0);
        let highlights = runtime.highlights();
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[1].old_id, None);
        assert_eq!(highlights[1].new_id.as_deref(), Some("a"));
    }

    #[test]
    fn detach_stops_every_notification() {
        let (mut engine, runtime, _) = tracking_engine(TWO_ITEMS);

        engine.on_time_update(500.0);
        engine.detach();
        engine.detach();

        engine.on_time_update(1500.0);
        engine.on_time_update(f64::NAN);

        assert_eq!(engine.state(), State::Idle);
        assert_eq!(runtime.highlights().len(), 1);
        assert!(runtime.error_codes().is_empty());
    }

    #[test]
    fn state_reflects_attachment() {
        let (mut engine, _, _) = tracking_engine(TWO_ITEMS);
        assert_eq!(engine.state(), State::Tracking);
        engine.detach();
        assert_eq!(engine.state(), State::Idle);
    }
}
