use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use cue_clipboard_interface::NoClipboard;
use cue_playback_interface::PlaybackSource;
use cue_transcript::{RawTranscriptItem, TranscriptIndex};
use sync_core::{
    ActiveItemChanged, ItemBounds, RegionScrollStateChanged, ScrollFollower, ScrollIntoViewRequest,
    ScrollMetrics, SeekBridge, SyncEngine, SyncErrorEvent, SyncRuntime,
};

const SAMPLE_JSON: &str = r#"[
  {"id": "w0", "text": "Good", "start_ms": 0, "end_ms": 260, "speaker": "CLINICIAN", "segment_id": "s0"},
  {"id": "w1", "text": "morning,", "start_ms": 260, "end_ms": 620, "speaker": "CLINICIAN", "segment_id": "s0"},
  {"id": "w2", "text": "what", "start_ms": 620, "end_ms": 800, "speaker": "CLINICIAN", "segment_id": "s0"},
  {"id": "w3", "text": "brings", "start_ms": 800, "end_ms": 1080, "speaker": "CLINICIAN", "segment_id": "s0"},
  {"id": "w4", "text": "you", "start_ms": 1080, "end_ms": 1220, "speaker": "CLINICIAN", "segment_id": "s0"},
  {"id": "w5", "text": "in?", "start_ms": 1220, "end_ms": 1480, "speaker": "CLINICIAN", "segment_id": "s0"},
  {"id": "w6", "text": "My", "start_ms": 2100, "end_ms": 2300, "speaker": "PATIENT", "segment_id": "s1"},
  {"id": "w7", "text": "knee", "start_ms": 2300, "end_ms": 2560, "speaker": "PATIENT", "segment_id": "s1"},
  {"id": "w8", "text": "has", "start_ms": 2560, "end_ms": 2700, "speaker": "PATIENT", "segment_id": "s1"},
  {"id": "w9", "text": "been", "start_ms": 2700, "end_ms": 2880, "speaker": "PATIENT", "segment_id": "s1"},
  {"id": "w10", "text": "aching", "start_ms": 2880, "end_ms": 3240, "speaker": "PATIENT", "segment_id": "s1"},
  {"id": "w11", "text": "badly.", "start_ms": 3240, "end_ms": 3700, "speaker": "PATIENT", "segment_id": "s1"}
]"#;

const ROW_HEIGHT: f64 = 40.0;
const VIEWPORT: f64 = 160.0;
const TICK_MS: u64 = 400;

/// Prints every emission and queues the ones the host loop has to act on
/// (highlight fan-out to followers, scroll application).
#[derive(Default)]
struct CliRuntime {
    highlights: Mutex<Vec<ActiveItemChanged>>,
    scrolls: Mutex<Vec<ScrollIntoViewRequest>>,
}

impl CliRuntime {
    fn take_highlights(&self) -> Vec<ActiveItemChanged> {
        std::mem::take(&mut self.highlights.lock().unwrap())
    }

    fn take_scrolls(&self) -> Vec<ScrollIntoViewRequest> {
        std::mem::take(&mut self.scrolls.lock().unwrap())
    }
}

impl SyncRuntime for CliRuntime {
    fn emit_highlight(&self, event: ActiveItemChanged) {
        let tag = if event.user_initiated { " (user)" } else { "" };
        eprintln!(
            "[highlight] {:?} -> {:?} at {}ms{tag}",
            event.old_id, event.new_id, event.time_ms
        );
        self.highlights.lock().unwrap().push(event);
    }

    fn emit_scroll_state(&self, event: RegionScrollStateChanged) {
        eprintln!(
            "[edges] region={} above={} below={}",
            event.region_id, event.has_content_above, event.has_content_below
        );
    }

    fn emit_scroll(&self, event: ScrollIntoViewRequest) {
        eprintln!(
            "[scroll] region={} item={} offset={:.0} behavior={:?}",
            event.region_id, event.item_id, event.offset, event.behavior
        );
        self.scrolls.lock().unwrap().push(event);
    }

    fn emit_error(&self, event: SyncErrorEvent) {
        eprintln!("[error] {}: {}", event.code, event.message);
    }
}

struct ScriptedPlayback {
    position_ms: Mutex<f64>,
}

impl ScriptedPlayback {
    fn advance(&self, delta_ms: f64) {
        *self.position_ms.lock().unwrap() += delta_ms;
    }
}

impl PlaybackSource for ScriptedPlayback {
    fn current_time_ms(&self) -> f64 {
        *self.position_ms.lock().unwrap()
    }

    fn duration_ms(&self) -> Option<f64> {
        Some(4_000.0)
    }

    fn is_playing(&self) -> bool {
        true
    }

    fn play(&self) {}

    fn pause(&self) {}

    fn seek_to(&self, time_ms: f64) {
        *self.position_ms.lock().unwrap() = time_ms;
    }
}

fn metrics(offset: f64, items: usize) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        viewport: VIEWPORT,
        content: items as f64 * ROW_HEIGHT,
    }
}

fn bounds_of(index: &TranscriptIndex, id: &str) -> Option<ItemBounds> {
    let row = index.position(id)? as f64;
    Some(ItemBounds {
        top: row * ROW_HEIGHT,
        bottom: (row + 1.0) * ROW_HEIGHT,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path).expect("fixture file must be readable"),
        None => SAMPLE_JSON.to_string(),
    };
    let raw: Vec<RawTranscriptItem> =
        serde_json::from_str(&json).expect("fixture must parse as a transcript item array");

    let index = match TranscriptIndex::build(raw) {
        Ok(index) => Arc::new(index),
        Err(e) => {
            eprintln!("transcript rejected: {e}");
            std::process::exit(1);
        }
    };

    let runtime = Arc::new(CliRuntime::default());
    let playback = Arc::new(ScriptedPlayback {
        position_ms: Mutex::new(0.0),
    });

    let mut engine = SyncEngine::new(runtime.clone());
    engine.attach(index.clone(), playback.clone());

    let mut follower = ScrollFollower::new("main", runtime.clone());
    let mut offset = 0.0;
    follower.on_content_resized(metrics(offset, index.len()));

    // Scripted playback: advance the clock in fixed ticks and let the host
    // loop fan each transition out to the follower, then apply whatever
    // scroll comes back.
    let t0 = Instant::now();
    let mut drive = |engine: &mut SyncEngine, follower: &mut ScrollFollower, tick: u64| {
        let now = t0 + Duration::from_millis(tick * TICK_MS);
        follower.poll(now);
        engine.on_time_update(playback.current_time_ms());
        for event in runtime.take_highlights() {
            let Some(bounds) = event.new_id.as_deref().and_then(|id| bounds_of(&index, id))
            else {
                continue;
            };
            follower.handle_active_item(&event, metrics(offset, index.len()), bounds);
        }
        for request in runtime.take_scrolls() {
            offset = request.offset;
            follower.on_scroll(metrics(offset, index.len()), now);
        }
    };

    let ticks = 4_000 / TICK_MS;
    for tick in 0..=ticks {
        drive(&mut engine, &mut follower, tick);
        playback.advance(TICK_MS as f64);
    }

    // a misbehaving clock is survived, not fatal
    engine.on_time_update(f64::NAN);

    // user selection jumps playback and lands as user-initiated
    let bridge = SeekBridge::new(Arc::new(NoClipboard));
    let target = index.items()[6].id.clone();
    eprintln!("selecting {target}...");
    bridge
        .select_item(&mut engine, &target)
        .expect("item came from the index");
    drive(&mut engine, &mut follower, ticks + 1);

    // capability-less host: the export fails with a typed error
    let first_visible = (offset / ROW_HEIGHT) as usize;
    let visible: Vec<&str> = index
        .items()
        .iter()
        .skip(first_visible)
        .take((VIEWPORT / ROW_HEIGHT) as usize)
        .map(|item| item.text.as_str())
        .collect();
    match bridge.export_visible_text("main", &visible) {
        Ok(text) => eprintln!("exported {} chars", text.len()),
        Err(e) => eprintln!("export failed: {e}"),
    }

    follower.detach();
    engine.detach();
    eprintln!("Done.");
}
