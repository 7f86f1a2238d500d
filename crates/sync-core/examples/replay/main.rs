mod fixture;
mod renderer;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use cue_clipboard_interface::{ClipboardError, ClipboardPort, NoClipboard};
use cue_playback_interface::PlaybackSource;
use cue_transcript::{
    CategoryFilter, ItemCategory, RawTranscriptItem, TranscriptIndex, TranscriptItem,
};
use fixture::Fixture;
use ratatui::DefaultTerminal;
use sync_core::{
    ActiveItemChanged, ItemBounds, RegionScrollStateChanged, ScrollFollower, ScrollIntoViewRequest,
    ScrollMetrics, SeekBridge, SyncEngine, SyncErrorEvent, SyncRuntime,
};

const FRAME_MS: u64 = 50;

const WORDS_REGION: usize = 0;
const SEGMENTS_REGION: usize = 1;
const REGION_IDS: [&str; 2] = ["transcript", "segments"];

#[derive(clap::Parser)]
#[command(name = "replay", about = "Replay a transcript against simulated playback")]
struct Args {
    #[arg(short, long, default_value_t = Fixture::ClinicVisit)]
    fixture: Fixture,

    /// Playback rate multiplier.
    #[arg(short, long, default_value_t = 1.0)]
    speed: f64,

    /// Start with small-talk items excluded from highlighting.
    #[arg(long)]
    hide_small_talk: bool,

    /// Run without a clipboard capability; copy fails with a typed error.
    #[arg(long)]
    no_clipboard: bool,
}

enum Emitted {
    Highlight(ActiveItemChanged),
    ScrollState(RegionScrollStateChanged),
    Scroll(ScrollIntoViewRequest),
    Error(SyncErrorEvent),
}

/// Queues emissions for the next frame of the event loop, preserving
/// delivery order across the four channels.
#[derive(Default)]
struct ChannelRuntime {
    events: Mutex<VecDeque<Emitted>>,
}

impl ChannelRuntime {
    fn push(&self, event: Emitted) {
        self.events.lock().unwrap().push_back(event);
    }

    fn drain(&self) -> Vec<Emitted> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl SyncRuntime for ChannelRuntime {
    fn emit_highlight(&self, event: ActiveItemChanged) {
        self.push(Emitted::Highlight(event));
    }
    fn emit_scroll_state(&self, event: RegionScrollStateChanged) {
        self.push(Emitted::ScrollState(event));
    }
    fn emit_scroll(&self, event: ScrollIntoViewRequest) {
        self.push(Emitted::Scroll(event));
    }
    fn emit_error(&self, event: SyncErrorEvent) {
        self.push(Emitted::Error(event));
    }
}

struct PlayState {
    position_ms: f64,
    playing: bool,
}

/// A wall-clock driven stand-in for the host's audio element.
struct SimulatedPlayback {
    state: Mutex<PlayState>,
    duration_ms: f64,
}

impl SimulatedPlayback {
    fn new(duration_ms: f64) -> Self {
        Self {
            state: Mutex::new(PlayState {
                position_ms: 0.0,
                playing: true,
            }),
            duration_ms,
        }
    }

    fn advance(&self, delta_ms: f64) {
        let mut state = self.state.lock().unwrap();
        if state.playing {
            state.position_ms = (state.position_ms + delta_ms).min(self.duration_ms);
            if state.position_ms >= self.duration_ms {
                state.playing = false;
            }
        }
    }
}

impl PlaybackSource for SimulatedPlayback {
    fn current_time_ms(&self) -> f64 {
        self.state.lock().unwrap().position_ms
    }

    fn duration_ms(&self) -> Option<f64> {
        Some(self.duration_ms)
    }

    fn is_playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }

    fn play(&self) {
        self.state.lock().unwrap().playing = true;
    }

    fn pause(&self) {
        self.state.lock().unwrap().playing = false;
    }

    fn seek_to(&self, time_ms: f64) {
        let mut state = self.state.lock().unwrap();
        state.position_ms = time_ms.clamp(0.0, self.duration_ms);
    }
}

#[derive(Default)]
struct MemoryClipboard {
    last: Mutex<Option<String>>,
}

impl ClipboardPort for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.last.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct Segment {
    speaker: Option<String>,
    text: String,
    start_ms: i64,
    small_talk: bool,
}

fn build_segments(items: &[TranscriptItem]) -> (Vec<Segment>, Vec<usize>) {
    let mut segments: Vec<Segment> = Vec::new();
    let mut row_of = Vec::with_capacity(items.len());
    let mut last_key: Option<String> = None;

    for item in items {
        let key = item.segment_id.as_deref();
        if segments.is_empty() || key.is_none() || key != last_key.as_deref() {
            segments.push(Segment {
                speaker: item.speaker.clone(),
                text: String::new(),
                start_ms: item.start_ms,
                small_talk: item.category == ItemCategory::SmallTalk,
            });
            last_key = key.map(str::to_string);
        }
        let segment = segments.last_mut().expect("just pushed");
        if !segment.text.is_empty() {
            segment.text.push(' ');
        }
        segment.text.push_str(item.text.trim());
        row_of.push(segments.len() - 1);
    }

    (segments, row_of)
}

fn region_index(region_id: &str) -> Option<usize> {
    REGION_IDS.iter().position(|id| *id == region_id)
}

fn row_bounds(row: usize) -> ItemBounds {
    ItemBounds {
        top: row as f64,
        bottom: row as f64 + 1.0,
    }
}

/// One scrollable panel: its follower plus the scroll state the renderer
/// needs. Geometry is in rows (one item per row).
struct Region {
    follower: ScrollFollower,
    offset: f64,
    viewport: f64,
    above: bool,
    below: bool,
}

impl Region {
    fn new(region_id: &str, runtime: Arc<ChannelRuntime>) -> Self {
        Self {
            follower: ScrollFollower::new(region_id, runtime),
            offset: 0.0,
            viewport: 0.0,
            above: false,
            below: false,
        }
    }

    fn metrics(&self, rows: usize) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            viewport: self.viewport,
            content: rows as f64,
        }
    }
}

struct App {
    fixture_name: String,
    index: Arc<TranscriptIndex>,
    segments: Vec<Segment>,
    segment_row_of: Vec<usize>,
    engine: SyncEngine,
    bridge: SeekBridge,
    playback: Arc<SimulatedPlayback>,
    runtime: Arc<ChannelRuntime>,
    regions: [Region; 2],
    focus: usize,
    selected: usize,
    active_id: Option<String>,
    hide_small_talk: bool,
    speed: f64,
    duration_ms: f64,
    flash: Option<String>,
}

impl App {
    fn new(
        raw: Vec<RawTranscriptItem>,
        fixture_name: String,
        args: &Args,
    ) -> Result<Self, cue_transcript::Error> {
        let index = Arc::new(TranscriptIndex::build(raw)?);
        let (segments, segment_row_of) = build_segments(index.items());
        let duration_ms = index
            .items()
            .last()
            .map(|item| item.end_ms as f64 + 800.0)
            .unwrap_or(1_000.0);

        let runtime = Arc::new(ChannelRuntime::default());
        let playback = Arc::new(SimulatedPlayback::new(duration_ms));
        let clipboard: Arc<dyn ClipboardPort> = if args.no_clipboard {
            Arc::new(NoClipboard)
        } else {
            Arc::new(MemoryClipboard::default())
        };

        let mut app = Self {
            fixture_name,
            index,
            segments,
            segment_row_of,
            engine: SyncEngine::new(runtime.clone()),
            bridge: SeekBridge::new(clipboard),
            playback,
            regions: [
                Region::new(REGION_IDS[WORDS_REGION], runtime.clone()),
                Region::new(REGION_IDS[SEGMENTS_REGION], runtime.clone()),
            ],
            runtime,
            focus: WORDS_REGION,
            selected: 0,
            active_id: None,
            hide_small_talk: args.hide_small_talk,
            speed: if args.speed > 0.0 { args.speed } else { 1.0 },
            duration_ms,
            flash: None,
        };
        app.attach_engine();
        Ok(app)
    }

    /// Attach (or re-attach) the engine over the index matching the current
    /// small-talk setting. The silent swap keeps the panels steady; the next
    /// tick recomputes the highlight against the new eligibility.
    fn attach_engine(&mut self) {
        let index = if self.hide_small_talk {
            let filter = CategoryFilter {
                include_small_talk: false,
            };
            Arc::new(self.index.filtered(&filter))
        } else {
            self.index.clone()
        };
        self.engine.attach(index, self.playback.clone());
    }

    fn rows_in_slot(&self, slot: usize) -> usize {
        if slot == SEGMENTS_REGION {
            self.segments.len()
        } else {
            self.index.len()
        }
    }

    fn active_segment_row(&self) -> Option<usize> {
        let id = self.active_id.as_deref()?;
        Some(self.segment_row_of[self.index.position(id)?])
    }

    fn toggle_playback(&mut self) {
        if self.playback.is_playing() {
            self.playback.pause();
        } else {
            if self.playback.current_time_ms() >= self.duration_ms {
                self.playback.seek_to(0.0);
            }
            self.playback.play();
        }
    }

    fn toggle_small_talk(&mut self) {
        self.hide_small_talk = !self.hide_small_talk;
        self.attach_engine();
        self.flash = Some(if self.hide_small_talk {
            "small talk excluded from highlighting".to_string()
        } else {
            "small talk included".to_string()
        });
    }

    fn nudge(&mut self, delta_ms: f64) {
        let target = self.playback.current_time_ms() + delta_ms;
        self.playback.seek_to(target);
    }

    fn move_selection(&mut self, delta: i64, now: Instant) {
        let rows = self.index.len();
        if rows == 0 {
            return;
        }
        let max = rows as i64 - 1;
        self.selected = (self.selected as i64 + delta).clamp(0, max) as usize;

        // keep the selection on screen, like any list widget would
        let row = self.selected as f64;
        let region = &mut self.regions[WORDS_REGION];
        let target = if row < region.offset {
            row
        } else if row + 1.0 > region.offset + region.viewport {
            row + 1.0 - region.viewport
        } else {
            region.offset
        };
        if target != region.offset {
            region.offset = target.max(0.0);
            let metrics = region.metrics(rows);
            region.follower.on_scroll(metrics, now);
        }
    }

    fn select_current(&mut self) {
        let Some(item) = self.index.items().get(self.selected) else {
            return;
        };
        let id = item.id.clone();
        if let Err(e) = self.bridge.select_item(&mut self.engine, &id) {
            self.flash = Some(format!("seek failed: {e}"));
        }
    }

    fn scroll_focused(&mut self, pages: f64, now: Instant) {
        let rows = self.rows_in_slot(self.focus);
        let region = &mut self.regions[self.focus];
        let max = (rows as f64 - region.viewport).max(0.0);
        let target = (region.offset + pages * region.viewport).clamp(0.0, max);
        if target != region.offset {
            region.offset = target;
            let metrics = region.metrics(rows);
            region.follower.on_scroll(metrics, now);
        }
    }

    fn copy_focused(&mut self) {
        let region = &self.regions[self.focus];
        let first = region.offset as usize;
        let visible = region.viewport as usize;
        let lines: Vec<String> = if self.focus == SEGMENTS_REGION {
            self.segments
                .iter()
                .skip(first)
                .take(visible)
                .map(|segment| segment.text.clone())
                .collect()
        } else {
            self.index
                .items()
                .iter()
                .skip(first)
                .take(visible)
                .map(|item| item.text.clone())
                .collect()
        };
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        match self
            .bridge
            .export_visible_text(REGION_IDS[self.focus], &refs)
        {
            Ok(text) => self.flash = Some(format!("copied {} chars", text.len())),
            Err(e) => self.flash = Some(format!("copy failed: {e}")),
        }
    }

    /// Mirror of the renderer's vertical layout: header, body, timeline,
    /// hints, with a border around each body panel. Resizes reclassify the
    /// regions eagerly.
    fn update_geometry(&mut self, height: u16) {
        let body = height.saturating_sub(3);
        let inner = f64::from(body.saturating_sub(2));
        for slot in [WORDS_REGION, SEGMENTS_REGION] {
            let rows = self.rows_in_slot(slot);
            let region = &mut self.regions[slot];
            if region.viewport != inner {
                region.viewport = inner;
                let metrics = region.metrics(rows);
                region.follower.on_content_resized(metrics);
            }
        }
    }

    fn tick(&mut self, now: Instant, dt: Duration) {
        self.playback.advance(dt.as_secs_f64() * 1000.0 * self.speed);
        self.engine.on_time_update(self.playback.current_time_ms());
        for region in &mut self.regions {
            region.follower.poll(now);
        }
        self.pump(now);
    }

    /// Deliver queued emissions: highlights fan out to both regions, scroll
    /// requests are applied (and re-observed as scrolls), edge changes go to
    /// the renderer's state, errors to the flash line.
    fn pump(&mut self, now: Instant) {
        for emitted in self.runtime.drain() {
            match emitted {
                Emitted::Highlight(event) => {
                    self.active_id = event.new_id.clone();
                    let word_row = event
                        .new_id
                        .as_deref()
                        .and_then(|id| self.index.position(id));

                    if let Some(row) = word_row {
                        let rows = self.index.len();
                        let metrics = self.regions[WORDS_REGION].metrics(rows);
                        self.regions[WORDS_REGION].follower.handle_active_item(
                            &event,
                            metrics,
                            row_bounds(row),
                        );

                        let seg_row = self.segment_row_of[row];
                        let seg_rows = self.segments.len();
                        let metrics = self.regions[SEGMENTS_REGION].metrics(seg_rows);
                        self.regions[SEGMENTS_REGION].follower.handle_active_item(
                            &event,
                            metrics,
                            row_bounds(seg_row),
                        );
                    }
                }
                Emitted::ScrollState(event) => {
                    if let Some(slot) = region_index(&event.region_id) {
                        let region = &mut self.regions[slot];
                        region.above = event.has_content_above;
                        region.below = event.has_content_below;
                    }
                }
                Emitted::Scroll(request) => {
                    if let Some(slot) = region_index(&request.region_id) {
                        let rows = self.rows_in_slot(slot);
                        let region = &mut self.regions[slot];
                        region.offset = request.offset;
                        let metrics = region.metrics(rows);
                        region.follower.on_scroll(metrics, now);
                    }
                }
                Emitted::Error(event) => {
                    self.flash = Some(format!("{}: {}", event.code, event.message));
                }
            }
        }
    }
}

fn main() {
    use clap::Parser;
    let args = Args::parse();
    let fixture_name = args.fixture.to_string();

    let raw: Vec<RawTranscriptItem> = serde_json::from_str(args.fixture.json())
        .expect("fixture must parse as a transcript item array");

    let app = match App::new(raw, fixture_name.clone(), &args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("transcript rejected: {e}");
            std::process::exit(1);
        }
    };

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, app);
    ratatui::restore();

    match result {
        Ok(app) => {
            println!(
                "Done. {} items across {} segments ({} fixture).",
                app.index.len(),
                app.segments.len(),
                fixture_name,
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> std::io::Result<App> {
    let mut last_tick = Instant::now();

    loop {
        let size = terminal.size()?;
        app.update_geometry(size.height);
        terminal.draw(|frame| renderer::render(frame, &app))?;

        let timeout = Duration::from_millis(FRAME_MS).saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let now = Instant::now();
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => app.toggle_playback(),
                    KeyCode::Up => app.move_selection(-1, now),
                    KeyCode::Down => app.move_selection(1, now),
                    KeyCode::Enter => app.select_current(),
                    KeyCode::Left => app.nudge(-2_000.0),
                    KeyCode::Right => app.nudge(2_000.0),
                    KeyCode::PageUp => app.scroll_focused(-1.0, now),
                    KeyCode::PageDown => app.scroll_focused(1.0, now),
                    KeyCode::Home => app.playback.seek_to(0.0),
                    KeyCode::End => {
                        let duration = app.duration_ms;
                        app.playback.seek_to(duration);
                    }
                    KeyCode::Tab => app.focus = (app.focus + 1) % app.regions.len(),
                    KeyCode::Char('s') => app.toggle_small_talk(),
                    KeyCode::Char('c') => app.copy_focused(),
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        let dt = now - last_tick;
        last_tick = now;
        app.tick(now, dt);
    }

    Ok(app)
}
