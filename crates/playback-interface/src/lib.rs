/// Snapshot of the playback engine's externally visible state.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct PlaybackStatus {
    pub time_ms: f64,
    pub duration_ms: Option<f64>,
    pub playing: bool,
}

/// Contract the host's audio/playback engine must satisfy.
///
/// Times are milliseconds. `current_time_ms` is non-negative and
/// monotonically non-decreasing while playing, but may jump in either
/// direction on [`seek_to`](PlaybackSource::seek_to). Delivery of time
/// updates into the sync engine is the host's job: forward the source's
/// ticks, at whatever rate it produces them, in delivery order.
pub trait PlaybackSource: Send + Sync {
    fn current_time_ms(&self) -> f64;
    /// `None` until the medium's length is known.
    fn duration_ms(&self) -> Option<f64>;
    fn is_playing(&self) -> bool;
    fn play(&self);
    fn pause(&self);
    fn seek_to(&self, time_ms: f64);

    fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            time_ms: self.current_time_ms(),
            duration_ms: self.duration_ms(),
            playing: self.is_playing(),
        }
    }
}
