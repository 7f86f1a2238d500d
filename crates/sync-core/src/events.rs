//! Event payloads delivered to the host through [`SyncRuntime`].
//!
//! [`SyncRuntime`]: crate::SyncRuntime

/// The highlighted transcript item changed.
///
/// Emitted at most once per actual transition: repeated time updates that
/// resolve to the same item produce nothing. `user_initiated` is `true` only
/// when the transition lands a recent [`seek_requested`] on its target;
/// followers use it to pick the scroll behavior and to leave partially
/// visible items where the user scrolled them.
///
/// [`seek_requested`]: crate::SyncEngine::seek_requested
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ActiveItemChanged {
    pub old_id: Option<String>,
    pub new_id: Option<String>,
    pub time_ms: i64,
    pub user_initiated: bool,
}

/// A region's overflow affordances ("more above" / "more below") changed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct RegionScrollStateChanged {
    pub region_id: String,
    pub has_content_above: bool,
    pub has_content_below: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Ask the host to scroll a region so the item sits centered in the viewport.
///
/// `offset` is the absolute scroll position to apply, already clamped to the
/// region's scrollable range.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ScrollIntoViewRequest {
    pub region_id: String,
    pub item_id: String,
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

/// Side-channel report for faults that must not break the host's
/// subscription, like an invalid playback time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct SyncErrorEvent {
    pub code: String,
    pub message: String,
}

impl SyncErrorEvent {
    pub fn invalid_time(time_ms: f64) -> Self {
        Self {
            code: "invalid_time".to_string(),
            message: format!("ignoring invalid playback time {time_ms}"),
        }
    }
}
