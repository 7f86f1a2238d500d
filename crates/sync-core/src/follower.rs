//! # Scroll following
//!
//! One [`ScrollFollower`] per display region decides when that region shows
//! its "more content above/below" affordances and when it auto-scrolls to
//! keep the highlighted item visible. Regions know nothing about each other.
//!
//! Scroll events arrive at input rate, so edge classification is debounced
//! on the trailing edge: [`on_scroll`](ScrollFollower::on_scroll) only
//! records the latest measurements and re-arms a deadline, and
//! [`poll`](ScrollFollower::poll) fires the classification once the deadline
//! passes. The deadline is plain data owned by the follower, which is what
//! makes [`detach`](ScrollFollower::detach) a deterministic cancel instead
//! of a stale-state check.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::events::{
    ActiveItemChanged, RegionScrollStateChanged, ScrollBehavior, ScrollIntoViewRequest,
};
use crate::runtime::SyncRuntime;

pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 300;

/// Geometry snapshot of a scrollable region, in the host's pixel units.
/// `offset` is the current scroll position, `viewport` the visible height,
/// `content` the total scrollable height.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport: f64,
    pub content: f64,
}

/// Vertical extent of one rendered item, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ItemBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FollowerConfig {
    pub debounce: Duration,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_SCROLL_DEBOUNCE_MS),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Instant,
    metrics: ScrollMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Edges {
    above: bool,
    below: bool,
}

fn classify(metrics: ScrollMetrics) -> Edges {
    Edges {
        above: metrics.offset > 0.0,
        // strict: content that exactly fills the viewport shows no indicator
        below: metrics.content - metrics.offset > metrics.viewport,
    }
}

/// Per-region scroll side of the synchronization loop.
///
/// Host-driven like the engine: the host forwards raw scroll and resize
/// measurements, replays [`ActiveItemChanged`] events with the item's
/// rendered bounds, and pumps [`poll`](Self::poll) so the trailing-edge
/// debounce can fire.
pub struct ScrollFollower {
    region_id: String,
    runtime: Arc<dyn SyncRuntime>,
    config: FollowerConfig,
    pending: Option<Pending>,
    published: Edges,
    detached: bool,
}

impl ScrollFollower {
    pub fn new(region_id: impl Into<String>, runtime: Arc<dyn SyncRuntime>) -> Self {
        Self::with_config(region_id, runtime, FollowerConfig::default())
    }

    pub fn with_config(
        region_id: impl Into<String>,
        runtime: Arc<dyn SyncRuntime>,
        config: FollowerConfig,
    ) -> Self {
        Self {
            region_id: region_id.into(),
            runtime,
            config,
            pending: None,
            published: Edges::default(),
            detached: false,
        }
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// Record a scroll measurement and re-arm the debounce deadline.
    ///
    /// Only the latest measurements survive a burst; classification happens
    /// in [`poll`](Self::poll) once `debounce` has elapsed without another
    /// scroll.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now: Instant) {
        if self.detached {
            return;
        }
        self.pending = Some(Pending {
            deadline: now + self.config.debounce,
            metrics,
        });
    }

    /// Fire the pending classification if its deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if self.detached {
            return;
        }
        let Some(pending) = self.pending else {
            return;
        };
        if now < pending.deadline {
            return;
        }
        self.pending = None;
        self.publish(classify(pending.metrics));
    }

    /// Classify immediately, dropping any pending deadline.
    ///
    /// Content and viewport changes reshape the region without any scroll
    /// happening, and a region can start out already overflowing, so resize
    /// paths skip the debounce.
    pub fn on_content_resized(&mut self, metrics: ScrollMetrics) {
        if self.detached {
            return;
        }
        self.pending = None;
        self.publish(classify(metrics));
    }

    /// React to a highlight transition: scroll the item into view unless the
    /// user can already see it.
    ///
    /// Fully visible items never scroll. Partially visible items scroll only
    /// for playback-driven transitions; a user-initiated transition that is
    /// already partly on screen stays where the user put it. When a scroll is
    /// emitted, a user-initiated
    /// one jumps ([`ScrollBehavior::Instant`]) while playback drift glides
    /// ([`ScrollBehavior::Smooth`]). A cleared highlight (`new_id: None`)
    /// never scrolls.
    pub fn handle_active_item(
        &mut self,
        event: &ActiveItemChanged,
        metrics: ScrollMetrics,
        bounds: ItemBounds,
    ) {
        if self.detached {
            return;
        }
        let Some(item_id) = event.new_id.as_deref() else {
            return;
        };

        let view_top = metrics.offset;
        let view_bottom = metrics.offset + metrics.viewport;
        let fully_visible = bounds.top >= view_top && bounds.bottom <= view_bottom;
        if fully_visible {
            return;
        }
        let partially_visible = bounds.bottom > view_top && bounds.top < view_bottom;
        if event.user_initiated && partially_visible {
            return;
        }

        let center = (bounds.top + bounds.bottom) / 2.0;
        let max_offset = (metrics.content - metrics.viewport).max(0.0);
        let offset = (center - metrics.viewport / 2.0).clamp(0.0, max_offset);
        let behavior = if event.user_initiated {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };

        self.runtime.emit_scroll(ScrollIntoViewRequest {
            region_id: self.region_id.clone(),
            item_id: item_id.to_string(),
            offset,
            behavior,
        });
        tracing::debug!(region = %self.region_id, item_id, offset, "scroll_into_view");
    }

    /// Cancel pending work and turn every subsequent handler call into a
    /// no-op.
    pub fn detach(&mut self) {
        self.pending = None;
        self.detached = true;
        tracing::debug!(region = %self.region_id, "follower_detached");
    }

    fn publish(&mut self, edges: Edges) {
        if edges == self.published {
            return;
        }
        self.published = edges;
        self.runtime.emit_scroll_state(RegionScrollStateChanged {
            region_id: self.region_id.clone(),
            has_content_above: edges.above,
            has_content_below: edges.below,
        });
        tracing::debug!(
            region = %self.region_id,
            above = edges.above,
            below = edges.below,
            "scroll_state_changed"
        );
    }
}
