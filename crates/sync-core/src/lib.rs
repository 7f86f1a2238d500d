pub mod bridge;
pub mod engine;
pub mod error;
pub mod events;
pub mod follower;
pub mod runtime;

pub use bridge::SeekBridge;
pub use engine::{SUPPRESSION_GRACE_MS, State, SyncEngine};
pub use error::Error;
pub use events::{
    ActiveItemChanged, RegionScrollStateChanged, ScrollBehavior, ScrollIntoViewRequest,
    SyncErrorEvent,
};
pub use follower::{
    DEFAULT_SCROLL_DEBOUNCE_MS, FollowerConfig, ItemBounds, ScrollFollower, ScrollMetrics,
};
pub use runtime::SyncRuntime;
