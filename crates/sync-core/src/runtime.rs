use crate::events::*;

/// Host-side event sink. The engine and followers push every externally
/// visible effect through this trait; the host decides what a delivery means
/// (a UI event, a channel send, a test recording).
pub trait SyncRuntime: Send + Sync + 'static {
    fn emit_highlight(&self, event: ActiveItemChanged);
    fn emit_scroll_state(&self, event: RegionScrollStateChanged);
    fn emit_scroll(&self, event: ScrollIntoViewRequest);
    fn emit_error(&self, event: SyncErrorEvent);
}
