use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Error;
use crate::id::{IdGenerator, UuidIdGen};
use crate::types::{CategoryFilter, RawTranscriptItem, TranscriptItem};

/// Time-ordered index over a loaded transcript.
///
/// Items are sorted ascending by `start_ms` with ties kept in input order
/// (stable sort), and the index is read-only after construction, so it can
/// be shared as `Arc<TranscriptIndex>`. A parallel vector of start times backs
/// the binary search in [`find_active`](Self::find_active); an id map backs
/// the O(1) lookups in [`item_range`](Self::item_range) and
/// [`get`](Self::get).
#[derive(Debug, Clone)]
pub struct TranscriptIndex {
    items: Vec<TranscriptItem>,
    starts: Vec<i64>,
    by_id: HashMap<String, usize>,
}

impl TranscriptIndex {
    /// Validate and index raw items, assigning UUIDs to items without an id.
    ///
    /// Input may be unsorted; construction sorts it. Fails on the first item
    /// with missing or negative timestamps, an inverted range, or a
    /// duplicated id. A failed build yields no index at all.
    pub fn build(raw: Vec<RawTranscriptItem>) -> Result<Self, Error> {
        Self::build_with(raw, UuidIdGen)
    }

    /// [`build`](Self::build) with an explicit id source, for deterministic
    /// fixtures.
    pub fn build_with(
        raw: Vec<RawTranscriptItem>,
        mut id_gen: impl IdGenerator,
    ) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(raw.len());

        for (index, raw_item) in raw.into_iter().enumerate() {
            let (Some(start_ms), Some(end_ms)) = (raw_item.start_ms, raw_item.end_ms) else {
                return Err(Error::MissingTimestamps { index });
            };
            if start_ms < 0 || end_ms < 0 {
                return Err(Error::NegativeTime {
                    index,
                    value: start_ms.min(end_ms),
                });
            }
            if end_ms < start_ms {
                return Err(Error::InvertedRange {
                    index,
                    start_ms,
                    end_ms,
                });
            }

            let id = match raw_item.id.clone() {
                Some(id) => id,
                None => id_gen.next_id(),
            };
            items.push(raw_item.into_item(id, start_ms, end_ms));
        }

        if let Some(id) = items.iter().map(|item| item.id.as_str()).duplicates().next() {
            return Err(Error::DuplicateId { id: id.to_string() });
        }

        Ok(Self::assemble(items))
    }

    /// Index a new transcript containing only the categories the filter
    /// includes. Excluded items become transparent to
    /// [`find_active`](Self::find_active): time inside them resolves to the
    /// most recent included item. Hosts toggling the filter rebuild and
    /// re-attach.
    pub fn filtered(&self, filter: &CategoryFilter) -> TranscriptIndex {
        let items = self
            .items
            .iter()
            .filter(|item| filter.is_included(item.category))
            .cloned()
            .collect();
        Self::assemble(items)
    }

    // Items must already be validated. Sorting here is stable, so equal
    // starts keep their input order.
    fn assemble(mut items: Vec<TranscriptItem>) -> Self {
        items.sort_by_key(|item| item.start_ms);
        let starts = items.iter().map(|item| item.start_ms).collect();
        let by_id = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        Self {
            items,
            starts,
            by_id,
        }
    }

    /// The item considered "currently being spoken" at `time_ms`: the last
    /// item whose `start_ms <= time_ms`.
    ///
    /// Silence belongs to the preceding item: a gap after an item's end
    /// keeps that item active until the next item begins, and time past the
    /// last item's end keeps the last item active (there is nothing later to
    /// transition to). Before the first item's start, nothing is active.
    ///
    /// Runs in O(log n); transcripts reach thousands of words, so the
    /// playback tick path must not scan.
    pub fn find_active(&self, time_ms: i64) -> Option<&str> {
        let started = self.starts.partition_point(|&start| start <= time_ms);
        if started == 0 {
            return None;
        }
        Some(self.items[started - 1].id.as_str())
    }

    /// The `(start_ms, end_ms)` bounds of an item, O(1).
    pub fn item_range(&self, id: &str) -> Option<(i64, i64)> {
        let item = self.get(id)?;
        Some((item.start_ms, item.end_ms))
    }

    pub fn get(&self, id: &str) -> Option<&TranscriptItem> {
        self.by_id.get(id).map(|&position| &self.items[position])
    }

    /// Position of an item in time order, O(1). Useful for hosts mapping an
    /// active id to a display row.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdGen;
    use crate::types::ItemCategory;

    fn raw(id: &str, start_ms: i64, end_ms: i64) -> RawTranscriptItem {
        RawTranscriptItem {
            id: Some(id.to_string()),
            text: format!(" {id}"),
            start_ms: Some(start_ms),
            end_ms: Some(end_ms),
            ..Default::default()
        }
    }

    fn two_item_index() -> TranscriptIndex {
        TranscriptIndex::build(vec![raw("a", 0, 1000), raw("b", 1000, 2000)]).unwrap()
    }

    #[test]
    fn nothing_active_before_first_item() {
        let index = TranscriptIndex::build(vec![raw("a", 500, 900)]).unwrap();
        assert_eq!(index.find_active(0), None);
        assert_eq!(index.find_active(499), None);
        assert_eq!(index.find_active(500), Some("a"));
    }

    #[test]
    fn item_is_active_inside_its_range() {
        let index = two_item_index();
        assert_eq!(index.find_active(500), Some("a"));
        assert_eq!(index.find_active(1500), Some("b"));
    }

    #[test]
    fn gap_belongs_to_preceding_item() {
        let index = TranscriptIndex::build(vec![raw("a", 0, 500), raw("b", 1000, 2000)]).unwrap();
        assert_eq!(index.find_active(700), Some("a"));
        assert_eq!(index.find_active(999), Some("a"));
    }

    #[test]
    fn next_item_start_ends_the_carry_over() {
        let index = TranscriptIndex::build(vec![raw("a", 0, 500), raw("b", 1000, 2000)]).unwrap();
        assert_eq!(index.find_active(1000), Some("b"));
    }

    #[test]
    fn last_item_stays_active_past_its_end() {
        let index = two_item_index();
        assert_eq!(index.find_active(2000), Some("b"));
        assert_eq!(index.find_active(5000), Some("b"));
    }

    #[test]
    fn empty_transcript_has_no_active_item() {
        let index = TranscriptIndex::build(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.find_active(0), None);
        assert_eq!(index.find_active(10_000), None);
    }

    #[test]
    fn unsorted_input_is_sorted_on_build() {
        let index = TranscriptIndex::build(vec![raw("b", 1000, 2000), raw("a", 0, 1000)]).unwrap();
        assert_eq!(index.items()[0].id, "a");
        assert_eq!(index.find_active(100), Some("a"));
        assert_eq!(index.position("a"), Some(0));
        assert_eq!(index.position("b"), Some(1));
    }

    #[test]
    fn equal_starts_keep_input_order_and_resolve_to_the_last() {
        let index = TranscriptIndex::build(vec![raw("a", 100, 200), raw("b", 100, 300)]).unwrap();
        assert_eq!(index.items()[0].id, "a");
        assert_eq!(index.items()[1].id, "b");
        assert_eq!(index.find_active(100), Some("b"));
        assert_eq!(index.find_active(99), None);
    }

    #[test]
    fn zero_length_item_is_a_point_event() {
        let index = TranscriptIndex::build(vec![raw("a", 0, 400), raw("p", 500, 500)]).unwrap();
        assert_eq!(index.find_active(499), Some("a"));
        assert_eq!(index.find_active(500), Some("p"));
        assert_eq!(index.find_active(501), Some("p"));
    }

    #[test]
    fn build_rejects_missing_timestamps() {
        let mut item = raw("a", 0, 100);
        item.end_ms = None;
        let err = TranscriptIndex::build(vec![raw("ok", 0, 100), item]).unwrap_err();
        assert!(matches!(err, Error::MissingTimestamps { index: 1 }));
    }

    #[test]
    fn build_rejects_negative_time() {
        let err = TranscriptIndex::build(vec![raw("a", -5, 100)]).unwrap_err();
        assert!(matches!(err, Error::NegativeTime { index: 0, value: -5 }));
    }

    #[test]
    fn build_rejects_inverted_range() {
        let err = TranscriptIndex::build(vec![raw("a", 300, 200)]).unwrap_err();
        assert!(matches!(err, Error::InvertedRange { index: 0, .. }));
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let err = TranscriptIndex::build(vec![raw("a", 0, 100), raw("a", 200, 300)]).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn missing_ids_are_assigned_in_order() {
        let mut first = raw("", 0, 100);
        first.id = None;
        let mut second = raw("", 200, 300);
        second.id = None;
        let index =
            TranscriptIndex::build_with(vec![first, second], SequentialIdGen::new()).unwrap();
        assert_eq!(index.items()[0].id, "0");
        assert_eq!(index.items()[1].id, "1");
    }

    #[test]
    fn item_range_looks_up_by_id() {
        let index = two_item_index();
        assert_eq!(index.item_range("b"), Some((1000, 2000)));
        assert_eq!(index.item_range("nope"), None);
    }

    #[test]
    fn filtered_index_skips_excluded_categories() {
        let mut small_talk = raw("st", 1000, 2000);
        small_talk.category = ItemCategory::SmallTalk;
        let items = vec![raw("a", 0, 1000), small_talk, raw("c", 2000, 3000)];
        let full = TranscriptIndex::build(items).unwrap();
        assert_eq!(full.find_active(1500), Some("st"));

        let filtered = full.filtered(&CategoryFilter {
            include_small_talk: false,
        });
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.find_active(1500), Some("a"));
        assert_eq!(filtered.find_active(2500), Some("c"));
        assert_eq!(filtered.item_range("st"), None);
    }

    #[test]
    fn raw_items_deserialize_with_missing_fields() {
        let items: Vec<RawTranscriptItem> = serde_json::from_str(
            r#"[
                {"text": " hello", "start_ms": 0, "end_ms": 400, "speaker": "CLINICIAN"},
                {"text": " um", "category": "small_talk"}
            ]"#,
        )
        .unwrap();
        assert_eq!(items[1].category, ItemCategory::SmallTalk);
        assert!(items[1].start_ms.is_none());

        let err = TranscriptIndex::build(items).unwrap_err();
        assert!(matches!(err, Error::MissingTimestamps { index: 1 }));
    }

    // ── Properties ───────────────────────────────────────────────────────────

    use quickcheck::{Arbitrary, Gen};

    #[derive(Debug, Clone)]
    struct Timeline(Vec<RawTranscriptItem>);

    impl Arbitrary for Timeline {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 12;
            let mut items = Vec::with_capacity(len);
            let mut start = 0i64;
            for i in 0..len {
                // strictly increasing starts, so every item owns its start
                start += i64::from(u16::arbitrary(g) % 500) + 1;
                let duration = i64::from(u16::arbitrary(g) % 400);
                items.push(raw(&format!("w{i}"), start, start + duration));
            }
            Timeline(items)
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_find_active_is_monotonic(timeline: Timeline, t1: u16, t2: u16) -> bool {
        let index = TranscriptIndex::build(timeline.0).unwrap();
        let (lo, hi) = (i64::from(t1.min(t2)), i64::from(t1.max(t2)));
        let position_at = |t: i64| index.find_active(t).and_then(|id| index.position(id));
        match (position_at(lo), position_at(hi)) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(earlier), Some(later)) => earlier <= later,
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_item_is_active_at_its_own_start(timeline: Timeline) -> bool {
        let index = TranscriptIndex::build(timeline.0.clone()).unwrap();
        timeline.0.iter().all(|item| {
            index.find_active(item.start_ms.unwrap()) == item.id.as_deref()
        })
    }

    #[quickcheck_macros::quickcheck]
    fn prop_active_item_never_starts_in_the_future(timeline: Timeline, t: u16) -> bool {
        let index = TranscriptIndex::build(timeline.0).unwrap();
        let t = i64::from(t);
        match index.find_active(t) {
            None => true,
            Some(id) => index.item_range(id).is_some_and(|(start, _)| start <= t),
        }
    }
}
