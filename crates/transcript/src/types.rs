/// Coarse classification of a transcript item, used for highlight
/// eligibility. Sources that don't label their items get [`Speech`].
///
/// [`Speech`]: ItemCategory::Speech
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, specta::Type,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    #[default]
    Speech,
    SmallTalk,
}

/// A single word or segment of a loaded transcript.
///
/// This is the indexing contract: everything the sync engine needs to map a
/// playback time to an item and back, whether the item came from a medical
/// scribe job, a meeting recorder, or a test fixture. `end_ms >= start_ms`
/// always holds once indexed; zero-length items are legal and represent
/// point events. Immutable after [`crate::index::TranscriptIndex::build`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct TranscriptItem {
    pub id: String,
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
    pub speaker: Option<String>,
    /// Parent segment for word→segment grouping, when the source has one.
    pub segment_id: Option<String>,
    pub category: ItemCategory,
}

/// Pre-validation input shape, as hosts hand it to the index builder.
///
/// Timestamps are optional here so that a source omitting them produces a
/// typed build error instead of a deserialization failure; items without an
/// `id` get one assigned at build via [`crate::id::IdGenerator`].
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct RawTranscriptItem {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub start_ms: Option<i64>,
    #[serde(default)]
    pub end_ms: Option<i64>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub category: ItemCategory,
}

impl RawTranscriptItem {
    pub(crate) fn into_item(self, id: String, start_ms: i64, end_ms: i64) -> TranscriptItem {
        TranscriptItem {
            id,
            text: self.text,
            start_ms,
            end_ms,
            speaker: self.speaker,
            segment_id: self.segment_id,
            category: self.category,
        }
    }
}

/// Which categories take part in highlight resolution.
///
/// The default includes everything. Excluding small talk mirrors the
/// host-side toggle that dims chit-chat sections: excluded items become
/// transparent to the active-item computation, so playback time inside them
/// resolves to the most recent included item instead.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    pub include_small_talk: bool,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            include_small_talk: true,
        }
    }
}

impl CategoryFilter {
    pub fn is_included(&self, category: ItemCategory) -> bool {
        match category {
            ItemCategory::Speech => true,
            ItemCategory::SmallTalk => self.include_small_talk,
        }
    }
}
