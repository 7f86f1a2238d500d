#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("item at position {index} is missing a start or end time")]
    MissingTimestamps { index: usize },
    #[error("item at position {index} has a negative timestamp ({value})")]
    NegativeTime { index: usize, value: i64 },
    #[error("item at position {index} ends before it starts ({start_ms}..{end_ms})")]
    InvertedRange {
        index: usize,
        start_ms: i64,
        end_ms: i64,
    },
    #[error("duplicate item id {id:?}")]
    DuplicateId { id: String },
}
