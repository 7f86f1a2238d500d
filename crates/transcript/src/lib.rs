pub mod error;
pub mod id;
pub mod index;
pub mod types;

pub use error::Error;
pub use id::{IdGenerator, SequentialIdGen, UuidIdGen};
pub use index::TranscriptIndex;
pub use types::{CategoryFilter, ItemCategory, RawTranscriptItem, TranscriptItem};
