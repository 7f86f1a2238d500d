//! Identifier assignment for raw items that arrive without one.
//!
//! Real transcript sources usually carry ids; plain word lists do not.
//! [`TranscriptIndex::build`] fills the gap through this seam, so item
//! identity always exists once indexed and seeks can address any item.
//!
//! [`TranscriptIndex::build`]: crate::index::TranscriptIndex::build

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUIDv4 identifiers, the production default.
#[derive(Default)]
pub struct UuidIdGen;

impl IdGenerator for UuidIdGen {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Counter-backed identifiers ("0", "1", ...) for fixtures and tests that
/// need item ids stable across runs.
#[derive(Default)]
pub struct SequentialIdGen {
    next: u64,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGen {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
