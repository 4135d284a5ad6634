//! Element identity
//!
//! Every element admitted into a model is stamped with an [`ElementId`]
//! exactly once, at insertion. Where the ids come from is pluggable through
//! [`IdGenerator`] so tests can use predictable values.

use std::fmt;

use uuid::Uuid;

/// Process-unique identifier assigned to an element on admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Source of element identifiers
///
/// Implementations must never hand out the same id twice over their
/// lifetime.
pub trait IdGenerator {
    fn next_id(&mut self) -> ElementId;
}

/// Random (v4) UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ElementId {
        ElementId(Uuid::new_v4())
    }
}

/// Deterministic ids `00000000-0000-0000-0000-000000000001`, `...002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    issued: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u128 {
        self.issued
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ElementId {
        self.issued += 1;
        ElementId(Uuid::from_u128(self.issued))
    }
}
