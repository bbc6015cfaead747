// src/engine/duration.rs

//! Task duration models for the parallel simulation.

/// Pure mapping from a task id to the number of ticks it occupies a worker.
///
/// Any `Fn(&str) -> u64` closure is a duration model, which keeps tests
/// short:
///
/// ```
/// use simdag::engine::DurationModel;
///
/// let unit = |_: &str| 1u64;
/// assert_eq!(unit.duration_of("A"), 1);
/// ```
pub trait DurationModel {
    fn duration_of(&self, id: &str) -> u64;
}

impl<F> DurationModel for F
where
    F: Fn(&str) -> u64,
{
    fn duration_of(&self, id: &str) -> u64 {
        self(id)
    }
}

/// Fixed base cost plus the rank of the id's first byte.
///
/// With the default offset of 64, `'A'` has rank 1, `'B'` rank 2 and so on.
/// Bytes below the offset have rank 0; an empty id costs `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRank {
    pub base: u64,
    pub offset: u8,
}

pub const DEFAULT_DURATION_BASE: u64 = 60;
pub const DEFAULT_LETTER_OFFSET: u8 = 64;

impl LetterRank {
    pub fn new(base: u64, offset: u8) -> Self {
        Self { base, offset }
    }

    /// Rank of the first byte of `id` relative to `offset`.
    pub fn rank(&self, id: &str) -> u64 {
        id.as_bytes()
            .first()
            .map(|&b| u64::from(b.saturating_sub(self.offset)))
            .unwrap_or(0)
    }
}

impl Default for LetterRank {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_BASE, DEFAULT_LETTER_OFFSET)
    }
}

impl DurationModel for LetterRank {
    fn duration_of(&self, id: &str) -> u64 {
        self.base.saturating_add(self.rank(id))
    }
}
