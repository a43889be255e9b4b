//! Inclusive identifier range the panel draws from.

use rand::Rng;
use thiserror::Error;

use crate::constants::{DEFAULT_MAX_ID, DEFAULT_MIN_ID};
use crate::models::UserId;

/// Rejected range bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid id range {min}..={max}: bounds must satisfy 1 <= min <= max")]
pub struct InvalidRange {
    pub min: u32,
    pub max: u32,
}

/// Non-empty inclusive range of user identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    min: UserId,
    max: UserId,
}

impl IdRange {
    pub fn new(min: u32, max: u32) -> Result<Self, InvalidRange> {
        match (UserId::new(min), UserId::new(max)) {
            (Some(lo), Some(hi)) if lo <= hi => Ok(Self { min: lo, max: hi }),
            _ => Err(InvalidRange { min, max }),
        }
    }

    pub fn min(&self) -> UserId {
        self.min
    }

    pub fn max(&self) -> UserId {
        self.max
    }

    /// Whether `id` lies inside the range.
    pub fn contains(&self, id: UserId) -> bool {
        self.min <= id && id <= self.max
    }

    /// Number of distinct identifiers in the range.
    pub fn span(&self) -> u32 {
        self.max.get() - self.min.get() + 1
    }

    /// Draw an identifier uniformly from the range.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> UserId {
        UserId::new_unchecked(rng.random_range(self.min.get()..=self.max.get()))
    }
}

impl Default for IdRange {
    /// `1..=9`, the range of the JSONPlaceholder users the panel was built for.
    fn default() -> Self {
        Self {
            min: UserId::new_unchecked(DEFAULT_MIN_ID),
            max: UserId::new_unchecked(DEFAULT_MAX_ID),
        }
    }
}
