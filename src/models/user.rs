//! User record types as returned by the users endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user in the remote dataset (always ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UserId(u32);

impl TryFrom<u32> for UserId {
    type Error = String;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("user id must be at least 1, got {raw}"))
    }
}

impl From<UserId> for u32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl UserId {
    /// Wrap a raw identifier. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        (raw >= 1).then_some(Self(raw))
    }

    /// Wrap a value the caller already knows to be non-zero.
    pub(crate) const fn new_unchecked(raw: u32) -> Self {
        debug_assert!(raw >= 1);
        Self(raw)
    }

    /// The raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("not a user id: {s}"))?;
        Self::try_from(raw)
    }
}

/// A single user record.
///
/// Only `id`, `name` and `phone` are required; the remaining fields are
/// carried along for JSON output and default to empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    /// Display name, e.g. "Ervin Howell".
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub address: Address,
}

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates as strings, exactly as the API serves them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}
