//! Shared types used across all modules.
//!
//! The user record decoded from the endpoint and the identifier newtype
//! that keys the cache. Other modules import from here rather than
//! reaching into each other's internals.

pub mod user;

pub use user::{Address, Company, Geo, UserId, UserRecord};
