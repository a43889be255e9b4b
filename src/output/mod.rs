//! Output renderers for a single fetched user: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::UserRecord;

/// Trait for rendering a user record to an output format.
pub trait OutputRenderer {
    fn render(&self, user: &UserRecord) -> String;
}
