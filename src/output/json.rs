//! JSON renderer: the full record, pretty-printed, in the endpoint's shape.

use crate::models::UserRecord;
use crate::output::OutputRenderer;

/// Pretty JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, user: &UserRecord) -> String {
        let mut rendered = serde_json::to_string_pretty(user).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
