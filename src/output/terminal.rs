//! Terminal renderer: the panel's name/phone table followed by the
//! auxiliary fields the panel itself never shows.

use colored::Colorize;

use crate::models::UserRecord;
use crate::output::OutputRenderer;
use crate::view::user_table;

/// Colored table plus a dimmed detail block.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, user: &UserRecord) -> String {
        let mut output = user_table(user);

        let details = [
            ("id", user.id.to_string()),
            ("username", user.username.clone()),
            ("email", user.email.clone()),
            ("website", user.website.clone()),
            ("company", user.company.name.clone()),
            ("city", user.address.city.clone()),
        ];

        for (label, value) in details.iter().filter(|(_, v)| !v.is_empty()) {
            output.push_str(&format!("  {} {}\n", format!("{label:>9}:").dimmed(), value));
        }

        output
    }
}
