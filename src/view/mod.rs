//! Terminal rendering of the panel.
//!
//! Pure functions of panel state: header, trigger control, optional error
//! line in red, and the name/phone table when a user is displayable.

use colored::Colorize;

use crate::constants::{PANEL_HEADER, TRIGGER_LABEL};
use crate::models::UserRecord;
use crate::panel::RandomUserPanel;

const NAME_HEADER: &str = "Username";
const PHONE_HEADER: &str = "Phone number";

/// Render the whole panel.
///
/// The trigger is always drawn, including while a fetch is outstanding.
/// The table is suppressed whenever an error message is set.
pub fn render(panel: &RandomUserPanel) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", PANEL_HEADER.bold()));
    output.push_str(&format!(
        "{} {}\n",
        format!("[ {TRIGGER_LABEL} ]").cyan().bold(),
        "(press Enter)".dimmed()
    ));

    if let Some(error) = panel.error() {
        output.push_str(&format!("{}\n", error.red()));
    }

    if let Some(user) = panel.displayed_user() {
        output.push_str(&user_table(user));
    }

    output
}

/// Two-column, one-row table of name and phone number.
pub fn user_table(user: &UserRecord) -> String {
    let name_width = NAME_HEADER.chars().count().max(user.name.chars().count());
    let phone_width = PHONE_HEADER.chars().count().max(user.phone.chars().count());

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}\n",
            "─".repeat(name_width + 2),
            "─".repeat(phone_width + 2)
        )
    };

    let mut table = String::new();
    table.push_str(&rule("┌", "┬", "┐"));
    table.push_str(&format!(
        "│ {} │ {} │\n",
        pad(NAME_HEADER, name_width).bold(),
        pad(PHONE_HEADER, phone_width).bold()
    ));
    table.push_str(&rule("├", "┼", "┤"));
    table.push_str(&format!(
        "│ {} │ {} │\n",
        pad(&user.name, name_width),
        pad(&user.phone, phone_width)
    ));
    table.push_str(&rule("└", "┴", "┘"));
    table
}

/// Pad before styling so escape codes don't count toward the width.
fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
