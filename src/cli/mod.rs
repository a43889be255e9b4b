//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Print the session banner to stderr.
///
/// Shown only when stdin is a terminal; piped sessions stay quiet.
pub fn print_banner(base_url: &str) {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        randuser::constants::APP_NAME.bold(),
        format!("· {base_url} · type `help` for commands").dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
