//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the default endpoint so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "randuser";

/// Crate version, as reported by `randuser version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.randuser.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".randuser.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "randuser";

/// Users collection on the public JSONPlaceholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Smallest identifier drawn by default.
pub const DEFAULT_MIN_ID: u32 = 1;

/// Largest identifier drawn by default (inclusive).
pub const DEFAULT_MAX_ID: u32 = 9;

/// Header label shown above the trigger.
pub const PANEL_HEADER: &str = "Get a random user";

/// Label of the trigger control.
pub const TRIGGER_LABEL: &str = "get random user";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "RANDUSER_BASE_URL";
pub const ENV_CLEAR_ERROR_ON_HIT: &str = "RANDUSER_CLEAR_ERROR_ON_HIT";
