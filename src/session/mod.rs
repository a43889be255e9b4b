//! Interactive panel session.
//!
//! A single task multiplexes input lines with the outstanding fetch, so
//! a trigger typed while a request is pending reaches the panel and is
//! dropped by its in-flight check instead of queueing behind the fetch.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use colored::Colorize;
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::models::{UserId, UserRecord};
use crate::panel::{RandomUserPanel, Trigger};
use crate::source::{FetchError, UserSource};
use crate::view;

/// A line of input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the trigger control.
    Trigger,
    /// Print the cached identifiers.
    Stats,
    Help,
    Quit,
    Unknown(String),
}

/// Interpret one input line. Blank lines activate the trigger.
pub fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "g" | "get" => Command::Trigger,
        "s" | "stats" => Command::Stats,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub triggers: usize,
    pub ignored: usize,
    pub cache_hits: usize,
    pub fetches: usize,
    pub failures: usize,
}

type PendingFetch<'a> = Pin<Box<dyn Future<Output = Result<UserRecord, FetchError>> + Send + 'a>>;

/// Run the panel until `quit` or end of input.
///
/// Input is polled before the pending fetch, so lines that are already
/// buffered are handled first. At end of input an outstanding fetch is
/// awaited and rendered before returning.
pub async fn run<S, R, I, W>(
    panel: &mut RandomUserPanel,
    source: &S,
    rng: &mut R,
    input: I,
    out: &mut W,
) -> std::io::Result<SessionStats>
where
    S: UserSource + ?Sized,
    R: Rng + ?Sized,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut stats = SessionStats::default();
    let mut lines = input.lines();
    let mut pending: Option<(UserId, PendingFetch<'_>)> = None;

    write!(out, "{}", view::render(panel))?;
    out.flush()?;

    loop {
        tokio::select! {
            biased;

            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Command::Trigger => {
                        stats.triggers += 1;
                        match panel.begin(rng) {
                            Trigger::Ignored => {
                                stats.ignored += 1;
                                debug!("is fetching");
                            }
                            Trigger::CacheHit(_) => {
                                stats.cache_hits += 1;
                                write!(out, "{}", view::render(panel))?;
                            }
                            Trigger::Fetch(id) => {
                                stats.fetches += 1;
                                pending = Some((id, source.fetch(id)));
                            }
                        }
                    }
                    Command::Stats => write_stats(panel, out)?,
                    Command::Help => write_help(out)?,
                    Command::Quit => break,
                    Command::Unknown(other) => writeln!(
                        out,
                        "{}",
                        format!("unknown command `{other}` (try `help`)").yellow()
                    )?,
                }
                out.flush()?;
            }

            result = poll_pending(&mut pending), if pending.is_some() => {
                if let Some((id, _)) = pending.take() {
                    settle(panel, id, result, &mut stats, out)?;
                }
            }
        }
    }

    // End of input: let the last fetch land so its outcome is shown.
    if let Some((id, fetch)) = pending.take() {
        let result = fetch.await;
        settle(panel, id, result, &mut stats, out)?;
    }

    info!(
        triggers = stats.triggers,
        ignored = stats.ignored,
        cache_hits = stats.cache_hits,
        fetches = stats.fetches,
        failures = stats.failures,
        cached = panel.cache().len(),
        "session finished"
    );
    Ok(stats)
}

async fn poll_pending(
    pending: &mut Option<(UserId, PendingFetch<'_>)>,
) -> Result<UserRecord, FetchError> {
    match pending {
        Some((_, fetch)) => fetch.await,
        None => std::future::pending().await,
    }
}

fn settle<W: Write>(
    panel: &mut RandomUserPanel,
    id: UserId,
    result: Result<UserRecord, FetchError>,
    stats: &mut SessionStats,
    out: &mut W,
) -> std::io::Result<()> {
    if result.is_err() {
        stats.failures += 1;
    }
    panel.complete(id, result);
    write!(out, "{}", view::render(panel))?;
    out.flush()
}

fn write_stats<W: Write>(panel: &RandomUserPanel, out: &mut W) -> std::io::Result<()> {
    let ids: Vec<String> = panel.cache().ids().iter().map(UserId::to_string).collect();
    let range = panel.options().range;
    writeln!(
        out,
        "{} {} of {} ({})",
        "cached users:".cyan(),
        ids.len(),
        range.span(),
        if ids.is_empty() { "none".to_string() } else { ids.join(", ") }
    )
}

fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "  {}  fetch a random user (Enter, g, get)", "get".bold())?;
    writeln!(out, "  {}  list cached user ids (s)", "stats".bold())?;
    writeln!(out, "  {}  leave (q, exit, Ctrl-D)", "quit".bold())
}
