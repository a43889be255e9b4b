//! The random-user panel controller.
//!
//! Owns the cache, the selected identifier, the last error message and the
//! in-flight flag. A trigger is split into two synchronous halves so that
//! an event loop can keep reading input while the fetch is outstanding:
//!
//! 1. [`RandomUserPanel::begin`] draws an identifier and either resolves it
//!    from the cache or marks the panel as fetching.
//! 2. [`RandomUserPanel::complete`] applies the fetch result and clears the
//!    in-flight flag.
//!
//! [`RandomUserPanel::activate`] runs both halves around one fetch for
//! callers that do not need to interleave input.

pub mod range;

use rand::Rng;
use tracing::debug;

use crate::cache::UserCache;
use crate::models::{UserId, UserRecord};
use crate::source::{FetchError, UserSource};

pub use range::{IdRange, InvalidRange};

/// Knobs for a panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    /// Identifiers drawn on each trigger.
    pub range: IdRange,
    /// Whether resolving from the cache clears a previous error message.
    ///
    /// On by default, so a cached user replaces a stale error. When off,
    /// the error stays and the table stays hidden until a fetch succeeds.
    pub clear_error_on_hit: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            range: IdRange::default(),
            clear_error_on_hit: true,
        }
    }
}

/// What a trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A fetch was already outstanding; nothing changed.
    Ignored,
    /// The identifier was cached and is now selected.
    CacheHit(UserId),
    /// The identifier must be fetched; the panel is now in flight.
    Fetch(UserId),
}

/// Per-session panel state.
#[derive(Debug)]
pub struct RandomUserPanel {
    options: PanelOptions,
    cache: UserCache,
    selected: Option<UserId>,
    error: Option<String>,
    in_flight: bool,
}

impl RandomUserPanel {
    /// Empty cache, no selection, no error, idle.
    pub fn new(options: PanelOptions) -> Self {
        Self {
            options,
            cache: UserCache::new(),
            selected: None,
            error: None,
            in_flight: false,
        }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn cache(&self) -> &UserCache {
        &self.cache
    }

    /// Most recently resolved identifier.
    pub fn selected(&self) -> Option<UserId> {
        self.selected
    }

    /// Message describing the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The cached record for the selected identifier, error or not.
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.selected.and_then(|id| self.cache.lookup(id))
    }

    /// The record the view should show: selected, cached, and no error.
    pub fn displayed_user(&self) -> Option<&UserRecord> {
        if self.error.is_some() {
            return None;
        }
        self.selected_user()
    }

    /// Start a trigger with a freshly drawn identifier.
    ///
    /// The identifier is only drawn when the panel is idle.
    pub fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Trigger {
        if self.in_flight {
            debug!("trigger ignored: fetch already in flight");
            return Trigger::Ignored;
        }
        let id = self.options.range.draw(rng);
        self.begin_with(id)
    }

    /// Start a trigger for a caller-chosen identifier.
    pub fn begin_with(&mut self, id: UserId) -> Trigger {
        if self.in_flight {
            debug!(%id, "trigger ignored: fetch already in flight");
            return Trigger::Ignored;
        }

        if self.cache.contains(id) {
            debug!(%id, "cache hit");
            self.selected = Some(id);
            if self.options.clear_error_on_hit {
                self.error = None;
            }
            return Trigger::CacheHit(id);
        }

        debug!(%id, "cache miss, fetching");
        self.in_flight = true;
        self.error = None;
        Trigger::Fetch(id)
    }

    /// Apply the outcome of the fetch started by [`Trigger::Fetch`].
    ///
    /// Failures only set the error message; cache and selection are left
    /// as they were.
    pub fn complete(&mut self, id: UserId, result: Result<UserRecord, FetchError>) {
        match result {
            Ok(record) => {
                self.cache.insert(id, record);
                self.selected = Some(id);
            }
            Err(err) => {
                self.error = Some(format!("Error getUser: {err}"));
            }
        }
        self.in_flight = false;
    }

    /// Run one whole trigger: draw, resolve from cache or fetch, apply.
    pub async fn activate<S, R>(&mut self, source: &S, rng: &mut R) -> Trigger
    where
        S: UserSource + ?Sized,
        R: Rng + ?Sized,
    {
        let trigger = self.begin(rng);
        self.finish(source, trigger).await
    }

    /// Like [`activate`](Self::activate) for a caller-chosen identifier.
    pub async fn activate_with<S>(&mut self, source: &S, id: UserId) -> Trigger
    where
        S: UserSource + ?Sized,
    {
        let trigger = self.begin_with(id);
        self.finish(source, trigger).await
    }

    async fn finish<S>(&mut self, source: &S, trigger: Trigger) -> Trigger
    where
        S: UserSource + ?Sized,
    {
        if let Trigger::Fetch(id) = trigger {
            let result = source.fetch(id).await;
            self.complete(id, result);
        }
        trigger
    }
}

impl Default for RandomUserPanel {
    fn default() -> Self {
        Self::new(PanelOptions::default())
    }
}
