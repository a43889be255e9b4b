//! Integration tests for the panel driven through the interactive session.
//!
//! Uses a mock `UserSource` that returns canned results and counts calls,
//! and scripted input so the trigger sequence is deterministic. A gated
//! source holds a fetch open while more input arrives over a duplex pipe.

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::io::AsyncWriteExt;
use tokio::sync::Notify;

use randuser::models::{UserId, UserRecord};
use randuser::panel::{IdRange, PanelOptions, RandomUserPanel, Trigger};
use randuser::session::{self, SessionStats};
use randuser::source::{FetchError, UserSource};

/// A mock user source with a fixed status per id.
struct MockSource {
    users: HashMap<u32, UserRecord>,
    failures: HashMap<u32, u16>,
    calls: AtomicUsize,
}

impl MockSource {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            failures: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn with_user(mut self, id: u32, name: &str, phone: &str) -> Self {
        let record = serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "phone": phone,
        }))
        .unwrap();
        self.users.insert(id, record);
        self
    }

    fn with_failure(mut self, id: u32, status: u16) -> Self {
        self.failures.insert(id, status);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for MockSource {
    async fn fetch(&self, id: UserId) -> Result<UserRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.failures.get(&id.get()) {
            return Err(FetchError::Request { status: *status });
        }
        self.users
            .get(&id.get())
            .cloned()
            .ok_or(FetchError::Request { status: 404 })
    }
}

/// A source whose fetch blocks until the test releases it.
struct GatedSource {
    user: UserRecord,
    started: Notify,
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl UserSource for GatedSource {
    async fn fetch(&self, _id: UserId) -> Result<UserRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.user.clone())
    }
}

/// Session output that the test can read while the session is running.
#[derive(Clone, Default)]
struct SharedOut(Arc<Mutex<Vec<u8>>>);

impl SharedOut {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedOut {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn id(raw: u32) -> UserId {
    UserId::new(raw).unwrap()
}

/// A panel that always draws `raw`.
fn pinned_panel(raw: u32) -> RandomUserPanel {
    RandomUserPanel::new(PanelOptions {
        range: IdRange::new(raw, raw).unwrap(),
        ..PanelOptions::default()
    })
}

async fn run_script(
    panel: &mut RandomUserPanel,
    source: &MockSource,
    script: &str,
) -> (SessionStats, String) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut out = Vec::new();
    let stats = session::run(panel, source, &mut rng, script.as_bytes(), &mut out)
        .await
        .unwrap();
    (stats, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn triggers_during_fetch_are_dropped() {
    let source = MockSource::new().with_user(7, "Ervin Howell", "010-692-6593-343-0209");
    let mut panel = pinned_panel(7);

    let (stats, output) = run_script(&mut panel, &source, "\n\nget\n").await;

    assert_eq!(stats.triggers, 3);
    assert_eq!(stats.fetches, 1);
    assert_eq!(stats.ignored, 2);
    assert_eq!(source.calls(), 1);
    assert!(output.contains("│ Ervin Howell │ 010-692-6593-343-0209 │"));
    assert_eq!(panel.selected(), Some(id(7)));
    assert!(!panel.is_in_flight());
}

#[tokio::test]
async fn triggers_arriving_mid_fetch_are_dropped() {
    let source = GatedSource {
        user: serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Ervin Howell",
            "phone": "010-692-6593-343-0209",
        }))
        .unwrap(),
        started: Notify::new(),
        release: Notify::new(),
        calls: AtomicUsize::new(0),
    };
    let mut panel = pinned_panel(7);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let (mut client, server) = tokio::io::duplex(64);
    let mut out = SharedOut::default();
    let watch = out.clone();
    let gate = &source;

    let session = session::run(
        &mut panel,
        &source,
        &mut rng,
        tokio::io::BufReader::new(server),
        &mut out,
    );
    let driver = async move {
        client.write_all(b"\n").await.unwrap();
        gate.started.notified().await;
        let before = watch.text();

        client.write_all(b"\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        client.write_all(b"get\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Dropped triggers render nothing: no table, no error.
        assert_eq!(watch.text(), before);
        assert!(!before.contains("Ervin Howell"));
        assert!(!before.contains("Error"));

        gate.release.notify_one();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(watch.text().contains("│ Ervin Howell │ 010-692-6593-343-0209 │"));

        client.write_all(b"\n").await.unwrap();
        drop(client);
    };

    let (stats, ()) = tokio::join!(session, driver);
    let stats = stats.unwrap();

    assert_eq!(stats.triggers, 4);
    assert_eq!(stats.ignored, 2);
    assert_eq!(stats.fetches, 1);
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(panel.selected(), Some(id(7)));
    assert_eq!(panel.error(), None);
    assert!(!panel.is_in_flight());
}

#[tokio::test]
async fn cached_id_is_served_without_network() {
    let source = MockSource::new().with_user(7, "Ervin Howell", "010-692-6593-343-0209");
    let mut panel = pinned_panel(7);

    run_script(&mut panel, &source, "\n").await;
    let (stats, output) = run_script(&mut panel, &source, "\n\n\n").await;

    assert_eq!(stats.cache_hits, 3);
    assert_eq!(stats.fetches, 0);
    assert_eq!(source.calls(), 1);
    assert!(output.contains("Ervin Howell"));
}

#[tokio::test]
async fn failure_shows_error_and_leaves_cache_alone() {
    let source = MockSource::new()
        .with_user(7, "Ervin Howell", "010-692-6593-343-0209")
        .with_failure(3, 500);
    let mut panel = RandomUserPanel::default();

    assert_eq!(panel.activate_with(&source, id(7)).await, Trigger::Fetch(id(7)));
    assert_eq!(panel.activate_with(&source, id(3)).await, Trigger::Fetch(id(3)));

    assert!(panel.error().unwrap().contains("500"));
    assert!(!panel.cache().contains(id(3)));
    assert_eq!(panel.selected(), Some(id(7)));
    assert!(panel.displayed_user().is_none());

    let rendered = randuser::view::render(&panel);
    assert!(rendered.contains("500"));
    assert!(!rendered.contains("Ervin Howell"));
}

#[tokio::test]
async fn failed_id_is_retried_on_next_draw() {
    let source = MockSource::new().with_failure(3, 503);
    let mut panel = pinned_panel(3);

    let (stats, output) = run_script(&mut panel, &source, "\n").await;
    assert_eq!(stats.failures, 1);
    assert!(output.contains("getUser 503"));

    // Failures are not cached, so the next trigger goes to the network again.
    let (stats, _) = run_script(&mut panel, &source, "\n").await;
    assert_eq!(stats.fetches, 1);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn fetcher_called_at_most_once_per_id() {
    let mut source = MockSource::new();
    for raw in 1..=9 {
        source = source.with_user(raw, &format!("user {raw}"), "555");
    }
    let mut panel = RandomUserPanel::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..200 {
        panel.activate(&source, &mut rng).await;
    }

    assert_eq!(panel.cache().len(), 9);
    assert_eq!(source.calls(), 9);
}

#[tokio::test]
async fn quit_stops_before_later_triggers() {
    let source = MockSource::new().with_user(7, "Ervin Howell", "1");
    let mut panel = pinned_panel(7);

    let (stats, _) = run_script(&mut panel, &source, "q\n\n").await;
    assert_eq!(stats, SessionStats::default());
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn stats_and_unknown_commands_are_reported() {
    let source = MockSource::new().with_user(7, "Ervin Howell", "1");
    let mut panel = pinned_panel(7);
    run_script(&mut panel, &source, "\n").await;

    let (_, output) = run_script(&mut panel, &source, "stats\nfly\n").await;
    assert!(output.contains("cached users:"));
    assert!(output.contains("1 of 1 (7)"));
    assert!(output.contains("unknown command `fly`"));
}
