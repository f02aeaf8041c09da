//! In-memory collaborators shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kajibot::AppState;
use kajibot::commands::panel::Panel;
use kajibot::data::{RedemptionEvent, Snapshot};
use kajibot::error::DataSourceError;
use kajibot::interactions::InteractionRouter;
use kajibot::services::{DataSource, DiscordApi, LogSink, SnapshotCache};
use serde_json::{Value, json};
use tokio::sync::mpsc;

pub const TTL: Duration = Duration::from_secs(600);

#[derive(Default)]
pub struct FakeSource {
    pub snapshot: Mutex<Snapshot>,
    pub fetches: AtomicUsize,
    pub failing: AtomicBool,
    pub rejecting_redemptions: AtomicBool,
    pub redemptions: Mutex<Vec<RedemptionEvent>>,
}

impl FakeSource {
    pub fn with(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            ..Default::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn fetch_snapshot(&self) -> Result<Snapshot, DataSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DataSourceError::Status(503));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn record_redemption(&self, event: &RedemptionEvent) -> Result<(), DataSourceError> {
        if self.rejecting_redemptions.load(Ordering::SeqCst) {
            return Err(DataSourceError::Status(500));
        }
        self.redemptions.lock().unwrap().push(event.clone());
        Ok(())
    }
}

pub struct FakeLog {
    pub forwarded: Mutex<Vec<Vec<u8>>>,
}

#[async_trait]
impl LogSink for FakeLog {
    async fn forward(&self, raw: Vec<u8>) -> Result<(), DataSourceError> {
        self.forwarded.lock().unwrap().push(raw);
        // Failures here must never reach the interaction response.
        Err(DataSourceError::Status(500))
    }
}

/// Records patched panels as `(token, serialized edit)` on a channel.
pub struct FakeDiscord {
    pub patches: mpsc::UnboundedSender<(String, Value)>,
}

#[async_trait]
impl DiscordApi for FakeDiscord {
    async fn patch_original(&self, token: &str, panel: Panel) -> serenity::Result<()> {
        let body = serde_json::to_value(panel.into_edit()).expect("edit serializes");
        let _ = self.patches.send((token.to_string(), body));
        Ok(())
    }

    async fn register_commands(&self) -> serenity::Result<usize> {
        Ok(1)
    }
}

pub struct Harness {
    pub router: Arc<InteractionRouter>,
    pub source: Arc<FakeSource>,
    pub log: Arc<FakeLog>,
    pub cache: Arc<SnapshotCache>,
    pub patches: mpsc::UnboundedReceiver<(String, Value)>,
}

impl Harness {
    pub fn new(snapshot: Snapshot) -> Self {
        let source = Arc::new(FakeSource::with(snapshot));
        let log = Arc::new(FakeLog {
            forwarded: Mutex::new(Vec::new()),
        });
        let cache = Arc::new(SnapshotCache::new(TTL));
        let (tx, rx) = mpsc::unbounded_channel();
        let app_state = Arc::new(AppState {
            panel_command: "panel".to_string(),
            cache: cache.clone(),
            source: source.clone(),
            log_sink: log.clone(),
            discord: Arc::new(FakeDiscord { patches: tx }),
        });
        Self {
            router: Arc::new(InteractionRouter::new(app_state)),
            source,
            log,
            cache,
            patches: rx,
        }
    }

    /// Routes a payload and returns the serialized response.
    pub async fn send(&self, payload: Value) -> Value {
        let raw = serde_json::to_vec(&payload).unwrap();
        let response = self.router.handle(&raw).await.expect("routed");
        serde_json::to_value(response).unwrap()
    }

    /// Asserts that no background patch arrives within a short window.
    pub async fn expect_no_patch(&mut self) {
        let patched = tokio::time::timeout(Duration::from_millis(200), self.patches.recv()).await;
        assert!(patched.is_err(), "no patch expected, got {patched:?}");
    }

    /// Waits for the next background patch.
    pub async fn next_patch(&mut self) -> (String, Value) {
        tokio::time::timeout(Duration::from_secs(5), self.patches.recv())
            .await
            .expect("patch within timeout")
            .expect("channel open")
    }
}

pub fn command(name: &str) -> Value {
    json!({"type": 2, "token": "tok-cmd", "data": {"name": name}})
}

pub fn component(custom_id: &str) -> Value {
    json!({"type": 3, "token": "tok-btn", "data": {"custom_id": custom_id}})
}

pub fn snapshot(value: Value) -> Snapshot {
    serde_json::from_value(value).expect("valid snapshot")
}

/// Two categories, one of them a reward category, and two users.
pub fn household() -> Snapshot {
    snapshot(json!({
        "menu": {
            "Kitchen": {"tasks": [
                {"name": "Dishes", "points": 10},
                {"name": "Cook: dinner", "points": 30}
            ]},
            "Rewards": {"tasks": [
                {"name": "Settle up", "points": "RESET"},
                {"name": "Massage", "points": -50}
            ]}
        },
        "stats": {"alice": 320, "bob": 100},
        "config": []
    }))
}
