#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use tokio::sync::broadcast;

use api::event::{PlayerEvent, ReadyState};
use livepanel::client::Client;
use livepanel::session::player::{PlayError, Player};

/// Serves the router on an ephemeral port in the background and returns the
/// base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client(base: &str) -> Client {
    Client::new(
        base.to_string(),
        Duration::from_millis(500),
        Duration::from_millis(2000),
    )
}

/// Scripted stand-in for the page's media element.
pub struct FakePlayer {
    pub events: broadcast::Sender<PlayerEvent>,
    pub ready: RwLock<ReadyState>,
    pub play_results: Mutex<VecDeque<Result<(), PlayError>>>,
    pub loaded: Mutex<Vec<String>>,
    pub pauses: Mutex<u32>,
}

impl FakePlayer {
    pub fn new(ready: ReadyState) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            events,
            ready: RwLock::new(ready),
            play_results: Mutex::new(VecDeque::new()),
            loaded: Mutex::new(Vec::new()),
            pauses: Mutex::new(0),
        }
    }

    pub fn push_play_result(&self, result: Result<(), PlayError>) {
        self.play_results.lock().unwrap().push_back(result);
    }

    pub fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl Player for FakePlayer {
    async fn load(&self, url: &str) {
        self.loaded.lock().unwrap().push(url.to_string());
    }

    async fn play(&self) -> Result<(), PlayError> {
        self.play_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn pause(&self) {
        *self.pauses.lock().unwrap() += 1;
    }

    async fn set_volume(&self, _volume: f32) {}

    async fn set_muted(&self, _muted: bool) {}

    async fn ready_state(&self) -> ReadyState {
        *self.ready.read().unwrap()
    }

    fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }
}
