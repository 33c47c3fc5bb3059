use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{broadcast, oneshot};
use tracing::debug;

use api::event::{ElementEvent, PlayOutcome, PlayerCommand, PlayerEvent, ReadyState};

use crate::session::player::{PlayError, Player};

/// Bridges the controller to the media element in the page: commands fan
/// out over the SSE route, element events and play outcomes come back over
/// the ingest routes.
pub struct BridgePlayer {
    commands: broadcast::Sender<PlayerCommand>,
    events: broadcast::Sender<PlayerEvent>,
    ready_state: RwLock<ReadyState>,
    pending: Mutex<HashMap<u64, oneshot::Sender<PlayOutcome>>>,
    seq: AtomicU64,
    result_timeout: Duration,
}

impl BridgePlayer {
    pub fn new(result_timeout: Duration) -> Self {
        let (commands, _) = broadcast::channel(16);
        let (events, _) = broadcast::channel(16);
        Self {
            commands,
            events,
            ready_state: RwLock::new(ReadyState::HaveNothing),
            pending: Mutex::new(HashMap::new()),
            seq: AtomicU64::new(0),
            result_timeout,
        }
    }

    /// Command feed for the SSE route; one receiver per connected page.
    pub fn commands(&self) -> broadcast::Receiver<PlayerCommand> {
        self.commands.subscribe()
    }

    /// Element event reported by the page; refreshes the cached readiness
    /// and fans the event out to subscribers.
    pub fn ingest(&self, report: ElementEvent) {
        *self.ready_state.write().unwrap() = report.ready_state;
        let _ = self.events.send(report.event);
    }

    /// Outcome reported by the page for a pending play command.
    pub fn complete_play(&self, seq: u64, outcome: PlayOutcome) {
        if let Some(tx) = self.pending.lock().unwrap().remove(&seq) {
            let _ = tx.send(outcome);
        }
    }

    fn send(&self, command: PlayerCommand) {
        if self.commands.send(command).is_err() {
            debug!("no page attached to the player command channel");
        }
    }
}

#[async_trait]
impl Player for BridgePlayer {
    async fn load(&self, url: &str) {
        *self.ready_state.write().unwrap() = ReadyState::HaveNothing;
        self.send(PlayerCommand::Load {
            url: url.to_string(),
        });
    }

    async fn play(&self) -> Result<(), PlayError> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().insert(seq, tx);
        self.send(PlayerCommand::Play { seq });
        let outcome = match tokio::time::timeout(self.result_timeout, rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) | Err(_) => {
                self.pending.lock().unwrap().remove(&seq);
                PlayOutcome::Failed
            }
        };
        match outcome {
            PlayOutcome::Ok => Ok(()),
            PlayOutcome::NotAllowed => Err(PlayError::AutoplayBlocked),
            PlayOutcome::Aborted => Err(PlayError::Interrupted),
            PlayOutcome::Failed => Err(PlayError::Failed),
        }
    }

    async fn pause(&self) {
        self.send(PlayerCommand::Pause);
    }

    async fn set_volume(&self, volume: f32) {
        self.send(PlayerCommand::Volume { volume });
    }

    async fn set_muted(&self, muted: bool) {
        self.send(PlayerCommand::Muted { muted });
    }

    async fn ready_state(&self) -> ReadyState {
        *self.ready_state.read().unwrap()
    }

    fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }
}
