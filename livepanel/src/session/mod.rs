use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use api::event::{PlayerEvent, ReadyState};
use api::response::{Session, Status};

use crate::client::Client;
use crate::constant;
use crate::error::AppError;
use crate::result::Result;
use crate::session::player::Player;

pub mod bridge;
pub mod player;

/// Drives the single active playback session through its lifecycle in
/// response to user actions and element events. All mutable session state
/// lives behind the one lock; a monotonic token discards stale stream
/// resolutions when loads overlap.
pub struct SessionController {
    state: Arc<RwLock<SessionState>>,
    player: Arc<dyn Player>,
    client: Client,
    fallback_url: String,
    ready_timeout: Duration,
    token: AtomicU64,
}

#[derive(Debug)]
struct SessionState {
    requested_url: String,
    resolved_url: Option<String>,
    status: Status,
    error: Option<String>,
    buffering: bool,
    volume: f32,
    last_volume: f32,
    muted: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            requested_url: String::new(),
            resolved_url: None,
            status: Status::Idle,
            error: None,
            buffering: false,
            volume: 1.0,
            last_volume: 1.0,
            muted: false,
        }
    }
}

impl SessionController {
    pub fn new(
        player: Arc<dyn Player>,
        client: Client,
        fallback_url: String,
        ready_timeout: Duration,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            player,
            client,
            fallback_url,
            ready_timeout,
            token: AtomicU64::new(0),
        }
    }

    /// Pumps element events into the transition function until the player's
    /// channel closes.
    pub async fn run_events(self: Arc<Self>) {
        let mut events = self.player.subscribe();
        loop {
            match events.recv().await {
                Ok(event) => self.handle_event(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("player event channel lagged, skipped {}", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// Resolves a playable URL for the requested source and attaches it to
    /// the element. Resolution failures fall back to the demonstration
    /// media and are only logged.
    pub async fn load(&self, url: &str) -> Result<Session> {
        let requested = url.trim().to_string();
        if requested.is_empty() {
            self.state.write().unwrap().error = Some(constant::MSG_EMPTY_URL.to_string());
            return Err(AppError::InvalidInput(constant::MSG_EMPTY_URL.to_string()));
        }

        let token = self.token.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().unwrap();
            state.requested_url = requested.clone();
            state.status = Status::Loading;
            state.error = None;
            state.buffering = false;
        }
        self.player.pause().await;

        let resolved = match self.client.start_stream(&requested).await {
            Ok(stream_url) if !stream_url.is_empty() => stream_url,
            Ok(_) => constant::LOCAL_STREAM_PATH.to_string(),
            Err(err) => {
                info!("stream resolution unavailable, using demo media: {}", err);
                self.fallback_url.clone()
            }
        };

        if self.token.load(Ordering::SeqCst) != token {
            debug!("discarding stale stream resolution for {}", requested);
            return Ok(self.snapshot());
        }
        self.state.write().unwrap().resolved_url = Some(resolved.clone());
        self.player.load(&resolved).await;
        Ok(self.snapshot())
    }

    /// Pauses when playing; otherwise waits (bounded) for the element to be
    /// ready and attempts playback. Play failures keep the session in its
    /// prior non-playing status with a classified message.
    pub async fn toggle_play(&self) -> Session {
        let (playing, resolved) = {
            let state = self.state.read().unwrap();
            (state.status == Status::Playing, state.resolved_url.clone())
        };
        if resolved.is_none() {
            return self.snapshot();
        }

        if playing {
            self.player.pause().await;
            self.state.write().unwrap().status = Status::Paused;
            return self.snapshot();
        }

        let mut events = self.player.subscribe();
        if self.player.ready_state().await < ReadyState::HaveCurrentData {
            self.state.write().unwrap().buffering = true;
            let canplay = async {
                loop {
                    match events.recv().await {
                        Ok(PlayerEvent::CanPlay) => break,
                        Ok(_) => continue,
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            };
            // first-of: the readiness signal or the bounded timeout
            tokio::select! {
                _ = canplay => {}
                _ = tokio::time::sleep(self.ready_timeout) => {}
            }
        }

        match self.player.play().await {
            Ok(()) => {
                let mut state = self.state.write().unwrap();
                state.status = Status::Playing;
                state.error = None;
                state.buffering = false;
            }
            Err(err) => {
                let mut state = self.state.write().unwrap();
                state.error = Some(err.user_message().to_string());
                state.buffering = false;
            }
        }
        self.snapshot()
    }

    pub async fn set_volume(&self, volume: f32) -> Session {
        let volume = volume.clamp(0.0, 1.0);
        {
            let mut state = self.state.write().unwrap();
            state.volume = volume;
            state.muted = volume == 0.0;
            if volume > 0.0 {
                state.last_volume = volume;
            }
        }
        self.player.set_volume(volume).await;
        self.snapshot()
    }

    /// Muting displays volume 0; unmuting restores the last non-zero volume
    /// (1.0 when none was recorded).
    pub async fn toggle_mute(&self) -> Session {
        let muted = {
            let mut state = self.state.write().unwrap();
            state.muted = !state.muted;
            state.volume = if state.muted {
                0.0
            } else if state.last_volume > 0.0 {
                state.last_volume
            } else {
                1.0
            };
            state.muted
        };
        self.player.set_muted(muted).await;
        self.snapshot()
    }

    /// Transition function for element events.
    pub fn handle_event(&self, event: PlayerEvent) {
        let mut state = self.state.write().unwrap();
        match event {
            PlayerEvent::Play => state.status = Status::Playing,
            PlayerEvent::Pause => {
                if state.status == Status::Playing {
                    state.status = Status::Paused;
                }
            }
            PlayerEvent::Error => {
                state.status = Status::Error;
                state.error = Some(constant::MSG_STREAM_FAILED.to_string());
                state.buffering = false;
            }
            PlayerEvent::Waiting => state.buffering = true,
            PlayerEvent::Playing => state.buffering = false,
            PlayerEvent::CanPlay => {
                state.buffering = false;
                state.error = None;
                if matches!(state.status, Status::Idle | Status::Loading | Status::Error) {
                    state.status = Status::Ready;
                }
            }
            PlayerEvent::LoadedMetadata => {
                if state.status == Status::Loading {
                    state.status = Status::Ready;
                }
            }
        }
    }

    pub fn snapshot(&self) -> Session {
        let state = self.state.read().unwrap();
        Session {
            requested_url: state.requested_url.clone(),
            resolved_url: state.resolved_url.clone(),
            status: state.status,
            error: state.error.clone(),
            buffering: state.buffering,
            volume: state.volume,
            muted: state.muted,
        }
    }
}
