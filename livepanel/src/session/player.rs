use async_trait::async_trait;
use tokio::sync::broadcast;

use api::event::{PlayerEvent, ReadyState};

use crate::constant;

/// Seam to the native media element living in the page.
#[async_trait]
pub trait Player: Send + Sync {
    /// Attach a new source and reset the playback position.
    async fn load(&self, url: &str);
    async fn play(&self) -> Result<(), PlayError>;
    async fn pause(&self);
    async fn set_volume(&self, volume: f32);
    async fn set_muted(&self, muted: bool);
    async fn ready_state(&self) -> ReadyState;
    fn subscribe(&self) -> broadcast::Receiver<PlayerEvent>;
}

/// Classified playback failure, each with its fixed user-facing message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayError {
    AutoplayBlocked,
    Interrupted,
    Failed,
}

impl PlayError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PlayError::AutoplayBlocked => constant::MSG_AUTOPLAY_BLOCKED,
            PlayError::Interrupted => constant::MSG_PLAY_INTERRUPTED,
            PlayError::Failed => constant::MSG_PLAY_FAILED,
        }
    }
}
