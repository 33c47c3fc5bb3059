use serde::{Deserialize, Serialize};

/// Lifecycle events emitted by the page's media element, named after the
/// native event types.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerEvent {
    Play,
    Pause,
    Error,
    Waiting,
    Playing,
    CanPlay,
    LoadedMetadata,
}

/// Media element readiness, ordered like `HTMLMediaElement.readyState`.
#[derive(
    Default, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(from = "u8", into = "u8")]
pub enum ReadyState {
    #[default]
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
}

impl From<u8> for ReadyState {
    fn from(value: u8) -> Self {
        match value {
            0 => ReadyState::HaveNothing,
            1 => ReadyState::HaveMetadata,
            2 => ReadyState::HaveCurrentData,
            3 => ReadyState::HaveFutureData,
            _ => ReadyState::HaveEnoughData,
        }
    }
}

impl From<ReadyState> for u8 {
    fn from(value: ReadyState) -> Self {
        value as u8
    }
}

/// Event report posted by the page, carrying the element's readiness.
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ElementEvent {
    pub event: PlayerEvent,
    #[serde(default)]
    pub ready_state: ReadyState,
}

/// Directives delivered to the page's media element over SSE.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum PlayerCommand {
    Load { url: String },
    Play { seq: u64 },
    Pause,
    Volume { volume: f32 },
    Muted { muted: bool },
}

/// The page's report of one `play()` attempt, matched by `seq`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct PlayResult {
    pub seq: u64,
    pub outcome: PlayOutcome,
}

/// Mapped from the rejection's DOMException name by the page.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlayOutcome {
    Ok,
    NotAllowed,
    Aborted,
    Failed,
}
