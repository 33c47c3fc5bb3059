use serde::{Deserialize, Serialize};

/// Envelope used by the overlay resource, mirrored by the panel's own API.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Data<T> {
    pub data: T,
}

/// A positioned text or image annotation rendered above the video surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: OverlayKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub font_size: u32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub background_color: String,
}

#[derive(Default, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "logo")]
    Logo,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StreamStarted {
    #[serde(default)]
    pub stream_url: String,
}

/// Snapshot of the single active stream session.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub requested_url: String,
    pub resolved_url: Option<String>,
    pub status: Status,
    pub error: Option<String>,
    pub buffering: bool,
    pub volume: f32,
    pub muted: bool,
}

#[derive(Default, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Error,
}
