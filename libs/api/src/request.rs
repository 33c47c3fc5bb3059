use serde::{Deserialize, Serialize};

use crate::response::OverlayKind;

/// Overlay fields as submitted by the panel form, without an id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverlayForm {
    #[serde(rename = "type", default)]
    pub kind: OverlayKind,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_x")]
    pub x: i32,
    #[serde(default = "default_y")]
    pub y: i32,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

impl Default for OverlayForm {
    fn default() -> Self {
        Self {
            kind: OverlayKind::Text,
            content: String::new(),
            x: default_x(),
            y: default_y(),
            width: default_width(),
            height: default_height(),
            font_size: default_font_size(),
            color: default_color(),
            background_color: default_background_color(),
        }
    }
}

fn default_x() -> i32 {
    50
}
fn default_y() -> i32 {
    50
}
fn default_width() -> u32 {
    200
}
fn default_height() -> u32 {
    100
}
fn default_font_size() -> u32 {
    24
}
fn default_color() -> String {
    "#ffffff".to_string()
}
fn default_background_color() -> String {
    "rgba(0,0,0,0.5)".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StreamStart {
    pub rtsp_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoadStream {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct SetVolume {
    pub volume: f32,
}
