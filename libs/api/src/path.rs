pub const OVERLAYS: &str = "/api/overlays";
pub const STREAM_START: &str = "/api/stream/start";
pub const STREAM_LOAD: &str = "/api/stream";
pub const SESSION: &str = "/api/session";
pub const SESSION_PLAY: &str = "/api/session/play";
pub const SESSION_VOLUME: &str = "/api/session/volume";
pub const SESSION_MUTE: &str = "/api/session/mute";
pub const PLAYER_EVENTS: &str = "/api/player/events";
pub const PLAYER_RESULTS: &str = "/api/player/results";
pub const PLAYER_COMMANDS: &str = "/api/player/commands";

pub fn overlay(id: &str) -> String {
    format!("{}/{}", OVERLAYS, id)
}
