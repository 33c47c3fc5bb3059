/// Demonstration media attached when stream resolution is unavailable.
pub const FALLBACK_STREAM_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Local proxy path adopted when the resolver answers without a URL.
pub const LOCAL_STREAM_PATH: &str = "/api/stream/video";

pub const MSG_EMPTY_URL: &str = "Please enter a valid RTSP URL";
pub const MSG_AUTOPLAY_BLOCKED: &str = "Browser blocked autoplay. Please click play button.";
pub const MSG_PLAY_INTERRUPTED: &str = "Playback interrupted. Please try again.";
pub const MSG_PLAY_FAILED: &str = "Unable to play video. Please check the stream URL.";
pub const MSG_STREAM_FAILED: &str =
    "Failed to load video stream. Please check the URL and try again.";
