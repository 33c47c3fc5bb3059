mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::post;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::json;

use api::event::{PlayerEvent, ReadyState};
use api::request::StreamStart;
use api::response::Status;
use common::FakePlayer;
use livepanel::constant;
use livepanel::error::AppError;
use livepanel::session::player::PlayError;
use livepanel::session::SessionController;

const FALLBACK: &str = "https://demo.example/fallback.mp4";

fn controller(player: Arc<FakePlayer>, base: &str, ready_ms: u64) -> SessionController {
    SessionController::new(
        player,
        common::client(base),
        FALLBACK.to_string(),
        Duration::from_millis(ready_ms),
    )
}

fn resolver_with(stream_url: &'static str) -> Router {
    Router::new().route(
        "/api/stream/start",
        post(move || async move { Json(json!({ "stream_url": stream_url })) }),
    )
}

fn failing_resolver() -> Router {
    Router::new().route(
        "/api/stream/start",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    )
}

#[tokio::test]
async fn empty_url_keeps_status_and_surfaces_message() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::unreachable_base().await;
    let controller = controller(player, &base, 100);

    let err = controller.load("   ").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.status, Status::Idle);
    assert_eq!(snapshot.error.as_deref(), Some(constant::MSG_EMPTY_URL));
}

#[tokio::test]
async fn failed_resolution_falls_back_to_demo_media() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::spawn_upstream(failing_resolver()).await;
    let controller = controller(player.clone(), &base, 100);

    let session = controller.load("rtsp://cam.example/stream").await.unwrap();
    assert_eq!(session.resolved_url.as_deref(), Some(FALLBACK));
    assert_eq!(session.status, Status::Loading);
    assert!(session.error.is_none());
    assert_eq!(player.loaded.lock().unwrap().as_slice(), [FALLBACK]);
}

#[tokio::test]
async fn successful_resolution_adopts_stream_url() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::spawn_upstream(resolver_with("http://media.example/live.m3u8")).await;
    let controller = controller(player.clone(), &base, 100);

    let session = controller.load("rtsp://cam.example/stream").await.unwrap();
    assert_eq!(
        session.resolved_url.as_deref(),
        Some("http://media.example/live.m3u8")
    );
    assert_eq!(session.requested_url, "rtsp://cam.example/stream");
}

#[tokio::test]
async fn empty_stream_url_falls_back_to_local_path() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::spawn_upstream(resolver_with("")).await;
    let controller = controller(player, &base, 100);

    let session = controller.load("rtsp://cam.example/stream").await.unwrap();
    assert_eq!(
        session.resolved_url.as_deref(),
        Some(constant::LOCAL_STREAM_PATH)
    );
}

#[tokio::test]
async fn autoplay_block_keeps_session_non_playing() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::spawn_upstream(failing_resolver()).await;
    let controller = controller(player.clone(), &base, 100);

    controller.load("rtsp://cam.example/stream").await.unwrap();
    player.push_play_result(Err(PlayError::AutoplayBlocked));
    let session = controller.toggle_play().await;
    assert_ne!(session.status, Status::Playing);
    assert_eq!(
        session.error.as_deref(),
        Some(constant::MSG_AUTOPLAY_BLOCKED)
    );
}

#[tokio::test]
async fn generic_play_failure_gets_generic_message() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::spawn_upstream(failing_resolver()).await;
    let controller = controller(player.clone(), &base, 100);

    controller.load("rtsp://cam.example/stream").await.unwrap();
    player.push_play_result(Err(PlayError::Failed));
    let session = controller.toggle_play().await;
    assert_ne!(session.status, Status::Playing);
    assert_eq!(session.error.as_deref(), Some(constant::MSG_PLAY_FAILED));
}

#[tokio::test]
async fn play_success_clears_error_and_toggle_pauses() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let base = common::spawn_upstream(failing_resolver()).await;
    let controller = controller(player.clone(), &base, 100);

    controller.load("rtsp://cam.example/stream").await.unwrap();
    let playing = controller.toggle_play().await;
    assert_eq!(playing.status, Status::Playing);
    assert!(playing.error.is_none());

    let paused = controller.toggle_play().await;
    assert_eq!(paused.status, Status::Paused);
    assert!(*player.pauses.lock().unwrap() >= 1);
}

#[tokio::test]
async fn canplay_event_satisfies_readiness_wait_early() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveNothing));
    let base = common::spawn_upstream(failing_resolver()).await;
    let controller = controller(player.clone(), &base, 5000);

    controller.load("rtsp://cam.example/stream").await.unwrap();
    let emitter = player.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        emitter.emit(PlayerEvent::CanPlay);
    });

    let started = Instant::now();
    let session = controller.toggle_play().await;
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(session.status, Status::Playing);
}

#[tokio::test]
async fn readiness_wait_is_bounded_by_timeout() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveNothing));
    let base = common::spawn_upstream(failing_resolver()).await;
    let controller = controller(player, &base, 100);

    controller.load("rtsp://cam.example/stream").await.unwrap();
    let started = Instant::now();
    let session = controller.toggle_play().await;
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(session.status, Status::Playing);
    assert!(!session.buffering);
}

#[tokio::test]
async fn stale_resolution_is_discarded() {
    let player = Arc::new(FakePlayer::new(ReadyState::HaveEnoughData));
    let app = Router::new().route(
        "/api/stream/start",
        post(|Json(req): Json<StreamStart>| async move {
            if req.rtsp_url == "rtsp://slow" {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(json!({"stream_url": "http://media.example/old"}))
            } else {
                Json(json!({"stream_url": "http://media.example/new"}))
            }
        }),
    );
    let base = common::spawn_upstream(app).await;
    let controller = Arc::new(controller(player.clone(), &base, 100));

    let slow = controller.clone();
    let first = tokio::spawn(async move { slow.load("rtsp://slow").await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let session = controller.load("rtsp://fast").await.unwrap();
    assert_eq!(
        session.resolved_url.as_deref(),
        Some("http://media.example/new")
    );

    first.await.unwrap().unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(
        snapshot.resolved_url.as_deref(),
        Some("http://media.example/new")
    );
    assert!(!player
        .loaded
        .lock()
        .unwrap()
        .contains(&"http://media.example/old".to_string()));
}
