use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use api::request::{LoadStream, SetVolume};
use api::response::Session;

use crate::result::Result;
use crate::route::AppState;

pub fn route() -> Router<AppState> {
    Router::new()
        .route(api::path::STREAM_LOAD, post(load))
        .route(api::path::SESSION, get(session))
        .route(api::path::SESSION_PLAY, post(play))
        .route(api::path::SESSION_VOLUME, post(volume))
        .route(api::path::SESSION_MUTE, post(mute))
}

async fn load(
    State(state): State<AppState>,
    Json(req): Json<LoadStream>,
) -> Result<Json<Session>> {
    Ok(Json(state.session.load(&req.url).await?))
}

async fn session(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.snapshot())
}

async fn play(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.toggle_play().await)
}

async fn volume(State(state): State<AppState>, Json(req): Json<SetVolume>) -> Json<Session> {
    Json(state.session.set_volume(req.volume).await)
}

async fn mute(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.toggle_mute().await)
}
