use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::StatusCode;
use tokio::sync::broadcast;
use tokio_stream::Stream;

use api::event::{ElementEvent, PlayResult};

use crate::route::AppState;

pub fn route() -> Router<AppState> {
    Router::new()
        .route(api::path::PLAYER_EVENTS, post(events))
        .route(api::path::PLAYER_RESULTS, post(results))
        .route(api::path::PLAYER_COMMANDS, get(commands))
}

async fn events(State(state): State<AppState>, Json(report): Json<ElementEvent>) -> StatusCode {
    state.player.ingest(report);
    StatusCode::NO_CONTENT
}

async fn results(State(state): State<AppState>, Json(result): Json<PlayResult>) -> StatusCode {
    state.player.complete_play(result.seq, result.outcome);
    StatusCode::NO_CONTENT
}

async fn commands(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let mut commands = state.player.commands();
    let stream = async_stream::stream! {
        loop {
            match commands.recv().await {
                Ok(command) => {
                    if let Ok(event) = Event::default().json_data(&command) {
                        yield Ok(event);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };
    Sse::new(stream).keep_alive(KeepAlive::default())
}
