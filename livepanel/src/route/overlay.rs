use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use http::StatusCode;

use api::request::OverlayForm;
use api::response::{Data, Overlay};

use crate::error::AppError;
use crate::result::Result;
use crate::route::AppState;

pub fn route() -> Router<AppState> {
    Router::new()
        .route(api::path::OVERLAYS, get(index).post(create))
        .route("/api/overlays/:id", put(update).delete(remove))
}

async fn index(State(state): State<AppState>) -> Result<Json<Data<Vec<Overlay>>>> {
    Ok(Json(Data {
        data: state.overlays.list(),
    }))
}

async fn create(
    State(state): State<AppState>,
    Json(form): Json<OverlayForm>,
) -> Result<(StatusCode, Json<Data<Overlay>>)> {
    let overlay = state.overlays.create(form).await;
    Ok((StatusCode::CREATED, Json(Data { data: overlay })))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<OverlayForm>,
) -> Result<Json<Data<Overlay>>> {
    match state.overlays.update(&id, form).await {
        Some(overlay) => Ok(Json(Data { data: overlay })),
        None => Err(AppError::OverlayNotFound),
    }
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    state.overlays.delete(&id).await;
    Ok(StatusCode::NO_CONTENT)
}
