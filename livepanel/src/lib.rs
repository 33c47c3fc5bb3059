use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Request;
use axum::response::IntoResponse;
use axum::Router;
use http::{StatusCode, Uri};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info_span};

use crate::client::Client;
use crate::config::Config;
use crate::overlay::OverlayStore;
use crate::route::AppState;
use crate::session::bridge::BridgePlayer;
use crate::session::SessionController;

pub mod client;
pub mod config;
pub mod constant;
pub mod error;
pub mod log;
pub mod overlay;
pub mod result;
pub mod route;
pub mod session;

#[cfg(feature = "webui")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../assets/livepanel/"]
struct Assets;

pub async fn serve<F>(cfg: Config, listener: TcpListener, signal: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let client = Client::new(
        cfg.upstream.url.clone(),
        Duration::from_millis(cfg.upstream.connect_timeout),
        Duration::from_millis(cfg.upstream.timeout),
    );

    let overlays = OverlayStore::new(client.clone());
    tokio::spawn({
        let overlays = overlays.clone();
        async move { overlays.sync().await }
    });

    let player = Arc::new(BridgePlayer::new(Duration::from_millis(
        cfg.stream.play_result_timeout.0,
    )));
    let session = Arc::new(SessionController::new(
        player.clone(),
        client,
        cfg.stream.fallback_url.clone(),
        Duration::from_millis(cfg.stream.ready_timeout.0),
    ));
    tokio::spawn(session.clone().run_events());

    let app_state = AppState {
        config: cfg.clone(),
        overlays,
        session,
        player,
    };

    let mut app = Router::new()
        .merge(route::overlay::route())
        .merge(route::stream::route())
        .merge(route::player::route())
        .with_state(app_state)
        .layer(if cfg.http.cors {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        })
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                info_span!(
                    "http_request",
                    uri = ?request.uri(),
                    method = ?request.method(),
                )
            }),
        );

    app = app.fallback(static_handler);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .unwrap_or_else(|e| error!("Application error: {e}"));
}

#[cfg(feature = "webui")]
async fn static_handler(uri: Uri) -> impl IntoResponse {
    use http::header;

    let mut path = uri.path().trim_start_matches('/');
    if path.is_empty() {
        path = "index.html";
    }
    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

#[cfg(not(feature = "webui"))]
async fn static_handler(_uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}
