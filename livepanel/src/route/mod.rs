use std::sync::Arc;

use crate::config::Config;
use crate::overlay::OverlayStore;
use crate::session::bridge::BridgePlayer;
use crate::session::SessionController;

pub mod overlay;
pub mod player;
pub mod stream;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub overlays: OverlayStore,
    pub session: Arc<SessionController>,
    pub player: Arc<BridgePlayer>,
}
