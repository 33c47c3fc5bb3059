use std::sync::{Arc, RwLock};

use http::StatusCode;
use tracing::debug;
use uuid::Uuid;

use api::request::OverlayForm;
use api::response::Overlay;

use crate::client::Client;

/// In-memory overlay collection, reconciled best-effort with the remote
/// resource. Remote failures degrade to local-only state and are never
/// surfaced; the collection keeps insertion order.
#[derive(Clone)]
pub struct OverlayStore {
    list: Arc<RwLock<Vec<Overlay>>>,
    client: Client,
}

impl OverlayStore {
    pub fn new(client: Client) -> Self {
        Self {
            list: Arc::new(RwLock::new(Vec::new())),
            client,
        }
    }

    pub fn list(&self) -> Vec<Overlay> {
        self.list.read().unwrap().clone()
    }

    /// Replaces the collection with the remote one; an unreachable remote
    /// leaves the local collection at its current value.
    pub async fn sync(&self) {
        match self.client.overlays().await {
            Ok(overlays) => *self.list.write().unwrap() = overlays,
            Err(err) => debug!("using local overlay storage: {}", err),
        }
    }

    /// Appends exactly one record: the remote-returned one when the create
    /// persisted, the locally-built candidate otherwise.
    pub async fn create(&self, form: OverlayForm) -> Overlay {
        let overlay = match self.client.create_overlay(&form).await {
            Ok(remote) => remote,
            Err(err) => {
                debug!("overlay create fell back to local: {}", err);
                from_form(Uuid::new_v4().to_string(), &form)
            }
        };
        self.list.write().unwrap().push(overlay.clone());
        overlay
    }

    /// Replaces the matching record with the remote version, or with a merge
    /// of the previous record and the form when the remote call fails. An
    /// unknown id is a no-op and the collection size never changes.
    pub async fn update(&self, id: &str, form: OverlayForm) -> Option<Overlay> {
        let replacement = match self.client.update_overlay(id, &form).await {
            Ok(remote) => remote,
            Err(err) => {
                debug!("overlay update fell back to local merge: {}", err);
                from_form(id.to_string(), &form)
            }
        };
        let mut updated = None;
        for overlay in self.list.write().unwrap().iter_mut() {
            if overlay.id == id {
                *overlay = replacement.clone();
                updated = Some(replacement.clone());
            }
        }
        updated
    }

    /// Success and 404 both count as a deletion, and an unreachable remote
    /// removes the record as well. Any other status leaves it in place.
    pub async fn delete(&self, id: &str) {
        let removed = match self.client.delete_overlay(id).await {
            Ok(status) => status.is_success() || status == StatusCode::NOT_FOUND,
            Err(err) => {
                debug!("overlay delete fell back to local: {}", err);
                true
            }
        };
        if removed {
            self.list.write().unwrap().retain(|overlay| overlay.id != id);
        }
    }
}

fn from_form(id: String, form: &OverlayForm) -> Overlay {
    Overlay {
        id,
        kind: form.kind,
        content: form.content.clone(),
        x: form.x,
        y: form.y,
        width: form.width,
        height: form.height,
        font_size: form.font_size,
        color: form.color.clone(),
        background_color: form.background_color.clone(),
    }
}
