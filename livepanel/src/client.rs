use std::time::Duration;

use anyhow::Result;
use http::StatusCode;

use api::request::{OverlayForm, StreamStart};
use api::response::{Data, Overlay, StreamStarted};

/// HTTP client for the remote collaborator.
///
/// Calls return `Err` on transport failures and non-success statuses so the
/// owners can apply their local-fallback rules; `delete_overlay` hands back
/// the raw status instead, the store needs to see 404.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    base: String,
}

impl Client {
    pub fn new(base: String, connect_timeout: Duration, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .unwrap();
        Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn overlays(&self) -> Result<Vec<Overlay>> {
        let response = self
            .client
            .get(self.url(api::path::OVERLAYS))
            .send()
            .await?
            .error_for_status()?;
        let data: Data<Vec<Overlay>> = response.json().await?;
        Ok(data.data)
    }

    pub async fn create_overlay(&self, form: &OverlayForm) -> Result<Overlay> {
        let response = self
            .client
            .post(self.url(api::path::OVERLAYS))
            .json(form)
            .send()
            .await?
            .error_for_status()?;
        let data: Data<Overlay> = response.json().await?;
        Ok(data.data)
    }

    pub async fn update_overlay(&self, id: &str, form: &OverlayForm) -> Result<Overlay> {
        let response = self
            .client
            .put(self.url(&api::path::overlay(id)))
            .json(form)
            .send()
            .await?
            .error_for_status()?;
        let data: Data<Overlay> = response.json().await?;
        Ok(data.data)
    }

    pub async fn delete_overlay(&self, id: &str) -> Result<StatusCode> {
        let response = self
            .client
            .delete(self.url(&api::path::overlay(id)))
            .send()
            .await?;
        Ok(response.status())
    }

    pub async fn start_stream(&self, rtsp_url: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url(api::path::STREAM_START))
            .json(&StreamStart {
                rtsp_url: rtsp_url.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        let started: StreamStarted = response.json().await?;
        Ok(started.stream_url)
    }
}
