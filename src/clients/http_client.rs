//! [`OrderUpdater`] backed by the JosniShop order service.
//!
//! One `PUT {base_url}/pedidos/{id}` with body `{"estado": "<name>"}` per
//! update. The service has no conditional write, so `StatusUpdate::expected`
//! is not sent.

use crate::config::ApiConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use tracking_core::{OrderId, OrderUpdater, StatusUpdate, UpdateError};

#[derive(Serialize)]
struct EstadoBody<'a> {
    estado: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpOrderUpdater {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderUpdater {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn order_url(&self, id: OrderId) -> String {
        format!("{}/pedidos/{}", self.base_url, id)
    }
}

#[async_trait]
impl OrderUpdater for HttpOrderUpdater {
    #[instrument(skip(self), fields(order_id = %update.order_id))]
    async fn update_status(&self, update: StatusUpdate) -> Result<(), UpdateError> {
        let url = self.order_url(update.order_id);
        debug!(%url, estado = %update.estado, "PUT");

        let response = self
            .client
            .put(&url)
            .json(&EstadoBody {
                estado: &update.estado,
            })
            .send()
            .await
            .map_err(|e| UpdateError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpdateError::NotFound(update.order_id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "Order service rejected update");
            return Err(UpdateError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
