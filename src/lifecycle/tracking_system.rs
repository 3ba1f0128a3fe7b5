use crate::clients::{HttpOrderUpdater, OrderStoreClient, OrderTrackingClient};
use crate::config::TrackingConfig;
use crate::model::Viewer;
use std::sync::Arc;
use tracing::{error, info};
use tracking_core::{OrderUpdater, StatusCatalog};

/// Status updates can go to the store itself or to a remote order service.
pub type SharedUpdater = Arc<dyn OrderUpdater>;

/// Owns the running order store and the clients wired to it.
///
/// # Example
///
/// ```ignore
/// let system = TrackingSystem::new(&TrackingConfig::from_env()?);
/// let id = system.store_client.create_order(OrderCreate::new(7, 89_900.0)).await?;
/// system.tracking_client.advance(id, &system.viewer(1)).await?;
/// system.shutdown().await?;
/// ```
pub struct TrackingSystem {
    pub store_client: OrderStoreClient,
    pub tracking_client: OrderTrackingClient<SharedUpdater>,
    seller_user_id: u64,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TrackingSystem {
    /// Starts the store and writes status changes straight into it.
    pub fn new(config: &TrackingConfig) -> Self {
        Self::build(config, |store| Arc::new(store.clone()))
    }

    /// Starts the store and sends status changes to the order service at
    /// `config.api`.
    pub fn remote(config: &TrackingConfig) -> Result<Self, reqwest::Error> {
        let updater = HttpOrderUpdater::new(&config.api)?;
        info!(base_url = updater.base_url(), "Using remote order service");
        Ok(Self::build(config, move |_| Arc::new(updater)))
    }

    /// Starts the store with a caller-supplied updater.
    pub fn with_updater(config: &TrackingConfig, updater: SharedUpdater) -> Self {
        Self::build(config, move |_| updater)
    }

    fn build(
        config: &TrackingConfig,
        updater: impl FnOnce(&OrderStoreClient) -> SharedUpdater,
    ) -> Self {
        let catalog = Arc::new(StatusCatalog::standard());
        let (store_actor, store_client) = crate::store::new(config.store_buffer, &catalog);
        let handle = tokio::spawn(store_actor.run());

        let updater = updater(&store_client);
        let tracking_client = OrderTrackingClient::new(store_client.clone(), catalog, updater);

        Self {
            store_client,
            tracking_client,
            seller_user_id: config.seller_user_id,
            handles: vec![handle],
        }
    }

    /// The viewer for a signed-in user, with the role set from the configured seller id.
    pub fn viewer(&self, user_id: u64) -> Viewer {
        Viewer::new(user_id, self.seller_user_id)
    }

    /// A customer account that is never the seller.
    pub fn sample_customer(&self) -> Viewer {
        Viewer::customer(self.seller_user_id.wrapping_add(1))
    }

    /// Drops every client and waits for the store actor to stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.tracking_client);
        drop(self.store_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
