use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderScope};
use crate::store::{StoreError, StoreRequest};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use tracking_core::{OrderUpdater, StatusUpdate, UpdateError};

/// Client for interacting with the order store actor.
///
/// Cheap to clone. The actor shuts down once every clone has been dropped.
#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl OrderStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, StoreError> {
        debug!(?params, "create_order called");
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        scope: OrderScope,
        filter: OrderFilter,
    ) -> Result<Vec<Order>, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::List {
            scope,
            filter,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, update: StatusUpdate) -> Result<Order, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::SetStatus { update, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: OrderId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}

#[async_trait]
impl OrderUpdater for OrderStoreClient {
    async fn update_status(&self, update: StatusUpdate) -> Result<(), UpdateError> {
        self.set_status(update).await.map(|_| ()).map_err(UpdateError::from)
    }
}
