use async_trait::async_trait;
use uuid::Uuid;

use crate::order::{NewOrder, OrderRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence trait for orders. The wizard only talks to this interface,
/// so a backend can be swapped without touching the flow.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order and return the stored record.
    async fn create(&self, order: NewOrder) -> Result<OrderRecord, StoreError>;

    /// Fetch one order by id.
    async fn get(&self, id: Uuid) -> Result<Option<OrderRecord>, StoreError>;

    /// List all orders, newest first.
    async fn list(&self) -> Result<Vec<OrderRecord>, StoreError>;

    /// Replace a stored order.
    async fn update(&self, record: OrderRecord) -> Result<OrderRecord, StoreError>;

    /// Remove an order by id.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
