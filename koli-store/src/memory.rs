use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use koli_core::{NewOrder, OrderRecord, OrderStore, StoreError};

/// Order storage backed by a process-local map. Serves development and
/// tests; the hosted backend implements the same trait elsewhere.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<Uuid, OrderRecord>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a customer-facing order number.
    fn generate_order_number(&self) -> String {
        // Format: KD{yyyymmdd}-{4 random digits}. Readable over the phone,
        // not globally unique across devices.
        let date = Utc::now().format("%Y%m%d");
        let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
        format!("KD{}-{:04}", date, suffix)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let record = OrderRecord::new(self.generate_order_number(), order);
        let mut orders = self.orders.write().await;
        orders.insert(record.id, record.clone());
        info!("Order {} stored as {}", record.id, record.order_number);
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<OrderRecord>, StoreError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let orders = self.orders.read().await;
        let mut records: Vec<_> = orders.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn update(&self, record: OrderRecord) -> Result<OrderRecord, StoreError> {
        let mut orders = self.orders.write().await;
        let Some(existing) = orders.get_mut(&record.id) else {
            return Err(StoreError::NotFound(record.id));
        };
        // Only the payload is writable; id, number and created_at stay
        existing.replace_order(record.order);
        Ok(existing.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        orders
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
