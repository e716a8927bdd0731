use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::package::Package;
use crate::party::{ReceiverInfo, SenderInfo};
use crate::station::Station;

/// The price breakdown computed for a draft before submission.
///
/// Amounts are whole XOF francs. The surcharge applies once per package
/// beyond the first, as a percentage of the base price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingSnapshot {
    pub distance_km: f64,
    pub base_price: i64,
    pub package_count: u32,
    pub surcharge_percent: f64,
    pub surcharge_amount: i64,
    pub total_price: i64,
}

impl PricingSnapshot {
    /// Even split of the total across packages, rounded per package.
    ///
    /// Display figure only. Multiplying it back by the count may not
    /// reproduce the total.
    pub fn price_per_package(&self) -> i64 {
        if self.package_count == 0 {
            return 0;
        }
        (self.total_price as f64 / self.package_count as f64).round() as i64
    }
}

/// A fully validated order ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub sender: SenderInfo,
    pub receiver: ReceiverInfo,
    pub delivery_address: String,
    pub destination_station: Station,
    pub packages: Vec<Package>,
    pub distance_km: f64,
    pub pricing: PricingSnapshot,
}

/// A persisted order as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub id: Uuid,
    pub order_number: String,
    pub order: NewOrder,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(order_number: String, order: NewOrder) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_number,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the order payload and bump the update timestamp.
    pub fn replace_order(&mut self, order: NewOrder) {
        self.order = order;
        self.updated_at = Utc::now();
    }
}
