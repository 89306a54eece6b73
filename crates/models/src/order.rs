use serde::{Deserialize, Serialize};

use crate::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "ServiceID")]
    pub service_id: Id,
    #[serde(rename = "ConsumerID")]
    pub consumer_id: Id,
    #[serde(rename = "Status")]
    pub status: OrderStatus,
}

impl Order {
    pub fn pending(id: Id, service_id: Id, consumer_id: Id) -> Self {
        Self { id, service_id, consumer_id, status: OrderStatus::Pending }
    }

    /// Overwrites the status; completing an already completed order is a no-op.
    pub fn complete(&mut self) {
        self.status = OrderStatus::Completed;
    }
}
