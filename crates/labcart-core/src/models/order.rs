//! Booking order and confirmation models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::address::{CollectionAddress, CollectionSchedule};
use super::cart_item::CartItem;
use super::person::Patient;

/// A fully validated booking, assembled when submission starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Checkout session that produced this order
    pub session_id: String,
    pub items: Vec<CartItem>,
    pub patients: Vec<Patient>,
    pub address: CollectionAddress,
    /// Present when the order contains a home collection item
    pub schedule: Option<CollectionSchedule>,
    /// Sum of item prices in the smallest currency unit
    pub total: u64,
}

impl Order {
    /// Serialize to canonical JSON for idempotency hashing.
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Idempotency key for charging this order.
    ///
    /// Identical orders from the same session hash to the same key, so a
    /// retried charge is recognised by the gateway.
    pub fn idempotency_key(&self) -> Result<String, serde_json::Error> {
        let canonical = self.to_canonical_json()?;
        let mut hasher = Sha256::new();
        hasher.update(self.session_id.as_bytes());
        hasher.update(b":");
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Confirmation reported after a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Confirmation {
    /// Locally generated booking id
    pub booking_id: String,
    /// Gateway receipt reference
    pub payment_reference: String,
    pub amount: u64,
    pub item_count: usize,
    pub patient_count: usize,
    pub schedule: Option<CollectionSchedule>,
    pub confirmed_at: DateTime<Utc>,
}

impl Confirmation {
    /// Build a confirmation for a charged order.
    pub fn for_order(order: &Order, payment_reference: impl Into<String>) -> Self {
        Self {
            booking_id: uuid::Uuid::new_v4().to_string(),
            payment_reference: payment_reference.into(),
            amount: order.total,
            item_count: order.items.len(),
            patient_count: order.patients.len(),
            schedule: order.schedule.clone(),
            confirmed_at: Utc::now(),
        }
    }
}
