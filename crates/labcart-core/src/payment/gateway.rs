//! Payment gateway abstraction and the simulated gateway.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PaymentError, PaymentResult};

/// Proof of a successful charge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    /// Gateway reference for the charge
    pub reference: String,
    pub amount: u64,
    pub idempotency_key: String,
    pub charged_at: DateTime<Utc>,
}

/// External payment collaborator.
///
/// Implementations must treat a repeated `idempotency_key` as the same charge.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: u64, idempotency_key: &str) -> PaymentResult<Receipt>;
}

/// Gateway that approves every charge after a fixed delay.
pub struct SimulatedGateway {
    latency: Duration,
    receipts: Mutex<HashMap<String, Receipt>>,
}

impl SimulatedGateway {
    /// Default simulated latency.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            receipts: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct charges made.
    pub fn charge_count(&self) -> usize {
        self.receipts.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, amount: u64, idempotency_key: &str) -> PaymentResult<Receipt> {
        tokio::time::sleep(self.latency).await;

        let mut receipts = self
            .receipts
            .lock()
            .map_err(|e| PaymentError::Unavailable(format!("Lock poisoned: {}", e)))?;

        if let Some(existing) = receipts.get(idempotency_key) {
            tracing::debug!(idempotency_key, "replaying simulated charge");
            return Ok(existing.clone());
        }

        let receipt = Receipt {
            reference: format!("sim-{}", uuid::Uuid::new_v4()),
            amount,
            idempotency_key: idempotency_key.to_string(),
            charged_at: Utc::now(),
        };
        receipts.insert(idempotency_key.to_string(), receipt.clone());
        Ok(receipt)
    }
}
