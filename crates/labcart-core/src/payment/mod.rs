//! Payment submission.
//!
//! Checkout charges through a [`PaymentGateway`]; the shipped
//! [`SimulatedGateway`] stands in for a real provider.

mod gateway;
mod policy;

pub use gateway::*;
pub use policy::*;

use thiserror::Error;

/// Payment errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Payment gateway timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

impl PaymentError {
    /// Whether retrying the same charge may succeed.
    pub fn is_transient(&self) -> bool {
        !matches!(self, PaymentError::Declined(_))
    }
}

pub type PaymentResult<T> = Result<T, PaymentError>;
