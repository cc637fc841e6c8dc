//! Checkout workflow: step machine, session state and submission.
//!
//! ```text
//! Summary ─► Patient ─► Address ─┬─(walk-in only)──────────► submit ─► Confirmed
//!                                └─► Schedule ─(home)──────► submit ─► Confirmed
//! ```
//!
//! Every forward move is gated by validation of the step being left.
//! Back moves are never gated.

mod flow;
mod session;
mod step;

pub use flow::*;
pub use session::*;
pub use step::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::payment::PaymentError;

/// Checkout errors.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Cannot go {event:?} from the {from} step")]
    IllegalTransition { from: CheckoutStep, event: StepEvent },

    #[error("At least one person is required")]
    RosterFloor,

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Collection date {date} is outside {earliest}..={latest}")]
    DateOutsideWindow {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("No bookable collection dates after {today}")]
    NoBookableDates { today: NaiveDate },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot submit from the {step} step")]
    NotReadyToSubmit { step: CheckoutStep },

    #[error("Please fix the highlighted fields")]
    ValidationFailed,

    #[error("Submission already in progress")]
    SubmissionInProgress,

    #[error("No submission in progress")]
    NoSubmissionInProgress,

    #[error("Booking already confirmed")]
    AlreadyConfirmed,

    #[error("Cart unavailable: {0}")]
    CartUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl<T> From<std::sync::PoisonError<T>> for CheckoutError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CheckoutError::CartUnavailable(format!("Lock poisoned: {}", e))
    }
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;
