//! Shopping cart for diagnostic tests.

mod store;

pub use store::*;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Cart shared between the checkout flow and the views that display it.
pub type SharedCart = Arc<Mutex<CartStore>>;

/// Wrap a cart store in a shareable handle.
pub fn shared(store: CartStore) -> SharedCart {
    Arc::new(Mutex::new(store))
}

/// Severity of a transient cart notice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Toast text shown after an add-to-cart attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartNotice {
    pub kind: NoticeKind,
    pub message: String,
}

impl CartNotice {
    /// Notice for the result of [`CartStore::add_item`].
    pub fn for_add(added: bool) -> Self {
        if added {
            Self {
                kind: NoticeKind::Success,
                message: "Test added to cart successfully!".into(),
            }
        } else {
            Self {
                kind: NoticeKind::Error,
                message: "This test is already in your cart".into(),
            }
        }
    }
}
