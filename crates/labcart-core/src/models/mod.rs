//! Domain models for the booking storefront.

mod address;
mod cart_item;
mod order;
mod person;

pub use address::*;
pub use cart_item::*;
pub use order::*;
pub use person::*;
