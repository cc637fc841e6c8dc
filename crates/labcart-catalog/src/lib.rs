//! Lab directory records for the booking storefront.
//!
//! This crate models the records served by the lab directory service
//! (`GET /labs?city=…`, `GET /labs/{id}`) and the static search suggestions
//! shown while a user types a location or a test name. Enable the `http`
//! feature for a thin async client over the directory service.

pub mod records;
pub mod suggestions;

#[cfg(feature = "http")]
pub mod client;

pub use records::*;
pub use suggestions::*;

#[cfg(feature = "http")]
pub use client::LabDirectoryClient;
