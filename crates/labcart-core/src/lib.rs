//! Labcart Core Library
//!
//! Cart and checkout core of a pathology-lab booking storefront.
//!
//! # Architecture
//!
//! ```text
//! Lab detail page ──add_item──► CartStore ──subscribe──► header badge / cart page
//!                                   │
//!                                   │ items, total, has_home_collection
//!                                   ▼
//!                     ┌─────────────────────────────┐
//!                     │        CheckoutFlow         │
//!                     │ Summary → Patient → Address │
//!                     │        (→ Schedule)         │
//!                     └──────────────┬──────────────┘
//!                                    │ Order + idempotency key
//!                                    ▼
//!                            PaymentGateway::charge
//!                                    │
//!                     ┌──────────────┴──────────────┐
//!                     ▼                             ▼
//!          success: remove paid          failure: keep cart,
//!          items, Confirmed +            retryable failure shown
//!          Confirmation
//! ```
//!
//! # Core Principle
//!
//! **Items leave the cart only after a confirmed charge pays for them.** A
//! failed, timed-out or cancelled submission never loses the user's selection.
//!
//! # Modules
//!
//! - [`models`]: Domain types (CartItem, PersonDraft, CollectionAddress, Order, etc.)
//! - [`cart`]: Cart store with change notification
//! - [`validation`]: Field rules and per-form validators
//! - [`checkout`]: Step machine, session state and submission
//! - [`payment`]: Gateway trait, simulated gateway, retry policy
//! - [`config`]: TOML configuration

pub mod cart;
pub mod checkout;
pub mod config;
pub mod models;
pub mod payment;
pub mod validation;

// Re-export commonly used types
pub use cart::{CartEvent, CartStore, SharedCart};
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutStep, StepOutcome};
pub use config::StorefrontConfig;
pub use models::{
    AddressField, CartItem, CartKey, CollectionSlot, Confirmation, FulfillmentType, Order,
    PersonField,
};
pub use payment::{PaymentError, PaymentGateway, SimulatedGateway, SubmissionPolicy};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum StorefrontError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Checkout error: {0}")]
    CheckoutError(String),

    #[error("Payment error: {0}")]
    PaymentError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<CheckoutError> for StorefrontError {
    fn from(e: CheckoutError) -> Self {
        let message = e.to_string();
        match e {
            CheckoutError::Payment(err) => StorefrontError::PaymentError(err.to_string()),
            CheckoutError::ValidationFailed => StorefrontError::ValidationFailed(message),
            CheckoutError::PersonNotFound(_) => StorefrontError::NotFound(message),
            CheckoutError::InvalidInput(_) | CheckoutError::DateOutsideWindow { .. } => {
                StorefrontError::InvalidInput(message)
            }
            CheckoutError::CartUnavailable(_) | CheckoutError::Serialization(_) => {
                StorefrontError::InternalError(message)
            }
            _ => StorefrontError::CheckoutError(message),
        }
    }
}

impl From<config::ConfigError> for StorefrontError {
    fn from(e: config::ConfigError) -> Self {
        StorefrontError::ConfigError(e.to_string())
    }
}

impl From<labcart_catalog::CatalogError> for StorefrontError {
    fn from(e: labcart_catalog::CatalogError) -> Self {
        StorefrontError::CatalogError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for StorefrontError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StorefrontError::InternalError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install the `tracing` subscriber with an `EnvFilter` directive such as
/// `labcart_core=debug`. Calling it again is a no-op.
#[uniffi::export]
pub fn init_logging(filter: String) -> Result<(), StorefrontError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .map_err(|e| StorefrontError::InvalidInput(e.to_string()))?;
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialised");
    }
    Ok(())
}

/// Open a storefront from an optional TOML document. `None` uses defaults.
#[uniffi::export]
pub fn open_storefront(config_toml: Option<String>) -> Result<Arc<StorefrontCore>, StorefrontError> {
    let config = match config_toml {
        Some(content) => StorefrontConfig::from_toml_str(&content)?,
        None => StorefrontConfig::default(),
    };
    Ok(Arc::new(StorefrontCore::with_config(config)))
}

/// Open a storefront from a TOML file, or defaults when the file is absent.
#[uniffi::export]
pub fn open_storefront_from_path(path: String) -> Result<Arc<StorefrontCore>, StorefrontError> {
    let config = StorefrontConfig::load(std::path::Path::new(&path))
        .map_err(|e| StorefrontError::ConfigError(e.to_string()))?;
    Ok(Arc::new(StorefrontCore::with_config(config)))
}

/// Field errors for the partner registration form; empty when valid.
#[uniffi::export]
pub fn check_lab_registration(form: FfiLabRegistration) -> Vec<FfiFieldError> {
    let form = validation::LabRegistration {
        lab_name: form.lab_name,
        owner_name: form.owner_name,
        email: form.email,
        phone: form.phone,
    };
    match validation::validate_lab_registration(&form) {
        Ok(()) => Vec::new(),
        Err(e) => field_errors([
            ("lab_name", e.lab_name),
            ("owner_name", e.owner_name),
            ("email", e.email),
            ("phone", e.phone),
        ]),
    }
}

/// Field errors for a lab review; empty when valid.
#[uniffi::export]
pub fn check_review(name: String, rating: u8, comment: String) -> Vec<FfiFieldError> {
    let review = validation::ReviewDraft {
        name,
        rating,
        comment,
    };
    match validation::validate_review(&review) {
        Ok(()) => Vec::new(),
        Err(e) => field_errors([
            ("name", e.name),
            ("rating", e.rating),
            ("comment", e.comment),
        ]),
    }
}

fn field_errors<const N: usize>(fields: [(&str, Option<String>); N]) -> Vec<FfiFieldError> {
    fields
        .into_iter()
        .filter_map(|(field, message)| {
            message.map(|message| FfiFieldError {
                field: field.to_string(),
                message,
            })
        })
        .collect()
}

// =========================================================================
// Callback Interface
// =========================================================================

/// Host-side listener for cart changes.
///
/// Called synchronously while the cart is locked; implementations must not
/// call back into the storefront from inside the callback.
#[uniffi::export(callback_interface)]
pub trait CartObserver: Send + Sync {
    fn on_cart_changed(&self, count: u32, total: u64);
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe storefront wrapper for FFI.
#[derive(uniffi::Object)]
pub struct StorefrontCore {
    cart: SharedCart,
    flow: Mutex<CheckoutFlow>,
    gateway: Arc<dyn PaymentGateway>,
    policy: SubmissionPolicy,
}

impl StorefrontCore {
    /// Build a storefront with the simulated gateway described by `config`.
    pub fn with_config(config: StorefrontConfig) -> Self {
        let gateway = Arc::new(SimulatedGateway::new(Duration::from_millis(
            config.payment.simulated_latency_ms,
        )));
        Self::with_gateway(config, gateway)
    }

    /// Build a storefront that charges through `gateway`.
    pub fn with_gateway(config: StorefrontConfig, gateway: Arc<dyn PaymentGateway>) -> Self {
        let cart = cart::shared(CartStore::new());
        let flow = CheckoutFlow::with_schedule_config(cart.clone(), config.schedule.clone());
        Self {
            cart,
            flow: Mutex::new(flow),
            gateway,
            policy: SubmissionPolicy::from(&config.payment),
        }
    }
}

#[uniffi::export]
impl StorefrontCore {
    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Add an item; the notice carries the toast text.
    pub fn add_item(&self, item: FfiCartItem) -> Result<FfiCartNotice, StorefrontError> {
        let item = CartItem::try_from(item)?;
        let added = self.cart.lock()?.add_item(item);
        Ok(cart::CartNotice::for_add(added).into())
    }

    /// Add a test listed on a lab detail record (`GET /labs/{id}` JSON).
    pub fn add_lab_test(
        &self,
        lab_details_json: String,
        test_id: String,
        fulfillment: String,
    ) -> Result<FfiCartNotice, StorefrontError> {
        let details = labcart_catalog::parse_lab_details(&lab_details_json)?;
        let test = details
            .find_test(&test_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("Test {} at {}", test_id, details.name)))?;
        let fulfillment = parse_fulfillment(&fulfillment)?;

        let item = CartItem::from_lab_test(&details.name, test, fulfillment);
        let added = self.cart.lock()?.add_item(item);
        Ok(cart::CartNotice::for_add(added).into())
    }

    /// Remove the item with this id and fulfillment type.
    pub fn remove_item(&self, id: String, fulfillment: String) -> Result<bool, StorefrontError> {
        let key = CartKey::new(id, parse_fulfillment(&fulfillment)?);
        Ok(self.cart.lock()?.remove_item(&key).is_some())
    }

    /// Empty the cart; returns the number of items removed.
    pub fn clear_cart(&self) -> Result<u32, StorefrontError> {
        Ok(self.cart.lock()?.clear() as u32)
    }

    pub fn cart_items(&self) -> Result<Vec<FfiCartItem>, StorefrontError> {
        let cart = self.cart.lock()?;
        Ok(cart.items().iter().cloned().map(Into::into).collect())
    }

    /// Cart items grouped under their lab, in first-added order.
    pub fn cart_groups(&self) -> Result<Vec<FfiLabGroup>, StorefrontError> {
        let cart = self.cart.lock()?;
        Ok(cart.group_by_lab().into_iter().map(Into::into).collect())
    }

    pub fn cart_total(&self) -> Result<u64, StorefrontError> {
        Ok(self.cart.lock()?.total())
    }

    pub fn cart_count(&self) -> Result<u32, StorefrontError> {
        Ok(self.cart.lock()?.count() as u32)
    }

    /// Register a cart listener; returns a handle for `unsubscribe_cart`.
    pub fn subscribe_cart(&self, observer: Box<dyn CartObserver>) -> Result<u64, StorefrontError> {
        let mut cart = self.cart.lock()?;
        Ok(cart.subscribe(move |event: &CartEvent| {
            observer.on_cart_changed(event.count as u32, event.total)
        }))
    }

    pub fn unsubscribe_cart(&self, subscription: u64) -> Result<bool, StorefrontError> {
        Ok(self.cart.lock()?.unsubscribe(subscription))
    }

    // =========================================================================
    // Checkout Navigation
    // =========================================================================

    /// Snapshot of the checkout for rendering.
    pub fn checkout_state(&self) -> Result<FfiCheckoutState, StorefrontError> {
        let flow = self.flow.lock()?;
        let has_home = flow.has_home_collection()?;
        let session = flow.session();

        Ok(FfiCheckoutState {
            step: session.step().to_string(),
            visible_steps: CheckoutStep::visible_steps(has_home)
                .iter()
                .map(ToString::to_string)
                .collect(),
            has_home_collection: has_home,
            people: session.people().iter().cloned().map(Into::into).collect(),
            address: session.address().clone().into(),
            collection_date: session
                .schedule()
                .collection_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
            collection_slot: session.schedule().collection_time.map(|s| s.label()),
            is_processing: session.is_processing(),
            confirmation: session.confirmation().cloned().map(Into::into),
            last_failure: session.last_failure().map(|f| f.message.clone()),
            failure_retryable: session.last_failure().is_some_and(|f| f.retryable),
        })
    }

    pub fn go_next(&self) -> Result<FfiStepOutcome, StorefrontError> {
        Ok(self.flow.lock()?.go_next()?.into())
    }

    /// Returns the step now shown.
    pub fn go_back(&self) -> Result<String, StorefrontError> {
        Ok(self.flow.lock()?.go_back()?.to_string())
    }

    /// Validation errors currently shown.
    pub fn checkout_errors(&self) -> Result<FfiCheckoutErrors, StorefrontError> {
        let flow = self.flow.lock()?;
        let session = flow.session();
        let errors = flow.errors();

        let persons = session
            .people()
            .iter()
            .filter_map(|p| {
                errors.person(&p.id).map(|e| FfiPersonErrors {
                    person_id: p.id.clone(),
                    name: e.name.clone(),
                    age: e.age.clone(),
                    phone: e.phone.clone(),
                })
            })
            .collect();

        Ok(FfiCheckoutErrors {
            persons,
            address: errors.address.address.clone(),
            city: errors.address.city.clone(),
            pincode: errors.address.pincode.clone(),
            collection_date: errors.schedule.date.clone(),
            collection_slot: errors.schedule.time.clone(),
        })
    }

    /// Start a new checkout session. The cart is kept.
    pub fn abandon_checkout(&self) -> Result<(), StorefrontError> {
        Ok(self.flow.lock()?.abandon()?)
    }

    // =========================================================================
    // Checkout Forms
    // =========================================================================

    /// Add a blank person; returns the new person id.
    pub fn add_person(&self) -> Result<String, StorefrontError> {
        Ok(self.flow.lock()?.add_person()?)
    }

    pub fn remove_person(&self, person_id: String) -> Result<(), StorefrontError> {
        Ok(self.flow.lock()?.remove_person(&person_id)?)
    }

    pub fn update_person(
        &self,
        person_id: String,
        field: FfiPersonField,
        value: String,
    ) -> Result<(), StorefrontError> {
        Ok(self
            .flow
            .lock()?
            .update_person(&person_id, field.into(), &value)?)
    }

    pub fn set_address_field(
        &self,
        field: FfiAddressField,
        value: String,
    ) -> Result<(), StorefrontError> {
        Ok(self.flow.lock()?.set_address_field(field.into(), &value)?)
    }

    /// Selectable collection dates as `YYYY-MM-DD`.
    pub fn booking_dates(&self) -> Result<Vec<String>, StorefrontError> {
        let window = self.flow.lock()?.booking_window()?;
        Ok(window
            .dates()
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect())
    }

    /// Selectable collection slots as display labels.
    pub fn collection_slots(&self) -> Vec<String> {
        CollectionSlot::all().iter().map(|s| s.label()).collect()
    }

    /// Pick a collection date given as `YYYY-MM-DD`.
    pub fn set_collection_date(&self, date: String) -> Result<(), StorefrontError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|e| StorefrontError::InvalidInput(format!("{}: {}", date, e)))?;
        Ok(self.flow.lock()?.set_collection_date(date)?)
    }

    /// Pick a collection slot by label (`08:30 AM`) or 24-hour time (`08:30`).
    pub fn set_collection_slot(&self, slot: String) -> Result<(), StorefrontError> {
        let slot = slot
            .parse::<CollectionSlot>()
            .map_err(StorefrontError::InvalidInput)?;
        Ok(self.flow.lock()?.set_collection_time(slot)?)
    }

    // =========================================================================
    // Search Suggestions
    // =========================================================================

    pub fn location_suggestions(&self, query: String) -> Vec<String> {
        labcart_catalog::location_suggestions(&query)
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn test_suggestions(&self, query: String) -> Vec<String> {
        labcart_catalog::test_suggestions(&query)
            .into_iter()
            .map(String::from)
            .collect()
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl StorefrontCore {
    /// Charge the order and confirm the booking.
    ///
    /// The checkout lock is released while the gateway call is in flight.
    /// If the host cancels the call mid-charge the submission is cancelled
    /// too, leaving a retryable failure.
    pub async fn submit(&self) -> Result<FfiConfirmation, StorefrontError> {
        let pending = self.flow.lock()?.begin_submission()?;
        let mut in_flight = SubmitGuard {
            flow: &self.flow,
            settled: false,
        };

        let outcome = payment::charge_with_policy(
            self.gateway.as_ref(),
            pending.amount(),
            pending.idempotency_key(),
            &self.policy,
        )
        .await;
        in_flight.settled = true;

        let mut flow = self.flow.lock()?;
        match outcome {
            Ok(receipt) => Ok(flow.complete_submission(pending, &receipt)?.into()),
            Err(err) => {
                flow.fail_submission(&err);
                Err(CheckoutError::Payment(err).into())
            }
        }
    }
}

/// Cancels the pending submission when `submit` is dropped before settling.
struct SubmitGuard<'a> {
    flow: &'a Mutex<CheckoutFlow>,
    settled: bool,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        match self.flow.lock() {
            Ok(mut flow) => {
                flow.cancel_submission();
            }
            Err(e) => tracing::error!(error = %e, "cannot cancel submission"),
        }
    }
}

fn parse_fulfillment(value: &str) -> Result<FulfillmentType, StorefrontError> {
    value
        .parse::<FulfillmentType>()
        .map_err(StorefrontError::InvalidInput)
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe cart item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub pathology_name: String,
    /// `walk-in`, `home-collection` or `package`
    pub fulfillment: String,
}

impl From<CartItem> for FfiCartItem {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            pathology_name: item.pathology_name,
            fulfillment: item.fulfillment.to_string(),
        }
    }
}

impl TryFrom<FfiCartItem> for CartItem {
    type Error = StorefrontError;

    fn try_from(item: FfiCartItem) -> Result<Self, Self::Error> {
        Ok(CartItem::new(
            item.id,
            item.name,
            item.price,
            item.pathology_name,
            parse_fulfillment(&item.fulfillment)?,
        ))
    }
}

/// FFI-safe add-to-cart notice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCartNotice {
    pub added: bool,
    pub message: String,
}

impl From<cart::CartNotice> for FfiCartNotice {
    fn from(notice: cart::CartNotice) -> Self {
        Self {
            added: notice.kind == cart::NoticeKind::Success,
            message: notice.message,
        }
    }
}

/// FFI-safe lab group.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabGroup {
    pub pathology_name: String,
    pub items: Vec<FfiCartItem>,
    pub subtotal: u64,
}

impl From<cart::LabGroup> for FfiLabGroup {
    fn from(group: cart::LabGroup) -> Self {
        Self {
            pathology_name: group.pathology_name,
            items: group.items.into_iter().map(Into::into).collect(),
            subtotal: group.subtotal,
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiPersonField {
    Name,
    Age,
    Gender,
    Phone,
}

impl From<FfiPersonField> for PersonField {
    fn from(field: FfiPersonField) -> Self {
        match field {
            FfiPersonField::Name => PersonField::Name,
            FfiPersonField::Age => PersonField::Age,
            FfiPersonField::Gender => PersonField::Gender,
            FfiPersonField::Phone => PersonField::Phone,
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiAddressField {
    Address,
    City,
    Pincode,
    Landmark,
}

impl From<FfiAddressField> for AddressField {
    fn from(field: FfiAddressField) -> Self {
        match field {
            FfiAddressField::Address => AddressField::Address,
            FfiAddressField::City => AddressField::City,
            FfiAddressField::Pincode => AddressField::Pincode,
            FfiAddressField::Landmark => AddressField::Landmark,
        }
    }
}

/// FFI-safe roster entry, as typed.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPerson {
    pub id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
}

impl From<models::PersonDraft> for FfiPerson {
    fn from(person: models::PersonDraft) -> Self {
        Self {
            id: person.id,
            name: person.name,
            age: person.age,
            gender: person.gender.as_str().to_string(),
            phone: person.phone,
        }
    }
}

/// FFI-safe collection address, as typed.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAddress {
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub landmark: Option<String>,
}

impl From<models::AddressDraft> for FfiAddress {
    fn from(draft: models::AddressDraft) -> Self {
        Self {
            address: draft.address,
            city: draft.city,
            pincode: draft.pincode,
            landmark: draft.landmark,
        }
    }
}

/// FFI-safe checkout snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCheckoutState {
    pub step: String,
    pub visible_steps: Vec<String>,
    pub has_home_collection: bool,
    pub people: Vec<FfiPerson>,
    pub address: FfiAddress,
    pub collection_date: Option<String>,
    pub collection_slot: Option<String>,
    pub is_processing: bool,
    pub confirmation: Option<FfiConfirmation>,
    pub last_failure: Option<String>,
    pub failure_retryable: bool,
}

/// FFI-safe field errors for one person.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPersonErrors {
    pub person_id: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub phone: Option<String>,
}

/// FFI-safe checkout errors.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCheckoutErrors {
    pub persons: Vec<FfiPersonErrors>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub collection_date: Option<String>,
    pub collection_slot: Option<String>,
}

#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiStepOutcome {
    Advanced { step: String },
    Blocked,
    ReadyToSubmit,
}

impl From<StepOutcome> for FfiStepOutcome {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Advanced(step) => FfiStepOutcome::Advanced {
                step: step.to_string(),
            },
            StepOutcome::Blocked => FfiStepOutcome::Blocked,
            StepOutcome::ReadyToSubmit => FfiStepOutcome::ReadyToSubmit,
        }
    }
}

/// FFI-safe booking confirmation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfirmation {
    pub booking_id: String,
    pub payment_reference: String,
    pub amount: u64,
    pub item_count: u32,
    pub patient_count: u32,
    pub collection_date: Option<String>,
    pub collection_slot: Option<String>,
    /// RFC 3339
    pub confirmed_at: String,
}

impl From<Confirmation> for FfiConfirmation {
    fn from(confirmation: Confirmation) -> Self {
        Self {
            booking_id: confirmation.booking_id,
            payment_reference: confirmation.payment_reference,
            amount: confirmation.amount,
            item_count: confirmation.item_count as u32,
            patient_count: confirmation.patient_count as u32,
            collection_date: confirmation
                .schedule
                .as_ref()
                .map(|s| s.date.format(DATE_FORMAT).to_string()),
            collection_slot: confirmation.schedule.as_ref().map(|s| s.slot.label()),
            confirmed_at: confirmation.confirmed_at.to_rfc3339(),
        }
    }
}

/// FFI-safe partner registration form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabRegistration {
    pub lab_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
}

/// One failed form field.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}
