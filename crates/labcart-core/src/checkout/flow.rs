//! The checkout stepper.

use chrono::{NaiveDate, Utc};

use super::session::{CheckoutErrors, CheckoutSession, SubmissionFailure};
use super::step::{transition, CheckoutStep, StepEvent, Transition};
use super::{CheckoutError, CheckoutResult};
use crate::cart::SharedCart;
use crate::config::ScheduleConfig;
use crate::models::{
    AddressField, BookingWindow, CollectionSlot, Confirmation, Gender, Order, PersonField,
};
use crate::payment::{charge_with_policy, PaymentError, PaymentGateway, Receipt, SubmissionPolicy};
use crate::validation::{
    validate_address, validate_address_field, validate_person, validate_person_field,
    validate_schedule,
};

/// Result of asking to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Guard passed; now on this step
    Advanced(CheckoutStep),
    /// Guard failed; errors are in [`CheckoutFlow::errors`]
    Blocked,
    /// Guard passed on the last step; call [`CheckoutFlow::submit`]
    ReadyToSubmit,
}

/// An order whose charge is in flight.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    order: Order,
    idempotency_key: String,
}

impl PendingSubmission {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn amount(&self) -> u64 {
        self.order.total
    }

    pub fn idempotency_key(&self) -> &str {
        &self.idempotency_key
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Marks a submission settled once the charge resolves.
///
/// Dropped unsettled (the caller stopped polling mid-charge), it cancels the
/// submission so the session does not stay locked in processing.
struct InFlight<'a> {
    flow: &'a mut CheckoutFlow,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.flow.cancel_submission();
        }
    }
}

/// Multi-step checkout over a shared cart.
///
/// The flow reads the cart for totals and the home-collection predicate,
/// and removes the ordered items only after a confirmed charge.
#[derive(Debug)]
pub struct CheckoutFlow {
    cart: SharedCart,
    session: CheckoutSession,
    schedule_config: ScheduleConfig,
    clock: fn() -> NaiveDate,
}

impl CheckoutFlow {
    /// Start a checkout over `cart` with default scheduling settings.
    pub fn new(cart: SharedCart) -> Self {
        Self::with_schedule_config(cart, ScheduleConfig::default())
    }

    pub fn with_schedule_config(cart: SharedCart, schedule_config: ScheduleConfig) -> Self {
        Self {
            cart,
            session: CheckoutSession::new(),
            schedule_config,
            clock: local_today,
        }
    }

    /// Replace the source of "today" used for the booking window.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn cart(&self) -> &SharedCart {
        &self.cart
    }

    pub fn session(&self) -> &CheckoutSession {
        &self.session
    }

    pub fn current_step(&self) -> CheckoutStep {
        self.session.step
    }

    pub fn errors(&self) -> &CheckoutErrors {
        &self.session.errors
    }

    pub fn is_processing(&self) -> bool {
        self.session.is_processing
    }

    pub fn has_home_collection(&self) -> CheckoutResult<bool> {
        Ok(self.cart.lock()?.has_home_collection())
    }

    pub fn order_total(&self) -> CheckoutResult<u64> {
        Ok(self.cart.lock()?.total())
    }

    /// Dates the collection date picker offers.
    pub fn booking_window(&self) -> CheckoutResult<BookingWindow> {
        let today = (self.clock)();
        BookingWindow::for_today(
            today,
            self.schedule_config.lead_days,
            self.schedule_config.window_days,
        )
        .ok_or(CheckoutError::NoBookableDates { today })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Validate the current step and move forward if it passes.
    pub fn go_next(&mut self) -> CheckoutResult<StepOutcome> {
        self.ensure_editable()?;
        let has_home = self.has_home_collection()?;
        let from = self.session.step;
        let target = transition(from, StepEvent::Next, has_home)?;

        let passed = match from {
            CheckoutStep::Summary => true,
            CheckoutStep::Patient => self.check_people(),
            CheckoutStep::Address => self.check_address(),
            // Home collection removed while on this step: nothing left to check
            CheckoutStep::Schedule => !has_home || self.check_schedule(),
            CheckoutStep::Confirmed => false,
        };

        if !passed {
            tracing::info!(step = %from, "checkout step blocked by validation");
            return Ok(StepOutcome::Blocked);
        }

        match target {
            Transition::MoveTo(step) => {
                tracing::debug!(from = %from, to = %step, "checkout step advanced");
                self.session.step = step;
                Ok(StepOutcome::Advanced(step))
            }
            Transition::Submit => Ok(StepOutcome::ReadyToSubmit),
        }
    }

    /// Return to the previous step. Never validates.
    pub fn go_back(&mut self) -> CheckoutResult<CheckoutStep> {
        self.ensure_editable()?;
        let has_home = self.has_home_collection()?;
        let from = self.session.step;

        match transition(from, StepEvent::Back, has_home)? {
            Transition::MoveTo(step) => {
                tracing::debug!(from = %from, to = %step, "checkout step back");
                self.session.step = step;
                Ok(step)
            }
            Transition::Submit => Err(CheckoutError::IllegalTransition {
                from,
                event: StepEvent::Back,
            }),
        }
    }

    // =========================================================================
    // Patient roster
    // =========================================================================

    /// Add a blank person and return its id.
    pub fn add_person(&mut self) -> CheckoutResult<String> {
        self.ensure_editable()?;
        Ok(self.session.push_blank_person())
    }

    /// Remove a person. The roster never shrinks below one entry.
    pub fn remove_person(&mut self, person_id: &str) -> CheckoutResult<()> {
        self.ensure_editable()?;
        if self.session.people.len() <= 1 {
            return Err(CheckoutError::RosterFloor);
        }
        let index = self
            .session
            .people
            .iter()
            .position(|p| p.id == person_id)
            .ok_or_else(|| CheckoutError::PersonNotFound(person_id.to_string()))?;

        self.session.people.remove(index);
        self.session.errors.persons.remove(person_id);
        Ok(())
    }

    /// Set one field of a person from user input.
    pub fn update_person(
        &mut self,
        person_id: &str,
        field: PersonField,
        value: &str,
    ) -> CheckoutResult<()> {
        self.ensure_editable()?;
        let person = self
            .session
            .person_mut(person_id)
            .ok_or_else(|| CheckoutError::PersonNotFound(person_id.to_string()))?;

        match field {
            PersonField::Name => person.name = value.to_string(),
            PersonField::Age => person.age = value.to_string(),
            PersonField::Phone => person.phone = value.to_string(),
            PersonField::Gender => {
                person.gender = value
                    .parse::<Gender>()
                    .map_err(CheckoutError::InvalidInput)?
            }
        }

        self.revalidate_person_field(person_id, field);
        Ok(())
    }

    // =========================================================================
    // Address and schedule
    // =========================================================================

    pub fn set_address_field(&mut self, field: AddressField, value: &str) -> CheckoutResult<()> {
        self.ensure_editable()?;
        self.session.address.set(field, value.to_string());

        if self.session.errors.address.get(field).is_some() {
            let message = validate_address_field(&self.session.address, field);
            self.session.errors.address.set(field, message);
        }
        Ok(())
    }

    /// Pick a collection date inside the booking window.
    pub fn set_collection_date(&mut self, date: NaiveDate) -> CheckoutResult<()> {
        self.ensure_editable()?;
        let window = self.booking_window()?;
        if !window.contains(date) {
            return Err(CheckoutError::DateOutsideWindow {
                date,
                earliest: window.earliest,
                latest: window.latest,
            });
        }

        self.session.schedule.collection_date = Some(date);
        self.session.errors.schedule.date = None;
        Ok(())
    }

    pub fn set_collection_time(&mut self, slot: CollectionSlot) -> CheckoutResult<()> {
        self.ensure_editable()?;
        self.session.schedule.collection_time = Some(slot);
        self.session.errors.schedule.time = None;
        Ok(())
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validate everything, snapshot the order and mark the session processing.
    ///
    /// Pair with [`complete_submission`](Self::complete_submission) or
    /// [`fail_submission`](Self::fail_submission) once the charge resolves.
    pub fn begin_submission(&mut self) -> CheckoutResult<PendingSubmission> {
        if self.session.confirmation.is_some() {
            return Err(CheckoutError::AlreadyConfirmed);
        }
        if self.session.is_processing {
            return Err(CheckoutError::SubmissionInProgress);
        }

        let (items, total, has_home) = {
            let cart = self.cart.lock()?;
            (cart.snapshot(), cart.total(), cart.has_home_collection())
        };
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let step = self.session.step;
        let at_final_step = match step {
            CheckoutStep::Address => !has_home,
            CheckoutStep::Schedule => true,
            _ => false,
        };
        if !at_final_step {
            return Err(CheckoutError::NotReadyToSubmit { step });
        }

        let people_ok = self.check_people();
        let address_ok = self.check_address();
        let schedule_ok = if has_home {
            self.check_schedule()
        } else {
            self.session.errors.schedule = Default::default();
            true
        };
        if !(people_ok && address_ok && schedule_ok) {
            tracing::info!(step = %step, "submission blocked by validation");
            return Err(CheckoutError::ValidationFailed);
        }

        let patients = self
            .session
            .people
            .iter()
            .map(validate_person)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CheckoutError::ValidationFailed)?;
        let address =
            validate_address(&self.session.address).map_err(|_| CheckoutError::ValidationFailed)?;
        let schedule = if has_home {
            Some(
                validate_schedule(&self.session.schedule)
                    .map_err(|_| CheckoutError::ValidationFailed)?,
            )
        } else {
            None
        };

        let order = Order {
            session_id: self.session.session_id().to_string(),
            items,
            patients,
            address,
            schedule,
            total,
        };
        let idempotency_key = order.idempotency_key()?;

        self.session.is_processing = true;
        self.session.last_failure = None;
        tracing::info!(
            session_id = %order.session_id,
            total,
            items = order.items.len(),
            "submission started"
        );

        Ok(PendingSubmission {
            order,
            idempotency_key,
        })
    }

    /// Record a confirmed charge: drop the ordered items from the cart and
    /// close the session. Items added while the charge was in flight stay.
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        receipt: &Receipt,
    ) -> CheckoutResult<Confirmation> {
        if !self.session.is_processing {
            return Err(CheckoutError::NoSubmissionInProgress);
        }
        self.session.is_processing = false;

        if receipt.amount != pending.order.total {
            tracing::warn!(
                charged = receipt.amount,
                expected = pending.order.total,
                "receipt amount differs from order total"
            );
        }

        let confirmation = Confirmation::for_order(&pending.order, receipt.reference.clone());
        self.session.confirmation = Some(confirmation.clone());
        self.session.step = CheckoutStep::Confirmed;
        self.session.errors = CheckoutErrors::default();

        let booked: Vec<_> = pending.order.items.iter().map(|item| item.key()).collect();
        let remaining = {
            let mut cart = self.cart.lock()?;
            cart.remove_booked(&booked);
            cart.count()
        };
        if remaining > 0 {
            tracing::info!(remaining, "items added during payment kept in cart");
        }

        tracing::info!(
            booking_id = %confirmation.booking_id,
            amount = confirmation.amount,
            "booking confirmed"
        );
        Ok(confirmation)
    }

    /// Record a failed charge. The cart is left untouched.
    pub fn fail_submission(&mut self, error: &PaymentError) {
        self.session.is_processing = false;

        let retryable = error.is_transient();
        let message = if retryable {
            "Payment could not be completed. Please try again.".to_string()
        } else {
            error.to_string()
        };

        tracing::warn!(error = %error, retryable, "submission failed");
        self.session.last_failure = Some(SubmissionFailure {
            message,
            retryable,
            failed_at: Utc::now(),
        });
    }

    /// Give up on an in-flight charge whose outcome will never be observed.
    ///
    /// The failure is retryable: a retry of the unchanged order carries the
    /// same idempotency key, so a charge that did land is not repeated.
    /// Returns `false` when nothing was in flight.
    pub fn cancel_submission(&mut self) -> bool {
        if !self.session.is_processing {
            return false;
        }
        self.session.is_processing = false;

        tracing::warn!(session_id = %self.session.session_id(), "submission interrupted");
        self.session.last_failure = Some(SubmissionFailure {
            message: "Payment was interrupted. Please try again.".to_string(),
            retryable: true,
            failed_at: Utc::now(),
        });
        true
    }

    /// Charge the order and, on success, remove the ordered items and confirm.
    ///
    /// Dropping the future mid-charge cancels the submission.
    pub async fn submit(
        &mut self,
        gateway: &dyn PaymentGateway,
        policy: &SubmissionPolicy,
    ) -> CheckoutResult<Confirmation> {
        let pending = self.begin_submission()?;
        let mut in_flight = InFlight {
            flow: self,
            settled: false,
        };

        let outcome =
            charge_with_policy(gateway, pending.amount(), pending.idempotency_key(), policy).await;
        in_flight.settled = true;

        match outcome {
            Ok(receipt) => in_flight.flow.complete_submission(pending, &receipt),
            Err(err) => {
                in_flight.flow.fail_submission(&err);
                Err(CheckoutError::Payment(err))
            }
        }
    }

    /// Discard the session and start over. Not allowed mid-submission.
    pub fn abandon(&mut self) -> CheckoutResult<()> {
        if self.session.is_processing {
            return Err(CheckoutError::SubmissionInProgress);
        }
        tracing::debug!(session_id = %self.session.session_id(), "checkout session reset");
        self.session = CheckoutSession::new();
        Ok(())
    }

    // =========================================================================
    // Guards
    // =========================================================================

    fn ensure_editable(&self) -> CheckoutResult<()> {
        if self.session.confirmation.is_some() {
            return Err(CheckoutError::AlreadyConfirmed);
        }
        if self.session.is_processing {
            return Err(CheckoutError::SubmissionInProgress);
        }
        Ok(())
    }

    fn check_people(&mut self) -> bool {
        self.session.errors.persons = self
            .session
            .people
            .iter()
            .filter_map(|p| validate_person(p).err().map(|e| (p.id.clone(), e)))
            .collect();
        self.session.errors.persons.is_empty()
    }

    fn check_address(&mut self) -> bool {
        self.session.errors.address = validate_address(&self.session.address)
            .err()
            .unwrap_or_default();
        self.session.errors.address.is_empty()
    }

    fn check_schedule(&mut self) -> bool {
        self.session.errors.schedule = validate_schedule(&self.session.schedule)
            .err()
            .unwrap_or_default();
        self.session.errors.schedule.is_empty()
    }

    /// Re-check a field only while it is showing an error.
    fn revalidate_person_field(&mut self, person_id: &str, field: PersonField) {
        let showing = self
            .session
            .errors
            .persons
            .get(person_id)
            .is_some_and(|e| e.get(field).is_some());
        if !showing {
            return;
        }

        let message = self
            .session
            .person(person_id)
            .and_then(|p| validate_person_field(p, field));

        if let Some(errors) = self.session.errors.persons.get_mut(person_id) {
            errors.set(field, message);
            if errors.is_empty() {
                self.session.errors.persons.remove(person_id);
            }
        }
    }
}
