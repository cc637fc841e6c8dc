//! Checkout session state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::step::CheckoutStep;
use crate::models::{AddressDraft, Confirmation, PersonDraft, ScheduleDraft};
use crate::validation::{AddressErrors, PersonErrors, ScheduleErrors};

/// Validation errors currently shown, per entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutErrors {
    /// Keyed by person id; only people with at least one error appear
    pub persons: HashMap<String, PersonErrors>,
    pub address: AddressErrors,
    pub schedule: ScheduleErrors,
}

impl CheckoutErrors {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.address.is_empty() && self.schedule.is_empty()
    }

    /// Errors for one person, if any.
    pub fn person(&self, person_id: &str) -> Option<&PersonErrors> {
        self.persons.get(person_id)
    }
}

/// A failed submission, kept so the UI can offer a retry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub message: String,
    /// Whether submitting again may succeed
    pub retryable: bool,
    pub failed_at: DateTime<Utc>,
}

/// One checkout attempt: step, roster, address, schedule and status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSession {
    session_id: String,
    pub(crate) step: CheckoutStep,
    pub(crate) people: Vec<PersonDraft>,
    pub(crate) next_person: u32,
    pub(crate) address: AddressDraft,
    pub(crate) schedule: ScheduleDraft,
    pub(crate) errors: CheckoutErrors,
    pub(crate) is_processing: bool,
    pub(crate) confirmation: Option<Confirmation>,
    pub(crate) last_failure: Option<SubmissionFailure>,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    /// Fresh session at the summary step with one blank person.
    pub fn new() -> Self {
        let mut session = Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            step: CheckoutStep::Summary,
            people: Vec::new(),
            next_person: 1,
            address: AddressDraft::default(),
            schedule: ScheduleDraft::default(),
            errors: CheckoutErrors::default(),
            is_processing: false,
            confirmation: None,
            last_failure: None,
        };
        session.push_blank_person();
        session
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn people(&self) -> &[PersonDraft] {
        &self.people
    }

    pub fn person(&self, person_id: &str) -> Option<&PersonDraft> {
        self.people.iter().find(|p| p.id == person_id)
    }

    pub fn address(&self) -> &AddressDraft {
        &self.address
    }

    pub fn schedule(&self) -> &ScheduleDraft {
        &self.schedule
    }

    pub fn errors(&self) -> &CheckoutErrors {
        &self.errors
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn last_failure(&self) -> Option<&SubmissionFailure> {
        self.last_failure.as_ref()
    }

    /// Append a blank person and return its id. Ids are never reused.
    pub(crate) fn push_blank_person(&mut self) -> String {
        let id = format!("person-{}", self.next_person);
        self.next_person += 1;
        self.people.push(PersonDraft::blank(id.clone()));
        id
    }

    pub(crate) fn person_mut(&mut self, person_id: &str) -> Option<&mut PersonDraft> {
        self.people.iter_mut().find(|p| p.id == person_id)
    }
}
