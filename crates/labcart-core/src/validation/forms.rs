//! Validation of the checkout entities: person, address, schedule.
//!
//! Each validator evaluates every field of its entity and returns either the
//! typed, validated value or an error struct with one optional message per
//! field.

use serde::{Deserialize, Serialize};

use super::rules::{first_failure, Rule};
use crate::models::{
    AddressDraft, AddressField, CollectionAddress, CollectionSchedule, Patient, PersonDraft,
    PersonField, ScheduleDraft,
};

pub const NAME_RULES: &[Rule] = &[Rule::Required("Name is required")];

pub const AGE_RULES: &[Rule] = &[
    Rule::Required("Age is required"),
    Rule::IntegerRange {
        min: 1,
        max: 120,
        message: "Enter valid age",
    },
];

pub const PHONE_RULES: &[Rule] = &[
    Rule::Required("Phone number is required"),
    Rule::DigitCount {
        digits: 10,
        message: "Enter valid 10-digit phone number",
    },
];

pub const ADDRESS_RULES: &[Rule] = &[Rule::Required("Address is required")];

pub const CITY_RULES: &[Rule] = &[Rule::Required("City is required")];

pub const PINCODE_RULES: &[Rule] = &[
    Rule::Required("Pincode is required"),
    Rule::DigitCount {
        digits: 6,
        message: "Enter valid 6-digit pincode",
    },
];

pub const DATE_MISSING: &str = "Please select a date";
pub const TIME_MISSING: &str = "Please select a time slot";

/// Field errors for one person on the roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonErrors {
    pub name: Option<String>,
    pub age: Option<String>,
    pub phone: Option<String>,
}

impl PersonErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.phone.is_none()
    }

    pub fn get(&self, field: PersonField) -> Option<&str> {
        match field {
            PersonField::Name => self.name.as_deref(),
            PersonField::Age => self.age.as_deref(),
            PersonField::Phone => self.phone.as_deref(),
            PersonField::Gender => None,
        }
    }

    pub(crate) fn set(&mut self, field: PersonField, message: Option<String>) {
        match field {
            PersonField::Name => self.name = message,
            PersonField::Age => self.age = message,
            PersonField::Phone => self.phone = message,
            PersonField::Gender => {}
        }
    }
}

/// Field errors for the collection address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressErrors {
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

impl AddressErrors {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.city.is_none() && self.pincode.is_none()
    }

    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Address => self.address.as_deref(),
            AddressField::City => self.city.as_deref(),
            AddressField::Pincode => self.pincode.as_deref(),
            AddressField::Landmark => None,
        }
    }

    pub(crate) fn set(&mut self, field: AddressField, message: Option<String>) {
        match field {
            AddressField::Address => self.address = message,
            AddressField::City => self.city = message,
            AddressField::Pincode => self.pincode = message,
            AddressField::Landmark => {}
        }
    }
}

/// Field errors for the collection schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleErrors {
    pub date: Option<String>,
    pub time: Option<String>,
}

impl ScheduleErrors {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

/// Check one person field. Gender is always valid.
pub fn validate_person_field(person: &PersonDraft, field: PersonField) -> Option<String> {
    match field {
        PersonField::Name => first_failure(NAME_RULES, &person.name),
        PersonField::Age => first_failure(AGE_RULES, &person.age),
        PersonField::Phone => first_failure(PHONE_RULES, &person.phone),
        PersonField::Gender => None,
    }
}

/// Validate a roster entry.
pub fn validate_person(person: &PersonDraft) -> Result<Patient, PersonErrors> {
    let errors = PersonErrors {
        name: validate_person_field(person, PersonField::Name),
        age: validate_person_field(person, PersonField::Age),
        phone: validate_person_field(person, PersonField::Phone),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    // AGE_RULES guarantees 1..=120
    let age = person
        .age
        .trim()
        .parse::<u8>()
        .map_err(|_| PersonErrors {
            age: Some("Enter valid age".into()),
            ..PersonErrors::default()
        })?;

    Ok(Patient {
        id: person.id.clone(),
        name: person.name.trim().to_string(),
        age,
        gender: person.gender,
        phone: person.phone.clone(),
    })
}

/// Check one address field. Landmark is optional and always valid.
pub fn validate_address_field(draft: &AddressDraft, field: AddressField) -> Option<String> {
    match field {
        AddressField::Address => first_failure(ADDRESS_RULES, &draft.address),
        AddressField::City => first_failure(CITY_RULES, &draft.city),
        AddressField::Pincode => first_failure(PINCODE_RULES, &draft.pincode),
        AddressField::Landmark => None,
    }
}

/// Validate the collection address.
pub fn validate_address(draft: &AddressDraft) -> Result<CollectionAddress, AddressErrors> {
    let errors = AddressErrors {
        address: validate_address_field(draft, AddressField::Address),
        city: validate_address_field(draft, AddressField::City),
        pincode: validate_address_field(draft, AddressField::Pincode),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CollectionAddress {
        address: draft.address.trim().to_string(),
        city: draft.city.trim().to_string(),
        pincode: draft.pincode.clone(),
        landmark: draft.landmark.as_ref().map(|l| l.trim().to_string()),
    })
}

/// Validate the collection schedule: both date and slot must be chosen.
///
/// The date range is enforced when the date is picked, not here.
pub fn validate_schedule(draft: &ScheduleDraft) -> Result<CollectionSchedule, ScheduleErrors> {
    match (draft.collection_date, draft.collection_time) {
        (Some(date), Some(slot)) => Ok(CollectionSchedule { date, slot }),
        (date, time) => Err(ScheduleErrors {
            date: date.is_none().then(|| DATE_MISSING.to_string()),
            time: time.is_none().then(|| TIME_MISSING.to_string()),
        }),
    }
}
