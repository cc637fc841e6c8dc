//! Validation of the lab-facing forms: partner registration and reviews.

use serde::{Deserialize, Serialize};

use super::rules::{first_failure, Rule};

const LAB_NAME_RULES: &[Rule] = &[Rule::Required("Lab name is required")];
const OWNER_NAME_RULES: &[Rule] = &[Rule::Required("Owner name is required")];
const EMAIL_RULES: &[Rule] = &[
    Rule::Required("Email is required"),
    Rule::EmailShape("Invalid email format"),
];
const PARTNER_PHONE_RULES: &[Rule] = &[
    Rule::Required("Phone is required"),
    Rule::DigitCount {
        digits: 10,
        message: "Invalid phone number",
    },
];

const REVIEWER_NAME_RULES: &[Rule] = &[Rule::Required("Name is required")];
const COMMENT_RULES: &[Rule] = &[
    Rule::Required("Review comment is required"),
    Rule::MinLength {
        chars: 10,
        message: "Review must be at least 10 characters",
    },
];

/// "Partner with us" registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabRegistration {
    pub lab_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabRegistrationErrors {
    pub lab_name: Option<String>,
    pub owner_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl LabRegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.lab_name.is_none()
            && self.owner_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Validate a partner registration.
pub fn validate_lab_registration(form: &LabRegistration) -> Result<(), LabRegistrationErrors> {
    let errors = LabRegistrationErrors {
        lab_name: first_failure(LAB_NAME_RULES, &form.lab_name),
        owner_name: first_failure(OWNER_NAME_RULES, &form.owner_name),
        email: first_failure(EMAIL_RULES, &form.email),
        phone: first_failure(PARTNER_PHONE_RULES, &form.phone),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Review submitted from a lab detail page. A rating of 0 means "not chosen".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewErrors {
    pub name: Option<String>,
    pub rating: Option<String>,
    pub comment: Option<String>,
}

impl ReviewErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rating.is_none() && self.comment.is_none()
    }
}

/// Validate a lab review.
pub fn validate_review(review: &ReviewDraft) -> Result<(), ReviewErrors> {
    let errors = ReviewErrors {
        name: first_failure(REVIEWER_NAME_RULES, &review.name),
        rating: (!(1..=5).contains(&review.rating)).then(|| "Please select a rating".to_string()),
        comment: first_failure(COMMENT_RULES, &review.comment),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
