//! Patient registration models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient gender as captured on the registration form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

/// Editable fields of a [`PersonDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Age,
    Gender,
    Phone,
}

/// A person on the checkout roster, exactly as typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonDraft {
    /// Session-local id (`person-N`)
    pub id: String,
    pub name: String,
    /// Age as typed; valid when an integer in 1..=120
    pub age: String,
    pub gender: Gender,
    /// Phone as typed; valid when exactly 10 digits
    pub phone: String,
}

impl PersonDraft {
    /// Create a blank entry with the default gender.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            age: String::new(),
            gender: Gender::default(),
            phone: String::new(),
        }
    }

    /// Current text value of a field.
    pub fn field_value(&self, field: PersonField) -> &str {
        match field {
            PersonField::Name => &self.name,
            PersonField::Age => &self.age,
            PersonField::Gender => self.gender.as_str(),
            PersonField::Phone => &self.phone,
        }
    }
}

/// A validated patient, ready to be booked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub phone: String,
}
