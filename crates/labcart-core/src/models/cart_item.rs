//! Cart line item models.

use std::fmt;
use std::str::FromStr;

use labcart_catalog::LabTest;
use serde::{Deserialize, Serialize};

/// Channel through which a diagnostic test is delivered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentType {
    /// Patient visits the lab for sample collection
    WalkIn,
    /// Sample collected at the patient's address on a scheduled slot
    HomeCollection,
    /// Bundled health checkup package
    Package,
}

impl FulfillmentType {
    /// All fulfillment types, in display order.
    pub const ALL: [FulfillmentType; 3] = [
        FulfillmentType::WalkIn,
        FulfillmentType::HomeCollection,
        FulfillmentType::Package,
    ];

    /// Wire name (`walk-in`, `home-collection`, `package`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentType::WalkIn => "walk-in",
            FulfillmentType::HomeCollection => "home-collection",
            FulfillmentType::Package => "package",
        }
    }

    /// Human-readable label for tabs and badges.
    pub fn label(&self) -> &'static str {
        match self {
            FulfillmentType::WalkIn => "Walk-In",
            FulfillmentType::HomeCollection => "Home Collection",
            FulfillmentType::Package => "Health Package",
        }
    }

    /// Whether this channel needs an address and a collection slot.
    pub fn requires_schedule(&self) -> bool {
        matches!(self, FulfillmentType::HomeCollection)
    }
}

impl fmt::Display for FulfillmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walk-in" | "walkin" => Ok(FulfillmentType::WalkIn),
            "home-collection" | "home" => Ok(FulfillmentType::HomeCollection),
            "package" | "packages" => Ok(FulfillmentType::Package),
            other => Err(format!("Unknown fulfillment type: {}", other)),
        }
    }
}

/// Uniqueness key of a cart line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CartKey {
    pub id: String,
    pub fulfillment: FulfillmentType,
}

impl CartKey {
    pub fn new(id: impl Into<String>, fulfillment: FulfillmentType) -> Self {
        Self {
            id: id.into(),
            fulfillment,
        }
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.id, self.fulfillment)
    }
}

/// One selected test or package plus its fulfillment channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Test or package id
    pub id: String,
    /// Test display name
    pub name: String,
    /// Price in the smallest currency unit
    pub price: u64,
    /// Name of the lab offering the test (display only)
    pub pathology_name: String,
    /// Fulfillment channel; part of the uniqueness key
    #[serde(rename = "type")]
    pub fulfillment: FulfillmentType,
}

impl CartItem {
    /// Create a line item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        pathology_name: impl Into<String>,
        fulfillment: FulfillmentType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            pathology_name: pathology_name.into(),
            fulfillment,
        }
    }

    /// Build a line item from a test listed on a lab detail page.
    pub fn from_lab_test(lab_name: &str, test: &LabTest, fulfillment: FulfillmentType) -> Self {
        Self {
            id: test.catalog_id(),
            name: test.name.clone(),
            price: test.price,
            pathology_name: lab_name.to_string(),
            fulfillment,
        }
    }

    /// The `(id, fulfillment)` uniqueness key.
    pub fn key(&self) -> CartKey {
        CartKey::new(self.id.clone(), self.fulfillment)
    }

    /// Check whether this item has the given key.
    pub fn matches(&self, key: &CartKey) -> bool {
        self.id == key.id && self.fulfillment == key.fulfillment
    }
}
