//! Lab directory records as served by the directory service.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),

    #[error("Directory service returned status {status} for {url}")]
    Status { status: u16, url: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Postal address of a lab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

/// Lab summary record returned by `GET /labs?city=…`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pathology {
    /// Directory id, used for `GET /labs/{id}`
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub address: LabAddress,
    pub rating: f64,
    /// Display distance (e.g., "2.5 km")
    pub distance: String,
    /// Display price (e.g., "₹499")
    pub starting_price: String,
    pub discount: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Gallery image on a lab detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// A bookable test listed by a lab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabTest {
    /// Test id; older directory records omit it
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Price in the smallest currency unit
    #[serde(deserialize_with = "whole_amount")]
    pub price: u64,
    pub description: Option<String>,
}

impl LabTest {
    /// Identifier used for cart line items.
    ///
    /// Falls back to a slug of the test name when the record carries no id.
    pub fn catalog_id(&self) -> String {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => slugify(&self.name),
        }
    }
}

/// A user review on a lab detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabReview {
    pub user: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

/// Lab detail record returned by `GET /labs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathologyDetails {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub location: String,
    pub area: String,
    pub rating: f64,
    #[serde(deserialize_with = "whole_amount")]
    pub starting_price: u64,
    pub address: LabAddress,
    pub phone: String,
    pub opening_time: String,
    pub closing_time: String,
    pub working_days: String,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub tests: Vec<LabTest>,
    #[serde(default)]
    pub reviews: Vec<LabReview>,
}

impl PathologyDetails {
    /// Find a listed test by its catalog id.
    pub fn find_test(&self, catalog_id: &str) -> Option<&LabTest> {
        self.tests.iter().find(|t| t.catalog_id() == catalog_id)
    }

    /// URL slug for the lab detail page (`/pathology/{location}/{area}/{slug}`).
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Average review rating, if any reviews exist.
    pub fn average_review_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / self.reviews.len() as f64)
    }
}

/// Parse the body of `GET /labs?city=…`.
pub fn parse_lab_list(json: &str) -> CatalogResult<Vec<Pathology>> {
    let trimmed = json.trim_start();
    if !trimmed.starts_with('[') {
        return Err(CatalogError::InvalidFormat(
            "Expected a JSON array of labs".into(),
        ));
    }
    let labs: Vec<Pathology> = serde_json::from_str(trimmed)?;
    tracing::debug!(count = labs.len(), "parsed lab list");
    Ok(labs)
}

/// Read a price sent as a JSON number.
///
/// Whole values such as `599` or `599.0` are accepted. Fractional, negative
/// or out-of-range values fail with a message naming the expected unit.
fn whole_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(amount) = number.as_u64() {
        return Ok(amount);
    }
    match number.as_f64() {
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 => {
            Ok(value as u64)
        }
        _ => Err(serde::de::Error::custom(format!(
            "price {} must be a whole non-negative amount in the smallest currency unit",
            number
        ))),
    }
}

/// Parse the body of `GET /labs/{id}`.
pub fn parse_lab_details(json: &str) -> CatalogResult<PathologyDetails> {
    let trimmed = json.trim_start();
    if !trimmed.starts_with('{') {
        return Err(CatalogError::InvalidFormat(
            "Expected a JSON object for lab details".into(),
        ));
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Lowercase, ASCII-alphanumeric slug with single dashes.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_JSON: &str = r#"{
        "name": "City Care Diagnostics",
        "categories": ["Blood Test", "Radiology"],
        "location": "siliguri",
        "area": "hakimpara",
        "rating": 4.5,
        "startingPrice": 299,
        "address": {
            "street": "12 Hill Cart Road",
            "city": "Siliguri",
            "state": "West Bengal",
            "country": "India",
            "pincode": "734001"
        },
        "phone": "9876543210",
        "openingTime": "07:00 AM",
        "closingTime": "09:00 PM",
        "workingDays": "Mon - Sat",
        "images": [],
        "overview": "NABL accredited lab",
        "mapUrl": "",
        "tests": [
            {"id": "cbc", "name": "Complete Blood Count (CBC)", "price": 399},
            {"name": "Lipid Profile", "price": 599, "description": "Cholesterol panel"}
        ],
        "reviews": [
            {"user": "Asha", "rating": 5, "comment": "Quick service", "date": "2024-03-01"},
            {"user": "Ravi", "rating": 4, "comment": "Good staff", "date": "2024-03-04"}
        ]
    }"#;

    #[test]
    fn test_parse_lab_details() {
        let details = parse_lab_details(DETAILS_JSON).unwrap();
        assert_eq!(details.name, "City Care Diagnostics");
        assert_eq!(details.starting_price, 299);
        assert_eq!(details.tests.len(), 2);
        assert_eq!(details.address.pincode, "734001");
    }

    #[test]
    fn test_catalog_id_falls_back_to_slug() {
        let details = parse_lab_details(DETAILS_JSON).unwrap();
        assert_eq!(details.tests[0].catalog_id(), "cbc");
        assert_eq!(details.tests[1].catalog_id(), "lipid-profile");
        assert!(details.find_test("lipid-profile").is_some());
        assert!(details.find_test("missing").is_none());
    }

    #[test]
    fn test_parse_lab_list() {
        let json = r#"[{
            "_id": "65f0c1",
            "name": "City Care Diagnostics",
            "address": {
                "street": "12 Hill Cart Road",
                "city": "Siliguri",
                "state": "West Bengal",
                "country": "India",
                "pincode": "734001"
            },
            "rating": 4.5,
            "distance": "1.2 km",
            "startingPrice": "₹299"
        }]"#;

        let labs = parse_lab_list(json).unwrap();
        assert_eq!(labs.len(), 1);
        assert_eq!(labs[0].id, "65f0c1");
        assert!(labs[0].categories.is_empty());
        assert!(labs[0].discount.is_none());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            parse_lab_list("{}"),
            Err(CatalogError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_lab_details("[]"),
            Err(CatalogError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_whole_float_price_accepted() {
        let json = DETAILS_JSON.replace("\"price\": 399", "\"price\": 399.0");
        let details = parse_lab_details(&json).unwrap();
        assert_eq!(details.tests[0].price, 399);
    }

    #[test]
    fn test_fractional_price_rejected_with_reason() {
        let json = DETAILS_JSON.replace("\"price\": 399", "\"price\": 399.5");
        let err = parse_lab_details(&json).unwrap_err();
        assert!(matches!(err, CatalogError::JsonParse(_)));
        assert!(err
            .to_string()
            .contains("price 399.5 must be a whole non-negative amount in the smallest currency unit"));

        let json = DETAILS_JSON.replace("\"startingPrice\": 299", "\"startingPrice\": -1");
        let err = parse_lab_details(&json).unwrap_err();
        assert!(err.to_string().contains("smallest currency unit"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("City Care Diagnostics"), "city-care-diagnostics");
        assert_eq!(slugify("  Complete Blood Count (CBC) "), "complete-blood-count-cbc");
        assert_eq!(slugify("HbA1c"), "hba1c");
    }

    #[test]
    fn test_average_review_rating() {
        let mut details = parse_lab_details(DETAILS_JSON).unwrap();
        assert_eq!(details.average_review_rating(), Some(4.5));
        details.reviews.clear();
        assert_eq!(details.average_review_rating(), None);
    }
}
