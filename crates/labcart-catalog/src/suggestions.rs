//! Static search suggestions for the location and test search boxes.
//!
//! Suggestions are plain case-insensitive substring filters over fixed lists;
//! nothing is ranked.

/// Minimum query length before any suggestion is shown.
pub const MIN_QUERY_LEN: usize = 2;

/// Locations offered while typing in the location box.
pub const LOCATION_SUGGESTIONS: &[&str] = &[
    "Siliguri",
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Jalpaiguri",
    "Jalpas",
    "Raigang",
    "Raipur",
    "Kolkata",
    "Jalpaiguri, Police Line",
];

/// Quick-select city buttons.
pub const POPULAR_CITIES: &[&str] = &[
    "New Delhi",
    "Gurgaon",
    "Jaipur",
    "Bengaluru",
    "Mumbai",
    "Kolkata",
    "Hyderabad",
    "Chennai",
    "Chandigarh",
    "Pune",
    "Ahmedabad",
    "Goa",
];

/// Tests offered while typing in the test box.
pub const TEST_SUGGESTIONS: &[&str] = &[
    "Complete Blood Count (CBC)",
    "Diabetes Test (Blood Sugar)",
    "Thyroid Profile",
    "Liver Function Test",
    "Kidney Function Test",
    "Lipid Profile",
    "Vitamin D Test",
    "Vitamin B12 Test",
    "HbA1c Test",
    "COVID-19 Test",
];

/// Location the search bar shows before the user picks one.
pub const DEFAULT_LOCATION: &str = "Siliguri";

/// Filter `candidates` by case-insensitive substring match.
///
/// Returns nothing for queries shorter than [`MIN_QUERY_LEN`] characters.
/// Order follows `candidates`.
pub fn filter_suggestions<'a>(candidates: &[&'a str], query: &str) -> Vec<&'a str> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(&needle))
        .collect()
}

/// Location suggestions for a partially typed location.
pub fn location_suggestions(query: &str) -> Vec<&'static str> {
    filter_suggestions(LOCATION_SUGGESTIONS, query)
}

/// Test suggestions for a partially typed test name.
pub fn test_suggestions(query: &str) -> Vec<&'static str> {
    filter_suggestions(TEST_SUGGESTIONS, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_query_has_no_suggestions() {
        assert!(location_suggestions("").is_empty());
        assert!(location_suggestions("j").is_empty());
        assert!(test_suggestions(" t ").is_empty());
    }

    #[test]
    fn test_location_substring_match() {
        assert_eq!(
            location_suggestions("jal"),
            vec!["Jalpaiguri", "Jalpas", "Jalpaiguri, Police Line"]
        );
        assert_eq!(location_suggestions("RAI"), vec!["Raigang", "Raipur"]);
    }

    #[test]
    fn test_test_substring_match() {
        assert_eq!(
            test_suggestions("vitamin"),
            vec!["Vitamin D Test", "Vitamin B12 Test"]
        );
        assert_eq!(test_suggestions("cbc"), vec!["Complete Blood Count (CBC)"]);
        assert!(test_suggestions("mri").is_empty());
    }

    proptest! {
        #[test]
        fn prop_suggestions_always_contain_query(query in "[a-zA-Z ]{2,6}") {
            let needle = query.trim().to_lowercase();
            for s in test_suggestions(&query) {
                prop_assert!(s.to_lowercase().contains(&needle));
            }
        }
    }
}
