//! Collection address and schedule models.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Editable fields of an [`AddressDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Address,
    City,
    Pincode,
    Landmark,
}

/// Collection address, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressDraft {
    /// House/flat number, building and street
    pub address: String,
    pub city: String,
    /// Postal code; valid when exactly 6 digits
    pub pincode: String,
    pub landmark: Option<String>,
}

impl AddressDraft {
    /// Set a field from user input. A blank landmark clears it.
    pub fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::Address => self.address = value,
            AddressField::City => self.city = value,
            AddressField::Pincode => self.pincode = value,
            AddressField::Landmark => {
                self.landmark = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                };
            }
        }
    }

    /// Current text value of a field.
    pub fn field_value(&self, field: AddressField) -> &str {
        match field {
            AddressField::Address => &self.address,
            AddressField::City => &self.city,
            AddressField::Pincode => &self.pincode,
            AddressField::Landmark => self.landmark.as_deref().unwrap_or(""),
        }
    }
}

/// A validated collection address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionAddress {
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub landmark: Option<String>,
}

/// A half-hour home collection slot between 06:00 AM and 04:00 PM.
///
/// Stored as minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionSlot(u16);

impl CollectionSlot {
    const FIRST: u16 = 6 * 60;
    const LAST: u16 = 16 * 60;
    const STEP: u16 = 30;

    /// Every bookable slot, earliest first.
    pub fn all() -> Vec<CollectionSlot> {
        (Self::FIRST..=Self::LAST)
            .step_by(Self::STEP as usize)
            .map(CollectionSlot)
            .collect()
    }

    /// Slot starting at `hour:minute` (24-hour clock), if it is bookable.
    pub fn at(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        let minutes = u16::from(hour) * 60 + u16::from(minute);
        let on_grid = (Self::FIRST..=Self::LAST).contains(&minutes)
            && (minutes - Self::FIRST) % Self::STEP == 0;
        on_grid.then_some(CollectionSlot(minutes))
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Display label, e.g. `06:30 AM`.
    pub fn label(&self) -> String {
        let hour = self.hour();
        let period = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", hour12, self.minute(), period)
    }
}

impl fmt::Display for CollectionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for CollectionSlot {
    type Err = String;

    /// Accepts display labels (`04:00 PM`) and 24-hour times (`16:00`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_uppercase();
        let (clock, period) = match upper.rsplit_once(' ') {
            Some((clock, p)) if p == "AM" || p == "PM" => (clock.trim(), Some(p)),
            _ => (upper.as_str(), None),
        };

        let invalid = || format!("Invalid collection slot: {}", trimmed);
        let (h, m) = clock.split_once(':').ok_or_else(invalid)?;
        let mut hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;

        if let Some(period) = period {
            if hour == 0 || hour > 12 {
                return Err(invalid());
            }
            hour = match (period, hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                ("PM", 12) => 12,
                (_, h) => h + 12,
            };
        }

        CollectionSlot::at(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for CollectionSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CollectionSlot> for String {
    fn from(slot: CollectionSlot) -> Self {
        slot.label()
    }
}

/// Collection date and slot, as selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub collection_date: Option<NaiveDate>,
    pub collection_time: Option<CollectionSlot>,
}

/// A validated collection schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionSchedule {
    pub date: NaiveDate,
    pub slot: CollectionSlot,
}

/// Inclusive range of dates offered by the collection date picker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl BookingWindow {
    /// Window opening `lead_days` after `today` and spanning `window_days` more days.
    ///
    /// `None` when either end falls past the last representable date.
    pub fn for_today(today: NaiveDate, lead_days: u32, window_days: u32) -> Option<Self> {
        let earliest = today.checked_add_signed(Duration::days(i64::from(lead_days)))?;
        let latest = earliest.checked_add_signed(Duration::days(i64::from(window_days)))?;
        Some(Self { earliest, latest })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.earliest && date <= self.latest
    }

    /// Every selectable date, earliest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.earliest
            .iter_days()
            .take_while(|d| *d <= self.latest)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_enumeration() {
        let slots = CollectionSlot::all();
        assert_eq!(slots.len(), 21);
        assert_eq!(slots[0].label(), "06:00 AM");
        assert_eq!(slots[12].label(), "12:00 PM");
        assert_eq!(slots[20].label(), "04:00 PM");
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!("06:30 am".parse::<CollectionSlot>(), Ok(CollectionSlot(390)));
        assert_eq!("12:30 PM".parse::<CollectionSlot>(), Ok(CollectionSlot(750)));
        assert_eq!("16:00".parse::<CollectionSlot>(), Ok(CollectionSlot(960)));
        assert!("04:30 PM".parse::<CollectionSlot>().is_err());
        assert!("05:30 AM".parse::<CollectionSlot>().is_err());
        assert!("07:15 AM".parse::<CollectionSlot>().is_err());
        assert!("noon".parse::<CollectionSlot>().is_err());
    }

    #[test]
    fn test_slot_serde_uses_label() {
        let slot = CollectionSlot::at(9, 0).unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, "\"09:00 AM\"");
        let back: CollectionSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_booking_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = BookingWindow::for_today(today, 1, 7).unwrap();

        assert_eq!(window.earliest, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(window.latest, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert!(!window.contains(today));
        assert!(window.contains(window.latest));
        assert_eq!(window.dates().len(), 8);
    }

    #[test]
    fn test_booking_window_past_calendar_end() {
        assert!(BookingWindow::for_today(NaiveDate::MAX, 1, 7).is_none());
        let near_end = NaiveDate::MAX - Duration::days(3);
        assert!(BookingWindow::for_today(near_end, 1, 7).is_none());
        assert!(BookingWindow::for_today(near_end, 1, 2).is_some());
    }

    #[test]
    fn test_blank_landmark_clears() {
        let mut draft = AddressDraft::default();
        draft.set(AddressField::Landmark, "Near clock tower".into());
        assert_eq!(draft.landmark.as_deref(), Some("Near clock tower"));
        draft.set(AddressField::Landmark, "  ".into());
        assert!(draft.landmark.is_none());
    }
}
