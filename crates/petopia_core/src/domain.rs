//! crates/petopia_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! The serde attributes pin these structs to the exact JSON shapes the
//! persisted collections use, including the legacy field spellings older
//! records may carry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A day of the week, stored by its full English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Column index in a Sunday-first week (0 = Sunday, 6 = Saturday).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recurring weekly availability interval owned by one provider.
///
/// `from` and `to` are wall-clock `HH:MM` strings; the stores validate the
/// format on every insert or edit. Inactive slots stay in storage but are
/// exempt from conflict checks and hidden from bookable-time presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: u32,
    pub day: Weekday,
    pub from: String,
    pub to: String,
    pub active: bool,
}

/// The lifecycle state of a booking.
///
/// Older records spell `Completed` as `"Confirmed"` and may omit the field
/// entirely, which means `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Pending,
    #[serde(alias = "Confirmed")]
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// The label the dashboard shows for this state.
    pub fn display_text(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Awaiting Vet Confirmation",
            BookingStatus::Completed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// A single scheduled appointment tied to one provider, one customer and
/// one pet.
///
/// `vet_id` and `vet` are stored redundantly; historical records may carry
/// only one of them, so provider filtering matches on either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "bookingId")]
    pub booking_id: String,
    #[serde(rename = "vetId", default, skip_serializing_if = "Option::is_none")]
    pub vet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vet: Option<String>,
    #[serde(rename = "vetPrice", default, skip_serializing_if = "Option::is_none")]
    pub vet_price: Option<String>,
    pub date: NaiveDate,
    /// Appointment interval as `HH:MM-HH:MM`.
    #[serde(alias = "timeSlot")]
    pub time: String,
    #[serde(rename = "firstname", alias = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastname", alias = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "petname", alias = "petName", default)]
    pub pet_name: String,
    #[serde(rename = "pettype", alias = "petType", default)]
    pub pet_type: String,
    #[serde(default)]
    pub reason: String,
    #[serde(rename = "petcondition", alias = "condition", default)]
    pub pet_condition: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(
        rename = "rejectionReason",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rejection_reason: Option<String>,
    #[serde(
        rename = "rejectionNotes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rejection_notes: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Whether this booking belongs to the given provider, matching on the
    /// stored id or on the display name (older records only carry the name).
    pub fn belongs_to(&self, provider_id: &str, provider_name: &str) -> bool {
        self.vet_id.as_deref() == Some(provider_id)
            || self.vet.as_deref() == Some(provider_name)
    }

    /// Owner first and last name joined for display and search.
    pub fn owner_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Substring match over booking id, pet name and owner name. `query`
    /// must already be lowercased.
    pub fn matches_search(&self, query: &str) -> bool {
        self.booking_id.to_lowercase().contains(query)
            || self.pet_name.to_lowercase().contains(query)
            || self.owner_name().to_lowercase().contains(query)
    }
}

/// The fields the booking wizard collects; the store stamps the id, status
/// and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub vet_id: String,
    pub vet: String,
    pub vet_price: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub pet_name: String,
    pub pet_type: String,
    pub reason: String,
    pub pet_condition: String,
}
