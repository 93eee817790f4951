//! crates/petopia_core/src/bookings.rs
//!
//! The shared appointment-booking collection: creation with generated
//! booking ids, the dashboard's filters, deletion, and the status mutation
//! primitives the transition flow builds on. The whole collection lives as
//! one JSON array under a single storage key.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::domain::{Booking, BookingStatus, NewBooking};
use crate::ports::{Clock, PortError, PortResult, RandomSource, StorageService};

/// The storage key for the booking collection.
pub const STORAGE_KEY: &str = "petopiaBookings";

/// A booking operation was refused; no mutation took place.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking {0} was not found")]
    NotFound(String),
    #[error("Please select a rejection reason")]
    MissingReason,
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Booking counts by status for the dashboard's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl BookingStats {
    pub fn tally(bookings: &[Booking]) -> Self {
        let mut stats = Self {
            total: bookings.len(),
            ..Self::default()
        };
        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Completed => stats.completed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

/// Store over the shared booking collection.
///
/// Any caller may read every booking; provider dashboards are expected to
/// narrow to [`BookingStore::for_provider`] before display or mutation.
pub struct BookingStore {
    storage: Arc<dyn StorageService>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl BookingStore {
    pub fn new(
        storage: Arc<dyn StorageService>,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            storage,
            clock,
            random,
        }
    }

    /// Stamps id, status and creation time onto the wizard's fields and
    /// appends the booking.
    ///
    /// The id is `PT-<year>-<5-digit suffix>` with a random suffix; it is
    /// not guaranteed collision-free and no retry loop is attempted.
    pub fn create(&self, new: NewBooking) -> PortResult<Booking> {
        let mut bookings = self.load()?;
        let now = self.clock.now();
        let booking = Booking {
            booking_id: format!("PT-{}-{:05}", now.year(), self.random.below(100_000)),
            vet_id: Some(new.vet_id),
            vet: Some(new.vet),
            vet_price: new.vet_price,
            date: new.date,
            time: new.time,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            pet_name: new.pet_name,
            pet_type: new.pet_type,
            reason: new.reason,
            pet_condition: new.pet_condition,
            status: BookingStatus::Pending,
            rejection_reason: None,
            rejection_notes: None,
            created_at: now,
        };
        bookings.push(booking.clone());
        self.persist(&bookings)?;
        Ok(booking)
    }

    /// Every booking in insertion order.
    pub fn list(&self) -> PortResult<Vec<Booking>> {
        self.load()
    }

    pub fn get(&self, booking_id: &str) -> Result<Booking, BookingError> {
        self.load()?
            .into_iter()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))
    }

    /// Bookings assigned to a provider, matched on the stored provider id or
    /// the display name. Both paths are needed: historical records may only
    /// populate one of the two fields.
    pub fn for_provider(&self, provider_id: &str, provider_name: &str) -> PortResult<Vec<Booking>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|b| b.belongs_to(provider_id, provider_name))
            .collect())
    }

    pub fn with_status(&self, status: BookingStatus) -> PortResult<Vec<Booking>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|b| b.status == status)
            .collect())
    }

    /// Bookings whose appointment date falls within `from..=to`.
    pub fn in_date_range(&self, from: NaiveDate, to: NaiveDate) -> PortResult<Vec<Booking>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|b| b.date >= from && b.date <= to)
            .collect())
    }

    /// Case-insensitive substring search over booking id, pet name and the
    /// owner's full name.
    pub fn search(&self, query: &str) -> PortResult<Vec<Booking>> {
        let query = query.trim().to_lowercase();
        Ok(self
            .load()?
            .into_iter()
            .filter(|b| b.matches_search(&query))
            .collect())
    }

    /// Deletes a booking. Unknown ids report `false` rather than failing.
    pub fn delete(&self, booking_id: &str) -> PortResult<bool> {
        let mut bookings = self.load()?;
        let before = bookings.len();
        bookings.retain(|b| b.booking_id != booking_id);
        if bookings.len() == before {
            return Ok(false);
        }
        self.persist(&bookings)?;
        Ok(true)
    }

    /// The sole status mutation primitive. Setting a terminal booking back
    /// to `Pending` is permitted here but never reachable from the guided
    /// transition flow.
    pub fn update_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Booking, BookingError> {
        self.mutate(booking_id, |b| b.status = status)
    }

    /// Commits a rejection: status, reason and notes in a single persist so
    /// a storage failure cannot leave a cancelled booking without its reason.
    pub fn reject(
        &self,
        booking_id: &str,
        reason: &str,
        notes: &str,
    ) -> Result<Booking, BookingError> {
        self.mutate(booking_id, |b| {
            b.status = BookingStatus::Cancelled;
            b.rejection_reason = Some(reason.to_string());
            b.rejection_notes = Some(notes.to_string());
        })
    }

    fn mutate(
        &self,
        booking_id: &str,
        apply: impl FnOnce(&mut Booking),
    ) -> Result<Booking, BookingError> {
        let mut bookings = self.load()?;
        let booking = bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;
        apply(booking);
        let updated = booking.clone();
        self.persist(&bookings)?;
        Ok(updated)
    }

    fn load(&self) -> PortResult<Vec<Booking>> {
        match self.storage.read(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| PortError::Storage(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, bookings: &[Booking]) -> PortResult<()> {
        let raw =
            serde_json::to_string(bookings).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.write(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{new_booking, FixedClock, MapStorage, StubRandom};

    fn store_with(storage: Arc<MapStorage>) -> BookingStore {
        BookingStore::new(
            storage,
            Arc::new(FixedClock::at("2026-01-05T10:00:00Z")),
            Arc::new(StubRandom::new(&[7, 142, 42, 99_999])),
        )
    }

    fn store() -> BookingStore {
        store_with(Arc::new(MapStorage::new()))
    }

    #[test]
    fn create_stamps_id_status_and_timestamp() {
        let store = store();
        let booking = store.create(new_booking("omar", "2026-01-15")).unwrap();
        assert_eq!(booking.booking_id, "PT-2026-00007");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.created_at.to_rfc3339(), "2026-01-05T10:00:00+00:00");
        assert_eq!(booking.vet_id.as_deref(), Some("omar"));
        assert_eq!(booking.vet.as_deref(), Some("Dr. Omar Awwad"));
    }

    #[test]
    fn suffix_is_zero_padded_to_five_digits() {
        let store = store();
        store.create(new_booking("omar", "2026-01-15")).unwrap();
        store.create(new_booking("omar", "2026-01-16")).unwrap();
        store.create(new_booking("omar", "2026-01-17")).unwrap();
        let fourth = store.create(new_booking("omar", "2026-01-18")).unwrap();
        assert_eq!(fourth.booking_id, "PT-2026-99999");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = store();
        let a = store.create(new_booking("omar", "2026-01-15")).unwrap();
        let b = store.create(new_booking("lina", "2026-01-10")).unwrap();
        let ids: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|x| x.booking_id)
            .collect();
        assert_eq!(ids, vec![a.booking_id, b.booking_id]);
    }

    #[test]
    fn provider_filter_matches_id_and_legacy_name_records() {
        let storage = Arc::new(MapStorage::new());
        // A historical record with only the display name, no vetId.
        storage.seed(
            STORAGE_KEY,
            r#"[{
                "bookingId": "PT-2024-00123",
                "vet": "Dr. Omar Awwad",
                "date": "2024-06-01",
                "time": "09:00-10:00",
                "petname": "Whiskers",
                "createdAt": "2024-05-20T09:00:00Z"
            }]"#,
        );
        let store = store_with(storage);
        store.create(new_booking("omar", "2026-01-15")).unwrap();
        store.create(new_booking("lina", "2026-01-15")).unwrap();

        let omar = store.for_provider("omar", "Dr. Omar Awwad").unwrap();
        assert_eq!(omar.len(), 2);
        assert!(omar.iter().any(|b| b.booking_id == "PT-2024-00123"));
    }

    #[test]
    fn status_filter_matches_exactly() {
        let store = store();
        let a = store.create(new_booking("omar", "2026-01-15")).unwrap();
        let b = store.create(new_booking("omar", "2026-01-16")).unwrap();
        store
            .update_status(&b.booking_id, BookingStatus::Completed)
            .unwrap();

        let pending = store.with_status(BookingStatus::Pending).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].booking_id, a.booking_id);
        assert_eq!(store.with_status(BookingStatus::Cancelled).unwrap().len(), 0);
    }

    #[test]
    fn date_range_is_inclusive_at_both_ends() {
        let store = store();
        store.create(new_booking("omar", "2026-01-10")).unwrap();
        store.create(new_booking("omar", "2026-01-15")).unwrap();
        store.create(new_booking("omar", "2026-01-20")).unwrap();

        let from = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(store.in_date_range(from, to).unwrap().len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_id_pet_and_owner() {
        let store = store();
        let booking = store.create(new_booking("omar", "2026-01-15")).unwrap();

        assert_eq!(store.search("LUNA").unwrap().len(), 1);
        assert_eq!(store.search("ahmad mah").unwrap().len(), 1);
        let by_id = store.search(&booking.booking_id.to_lowercase()).unwrap();
        assert_eq!(by_id.len(), 1);
        assert!(store.search("nothing-like-this").unwrap().is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let store = store();
        let booking = store.create(new_booking("omar", "2026-01-15")).unwrap();
        assert!(store.delete(&booking.booking_id).unwrap());
        assert!(!store.delete(&booking.booking_id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn update_status_on_unknown_id_reports_not_found() {
        let store = store();
        let err = store
            .update_status("PT-2026-12345", BookingStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[test]
    fn reject_commits_status_reason_and_notes_together() {
        let store = store();
        let booking = store.create(new_booking("omar", "2026-01-15")).unwrap();
        let rejected = store
            .reject(&booking.booking_id, "Provider unavailable", "On leave")
            .unwrap();
        assert_eq!(rejected.status, BookingStatus::Cancelled);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Provider unavailable"));
        assert_eq!(rejected.rejection_notes.as_deref(), Some("On leave"));

        let stored = store.get(&booking.booking_id).unwrap();
        assert_eq!(stored, rejected);
    }

    #[test]
    fn stats_tally_counts_by_status() {
        let store = store();
        let a = store.create(new_booking("omar", "2026-01-15")).unwrap();
        store.create(new_booking("omar", "2026-01-16")).unwrap();
        store
            .update_status(&a.booking_id, BookingStatus::Completed)
            .unwrap();

        let stats = BookingStats::tally(&store.list().unwrap());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 0);
    }

    #[test]
    fn legacy_confirmed_records_count_as_completed() {
        let storage = Arc::new(MapStorage::new());
        storage.seed(
            STORAGE_KEY,
            r#"[{
                "bookingId": "PT-2025-00002",
                "vetId": "lina",
                "date": "2025-11-02",
                "time": "14:00-15:00",
                "status": "Confirmed",
                "createdAt": "2025-10-30T08:30:00Z"
            }]"#,
        );
        let store = store_with(storage);
        let stats = BookingStats::tally(&store.list().unwrap());
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 0);
    }
}
