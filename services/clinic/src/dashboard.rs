//! services/clinic/src/dashboard.rs
//!
//! The vet dashboard flows: the filtered booking table with its stat cards,
//! the guided status transitions, and slot management for the signed-in vet.
//! The presentation layer owns a `DashboardQuery` and passes it into every
//! call; nothing here keeps state between calls.

use chrono::{Datelike, Duration, NaiveDate};

use petopia_core::bookings::BookingStats;
use petopia_core::domain::{AvailabilitySlot, Booking, BookingStatus, Weekday};
use petopia_core::status::{ConfirmOutcome, ConfirmationPrompt, StatusFlow, TransitionStep};
use petopia_core::time::to_minutes;

use crate::error::AppResult;
use crate::session::VetIdentity;
use crate::state::AppState;

/// Prompt shown before a booking row is deleted.
pub const DELETE_BOOKING: ConfirmationPrompt = ConfirmationPrompt {
    message: "Are you sure you want to delete this booking?",
    action_label: "Yes, Delete",
    destructive: true,
};

/// Prompt shown before an availability slot is deleted.
pub const DELETE_SLOT: ConfirmationPrompt = ConfirmationPrompt {
    message: "Are you sure you want to delete this time slot?",
    action_label: "Yes, Delete",
    destructive: true,
};

/// The date presets offered by the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateWindow {
    #[default]
    All,
    /// The appointment is today.
    Today,
    /// Within seven days either side of today.
    Week,
    /// In the current calendar month.
    Month,
}

impl DateWindow {
    fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateWindow::All => true,
            DateWindow::Today => date == today,
            DateWindow::Week => {
                date >= today - Duration::days(7) && date <= today + Duration::days(7)
            }
            DateWindow::Month => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

/// The filter context the presentation layer owns and hands into each load.
#[derive(Debug, Clone, Default)]
pub struct DashboardQuery {
    pub status: Option<BookingStatus>,
    pub window: DateWindow,
    pub search: String,
}

/// One pass of the booking table plus the stat cards. The stats always cover
/// the vet's whole collection, not just the filtered rows.
#[derive(Debug)]
pub struct DashboardView {
    pub bookings: Vec<Booking>,
    pub stats: BookingStats,
}

/// A committed transition together with the reloaded view the table and
/// stat cards re-render from.
#[derive(Debug)]
pub struct Reloaded {
    pub booking: Booking,
    pub view: DashboardView,
}

/// Result of requesting a status change from the table or details modal.
#[derive(Debug)]
pub enum StatusChange {
    Applied(Reloaded),
    NeedsConfirmation(ConfirmationPrompt),
}

/// Result of the user accepting the confirmation prompt.
#[derive(Debug)]
pub enum ConfirmedChange {
    Applied(Reloaded),
    /// The rejection-reason form must be submitted before anything commits.
    ReasonRequired,
}

/// The dashboard of one signed-in vet.
pub struct Dashboard<'a> {
    state: &'a AppState,
    vet: VetIdentity,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState, vet: VetIdentity) -> Self {
        Self { state, vet }
    }

    pub fn vet(&self) -> &VetIdentity {
        &self.vet
    }

    /// Runs the filter pipeline and recomputes the stat cards.
    pub fn load(&self, query: &DashboardQuery) -> AppResult<DashboardView> {
        let mine = self
            .state
            .bookings()
            .for_provider(&self.vet.id, &self.vet.name)?;
        let stats = BookingStats::tally(&mine);

        let today = self.state.clock.now().date_naive();
        let search = query.search.trim().to_lowercase();
        let bookings = mine
            .into_iter()
            .filter(|b| query.status.map_or(true, |status| b.status == status))
            .filter(|b| search.is_empty() || b.matches_search(&search))
            .filter(|b| query.window.contains(b.date, today))
            .collect();
        Ok(DashboardView { bookings, stats })
    }

    /// Full detail record for the details modal.
    pub fn booking(&self, booking_id: &str) -> AppResult<Booking> {
        Ok(self.state.bookings().get(booking_id)?)
    }

    /// First step of a status change. `Pending` applies at once and the
    /// refreshed view comes back; the terminal targets return the prompt to
    /// render.
    pub fn request_status_change(
        &self,
        query: &DashboardQuery,
        booking_id: &str,
        target: BookingStatus,
    ) -> AppResult<StatusChange> {
        let store = self.state.bookings();
        match StatusFlow::new(&store).request(booking_id, target)? {
            TransitionStep::Applied(booking) => {
                tracing::info!(booking_id, ?target, "booking status updated");
                Ok(StatusChange::Applied(Reloaded {
                    booking,
                    view: self.load(query)?,
                }))
            }
            TransitionStep::NeedsConfirmation(prompt) => {
                Ok(StatusChange::NeedsConfirmation(prompt))
            }
        }
    }

    /// Second step, once the user accepted the prompt. Cancellations hand
    /// back `ReasonRequired` instead of committing.
    pub fn confirm_status_change(
        &self,
        query: &DashboardQuery,
        booking_id: &str,
        target: BookingStatus,
    ) -> AppResult<ConfirmedChange> {
        let store = self.state.bookings();
        match StatusFlow::new(&store).confirm(booking_id, target)? {
            ConfirmOutcome::Updated(booking) => {
                tracing::info!(booking_id, ?target, "booking status updated");
                Ok(ConfirmedChange::Applied(Reloaded {
                    booking,
                    view: self.load(query)?,
                }))
            }
            ConfirmOutcome::ReasonRequired => Ok(ConfirmedChange::ReasonRequired),
        }
    }

    /// Final step of a rejection: commits the cancellation with its reason
    /// and reloads.
    pub fn submit_rejection(
        &self,
        query: &DashboardQuery,
        booking_id: &str,
        reason: &str,
        notes: &str,
    ) -> AppResult<Reloaded> {
        let store = self.state.bookings();
        let booking = StatusFlow::new(&store).submit_rejection(booking_id, reason, notes)?;
        tracing::info!(booking_id, reason, "booking rejected");
        Ok(Reloaded {
            booking,
            view: self.load(query)?,
        })
    }

    /// Deletes a booking (after the [`DELETE_BOOKING`] prompt) and reloads.
    pub fn delete_booking(
        &self,
        query: &DashboardQuery,
        booking_id: &str,
    ) -> AppResult<(bool, DashboardView)> {
        let deleted = self.state.bookings().delete(booking_id)?;
        if deleted {
            tracing::info!(booking_id, "booking deleted");
        }
        Ok((deleted, self.load(query)?))
    }

    //--- Availability management -----------------------------------------

    pub fn slots(&self) -> AppResult<Vec<AvailabilitySlot>> {
        Ok(self.state.availability(&self.vet.id).list()?)
    }

    pub fn add_slot(&self, day: Weekday, from: &str, to: &str) -> AppResult<AvailabilitySlot> {
        let slot = self.state.availability(&self.vet.id).add(day, from, to)?;
        tracing::info!(vet = %self.vet.id, slot = slot.id, "time slot added");
        Ok(slot)
    }

    pub fn edit_slot(
        &self,
        id: u32,
        day: Weekday,
        from: &str,
        to: &str,
    ) -> AppResult<AvailabilitySlot> {
        let slot = self.state.availability(&self.vet.id).edit(id, day, from, to)?;
        tracing::info!(vet = %self.vet.id, slot = id, "time slot updated");
        Ok(slot)
    }

    pub fn toggle_slot(&self, id: u32) -> AppResult<AvailabilitySlot> {
        Ok(self.state.availability(&self.vet.id).toggle(id)?)
    }

    /// Deletes a slot (after the [`DELETE_SLOT`] prompt).
    pub fn remove_slot(&self, id: u32) -> AppResult<bool> {
        Ok(self.state.availability(&self.vet.id).remove(id)?)
    }
}

/// The Sunday-anchored week the availability grid shows, `offset` weeks away
/// from the week containing `today`.
pub fn week_dates(today: NaiveDate, offset: i64) -> [NaiveDate; 7] {
    let shifted = today + Duration::weeks(offset);
    let sunday = shifted - Duration::days(shifted.weekday().num_days_from_sunday() as i64);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// Grid header label, e.g. `9:00 AM`. Falls back to the raw string for
/// anything that is not a clock time.
pub fn format_12h(time: &str) -> String {
    let Ok(minutes) = to_minutes(time) else {
        return time.to_string();
    };
    let hour = minutes / 60;
    let minute = minutes % 60;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_dates_start_on_sunday_and_span_seven_days() {
        // 2026-01-15 is a Thursday; its week starts Sunday 2026-01-11.
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let week = week_dates(today, 0);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
        // A slot's weekday indexes straight into the grid columns.
        assert_eq!(week[Weekday::Thursday.index()], today);
    }

    #[test]
    fn week_offset_moves_whole_weeks() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let previous = week_dates(today, -1);
        assert_eq!(previous[0], NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
        let next = week_dates(today, 1);
        assert_eq!(next[0], NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
    }

    #[test]
    fn twelve_hour_labels_match_the_grid() {
        assert_eq!(format_12h("09:00"), "9:00 AM");
        assert_eq!(format_12h("12:30"), "12:30 PM");
        assert_eq!(format_12h("14:00"), "2:00 PM");
        assert_eq!(format_12h("00:15"), "12:15 AM");
        assert_eq!(format_12h("whenever"), "whenever");
    }

    #[test]
    fn date_windows_match_the_filter_presets() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let contains = |w: DateWindow, d: &str| w.contains(d.parse().unwrap(), today);

        assert!(contains(DateWindow::All, "1999-01-01"));
        assert!(contains(DateWindow::Today, "2026-01-15"));
        assert!(!contains(DateWindow::Today, "2026-01-16"));
        assert!(contains(DateWindow::Week, "2026-01-08"));
        assert!(contains(DateWindow::Week, "2026-01-22"));
        assert!(!contains(DateWindow::Week, "2026-01-23"));
        assert!(contains(DateWindow::Month, "2026-01-31"));
        assert!(!contains(DateWindow::Month, "2026-02-01"));
    }
}
