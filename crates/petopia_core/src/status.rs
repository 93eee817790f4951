//! crates/petopia_core/src/status.rs
//!
//! The booking-status transition flow. `Pending` bookings move to
//! `Completed` or `Cancelled` through a two-step confirm, and a cancellation
//! additionally passes through a mandatory reason-capture sub-flow before
//! anything is committed. Nothing here mutates until the user has affirmed
//! every step.

use crate::bookings::{BookingError, BookingStore};
use crate::domain::{Booking, BookingStatus};

/// The reasons the rejection form offers. `Other` pairs with the free-text
/// notes field.
pub const REJECTION_REASONS: [&str; 5] = [
    "Provider unavailable",
    "Fully booked at this time",
    "Outside of working hours",
    "Service not offered",
    "Other",
];

/// What the presentation layer must render before a transition proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub message: &'static str,
    pub action_label: &'static str,
    /// Destructive prompts get the warning styling.
    pub destructive: bool,
}

pub const CONFIRM_APPOINTMENT: ConfirmationPrompt = ConfirmationPrompt {
    message: "Are you sure you want to confirm this appointment?",
    action_label: "Yes, Confirm",
    destructive: false,
};

pub const REJECT_APPOINTMENT: ConfirmationPrompt = ConfirmationPrompt {
    message: "Are you sure you want to reject this appointment?",
    action_label: "Yes, Reject",
    destructive: true,
};

/// Result of requesting a transition.
#[derive(Debug)]
pub enum TransitionStep {
    /// The target needed no confirmation and has been committed.
    Applied(Booking),
    /// The presentation layer must show this prompt and call
    /// [`StatusFlow::confirm`] once the user accepts.
    NeedsConfirmation(ConfirmationPrompt),
}

/// Result of a confirmed transition.
#[derive(Debug)]
pub enum ConfirmOutcome {
    Updated(Booking),
    /// Cancellations stay uncommitted until the reason sub-flow is
    /// submitted via [`StatusFlow::submit_rejection`].
    ReasonRequired,
}

/// Drives the two-step status change over the booking store.
pub struct StatusFlow<'a> {
    bookings: &'a BookingStore,
}

impl<'a> StatusFlow<'a> {
    pub fn new(bookings: &'a BookingStore) -> Self {
        Self { bookings }
    }

    /// First step. Verifies the booking exists, then either applies the
    /// change (target `Pending` needs no confirmation) or hands back the
    /// prompt to render. Unknown ids fail with `NotFound` and nothing is
    /// touched.
    pub fn request(
        &self,
        booking_id: &str,
        target: BookingStatus,
    ) -> Result<TransitionStep, BookingError> {
        self.bookings.get(booking_id)?;
        match target {
            BookingStatus::Pending => Ok(TransitionStep::Applied(
                self.bookings.update_status(booking_id, target)?,
            )),
            BookingStatus::Completed => {
                Ok(TransitionStep::NeedsConfirmation(CONFIRM_APPOINTMENT))
            }
            BookingStatus::Cancelled => {
                Ok(TransitionStep::NeedsConfirmation(REJECT_APPOINTMENT))
            }
        }
    }

    /// Second step, after the user accepted the prompt. Completion commits
    /// here; cancellation instead opens the reason sub-flow and commits
    /// nothing yet.
    pub fn confirm(
        &self,
        booking_id: &str,
        target: BookingStatus,
    ) -> Result<ConfirmOutcome, BookingError> {
        match target {
            BookingStatus::Cancelled => {
                self.bookings.get(booking_id)?;
                Ok(ConfirmOutcome::ReasonRequired)
            }
            other => Ok(ConfirmOutcome::Updated(
                self.bookings.update_status(booking_id, other)?,
            )),
        }
    }

    /// Final step of a cancellation. A blank reason selection fails with
    /// `MissingReason` and leaves the booking untouched; otherwise status,
    /// reason and notes are committed together.
    pub fn submit_rejection(
        &self,
        booking_id: &str,
        reason: &str,
        notes: &str,
    ) -> Result<Booking, BookingError> {
        if reason.trim().is_empty() {
            return Err(BookingError::MissingReason);
        }
        self.bookings.reject(booking_id, reason, notes)
    }
}
