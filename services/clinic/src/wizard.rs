//! services/clinic/src/wizard.rs
//!
//! The customer-facing booking wizard: step ordering and gating, the
//! in-progress draft, and the final booking submission. The presentation
//! layer owns a `WizardSession` and a `BookingDraft` and passes them in
//! explicitly; there is no module-level state.

use chrono::NaiveDate;

use petopia_core::domain::{Booking, NewBooking};
use petopia_core::ports::PortError;

use crate::directory;
use crate::state::AppState;

/// The four interactive steps, in order, plus the terminal confirmation
/// screen reached only by booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Vets,
    DateTime,
    Details,
    Summary,
    Confirmation,
}

impl WizardStep {
    pub const ORDER: [WizardStep; 4] = [
        WizardStep::Vets,
        WizardStep::DateTime,
        WizardStep::Details,
        WizardStep::Summary,
    ];

    fn position(self) -> Option<usize> {
        Self::ORDER.iter().position(|s| *s == self)
    }
}

/// A wizard step could not be left, or the booking could not be submitted.
/// The `Display` text is shown to the customer as-is.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Please select a vet")]
    VetRequired,
    #[error("Please select a date and time")]
    DateTimeRequired,
    #[error("Please enter your lastname")]
    LastNameRequired,
    #[error("Please complete all steps")]
    Incomplete,
    #[error("Unknown vet id '{0}'")]
    UnknownVet(String),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Everything the customer has filled in so far.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub vet_id: Option<String>,
    pub date: Option<NaiveDate>,
    /// Selected interval as `HH:MM-HH:MM`.
    pub time: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub pet_name: String,
    pub pet_type: String,
    pub reason: String,
    pub pet_condition: String,
}

impl BookingDraft {
    /// Whether `step` has everything it needs for the customer to move on.
    /// Customer and pet details are only minimally validated; the last name
    /// is the one field the form insists on.
    fn step_complete(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::Vets if self.vet_id.is_none() => Err(WizardError::VetRequired),
            WizardStep::DateTime if self.date.is_none() || self.time.is_none() => {
                Err(WizardError::DateTimeRequired)
            }
            WizardStep::Details if self.last_name.trim().is_empty() => {
                Err(WizardError::LastNameRequired)
            }
            _ => Ok(()),
        }
    }
}

/// The navigation state of one customer's walk through the wizard.
#[derive(Debug, Clone)]
pub struct WizardSession {
    current: WizardStep,
    completed: Vec<WizardStep>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Vets,
            completed: Vec::new(),
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Whether the sidebar lets the customer jump to `step`: backwards and
    /// the current step always, forwards only once every earlier step has
    /// been completed.
    pub fn can_access(&self, step: WizardStep) -> bool {
        // The confirmation screen sits outside the ordered flow; booking is
        // the only thing that leads there and nothing gates it.
        let (Some(target), Some(current)) = (step.position(), self.current.position()) else {
            return true;
        };
        if target <= current {
            return true;
        }
        WizardStep::ORDER[..target]
            .iter()
            .all(|s| self.completed.contains(s))
    }

    /// Moves to `step`. Going back never validates; going forward checks
    /// each intervening step against the draft and stops at the first one
    /// that is not complete.
    pub fn go_to(&mut self, step: WizardStep, draft: &BookingDraft) -> Result<(), WizardError> {
        let (Some(target), Some(current)) = (step.position(), self.current.position()) else {
            self.current = step;
            return Ok(());
        };
        if target > current {
            for earlier in &WizardStep::ORDER[..target] {
                draft.step_complete(*earlier)?;
                if !self.completed.contains(earlier) {
                    self.completed.push(*earlier);
                }
            }
        }
        self.current = step;
        Ok(())
    }
}

/// Submits the finished draft: resolves the provider through the directory
/// so `vetId` and the display name agree, then creates the Pending booking.
pub fn book(state: &AppState, draft: &BookingDraft) -> Result<Booking, WizardError> {
    let (Some(vet_id), Some(date), Some(time)) = (&draft.vet_id, draft.date, &draft.time) else {
        return Err(WizardError::Incomplete);
    };
    let profile =
        directory::find(vet_id).ok_or_else(|| WizardError::UnknownVet(vet_id.clone()))?;

    let booking = state.bookings().create(NewBooking {
        vet_id: profile.id.to_string(),
        vet: profile.name.to_string(),
        vet_price: Some(profile.price.to_string()),
        date,
        time: time.clone(),
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        pet_name: draft.pet_name.clone(),
        pet_type: draft.pet_type.clone(),
        reason: draft.reason.clone(),
        pet_condition: draft.pet_condition.clone(),
    })?;
    tracing::info!(booking_id = %booking.booking_id, vet = profile.id, "booking created");
    Ok(booking)
}
