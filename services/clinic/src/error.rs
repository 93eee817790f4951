//! services/clinic/src/error.rs
//!
//! Defines the primary error type for the entire clinic service.

use crate::config::ConfigError;
use crate::session::SessionError;
use crate::wizard::WizardError;
use petopia_core::availability::SlotError;
use petopia_core::bookings::BookingError;
use petopia_core::ports::PortError;

/// The primary error type for the `clinic` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// A refused availability-slot operation; the message is shown on the slot form.
    #[error("{0}")]
    Slot(#[from] SlotError),

    /// A refused booking operation; the message is shown as a notification.
    #[error("{0}")]
    Booking(#[from] BookingError),

    /// A refused login or a missing session.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// A refused wizard navigation or submission.
    #[error("{0}")]
    Wizard(#[from] WizardError),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// A convenience type alias for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
