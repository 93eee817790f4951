pub mod availability;
pub mod bookings;
pub mod domain;
pub mod ports;
pub mod status;
pub mod time;

#[cfg(test)]
mod testutil;

pub use availability::{AvailabilityStore, SlotError};
pub use bookings::{BookingError, BookingStats, BookingStore};
pub use domain::{AvailabilitySlot, Booking, BookingStatus, NewBooking, Weekday};
pub use ports::{Clock, PortError, PortResult, RandomSource, StorageService};
pub use status::{ConfirmOutcome, ConfirmationPrompt, StatusFlow, TransitionStep};
pub use time::{overlaps, to_minutes, TimeError};
