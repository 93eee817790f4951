//! crates/petopia_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! browser's key-value storage or the system clock. Everything here is
//! synchronous: all operations run on the UI thread in response to user
//! events and the backing store is a synchronous local persistence call.

use chrono::{DateTime, Utc};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific failures of external facilities
/// (e.g. storage quota, a corrupt backing file).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Storage failure: {0}")]
    Storage(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Synchronous key-value persistence, the shape of `localStorage`:
/// string keys, string values, no transactions, last write wins.
pub trait StorageService: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent.
    fn read(&self, key: &str) -> PortResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> PortResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> PortResult<()>;
}

/// Wall-clock time, injected so stores stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of randomness for booking-id suffix generation.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly distributed value in `0..upper`.
    fn below(&self, upper: u32) -> u32;
}
