//! services/clinic/src/state.rs
//!
//! Defines the application's shared state: the wired-up ports plus
//! constructors for the core stores.

use std::sync::Arc;

use petopia_core::availability::AvailabilityStore;
use petopia_core::bookings::BookingStore;
use petopia_core::ports::{Clock, RandomSource, StorageService};

use crate::adapters::{FileStorage, MemoryStorage, SystemClock, ThreadRngSource};
use crate::config::Config;
use crate::error::AppResult;

/// The shared application state, created once at startup and handed to every
/// flow. Two storage handles mirror the browser: `storage` persists across
/// runs, `session` lives only as long as the process.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageService>,
    pub session: Arc<dyn StorageService>,
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Production wiring: file-backed persistence at the configured path.
    pub fn new(config: Config) -> AppResult<Self> {
        let storage = FileStorage::open(&config.data_path)?;
        Ok(Self {
            storage: Arc::new(storage),
            session: Arc::new(MemoryStorage::new()),
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRngSource),
            config: Arc::new(config),
        })
    }

    /// Fully in-memory wiring, nothing touches disk.
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            session: Arc::new(MemoryStorage::new()),
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRngSource),
            config: Arc::new(Config::default()),
        }
    }

    /// The shared booking collection.
    pub fn bookings(&self) -> BookingStore {
        BookingStore::new(
            self.storage.clone(),
            self.clock.clone(),
            self.random.clone(),
        )
    }

    /// The availability collection owned by `vet_id`.
    pub fn availability(&self, vet_id: &str) -> AvailabilityStore {
        AvailabilityStore::new(self.storage.clone(), vet_id)
    }
}
