//! crates/petopia_core/src/testutil.rs
//!
//! In-memory doubles for the ports so the store tests run hermetically.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::domain::NewBooking;
use crate::ports::{Clock, PortResult, RandomSource, StorageService};

/// Map-backed storage standing in for the browser's key-value store.
pub struct MapStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MapStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-populates a key, bypassing the stores.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageService for MapStorage {
    fn read(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PortResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// A clock pinned to one instant.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(rfc3339)
                .expect("valid RFC 3339 timestamp")
                .with_timezone(&Utc),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Replays a scripted sequence of values, cycling when exhausted.
pub struct StubRandom {
    values: Vec<u32>,
    next: Mutex<usize>,
}

impl StubRandom {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: Mutex::new(0),
        }
    }
}

impl RandomSource for StubRandom {
    fn below(&self, upper: u32) -> u32 {
        let mut next = self.next.lock().unwrap();
        let value = self.values[*next % self.values.len()];
        *next += 1;
        value % upper
    }
}

/// A filled-in wizard result for the given provider and appointment date.
pub fn new_booking(vet_id: &str, date: &str) -> NewBooking {
    let (vet, price) = match vet_id {
        "lina" => ("Dr. Lina Haddad", "10.00"),
        _ => ("Dr. Omar Awwad", "12.00"),
    };
    NewBooking {
        vet_id: vet_id.to_string(),
        vet: vet.to_string(),
        vet_price: Some(price.to_string()),
        date: date.parse().expect("valid YYYY-MM-DD date"),
        time: "09:00-10:00".to_string(),
        first_name: "Ahmad".to_string(),
        last_name: "Mahmoud".to_string(),
        email: "ahmad@email.com".to_string(),
        phone: "+962 79 123 4567".to_string(),
        pet_name: "Luna".to_string(),
        pet_type: "Cat".to_string(),
        reason: "Vaccination".to_string(),
        pet_condition: "Healthy, needs annual shots".to_string(),
    }
}
