//! services/clinic/src/seed.rs
//!
//! Demo bookings for trying the dashboard out. Seeded only when the booking
//! collection is empty, so real data is never touched.

use chrono::{DateTime, Utc};

use petopia_core::bookings;
use petopia_core::domain::{Booking, BookingStatus};
use petopia_core::ports::PortError;

use crate::error::AppResult;
use crate::state::AppState;

/// Seeds the four demo bookings when nothing is stored yet. Returns how many
/// records were written.
pub fn demo_bookings(state: &AppState) -> AppResult<usize> {
    let store = state.bookings();
    if !store.list()?.is_empty() {
        return Ok(0);
    }

    let demo = demo_records(state.clock.now());
    let raw = serde_json::to_string(&demo).map_err(|e| PortError::Unexpected(e.to_string()))?;
    state.storage.write(bookings::STORAGE_KEY, &raw)?;
    tracing::info!(count = demo.len(), "seeded demo bookings");
    Ok(demo.len())
}

struct DemoRow {
    booking_id: &'static str,
    vet_id: &'static str,
    vet: &'static str,
    price: &'static str,
    date: &'static str,
    time: &'static str,
    owner: [&'static str; 4],
    pet: [&'static str; 4],
    status: BookingStatus,
}

fn demo_records(created_at: DateTime<Utc>) -> Vec<Booking> {
    let rows = [
        DemoRow {
            booking_id: "PT-2026-001",
            vet_id: "omar",
            vet: "Dr. Omar Awwad",
            price: "12.00",
            date: "2026-01-15",
            time: "09:00-10:00",
            owner: ["Ahmad", "Mahmoud", "ahmad@email.com", "+962 79 123 4567"],
            pet: ["Luna", "Cat", "Vaccination", "Healthy, needs annual shots"],
            status: BookingStatus::Pending,
        },
        DemoRow {
            booking_id: "PT-2026-002",
            vet_id: "omar",
            vet: "Dr. Omar Awwad",
            price: "12.00",
            date: "2026-01-16",
            time: "11:00-12:00",
            owner: ["Sara", "Al-Rimawi", "sara@email.com", "+962 78 987 6543"],
            pet: ["Max", "Dog", "General Checkup", "Slight limping on left leg"],
            status: BookingStatus::Pending,
        },
        DemoRow {
            booking_id: "PT-2026-003",
            vet_id: "lina",
            vet: "Dr. Lina Haddad",
            price: "10.00",
            date: "2026-01-15",
            time: "14:00-15:00",
            owner: ["Mohammad", "Hassan", "moh@email.com", "+962 77 555 1234"],
            pet: ["Bella", "Cat", "Dental Care", "Bad breath, possible tooth decay"],
            status: BookingStatus::Completed,
        },
        DemoRow {
            booking_id: "PT-2026-004",
            vet_id: "lina",
            vet: "Dr. Lina Haddad",
            price: "10.00",
            date: "2026-01-17",
            time: "10:00-11:00",
            owner: ["Layla", "Nasser", "layla@email.com", "+962 79 888 4321"],
            pet: ["Rocky", "Dog", "Skin Issues", "Itching and hair loss on back"],
            status: BookingStatus::Pending,
        },
    ];

    rows.into_iter()
        .map(|row| Booking {
            booking_id: row.booking_id.to_string(),
            vet_id: Some(row.vet_id.to_string()),
            vet: Some(row.vet.to_string()),
            vet_price: Some(row.price.to_string()),
            date: row.date.parse().expect("valid demo date"),
            time: row.time.to_string(),
            first_name: row.owner[0].to_string(),
            last_name: row.owner[1].to_string(),
            email: row.owner[2].to_string(),
            phone: row.owner[3].to_string(),
            pet_name: row.pet[0].to_string(),
            pet_type: row.pet[1].to_string(),
            reason: row.pet[2].to_string(),
            pet_condition: row.pet[3].to_string(),
            status: row.status,
            rejection_reason: None,
            rejection_notes: None,
            created_at,
        })
        .collect()
}
