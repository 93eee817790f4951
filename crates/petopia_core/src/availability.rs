//! crates/petopia_core/src/availability.rs
//!
//! CRUD over a provider's recurring weekly availability slots, with conflict
//! detection on insert and edit. Each provider owns an independent collection,
//! persisted as a JSON array under its own storage key.

use std::sync::Arc;

use crate::domain::{AvailabilitySlot, Weekday};
use crate::ports::{PortError, PortResult, StorageService};
use crate::time::{self, TimeError};

const KEY_PREFIX: &str = "petopiaAvailability_";

/// The storage key holding `provider_id`'s slot collection.
pub fn storage_key(provider_id: &str) -> String {
    format!("{KEY_PREFIX}{provider_id}")
}

/// A slot operation was refused. The `Display` text is the message the
/// presentation layer shows inline on the slot form.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error(transparent)]
    BadTime(#[from] TimeError),
    #[error("End time must be after start time")]
    InvalidRange,
    #[error("This time slot already exists for this day")]
    Duplicate,
    #[error("This time slot overlaps with an existing slot")]
    Overlap,
    #[error("Time slot {0} was not found")]
    NotFound(u32),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// The weekly schedule a provider starts from before customising anything.
pub fn default_slots() -> Vec<AvailabilitySlot> {
    let slot = |id, day, from: &str, to: &str, active| AvailabilitySlot {
        id,
        day,
        from: from.to_string(),
        to: to.to_string(),
        active,
    };
    vec![
        slot(1, Weekday::Sunday, "09:00", "12:00", true),
        slot(2, Weekday::Sunday, "14:00", "17:00", true),
        slot(3, Weekday::Monday, "09:00", "12:00", true),
        slot(4, Weekday::Monday, "14:00", "17:00", true),
        slot(5, Weekday::Tuesday, "09:00", "12:00", true),
        slot(6, Weekday::Wednesday, "09:00", "12:00", false),
        slot(7, Weekday::Thursday, "09:00", "12:00", true),
        slot(8, Weekday::Thursday, "14:00", "17:00", true),
    ]
}

/// Per-provider store of recurring weekly availability slots.
///
/// Stateless between calls: every operation reloads the collection from the
/// storage port, validates, mutates and persists.
pub struct AvailabilityStore {
    storage: Arc<dyn StorageService>,
    provider_id: String,
}

impl AvailabilityStore {
    pub fn new(storage: Arc<dyn StorageService>, provider_id: impl Into<String>) -> Self {
        Self {
            storage,
            provider_id: provider_id.into(),
        }
    }

    /// All slots for this provider in insertion order. A provider that has
    /// never saved anything gets the default weekly schedule; it is only
    /// persisted once the first mutation goes through.
    pub fn list(&self) -> PortResult<Vec<AvailabilitySlot>> {
        match self.storage.read(&storage_key(&self.provider_id))? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| PortError::Storage(e.to_string()))
            }
            None => Ok(default_slots()),
        }
    }

    /// Validates and appends a new active slot, assigning the next id.
    pub fn add(&self, day: Weekday, from: &str, to: &str) -> Result<AvailabilitySlot, SlotError> {
        let mut slots = self.list()?;
        validate(&slots, day, from, to, None)?;

        let id = slots.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let slot = AvailabilitySlot {
            id,
            day,
            from: from.to_string(),
            to: to.to_string(),
            active: true,
        };
        slots.push(slot.clone());
        self.persist(&slots)?;
        Ok(slot)
    }

    /// Re-validates and updates an existing slot in place. The slot being
    /// edited is excluded from the duplicate and overlap comparisons, so
    /// saving a slot with its own unchanged values always succeeds.
    pub fn edit(
        &self,
        id: u32,
        day: Weekday,
        from: &str,
        to: &str,
    ) -> Result<AvailabilitySlot, SlotError> {
        let mut slots = self.list()?;
        let index = slots
            .iter()
            .position(|s| s.id == id)
            .ok_or(SlotError::NotFound(id))?;
        validate(&slots, day, from, to, Some(id))?;

        let slot = &mut slots[index];
        slot.day = day;
        slot.from = from.to_string();
        slot.to = to.to_string();
        let updated = slot.clone();
        self.persist(&slots)?;
        Ok(updated)
    }

    /// Flips a slot between active and inactive.
    ///
    /// No conflict re-validation happens here: re-activating a slot can
    /// knowingly reintroduce an overlap, since conflicts are only checked at
    /// create and edit time.
    pub fn toggle(&self, id: u32) -> Result<AvailabilitySlot, SlotError> {
        let mut slots = self.list()?;
        let slot = slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SlotError::NotFound(id))?;
        slot.active = !slot.active;
        let updated = slot.clone();
        self.persist(&slots)?;
        Ok(updated)
    }

    /// Deletes a slot. Removing an id that is not there reports `false`
    /// rather than failing.
    pub fn remove(&self, id: u32) -> PortResult<bool> {
        let mut slots = self.list()?;
        let before = slots.len();
        slots.retain(|s| s.id != id);
        if slots.len() == before {
            return Ok(false);
        }
        self.persist(&slots)?;
        Ok(true)
    }

    fn persist(&self, slots: &[AvailabilitySlot]) -> PortResult<()> {
        let raw =
            serde_json::to_string(slots).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.write(&storage_key(&self.provider_id), &raw)
    }
}

/// The three slot validations, in the order the form surfaces them: time
/// range first, then exact duplicate, then overlap. Only active slots other
/// than `exclude` participate in the duplicate and overlap comparisons.
fn validate(
    slots: &[AvailabilitySlot],
    day: Weekday,
    from: &str,
    to: &str,
    exclude: Option<u32>,
) -> Result<(), SlotError> {
    let from_minutes = time::to_minutes(from)?;
    let to_minutes = time::to_minutes(to)?;
    if from_minutes >= to_minutes {
        return Err(SlotError::InvalidRange);
    }

    let mut candidates = slots
        .iter()
        .filter(|s| Some(s.id) != exclude && s.active && s.day == day);

    if candidates
        .clone()
        .any(|s| s.from == from && s.to == to)
    {
        return Err(SlotError::Duplicate);
    }

    for slot in &mut candidates {
        let slot_from = time::to_minutes(&slot.from)?;
        let slot_to = time::to_minutes(&slot.to)?;
        if time::overlaps(from_minutes, to_minutes, slot_from, slot_to) {
            return Err(SlotError::Overlap);
        }
    }
    Ok(())
}
