use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::types::{
    errors::{require_authorized, require_unique, GateError, Result},
    EventInfo, EventKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event_id: u64,
    pub manager: Address,
    pub gating_token: Address,
    pub end_timestamp: u64,
    pub kind: EventKind,
    pub manager_token_id: U256,
}

impl EventRecord {
    pub fn has_ended(&self, now: u64) -> bool {
        now > self.end_timestamp
    }

    pub fn info(&self) -> EventInfo {
        EventInfo {
            event_id: self.event_id,
            manager: self.manager,
            gating_token: self.gating_token,
            end_timestamp: self.end_timestamp,
            kind: self.kind.as_u8(),
            manager_token_id: self.manager_token_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    events: HashMap<u64, EventRecord>,
    registration_order: Vec<u64>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, event_id: u64) -> bool {
        self.events.contains_key(&event_id)
    }

    pub fn require_unregistered(&self, event_id: u64) -> Result<()> {
        require_unique(!self.contains(event_id), "Event id already exists")
    }

    pub fn get(&self, event_id: u64) -> Result<&EventRecord> {
        self.events
            .get(&event_id)
            .ok_or_else(|| GateError::NotFound(format!("Event {event_id} is not registered")))
    }

    pub fn require_manager(&self, event_id: u64, caller: Address) -> Result<&EventRecord> {
        let event = self.get(event_id)?;
        require_authorized(event.manager == caller, "User is not an event manager")?;
        Ok(event)
    }

    pub fn is_manager(&self, event_id: u64, caller: Address) -> bool {
        self.events
            .get(&event_id)
            .map_or(false, |event| event.manager == caller)
    }

    /// Stores a record whose id was checked with `require_unregistered`.
    pub fn insert(&mut self, record: EventRecord) {
        self.registration_order.push(record.event_id);
        self.events.insert(record.event_id, record);
    }

    pub fn event_ids(&self) -> &[u64] {
        &self.registration_order
    }

    pub fn events_managed_by(&self, manager: Address) -> Vec<u64> {
        self.registration_order
            .iter()
            .copied()
            .filter(|id| self.is_manager(*id, manager))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
