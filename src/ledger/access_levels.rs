use std::collections::{HashMap, HashSet};

use alloy_primitives::U256;

use crate::ledger::token_id::generate_token_id;
use crate::types::{
    errors::{require_capacity, require_unique, require_valid_input, GateError, Result},
    AccessLevelInfo, AccessLevelSpec, EVENT_MANAGER_ACCESS_LEVEL,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLevel {
    pub name: String,
    pub token_id: U256,
    pub price: U256,
    pub ticket_limit: u64,
    pub minted: u64,
}

impl AccessLevel {
    pub fn remaining(&self) -> u64 {
        self.ticket_limit - self.minted
    }

    pub fn is_sold_out(&self) -> bool {
        self.minted >= self.ticket_limit
    }

    pub fn info(&self) -> AccessLevelInfo {
        AccessLevelInfo {
            name: self.name.clone(),
            token_id: self.token_id,
            price: self.price,
            ticket_limit: self.ticket_limit,
            minted: self.minted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenSlot {
    event_id: u64,
    index: usize,
}

/// Per-event access levels in registration order, plus a global token-id
/// index. Levels are only ever appended, so an index stays valid for the
/// lifetime of the ledger.
#[derive(Debug, Clone, Default)]
pub struct AccessLevelLedger {
    levels: HashMap<u64, Vec<AccessLevel>>,
    token_index: HashMap<U256, TokenSlot>,
}

impl AccessLevelLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_access_level_exists(&self, event_id: u64, name: &str) -> bool {
        self.by_name(event_id, name).is_some()
    }

    pub fn check_token_id_exists_for_event_id(&self, event_id: u64, token_id: U256) -> bool {
        self.get(event_id, token_id).is_some()
    }

    pub fn token_exists(&self, token_id: U256) -> bool {
        self.token_index.contains_key(&token_id)
    }

    /// The access level behind `token_id`, only if it belongs to `event_id`.
    pub fn get(&self, event_id: u64, token_id: U256) -> Option<&AccessLevel> {
        self.by_token(token_id)
            .filter(|(owner_event, _)| *owner_event == event_id)
            .map(|(_, level)| level)
    }

    pub fn by_token(&self, token_id: U256) -> Option<(u64, &AccessLevel)> {
        let slot = self.token_index.get(&token_id)?;
        self.levels
            .get(&slot.event_id)
            .and_then(|levels| levels.get(slot.index))
            .map(|level| (slot.event_id, level))
    }

    pub fn by_name(&self, event_id: u64, name: &str) -> Option<&AccessLevel> {
        self.levels(event_id).iter().find(|level| level.name == name)
    }

    pub fn levels(&self, event_id: u64) -> &[AccessLevel] {
        self.levels.get(&event_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn access_level_names(&self, event_id: u64) -> Vec<String> {
        self.levels(event_id).iter().map(|l| l.name.clone()).collect()
    }

    pub fn ticket_prices(&self, event_id: u64) -> Vec<U256> {
        self.levels(event_id).iter().map(|l| l.price).collect()
    }

    pub fn token_ids(&self, event_id: u64) -> Vec<U256> {
        self.levels(event_id).iter().map(|l| l.token_id).collect()
    }

    pub fn infos(&self, event_id: u64) -> Vec<AccessLevelInfo> {
        self.levels(event_id).iter().map(AccessLevel::info).collect()
    }

    /// Checks a batch of new tiers for `event_id` against each other and
    /// against the ledger, and builds their records. Nothing is written.
    pub fn prepare(
        &self,
        event_id: u64,
        specs: &[AccessLevelSpec],
        max_name_len: usize,
    ) -> Result<Vec<AccessLevel>> {
        require_valid_input(!specs.is_empty(), "At least one access level is required")?;

        let mut seen = HashSet::with_capacity(specs.len());
        let mut prepared = Vec::with_capacity(specs.len());
        for spec in specs {
            require_unique(
                spec.name != EVENT_MANAGER_ACCESS_LEVEL,
                "Access level name is reserved",
            )?;
            require_unique(
                seen.insert(spec.name.as_str()),
                "Access level listed more than once",
            )?;
            prepared.push(self.prepare_level(
                event_id,
                &spec.name,
                spec.price,
                spec.ticket_limit,
                max_name_len,
            )?);
        }
        Ok(prepared)
    }

    /// Builds the manager tier of `event_id`. Community events sell their
    /// tickets under this token id.
    pub fn prepare_manager_level(&self, event_id: u64, ticket_limit: u64) -> Result<AccessLevel> {
        self.prepare_level(
            event_id,
            EVENT_MANAGER_ACCESS_LEVEL,
            U256::ZERO,
            ticket_limit,
            EVENT_MANAGER_ACCESS_LEVEL.len(),
        )
    }

    fn prepare_level(
        &self,
        event_id: u64,
        name: &str,
        price: U256,
        ticket_limit: u64,
        max_name_len: usize,
    ) -> Result<AccessLevel> {
        require_valid_input(!name.trim().is_empty(), "Access level name is empty")?;
        require_valid_input(
            name.chars().count() <= max_name_len,
            "Access level name is too long",
        )?;
        require_valid_input(ticket_limit > 0, "Ticket limit must be positive")?;
        require_unique(
            !self.check_access_level_exists(event_id, name),
            "Access level already exists",
        )?;

        let token_id = generate_token_id(event_id, name);
        require_unique(!self.token_exists(token_id), "Token id already exists")?;

        Ok(AccessLevel {
            name: name.to_string(),
            token_id,
            price,
            ticket_limit,
            minted: 0,
        })
    }

    /// Appends records produced by `prepare` / `prepare_manager_level`.
    pub fn commit(&mut self, event_id: u64, prepared: Vec<AccessLevel>) {
        let levels = self.levels.entry(event_id).or_default();
        for level in prepared {
            self.token_index.insert(
                level.token_id,
                TokenSlot {
                    event_id,
                    index: levels.len(),
                },
            );
            levels.push(level);
        }
    }

    /// Fails without side effects when the tier is sold out.
    pub fn check_capacity(&self, event_id: u64, token_id: U256) -> Result<&AccessLevel> {
        let level = self
            .get(event_id, token_id)
            .ok_or_else(|| GateError::NotFound("Token id does not exist for event".to_string()))?;
        require_capacity(!level.is_sold_out(), "Ticket limit exceeded")?;
        Ok(level)
    }

    /// Counts one minted ticket against the tier's limit.
    pub fn record_mint(&mut self, event_id: u64, token_id: U256) -> Result<u64> {
        self.check_capacity(event_id, token_id)?;
        let level = self
            .token_index
            .get(&token_id)
            .copied()
            .and_then(|slot| self.levels.get_mut(&slot.event_id)?.get_mut(slot.index))
            .ok_or_else(|| GateError::NotFound("Token id does not exist for event".to_string()))?;
        level.minted += 1;
        Ok(level.minted)
    }
}
