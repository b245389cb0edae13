use alloy_primitives::{Address, U256};

use crate::ledger::{generate_token_id, AccessLevel};
use crate::platform::NexusEventGate;
use crate::registry::EventRecord;
use crate::types::{
    context::CallContext,
    errors::{require_not_expired, require_valid_input, GateError, Result},
    events::{AccessLevelRegistered, EventRegistered},
    interfaces::FanTokenRegistry,
    AccessLevelInfo, AccessLevelSpec, EventInfo, EventKind, EVENT_MANAGER_ACCESS_LEVEL,
};

impl<F: FanTokenRegistry> NexusEventGate<F> {
    /// Registers a paid event with its ticket tiers. Either the event and all
    /// of its tiers are stored, or nothing is.
    pub fn register_live_event(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        gating_token: Address,
        manager: Address,
        end_timestamp: u64,
        access_levels: &[AccessLevelSpec],
    ) -> Result<()> {
        self.check_registration(ctx, event_id, gating_token, manager, end_timestamp)?;
        let prepared = self.access_levels.prepare(
            event_id,
            access_levels,
            self.config.max_access_level_name_len,
        )?;

        self.commit_event(
            ctx,
            EventRecord {
                event_id,
                manager,
                gating_token,
                end_timestamp,
                kind: EventKind::Live,
                manager_token_id: generate_token_id(event_id, EVENT_MANAGER_ACCESS_LEVEL),
            },
            prepared,
        )
    }

    /// Parallel-array form of `register_live_event`.
    #[allow(clippy::too_many_arguments)]
    pub fn register_live_event_from_arrays(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        gating_token: Address,
        manager: Address,
        end_timestamp: u64,
        names: &[String],
        prices: &[U256],
        ticket_limits: &[u64],
    ) -> Result<()> {
        require_valid_input(
            names.len() == prices.len() && names.len() == ticket_limits.len(),
            "Unmatched array length",
        )?;

        let specs: Vec<AccessLevelSpec> = names
            .iter()
            .zip(prices)
            .zip(ticket_limits)
            .map(|((name, price), limit)| AccessLevelSpec::new(name.clone(), *price, *limit))
            .collect();

        self.register_live_event(ctx, event_id, gating_token, manager, end_timestamp, &specs)
    }

    /// Registers a free, fan-token gated event. Its single tier is the
    /// manager tier with `ticket_limit` seats.
    pub fn register_community_event(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        gating_token: Address,
        manager: Address,
        end_timestamp: u64,
        ticket_limit: u64,
    ) -> Result<()> {
        self.check_registration(ctx, event_id, gating_token, manager, end_timestamp)?;
        let tier = self
            .access_levels
            .prepare_manager_level(event_id, ticket_limit)?;
        let manager_token_id = tier.token_id;

        self.commit_event(
            ctx,
            EventRecord {
                event_id,
                manager,
                gating_token,
                end_timestamp,
                kind: EventKind::Community,
                manager_token_id,
            },
            vec![tier],
        )
    }

    /// Adds a tier to a live event that has not ended yet.
    pub fn register_new_access_level(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        name: &str,
        price: U256,
        ticket_limit: u64,
    ) -> Result<U256> {
        ctx.require_non_payable()?;
        let event = self.registry.require_manager(event_id, ctx.sender)?;
        require_valid_input(
            event.kind == EventKind::Live,
            "Community events have a single access level",
        )?;
        require_not_expired(!event.has_ended(ctx.timestamp), "Event has ended")?;

        let prepared = self.access_levels.prepare(
            event_id,
            &[AccessLevelSpec::new(name, price, ticket_limit)],
            self.config.max_access_level_name_len,
        )?;
        let token_id = prepared[0].token_id;

        self.emit_access_levels(event_id, &prepared);
        self.access_levels.commit(event_id, prepared);

        Ok(token_id)
    }

    // Queries

    pub fn get_access_levels_from_event_id(&self, event_id: u64) -> Vec<String> {
        self.access_levels.access_level_names(event_id)
    }

    pub fn get_ticket_prices_from_event_id(&self, event_id: u64) -> Vec<U256> {
        self.access_levels.ticket_prices(event_id)
    }

    pub fn get_token_ids_from_event_id(&self, event_id: u64) -> Vec<U256> {
        self.access_levels.token_ids(event_id)
    }

    /// Tiers of `event_id` in registration order.
    pub fn access_levels(&self, event_id: u64) -> Result<Vec<AccessLevelInfo>> {
        self.registry.get(event_id)?;
        Ok(self.access_levels.infos(event_id))
    }

    pub fn check_access_level_exists(&self, event_id: u64, name: &str) -> bool {
        self.access_levels.check_access_level_exists(event_id, name)
    }

    pub fn check_token_id_exists_for_event_id(&self, event_id: u64, token_id: U256) -> bool {
        self.access_levels
            .check_token_id_exists_for_event_id(event_id, token_id)
    }

    pub fn check_if_caller_is_event_manager(&self, event_id: u64, caller: Address) -> bool {
        self.registry.is_manager(event_id, caller)
    }

    pub fn get_token_id_of_an_event_manager(&self, event_id: u64) -> Result<U256> {
        Ok(self.registry.get(event_id)?.manager_token_id)
    }

    pub fn get_token_id_of_access_level(&self, event_id: u64, name: &str) -> Result<U256> {
        self.access_levels
            .by_name(event_id, name)
            .map(|level| level.token_id)
            .ok_or_else(|| GateError::NotFound(format!("Access level {name} does not exist")))
    }

    pub fn get_event_end_timestamp(&self, event_id: u64) -> Result<u64> {
        Ok(self.registry.get(event_id)?.end_timestamp)
    }

    pub fn get_ticket_limit(&self, token_id: U256) -> Result<u64> {
        Ok(self.level_by_token(token_id)?.ticket_limit)
    }

    pub fn get_ticket_price_from_token_id(&self, token_id: U256) -> Result<U256> {
        Ok(self.level_by_token(token_id)?.price)
    }

    pub fn get_remaining_tickets(&self, token_id: U256) -> Result<u64> {
        Ok(self.level_by_token(token_id)?.remaining())
    }

    pub fn event(&self, event_id: u64) -> Result<EventInfo> {
        Ok(self.registry.get(event_id)?.info())
    }

    pub fn events_managed_by(&self, manager: Address) -> Vec<u64> {
        self.registry.events_managed_by(manager)
    }

    pub fn event_count(&self) -> usize {
        self.registry.len()
    }
}

// Internal helper functions
impl<F: FanTokenRegistry> NexusEventGate<F> {
    fn check_registration(
        &self,
        ctx: &CallContext,
        event_id: u64,
        gating_token: Address,
        manager: Address,
        end_timestamp: u64,
    ) -> Result<()> {
        ctx.require_non_payable()?;
        self.registry.require_unregistered(event_id)?;
        require_valid_input(
            self.fan_tokens.is_supported_fan_token(gating_token),
            "Gating token is not a supported fan token",
        )?;
        require_valid_input(!manager.is_zero(), "Invalid manager address")?;
        require_valid_input(
            end_timestamp > ctx.timestamp,
            "End timestamp must be in the future",
        )?;
        Ok(())
    }

    /// Writes a fully validated registration. The badge mint goes first since
    /// it is the only step that returns a `Result`.
    fn commit_event(
        &mut self,
        ctx: &CallContext,
        record: EventRecord,
        prepared: Vec<AccessLevel>,
    ) -> Result<()> {
        self.tickets
            .mint(&mut self.log, ctx.sender, record.manager, record.manager_token_id)?;

        let event_id = record.event_id;
        self.log.emit(EventRegistered {
            event_id,
            manager: record.manager,
            end_timestamp: record.end_timestamp,
        });
        self.emit_access_levels(event_id, &prepared);

        self.registry.insert(record);
        self.access_levels.commit(event_id, prepared);
        Ok(())
    }

    fn emit_access_levels(&mut self, event_id: u64, levels: &[AccessLevel]) {
        for level in levels {
            self.log.emit(AccessLevelRegistered {
                event_id,
                token_id: level.token_id,
                access_level: level.name.clone(),
                ticket_price: level.price,
                ticket_limit: level.ticket_limit,
            });
        }
    }

    fn level_by_token(&self, token_id: U256) -> Result<&AccessLevel> {
        self.access_levels
            .by_token(token_id)
            .map(|(_, level)| level)
            .ok_or_else(|| GateError::NotFound("Token id does not exist".to_string()))
    }
}
