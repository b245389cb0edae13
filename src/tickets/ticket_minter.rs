use alloy_primitives::{Address, U256};

use crate::ledger::AccessLevel;
use crate::platform::NexusEventGate;
use crate::registry::EventRecord;
use crate::types::{
    context::CallContext,
    errors::{require_authorized, require_not_expired, require_valid_input, GateError, Result},
    events::TicketMinted,
    interfaces::FanTokenRegistry,
    EventKind,
};

impl<F: FanTokenRegistry> NexusEventGate<F> {
    /// Read-only precheck shared by every mint path: the tier belongs to the
    /// event, the recipient is valid, the event is still running and the tier
    /// has a seat left.
    pub fn validate_mint(&self, to: Address, token_id: U256, event_id: u64, now: u64) -> Result<()> {
        self.mint_target(to, token_id, event_id, now)?;
        self.access_levels.check_capacity(event_id, token_id)?;
        Ok(())
    }

    /// Sells one ticket of a live event. The attached value must equal the
    /// tier price exactly.
    pub fn mint_live_ticket(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        token_id: U256,
        to: Address,
    ) -> Result<()> {
        let (event, level) = self.mint_target(to, token_id, event_id, ctx.timestamp)?;
        require_valid_input(event.kind == EventKind::Live, "Not a live event")?;
        if ctx.value != level.price {
            return Err(GateError::PriceMismatch(format!(
                "Ticket price is {} wei, received {}",
                level.price, ctx.value
            )));
        }

        self.issue_ticket(ctx, event_id, token_id, to)
    }

    /// Issues a free community ticket to a holder of the event's fan token.
    pub fn mint_community_ticket(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        token_id: U256,
        to: Address,
    ) -> Result<()> {
        ctx.require_non_payable()?;
        let (event, _) = self.mint_target(to, token_id, event_id, ctx.timestamp)?;
        require_valid_input(event.kind == EventKind::Community, "Not a community event")?;
        require_authorized(
            self.fan_tokens
                .check_user_own_fan_tokens(event.gating_token, to),
            "User does not own the gating fan token",
        )?;

        self.issue_ticket(ctx, event_id, token_id, to)
    }

    /// Comp ticket issued by the event manager, free of charge.
    pub fn mint_live_ticket_by_event_manager(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        token_id: U256,
        to: Address,
    ) -> Result<()> {
        ctx.require_non_payable()?;
        self.registry.require_manager(event_id, ctx.sender)?;
        let (event, _) = self.mint_target(to, token_id, event_id, ctx.timestamp)?;
        require_valid_input(event.kind == EventKind::Live, "Not a live event")?;

        self.issue_ticket(ctx, event_id, token_id, to)
    }
}

// Internal helper functions
impl<F: FanTokenRegistry> NexusEventGate<F> {
    fn mint_target(
        &self,
        to: Address,
        token_id: U256,
        event_id: u64,
        now: u64,
    ) -> Result<(&EventRecord, &AccessLevel)> {
        let event = self.registry.get(event_id)?;
        let level = self
            .access_levels
            .get(event_id, token_id)
            .ok_or_else(|| GateError::NotFound("Token id does not exist for event".to_string()))?;
        require_valid_input(!to.is_zero(), "Cannot mint to zero address")?;
        require_not_expired(!event.has_ended(now), "Event has ended")?;
        Ok((event, level))
    }

    /// Capacity is the last check; everything before it is read-only.
    fn issue_ticket(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        token_id: U256,
        to: Address,
    ) -> Result<()> {
        self.access_levels.record_mint(event_id, token_id)?;
        self.tickets.mint(&mut self.log, ctx.sender, to, token_id)?;

        if !ctx.value.is_zero() {
            self.funds.credit_ticket_sale(event_id, ctx.value);
            self.native.receive(ctx.value);
        }

        self.log.emit(TicketMinted {
            event_id,
            token_id,
            to,
            price_paid: ctx.value,
        });

        Ok(())
    }
}
