use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::platform::NexusEventGate;
use crate::types::{
    context::CallContext,
    errors::{require_valid_input, GateError, Result},
    events::{DropDistributed, DropReceived, FundsWithdrawn},
    interfaces::FanTokenRegistry,
};

/// Per-event accounting. Ticket-sale proceeds and drop contributions are
/// tracked and reported separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FundPool {
    pub ticket_sales: U256,
    pub drop_pool: U256,
    pub total_withdrawn: U256,
    pub total_distributed: U256,
}

#[derive(Debug, Clone, Default)]
pub struct FundCollector {
    pools: HashMap<u64, FundPool>,
}

impl FundCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self, event_id: u64) -> FundPool {
        self.pools.get(&event_id).copied().unwrap_or_default()
    }

    pub fn collected_amount(&self, event_id: u64) -> U256 {
        self.pool(event_id).ticket_sales
    }

    pub fn drop_amount(&self, event_id: u64) -> U256 {
        self.pool(event_id).drop_pool
    }

    pub fn credit_ticket_sale(&mut self, event_id: u64, amount: U256) {
        self.pools.entry(event_id).or_default().ticket_sales += amount;
    }

    pub fn credit_drop(&mut self, event_id: u64, amount: U256) {
        self.pools.entry(event_id).or_default().drop_pool += amount;
    }

    fn take_ticket_sales(&mut self, event_id: u64) -> U256 {
        let pool = self.pools.entry(event_id).or_default();
        std::mem::take(&mut pool.ticket_sales)
    }

    fn restore_ticket_sales(&mut self, event_id: u64, amount: U256) {
        self.pools.entry(event_id).or_default().ticket_sales = amount;
    }

    fn mark_withdrawn(&mut self, event_id: u64, amount: U256) {
        self.pools.entry(event_id).or_default().total_withdrawn += amount;
    }

    fn debit_drop(&mut self, event_id: u64, amount: U256) {
        let pool = self.pools.entry(event_id).or_default();
        pool.drop_pool -= amount;
        pool.total_distributed += amount;
    }
}

impl<F: FanTokenRegistry> NexusEventGate<F> {
    /// Contributes the attached value to the event's drop pool.
    pub fn nexus_drop(&mut self, ctx: &CallContext, event_id: u64) -> Result<()> {
        require_valid_input(!ctx.value.is_zero(), "Zero amount for token drop")?;
        self.registry.get(event_id)?;

        self.funds.credit_drop(event_id, ctx.value);
        self.native.receive(ctx.value);

        self.log.emit(DropReceived {
            event_id,
            contributor: ctx.sender,
            amount: ctx.value,
        });

        Ok(())
    }

    pub fn get_collected_amount_for_event_id(&self, event_id: u64) -> U256 {
        self.funds.collected_amount(event_id)
    }

    pub fn get_collected_amount_for_nexus_drop(&self, event_id: u64) -> U256 {
        self.funds.drop_amount(event_id)
    }

    pub fn fund_pool(&self, event_id: u64) -> FundPool {
        self.funds.pool(event_id)
    }

    /// Pays the event's ticket-sale proceeds to its manager.
    pub fn withdraw_collected_amount_for_event_id(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
    ) -> Result<U256> {
        ctx.require_non_payable()?;
        let manager = self.registry.require_manager(event_id, ctx.sender)?.manager;

        let amount = self.funds.take_ticket_sales(event_id);
        if amount.is_zero() {
            return Err(GateError::InvalidInput("Nothing to withdraw".to_string()));
        }

        if let Err(err) = self.native.transfer(&mut self.log, manager, amount) {
            self.funds.restore_ticket_sales(event_id, amount);
            return Err(err);
        }
        self.funds.mark_withdrawn(event_id, amount);

        self.log.emit(FundsWithdrawn {
            event_id,
            manager,
            amount,
        });

        Ok(amount)
    }

    /// Splits the drop pool evenly across `recipients`. The division
    /// remainder stays in the pool.
    pub fn distribute_drop(
        &mut self,
        ctx: &CallContext,
        event_id: u64,
        recipients: &[Address],
    ) -> Result<U256> {
        ctx.require_non_payable()?;
        self.registry.require_manager(event_id, ctx.sender)?;
        require_valid_input(!recipients.is_empty(), "No user addresses provided")?;
        require_valid_input(
            recipients.iter().all(|r| !r.is_zero()),
            "Invalid input address",
        )?;

        let pool = self.funds.drop_amount(event_id);
        let share = pool / U256::from(recipients.len());
        require_valid_input(!share.is_zero(), "Insufficient balance for token drop")?;

        if let Some(rejecting) = recipients.iter().find(|r| !self.native.accepts(**r)) {
            return Err(GateError::TransferFailed(format!(
                "Recipient {rejecting} rejected the transfer"
            )));
        }
        let total = share * U256::from(recipients.len());
        if total > self.native.contract_balance() {
            return Err(GateError::TransferFailed(
                "Contract balance is insufficient".to_string(),
            ));
        }

        // Every transfer below was checked above and cannot fail.
        for recipient in recipients {
            self.native.transfer(&mut self.log, *recipient, share)?;
        }
        self.funds.debit_drop(event_id, total);

        self.log.emit(DropDistributed {
            event_id,
            recipients: U256::from(recipients.len()),
            amount_each: share,
        });

        Ok(share)
    }
}
