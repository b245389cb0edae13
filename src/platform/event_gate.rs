use alloy_primitives::{Address, U256};

use crate::ledger::{generate_token_id, AccessLevelLedger};
use crate::registry::EventRegistry;
use crate::tickets::TicketBook;
use crate::treasury::{FundCollector, NativeLedger};
use crate::types::{
    config::GateConfig,
    context::CallContext,
    errors::{require_authorized, require_valid_input, Result},
    events::{NexusTokenUpdated, OwnershipTransferred},
    interfaces::FanTokenRegistry,
    log::EventLog,
};

/// The event gate contract: event registry, access-level ledger, soulbound
/// ticket book and fund pools behind one call surface. Every mutating call
/// validates completely before it writes, so a failed call leaves no trace.
///
/// Operations are spread over the component modules:
/// registration in `registry::registration`, minting in
/// `tickets::ticket_minter`, drops and withdrawals in
/// `treasury::fund_collector`.
#[derive(Debug, Clone)]
pub struct NexusEventGate<F: FanTokenRegistry> {
    pub(crate) config: GateConfig,
    pub(crate) owner: Address,
    pub(crate) fan_tokens: F,
    pub(crate) registry: EventRegistry,
    pub(crate) access_levels: AccessLevelLedger,
    pub(crate) tickets: TicketBook,
    pub(crate) funds: FundCollector,
    pub(crate) native: NativeLedger,
    pub(crate) log: EventLog,
}

impl<F: FanTokenRegistry> NexusEventGate<F> {
    pub fn new(owner: Address, fan_tokens: F) -> Self {
        Self::with_config(owner, fan_tokens, GateConfig::default())
    }

    pub fn with_config(owner: Address, fan_tokens: F, config: GateConfig) -> Self {
        let mut log = EventLog::new(config.contract_address);
        log.emit(OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: owner,
        });

        Self {
            tickets: TicketBook::new(config.base_uri.clone()),
            config,
            owner,
            fan_tokens,
            registry: EventRegistry::new(),
            access_levels: AccessLevelLedger::new(),
            funds: FundCollector::new(),
            native: NativeLedger::new(),
            log,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn logs(&self) -> &EventLog {
        &self.log
    }

    pub fn native_ledger(&self) -> &NativeLedger {
        &self.native
    }

    pub fn native_ledger_mut(&mut self) -> &mut NativeLedger {
        &mut self.native
    }

    pub fn fan_tokens(&self) -> &F {
        &self.fan_tokens
    }

    pub fn fan_tokens_mut(&mut self) -> &mut F {
        &mut self.fan_tokens
    }

    // Ownership

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Address) -> Result<()> {
        self.require_owner(ctx)?;
        require_valid_input(!new_owner.is_zero(), "Invalid owner")?;
        self.set_owner(new_owner);
        Ok(())
    }

    pub fn renounce_ownership(&mut self, ctx: &CallContext) -> Result<()> {
        self.require_owner(ctx)?;
        self.set_owner(Address::ZERO);
        Ok(())
    }

    pub fn get_nexus_token_address(&self) -> Address {
        self.fan_tokens.address()
    }

    /// Points the gate at a different fan-token bridge and hands back the
    /// previous one.
    pub fn update_nexus_token_contract(&mut self, ctx: &CallContext, fan_tokens: F) -> Result<F> {
        self.require_owner(ctx)?;
        require_valid_input(!fan_tokens.address().is_zero(), "Invalid input address")?;

        let previous = std::mem::replace(&mut self.fan_tokens, fan_tokens);
        self.log.emit(NexusTokenUpdated {
            previous_token: previous.address(),
            new_token: self.fan_tokens.address(),
        });
        Ok(previous)
    }

    pub fn is_supported_fan_token(&self, fan_token: Address) -> bool {
        self.fan_tokens.is_supported_fan_token(fan_token)
    }

    pub fn check_user_own_fan_tokens(&self, fan_token: Address, user: Address) -> bool {
        self.fan_tokens.check_user_own_fan_tokens(fan_token, user)
    }

    pub fn generate_token_id(&self, event_id: u64, access_level: &str) -> U256 {
        generate_token_id(event_id, access_level)
    }

    // ERC-1155 surface

    pub fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.tickets.balance_of(account, id)
    }

    pub fn balance_of_batch(&self, accounts: &[Address], ids: &[U256]) -> Result<Vec<U256>> {
        self.tickets.balance_of_batch(accounts, ids)
    }

    pub fn exists(&self, id: U256) -> bool {
        self.tickets.exists(id)
    }

    pub fn total_supply(&self) -> U256 {
        self.tickets.total_supply()
    }

    pub fn total_supply_of(&self, id: U256) -> U256 {
        self.tickets.total_supply_of(id)
    }

    pub fn uri(&self, id: U256) -> String {
        self.tickets.uri(id)
    }

    pub fn set_base_uri(&mut self, ctx: &CallContext, base_uri: String) -> Result<()> {
        self.require_owner(ctx)?;
        self.tickets.set_base_uri(base_uri);
        Ok(())
    }

    pub fn is_approved_for_all(&self, account: Address, operator: Address) -> bool {
        self.tickets.is_approved_for_all(account, operator)
    }

    pub fn set_approval_for_all(
        &mut self,
        _ctx: &CallContext,
        operator: Address,
        approved: bool,
    ) -> Result<()> {
        self.tickets.set_approval_for_all(operator, approved)
    }

    pub fn safe_transfer_from(
        &mut self,
        _ctx: &CallContext,
        from: Address,
        to: Address,
        id: U256,
        value: U256,
        data: &[u8],
    ) -> Result<()> {
        self.tickets.safe_transfer_from(from, to, id, value, data)
    }

    pub fn safe_batch_transfer_from(
        &mut self,
        _ctx: &CallContext,
        from: Address,
        to: Address,
        ids: &[U256],
        values: &[U256],
        data: &[u8],
    ) -> Result<()> {
        self.tickets.safe_batch_transfer_from(from, to, ids, values, data)
    }
}

// Internal helper functions
impl<F: FanTokenRegistry> NexusEventGate<F> {
    pub(crate) fn require_owner(&self, ctx: &CallContext) -> Result<()> {
        require_authorized(
            !self.owner.is_zero() && ctx.sender == self.owner,
            "Only owner",
        )
    }

    fn set_owner(&mut self, new_owner: Address) {
        let previous_owner = std::mem::replace(&mut self.owner, new_owner);
        self.log.emit(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }
}
