use std::collections::{BTreeSet, HashMap};

use alloy_primitives::{Address, U256};

use crate::types::{
    context::CallContext,
    errors::{require_authorized, require_unique, require_valid_input, GateError, Result},
    events::{SupportedTokenUpdated, TokenMinted, TokenRedeemed},
    interfaces::FanTokenRegistry,
    log::EventLog,
};

/// The NEXUS bridge: fan tokens from whitelisted clubs are deposited and
/// NEXUS is minted 1:1 against them. Holding a deposit of a club's fan token
/// is what makes a fan eligible for that club's community events.
#[derive(Debug, Clone)]
pub struct NexusTokenVault {
    address: Address,
    owner: Address,
    supported_tokens: BTreeSet<Address>,
    deposits: HashMap<(Address, Address), U256>, // (fan token, user) -> deposited
    fan_token_supply: HashMap<Address, U256>,
    balances: HashMap<Address, U256>,
    total_supply: U256,
    log: EventLog,
}

impl NexusTokenVault {
    pub fn new(address: Address, owner: Address) -> Self {
        Self {
            address,
            owner,
            supported_tokens: BTreeSet::new(),
            deposits: HashMap::new(),
            fan_token_supply: HashMap::new(),
            balances: HashMap::new(),
            total_supply: U256::ZERO,
            log: EventLog::new(address),
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn logs(&self) -> &EventLog {
        &self.log
    }

    pub fn add_supported_token(&mut self, ctx: &CallContext, fan_token: Address) -> Result<()> {
        self.require_owner(ctx)?;
        require_valid_input(!fan_token.is_zero(), "Invalid fan token address")?;
        require_unique(
            self.supported_tokens.insert(fan_token),
            "Fan token already supported",
        )?;

        self.log.emit(SupportedTokenUpdated {
            token: fan_token,
            supported: true,
        });
        Ok(())
    }

    pub fn remove_supported_token(&mut self, ctx: &CallContext, fan_token: Address) -> Result<()> {
        self.require_owner(ctx)?;
        if !self.supported_tokens.remove(&fan_token) {
            return Err(GateError::NotFound("Fan token is not supported".to_string()));
        }

        self.log.emit(SupportedTokenUpdated {
            token: fan_token,
            supported: false,
        });
        Ok(())
    }

    pub fn supported_tokens(&self) -> Vec<Address> {
        self.supported_tokens.iter().copied().collect()
    }

    /// Deposits `amount` of `fan_token` from the caller and mints the same
    /// amount of NEXUS to them.
    pub fn mint_token(&mut self, ctx: &CallContext, fan_token: Address, amount: U256) -> Result<()> {
        require_valid_input(self.is_supported_fan_token(fan_token), "Unsupported token")?;
        require_valid_input(!amount.is_zero(), "Amount must be positive")?;

        let user = ctx.sender;
        *self.deposits.entry((fan_token, user)).or_default() += amount;
        *self.fan_token_supply.entry(fan_token).or_default() += amount;
        *self.balances.entry(user).or_default() += amount;
        self.total_supply += amount;

        self.log.emit(TokenMinted {
            from: user,
            token: fan_token,
            value: amount,
        });
        Ok(())
    }

    /// Burns `amount` NEXUS and releases the same amount of the caller's
    /// `fan_token` deposit. Redemption keeps working after a token is
    /// delisted.
    pub fn redeem_token(&mut self, ctx: &CallContext, fan_token: Address, amount: U256) -> Result<()> {
        require_valid_input(!amount.is_zero(), "Amount must be positive")?;

        let user = ctx.sender;
        let deposited = self.get_user_deposits(fan_token, user);
        require_valid_input(deposited >= amount, "Insufficient fan token deposit")?;
        require_valid_input(self.balance_of(user) >= amount, "Insufficient NEXUS balance")?;

        *self.deposits.entry((fan_token, user)).or_default() -= amount;
        *self.fan_token_supply.entry(fan_token).or_default() -= amount;
        *self.balances.entry(user).or_default() -= amount;
        self.total_supply -= amount;

        self.log.emit(TokenRedeemed {
            from: user,
            token: fan_token,
            value: amount,
        });
        Ok(())
    }

    pub fn get_user_deposits(&self, fan_token: Address, user: Address) -> U256 {
        self.deposits.get(&(fan_token, user)).copied().unwrap_or_default()
    }

    pub fn get_fan_token_supply(&self, fan_token: Address) -> U256 {
        self.fan_token_supply.get(&fan_token).copied().unwrap_or_default()
    }

    pub fn balance_of(&self, user: Address) -> U256 {
        self.balances.get(&user).copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn require_owner(&self, ctx: &CallContext) -> Result<()> {
        require_authorized(ctx.sender == self.owner, "Only owner")
    }
}

impl FanTokenRegistry for NexusTokenVault {
    fn address(&self) -> Address {
        self.address
    }

    fn is_supported_fan_token(&self, fan_token: Address) -> bool {
        self.supported_tokens.contains(&fan_token)
    }

    fn check_user_own_fan_tokens(&self, fan_token: Address, user: Address) -> bool {
        !self.get_user_deposits(fan_token, user).is_zero()
    }
}
