use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::types::{
    errors::{require_valid_input, GateError, Result},
    events::TransferSingle,
    log::EventLog,
};

/// ERC-1155 balances for event tickets. Tickets are soulbound: units are only
/// ever minted, and every transfer or approval primitive fails.
#[derive(Debug, Clone, Default)]
pub struct TicketBook {
    balances: HashMap<(U256, Address), U256>,
    supply: HashMap<U256, U256>,
    total_supply: U256,
    base_uri: String,
}

impl TicketBook {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }

    /// Issues one unit of `id` to `to`.
    pub fn mint(&mut self, log: &mut EventLog, operator: Address, to: Address, id: U256) -> Result<()> {
        require_valid_input(!to.is_zero(), "Cannot mint to zero address")?;

        let one = U256::from(1);
        *self.balances.entry((id, to)).or_default() += one;
        *self.supply.entry(id).or_default() += one;
        self.total_supply += one;

        log.emit(TransferSingle {
            operator,
            from: Address::ZERO,
            to,
            id,
            value: one,
        });

        Ok(())
    }

    pub fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.balances.get(&(id, account)).copied().unwrap_or_default()
    }

    pub fn balance_of_batch(&self, accounts: &[Address], ids: &[U256]) -> Result<Vec<U256>> {
        require_valid_input(accounts.len() == ids.len(), "Unmatched array length")?;
        Ok(accounts
            .iter()
            .zip(ids)
            .map(|(account, id)| self.balance_of(*account, *id))
            .collect())
    }

    pub fn exists(&self, id: U256) -> bool {
        !self.total_supply_of(id).is_zero()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub fn total_supply_of(&self, id: U256) -> U256 {
        self.supply.get(&id).copied().unwrap_or_default()
    }

    pub fn uri(&self, id: U256) -> String {
        format!("{}{}", self.base_uri, id)
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn set_base_uri(&mut self, base_uri: String) {
        self.base_uri = base_uri;
    }

    pub fn is_approved_for_all(&self, _account: Address, _operator: Address) -> bool {
        false
    }

    pub fn set_approval_for_all(&mut self, _operator: Address, _approved: bool) -> Result<()> {
        Err(soulbound())
    }

    pub fn safe_transfer_from(
        &mut self,
        _from: Address,
        _to: Address,
        _id: U256,
        _value: U256,
        _data: &[u8],
    ) -> Result<()> {
        Err(soulbound())
    }

    pub fn safe_batch_transfer_from(
        &mut self,
        _from: Address,
        _to: Address,
        _ids: &[U256],
        _values: &[U256],
        _data: &[u8],
    ) -> Result<()> {
        Err(soulbound())
    }
}

fn soulbound() -> GateError {
    GateError::NonTransferable("Event tickets are soulbound".to_string())
}
