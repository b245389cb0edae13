use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, U256};

use crate::types::{
    errors::{GateError, Result},
    events::TransferAttempt,
    log::EventLog,
};

/// Native-currency accounts as seen by the gate: its own balance, what it has
/// paid out to each recipient, and recipients that cannot receive value
/// (contracts without a payable fallback).
#[derive(Debug, Clone, Default)]
pub struct NativeLedger {
    contract_balance: U256,
    balances: HashMap<Address, U256>,
    rejecting: HashSet<Address>,
}

impl NativeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books value attached to a payable call.
    pub fn receive(&mut self, amount: U256) {
        self.contract_balance += amount;
    }

    pub fn contract_balance(&self) -> U256 {
        self.contract_balance
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn accepts(&self, account: Address) -> bool {
        !account.is_zero() && !self.rejecting.contains(&account)
    }

    pub fn reject_payments_to(&mut self, account: Address) {
        self.rejecting.insert(account);
    }

    pub fn accept_payments_to(&mut self, account: Address) {
        self.rejecting.remove(&account);
    }

    /// Sends `amount` out of the contract balance. A failed transfer changes
    /// nothing and logs nothing.
    pub fn transfer(&mut self, log: &mut EventLog, to: Address, amount: U256) -> Result<()> {
        if !self.accepts(to) {
            return Err(GateError::TransferFailed(format!(
                "Recipient {to} rejected the transfer"
            )));
        }
        if amount > self.contract_balance {
            return Err(GateError::TransferFailed(
                "Contract balance is insufficient".to_string(),
            ));
        }

        self.contract_balance -= amount;
        *self.balances.entry(to).or_default() += amount;

        log.emit(TransferAttempt {
            recipient: to,
            amount,
        });

        Ok(())
    }
}
