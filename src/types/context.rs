use alloy_primitives::{Address, U256};

use crate::types::errors::{require_valid_input, Result};

/// Per-call transaction context: who signed the call, how much native
/// currency it carries, and the block timestamp it executes at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub sender: Address,
    pub value: U256,
    pub timestamp: u64,
}

impl CallContext {
    pub fn new(sender: Address, timestamp: u64) -> Self {
        Self {
            sender,
            value: U256::ZERO,
            timestamp,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn require_non_payable(&self) -> Result<()> {
        require_valid_input(self.value.is_zero(), "Non-payable call received value")
    }
}
