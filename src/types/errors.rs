use alloy_sol_types::{sol, SolError};
use thiserror::Error;

sol! {
    error Duplicate(string reason);
    error NotAuthorized(string reason);
    error InvalidInput(string reason);
    error NotFound(string reason);
    error CapacityExceeded(string reason);
    error PriceMismatch(string reason);
    error Expired(string reason);
    error NonTransferable(string reason);
    error TransferFailed(string reason);
    error ExternalDependencyFailure(string reason);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("not authorized: {0}")]
    NotAuthorized(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("price mismatch: {0}")]
    PriceMismatch(String),

    #[error("expired: {0}")]
    Expired(String),

    #[error("non-transferable: {0}")]
    NonTransferable(String),

    #[error("transfer failed: {0}")]
    TransferFailed(String),

    #[error("external dependency failure: {0}")]
    ExternalDependencyFailure(String),
}

impl GateError {
    pub fn reason(&self) -> &str {
        match self {
            GateError::Duplicate(reason)
            | GateError::NotAuthorized(reason)
            | GateError::InvalidInput(reason)
            | GateError::NotFound(reason)
            | GateError::CapacityExceeded(reason)
            | GateError::PriceMismatch(reason)
            | GateError::Expired(reason)
            | GateError::NonTransferable(reason)
            | GateError::TransferFailed(reason)
            | GateError::ExternalDependencyFailure(reason) => reason,
        }
    }

    /// ABI-encoded revert data: the 4-byte selector of the matching Solidity
    /// custom error followed by the encoded reason string.
    pub fn revert_data(&self) -> Vec<u8> {
        let reason = self.reason().to_string();
        match self {
            GateError::Duplicate(_) => Duplicate { reason }.abi_encode(),
            GateError::NotAuthorized(_) => NotAuthorized { reason }.abi_encode(),
            GateError::InvalidInput(_) => InvalidInput { reason }.abi_encode(),
            GateError::NotFound(_) => NotFound { reason }.abi_encode(),
            GateError::CapacityExceeded(_) => CapacityExceeded { reason }.abi_encode(),
            GateError::PriceMismatch(_) => PriceMismatch { reason }.abi_encode(),
            GateError::Expired(_) => Expired { reason }.abi_encode(),
            GateError::NonTransferable(_) => NonTransferable { reason }.abi_encode(),
            GateError::TransferFailed(_) => TransferFailed { reason }.abi_encode(),
            GateError::ExternalDependencyFailure(_) => {
                ExternalDependencyFailure { reason }.abi_encode()
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, GateError>;

pub fn require_authorized(condition: bool, message: &str) -> Result<()> {
    if !condition {
        Err(GateError::NotAuthorized(message.to_string()))
    } else {
        Ok(())
    }
}

pub fn require_valid_input(condition: bool, message: &str) -> Result<()> {
    if !condition {
        Err(GateError::InvalidInput(message.to_string()))
    } else {
        Ok(())
    }
}

pub fn require_unique(condition: bool, message: &str) -> Result<()> {
    if !condition {
        Err(GateError::Duplicate(message.to_string()))
    } else {
        Ok(())
    }
}

pub fn require_capacity(condition: bool, message: &str) -> Result<()> {
    if !condition {
        Err(GateError::CapacityExceeded(message.to_string()))
    } else {
        Ok(())
    }
}

pub fn require_not_expired(condition: bool, message: &str) -> Result<()> {
    if !condition {
        Err(GateError::Expired(message.to_string()))
    } else {
        Ok(())
    }
}
