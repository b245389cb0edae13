use alloy_primitives::{address, Address, U256};
use alloy_sol_types::sol;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod context;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod log;

sol! {
    /// One access level of an event as returned to callers.
    #[derive(Debug, PartialEq, Eq)]
    struct AccessLevelInfo {
        string name;
        uint256 token_id;
        uint256 price;
        uint64 ticket_limit;
        uint64 minted;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct EventInfo {
        uint64 event_id;
        address manager;
        address gating_token;
        uint64 end_timestamp;
        uint8 kind; // 0: Live, 1: Community
        uint256 manager_token_id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Live,
    Community,
}

impl EventKind {
    pub fn as_u8(self) -> u8 {
        match self {
            EventKind::Live => 0,
            EventKind::Community => 1,
        }
    }
}

/// A ticket tier as requested at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLevelSpec {
    pub name: String,
    pub price: U256,
    pub ticket_limit: u64,
}

impl AccessLevelSpec {
    pub fn new(name: impl Into<String>, price: U256, ticket_limit: u64) -> Self {
        Self {
            name: name.into(),
            price,
            ticket_limit,
        }
    }
}

/// Reserved access-level name backing each event's manager token.
pub const EVENT_MANAGER_ACCESS_LEVEL: &str = "EVENT_MANAGER";
pub const DEFAULT_MAX_ACCESS_LEVEL_NAME_LEN: usize = 64;
pub const DEFAULT_MAX_LOCATION_LEN: usize = 100;
pub const DEFAULT_ATTESTATION_SCHEMA_ID: &str = "onchain_evm_88882_0x1d";
pub const DEFAULT_BASE_URI: &str = "https://nexus.events/tickets/";

/// Address the gate logs under when no deployment address is configured.
pub const DEFAULT_GATE_ADDRESS: Address = address!("996efcf698c4a15c7ca48b55d280d0849c658da2");
